//! Replays the classic demo: four single-bit round trips, then "Hello"
//! encrypted bit by bit.
//!
//! Logs at DEBUG so key generation shows up.

use toy_lwe::{LweEngine, LweResult, RandomSampler, Variant};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Vector dimension of the classic demo.
const N: usize = 20;

fn main() -> LweResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("a global tracing subscriber was already installed");
    }

    for variant in [Variant::Reference, Variant::Corrected] {
        let engine = LweEngine::builder().dimension(N).variant(variant).build_engine()?;
        let mut sampler = RandomSampler::from_time();
        let (pk, sk) = engine.generate_keys(&mut sampler)?;

        info!("{variant:?} variant, Q = {}", engine.params().modulus);
        for bit in [true, false, true, false] {
            let ct = engine.encrypt(&pk, bit);
            let plain = engine.decrypt(&sk, &ct);
            println!("{} -> ({}, {}) -> {}", u8::from(bit), ct.u, ct.v, u8::from(plain));
        }

        let ciphertexts = engine.encrypt_text(&pk, "Hello");
        println!("{}", engine.decrypt_text(&sk, &ciphertexts)?);

        match engine.decrypt_checked(&sk, &engine.encrypt(&pk, false)) {
            Ok(_) => println!("noise within margin"),
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}
