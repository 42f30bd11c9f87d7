//! Text ⇄ bit sequence, eight bits per character, most significant first.
//!
//! Characters are treated as 8-bit code units. Anything above U+00FF keeps
//! only its low byte, so only Latin-1 text survives a round trip. Use
//! [`BitSequence::from_bytes`] on UTF-8 bytes when wider text is needed.
use super::{EncodingError, EncodingResult};
use std::ops::Deref;
use tracing::warn;

pub const BITS_PER_UNIT: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence(Vec<bool>);

impl BitSequence {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_UNIT);
        for &byte in bytes {
            push_byte(&mut bits, byte);
        }
        Self(bits)
    }

    /// Packs the bits back into bytes.
    pub fn to_bytes(&self) -> EncodingResult<Vec<u8>> {
        if self.0.len() % BITS_PER_UNIT != 0 {
            return Err(EncodingError::InvalidLength { len: self.0.len() });
        }
        Ok(self
            .0
            .chunks_exact(BITS_PER_UNIT)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
            .collect())
    }
}

impl Deref for BitSequence {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.0
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn push_byte(bits: &mut Vec<bool>, byte: u8) {
    for shift in (0..BITS_PER_UNIT).rev() {
        bits.push((byte >> shift) & 1 == 1);
    }
}

pub fn encode_bits(text: &str) -> BitSequence {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_UNIT);
    for c in text.chars() {
        let code = u32::from(c);
        if code > 0xFF {
            warn!(character = %c, code, "character wider than 8 bits, keeping low byte");
        }
        push_byte(&mut bits, code as u8);
    }
    BitSequence(bits)
}

/// Rebuilds text from 8-bit groups, each byte read as a Latin-1 character.
pub fn decode_bits(bits: &[bool]) -> EncodingResult<String> {
    if bits.len() % BITS_PER_UNIT != 0 {
        return Err(EncodingError::InvalidLength { len: bits.len() });
    }
    Ok(bits
        .chunks_exact(BITS_PER_UNIT)
        .map(|chunk| {
            let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
            char::from(byte)
        })
        .collect())
}
