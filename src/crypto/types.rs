/// Encryption of a single bit.
///
/// `u` is the reduced sum of the public `a` vector and `v` the reduced sum of
/// `b` shifted by `Q/2` when the bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    pub u: i64,
    pub v: i64,
}
