//! Padding schemes for bulk encryption and decryption.
//!
//! Distinct from the digest-specific padding used by `sign` and `verify`,
//! which is keyed to the [`crate::digest::DigestAlgorithm`] instead.

/// Available padding schemes for `encrypt` and `decrypt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// PKCS#1 v1.5 encryption padding. The default.
    #[default]
    Pkcs1,
    /// OAEP with SHA-256.
    Oaep,
}

impl Padding {
    /// Bytes of each block consumed by the padding, i.e. how much shorter
    /// than the key's block size a plaintext must be.
    pub fn overhead(&self) -> usize {
        match self {
            // 0x00 0x02, at least eight random non-zero bytes, 0x00.
            Padding::Pkcs1 => 11,
            // Two SHA-256 hash lengths plus two bytes.
            Padding::Oaep => 2 * 32 + 2,
        }
    }
}
