//! Capability interfaces consumed from the surrounding platform.
//!
//! The toolkit never does modular arithmetic, prime search, or hashing
//! itself; it drives an opaque provider through these traits. The crate
//! ships [`crate::provider::SoftwareProvider`] as the default
//! implementation, and tests or platform ports can substitute their own.

use crate::digest::DigestAlgorithm;
use crate::errors::Result;
use crate::key::{KeyAttributes, KeyClass};
use crate::padding::Padding;

/// Core RSA operations over an opaque key handle.
///
/// Handles are read-only after creation; implementations must not mutate
/// shared state between calls.
pub trait CryptoProvider {
    /// Opaque native key handle.
    type Key: Clone;

    /// Block size of the key in bytes (the modulus length).
    fn block_size(&self, key: &Self::Key) -> usize;

    /// Encrypts `plaintext` with a public key handle.
    fn encrypt(&self, key: &Self::Key, padding: Padding, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext` with a private key handle.
    fn decrypt(&self, key: &Self::Key, padding: Padding, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Signs an already-computed digest, applying the PKCS#1 v1.5
    /// signature padding tagged for `algorithm`.
    fn sign_digest(
        &self,
        key: &Self::Key,
        algorithm: DigestAlgorithm,
        digest: &[u8],
    ) -> Result<Vec<u8>>;

    /// Checks `signature` against an already-computed digest.
    ///
    /// A cryptographic mismatch is `Ok(false)`; `Err` is reserved for
    /// every other failure (malformed key, provider faults).
    fn verify_digest(
        &self,
        key: &Self::Key,
        algorithm: DigestAlgorithm,
        digest: &[u8],
        signature: &[u8],
    ) -> Result<bool>;

    /// Instantiates a key handle from its raw PKCS#1 byte encoding.
    fn import_key(&self, data: &[u8], class: KeyClass) -> Result<Self::Key>;

    /// Materializes a key handle's raw PKCS#1 byte encoding.
    fn export_key(&self, key: &Self::Key) -> Result<Vec<u8>>;

    /// Queries the class, size, and type of a key handle.
    fn query_attributes(&self, key: &Self::Key) -> Result<KeyAttributes>;
}

/// Key-pair generation, an opaque service invoked with a modulus bit
/// length.
pub trait KeyPairProvider: CryptoProvider {
    /// Generates a fresh `(public, private)` pair of the requested size.
    fn generate_key_pair(&self, size_in_bits: usize) -> Result<(Self::Key, Self::Key)>;
}

/// Standard hash functions, producing fixed-length digests.
pub trait DigestProvider {
    /// Hashes `data` with `algorithm`, producing
    /// [`DigestAlgorithm::output_len`] bytes.
    fn hash(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8>;
}
