//! The RSA operation surface.

use crate::digest::DigestAlgorithm;
use crate::errors::Result;
use crate::key::{KeyHandle, KeyPair};
use crate::padding::Padding;
use crate::provider::SoftwareProvider;
use crate::traits::{DigestProvider, KeyPairProvider};

/// Stateless facade over the provider's RSA operations.
///
/// Every operation is a synchronous, single-shot request: no retries, no
/// partial results, no shared mutable state between calls. The default
/// instantiation runs on the built-in [`SoftwareProvider`].
///
/// # Examples
///
/// ```
/// use rsa_kit::{DigestAlgorithm, Padding, Rsa};
///
/// let rsa = Rsa::new();
/// let pair = rsa.generate_key_pair(2048)?;
///
/// let ciphertext = rsa.encrypt(b"attack at dawn", &pair.public, Padding::Pkcs1)?;
/// let plaintext = rsa.decrypt(&ciphertext, &pair.private, Padding::Pkcs1)?;
/// assert_eq!(plaintext, b"attack at dawn");
///
/// let signature = rsa.sign(&plaintext, &pair.private, DigestAlgorithm::Sha256)?;
/// assert!(rsa.verify(&plaintext, &pair.public, DigestAlgorithm::Sha256, &signature)?);
/// # Ok::<(), rsa_kit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rsa<P = SoftwareProvider> {
    provider: P,
}

impl Rsa<SoftwareProvider> {
    /// A facade over the built-in software provider.
    pub fn new() -> Self {
        Rsa {
            provider: SoftwareProvider,
        }
    }
}

impl<P> Rsa<P>
where
    P: KeyPairProvider + DigestProvider + Clone,
{
    /// A facade over a caller-supplied provider.
    pub fn with_provider(provider: P) -> Self {
        Rsa { provider }
    }

    /// Generates an RSA key pair with the requested modulus size in bits.
    ///
    /// Conventional sizes are 512, 768, 1024, and 2048; whatever the
    /// provider accepts is accepted here. There is no retry on failure;
    /// the caller decides whether to try a different size.
    pub fn generate_key_pair(&self, size_in_bits: usize) -> Result<KeyPair<P>> {
        let (public, private) = self.provider.generate_key_pair(size_in_bits)?;
        Ok(KeyPair {
            public: KeyHandle::new(self.provider.clone(), public),
            private: KeyHandle::new(self.provider.clone(), private),
        })
    }

    /// Encrypts `data` with a public key.
    ///
    /// The plaintext must be at most `block_size - padding overhead`
    /// bytes; longer input fails with
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) rather
    /// than being truncated.
    pub fn encrypt(
        &self,
        data: &[u8],
        public_key: &KeyHandle<P>,
        padding: Padding,
    ) -> Result<Vec<u8>> {
        self.provider
            .encrypt(public_key.provider_key(), padding, data)
    }

    /// Decrypts `data` with a private key.
    ///
    /// Fails if `data` is not block-sized or its padding does not
    /// validate; a failed decrypt never returns truncated plaintext.
    pub fn decrypt(
        &self,
        data: &[u8],
        private_key: &KeyHandle<P>,
        padding: Padding,
    ) -> Result<Vec<u8>> {
        self.provider
            .decrypt(private_key.provider_key(), padding, data)
    }

    /// Signs `data` with a private key.
    ///
    /// The data is hashed with `algorithm` first and the digest (not the
    /// raw data) is signed using PKCS#1 v1.5 signature padding keyed to
    /// the same algorithm.
    pub fn sign(
        &self,
        data: &[u8],
        private_key: &KeyHandle<P>,
        algorithm: DigestAlgorithm,
    ) -> Result<Vec<u8>> {
        let digest = self.provider.hash(algorithm, data);
        self.provider
            .sign_digest(private_key.provider_key(), algorithm, &digest)
    }

    /// Verifies `signature` over `data` with a public key.
    ///
    /// A cryptographic mismatch is the normal negative outcome and
    /// returns `Ok(false)`; any other provider failure (malformed key,
    /// provider fault) is an error.
    pub fn verify(
        &self,
        data: &[u8],
        public_key: &KeyHandle<P>,
        algorithm: DigestAlgorithm,
        signature: &[u8],
    ) -> Result<bool> {
        let digest = self.provider.hash(algorithm, data);
        self.provider
            .verify_digest(public_key.provider_key(), algorithm, &digest, signature)
    }
}
