//! Key handles and their derived views.

use zeroize::Zeroizing;

use crate::der;
use crate::errors::{Error, Result};
use crate::pem::{self, Label};
use crate::provider::SoftwareProvider;
use crate::traits::CryptoProvider;

/// Whether a key is the public or the private half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// Public key.
    Public,
    /// Private key.
    Private,
}

/// Key algorithm family. Only RSA keys exist in this toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// RSA.
    Rsa,
}

/// Fixed, typed attribute record for a key.
///
/// Populated from the provider query; attributes the provider reports
/// beyond these are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyAttributes {
    /// Public or private.
    pub key_class: KeyClass,
    /// Modulus size in bits.
    pub size_in_bits: usize,
    /// Algorithm family.
    pub key_type: KeyType,
}

/// An opaque native RSA key plus the operations derived from it.
///
/// Immutable once constructed; created by key generation
/// ([`crate::Rsa::generate_key_pair`]) or by one of the import
/// constructors below.
#[derive(Debug, Clone)]
pub struct KeyHandle<P: CryptoProvider = SoftwareProvider> {
    provider: P,
    key: P::Key,
}

impl<P: CryptoProvider> KeyHandle<P> {
    pub(crate) fn new(provider: P, key: P::Key) -> Self {
        KeyHandle { provider, key }
    }

    pub(crate) fn provider_key(&self) -> &P::Key {
        &self.key
    }

    /// The key's class, size, and type, queried from the provider.
    pub fn attributes(&self) -> Result<KeyAttributes> {
        self.provider.query_attributes(&self.key)
    }

    /// The key's raw byte encoding (PKCS#1 DER, without any
    /// `SubjectPublicKeyInfo` wrapper).
    pub fn raw_bytes(&self) -> Result<Vec<u8>> {
        self.provider.export_key(&self.key)
    }

    /// The key's block size in bytes.
    pub fn block_size(&self) -> usize {
        self.provider.block_size(&self.key)
    }

    /// The key in PEM format.
    ///
    /// Public keys are wrapped in the standard `SubjectPublicKeyInfo`
    /// header first, so the output is readable by OpenSSL. Private keys
    /// are emitted as their raw PKCS#1 encoding with `PRIVATE KEY`
    /// framing and no PKCS#8 wrapper.
    pub fn pem(&self) -> Result<String> {
        let attributes = self.attributes()?;
        match attributes.key_class {
            KeyClass::Public => {
                let raw = self.raw_bytes()?;
                Ok(pem::encode(&der::wrap_public_key(&raw), Label::Public))
            }
            KeyClass::Private => {
                let raw = Zeroizing::new(self.raw_bytes()?);
                Ok(pem::encode(&raw, Label::Private))
            }
        }
    }

    /// Creates a key handle from raw PKCS#1 bytes with the given class.
    ///
    /// Empty input fails with [`Error::DataDecode`] before the provider
    /// is consulted; bytes the provider rejects surface its error.
    pub fn from_bytes(provider: P, data: &[u8], class: KeyClass) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::DataDecode);
        }
        let key = provider.import_key(data, class)?;
        Ok(KeyHandle { provider, key })
    }

    /// Creates a key handle from PEM text with the given class.
    ///
    /// For public keys the `SubjectPublicKeyInfo` header is stripped when
    /// present, so both OpenSSL-produced PEM (with the header) and PEM
    /// produced by this toolkit's own private path (without) import
    /// cleanly.
    pub fn from_pem(provider: P, pem: &str, class: KeyClass) -> Result<Self> {
        let data = pem::decode(pem)?;
        match class {
            KeyClass::Public => {
                let raw = der::unwrap_public_key_if_present(&data);
                Self::from_bytes(provider, raw, class)
            }
            KeyClass::Private => Self::from_bytes(provider, &data, class),
        }
    }
}

impl KeyHandle<SoftwareProvider> {
    /// [`KeyHandle::from_bytes`] with the default software provider.
    pub fn import_from_bytes(data: &[u8], class: KeyClass) -> Result<Self> {
        Self::from_bytes(SoftwareProvider, data, class)
    }

    /// [`KeyHandle::from_pem`] with the default software provider.
    pub fn import_from_pem(pem: &str, class: KeyClass) -> Result<Self> {
        Self::from_pem(SoftwareProvider, pem, class)
    }
}

/// A freshly generated pairing of one public and one private key sharing
/// the same modulus.
#[derive(Clone)]
pub struct KeyPair<P: CryptoProvider = SoftwareProvider> {
    /// The public half.
    pub public: KeyHandle<P>,
    /// The private half.
    pub private: KeyHandle<P>,
}
