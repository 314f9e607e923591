//! Default software provider backed by the `rsa` crate.
//!
//! This is the "platform" the capability traits abstract over when no
//! native keystore is involved: modular arithmetic, PKCS#1 padding, and
//! key generation come from `rsa`, hashing from `sha1`/`sha2`.

use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey,
};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::digest::DigestAlgorithm;
use crate::errors::{Error, Result};
use crate::key::{KeyAttributes, KeyClass, KeyType};
use crate::padding::Padding;
use crate::traits::{CryptoProvider, DigestProvider, KeyPairProvider};

/// Software implementation of the provider capability traits.
///
/// Zero-sized and freely copyable; every [`crate::KeyHandle`] carries one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoftwareProvider;

/// Key handle issued by [`SoftwareProvider`].
#[derive(Debug, Clone)]
pub enum SoftwareKey {
    /// Public key.
    Public(RsaPublicKey),
    /// Private key.
    Private(RsaPrivateKey),
}

/// PKCS#1 v1.5 signature scheme carrying the DigestInfo prefix for
/// `algorithm`.
fn signature_scheme(algorithm: DigestAlgorithm) -> Pkcs1v15Sign {
    Pkcs1v15Sign {
        hash_len: Some(algorithm.output_len()),
        prefix: algorithm.digest_info_prefix().into(),
    }
}

/// Maps the backing crate's error values into the closed taxonomy.
///
/// `rsa::Error` carries no numeric status, so anything without a natural
/// counterpart becomes `Unknown(0)`.
fn map_rsa_error(err: rsa::Error) -> Error {
    match err {
        rsa::Error::MessageTooLong
        | rsa::Error::InvalidPaddingScheme
        | rsa::Error::InputNotHashed
        | rsa::Error::InvalidModulus
        | rsa::Error::InvalidExponent
        | rsa::Error::InvalidCoefficient
        | rsa::Error::InvalidPrime
        | rsa::Error::NprimesTooSmall
        | rsa::Error::TooFewPrimes
        | rsa::Error::PublicExponentTooSmall
        | rsa::Error::PublicExponentTooLarge => Error::InvalidParameter,
        rsa::Error::Decryption => Error::DataDecode,
        rsa::Error::Pkcs1(_) | rsa::Error::Pkcs8(_) => Error::DataDecode,
        _ => Error::Unknown(0),
    }
}

impl CryptoProvider for SoftwareProvider {
    type Key = SoftwareKey;

    fn block_size(&self, key: &Self::Key) -> usize {
        match key {
            SoftwareKey::Public(k) => k.size(),
            SoftwareKey::Private(k) => k.size(),
        }
    }

    fn encrypt(&self, key: &Self::Key, padding: Padding, plaintext: &[u8]) -> Result<Vec<u8>> {
        let SoftwareKey::Public(key) = key else {
            return Err(Error::InvalidParameter);
        };
        let mut rng = rand::thread_rng();
        match padding {
            Padding::Pkcs1 => key
                .encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
                .map_err(map_rsa_error),
            Padding::Oaep => key
                .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
                .map_err(map_rsa_error),
        }
    }

    fn decrypt(&self, key: &Self::Key, padding: Padding, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let SoftwareKey::Private(key) = key else {
            return Err(Error::InvalidParameter);
        };
        match padding {
            Padding::Pkcs1 => key
                .decrypt(Pkcs1v15Encrypt, ciphertext)
                .map_err(map_rsa_error),
            Padding::Oaep => key
                .decrypt(Oaep::new::<Sha256>(), ciphertext)
                .map_err(map_rsa_error),
        }
    }

    fn sign_digest(
        &self,
        key: &Self::Key,
        algorithm: DigestAlgorithm,
        digest: &[u8],
    ) -> Result<Vec<u8>> {
        let SoftwareKey::Private(key) = key else {
            return Err(Error::InvalidParameter);
        };
        key.sign(signature_scheme(algorithm), digest)
            .map_err(map_rsa_error)
    }

    fn verify_digest(
        &self,
        key: &Self::Key,
        algorithm: DigestAlgorithm,
        digest: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        let SoftwareKey::Public(key) = key else {
            return Err(Error::InvalidParameter);
        };
        match key.verify(signature_scheme(algorithm), digest, signature) {
            Ok(()) => Ok(true),
            // A mismatch is a normal negative result, not a failure.
            Err(rsa::Error::Verification) => Ok(false),
            Err(err) => Err(map_rsa_error(err)),
        }
    }

    fn import_key(&self, data: &[u8], class: KeyClass) -> Result<Self::Key> {
        match class {
            KeyClass::Public => RsaPublicKey::from_pkcs1_der(data)
                .map(SoftwareKey::Public)
                .map_err(|_| Error::DataDecode),
            KeyClass::Private => RsaPrivateKey::from_pkcs1_der(data)
                .map(SoftwareKey::Private)
                .map_err(|_| Error::DataDecode),
        }
    }

    fn export_key(&self, key: &Self::Key) -> Result<Vec<u8>> {
        match key {
            SoftwareKey::Public(k) => k
                .to_pkcs1_der()
                .map(|doc| doc.as_bytes().to_vec())
                .map_err(|_| Error::DataDecode),
            SoftwareKey::Private(k) => k
                .to_pkcs1_der()
                .map(|doc| doc.as_bytes().to_vec())
                .map_err(|_| Error::DataDecode),
        }
    }

    fn query_attributes(&self, key: &Self::Key) -> Result<KeyAttributes> {
        let (key_class, size_in_bits) = match key {
            SoftwareKey::Public(k) => (KeyClass::Public, k.size() * 8),
            SoftwareKey::Private(k) => (KeyClass::Private, k.size() * 8),
        };
        Ok(KeyAttributes {
            key_class,
            size_in_bits,
            key_type: KeyType::Rsa,
        })
    }
}

impl KeyPairProvider for SoftwareProvider {
    fn generate_key_pair(&self, size_in_bits: usize) -> Result<(Self::Key, Self::Key)> {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, size_in_bits).map_err(map_rsa_error)?;
        let public = RsaPublicKey::from(&private);
        Ok((SoftwareKey::Public(public), SoftwareKey::Private(private)))
    }
}

impl DigestProvider for SoftwareProvider {
    fn hash(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
        algorithm.digest(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_scheme_carries_the_digest_info() {
        let scheme = signature_scheme(DigestAlgorithm::Sha256);
        assert_eq!(scheme.hash_len, Some(32));
        assert_eq!(&scheme.prefix[..2], &[0x30, 0x31][..]);
    }

    #[test]
    fn backing_errors_collapse_into_the_taxonomy() {
        assert_eq!(map_rsa_error(rsa::Error::MessageTooLong), Error::InvalidParameter);
        assert_eq!(map_rsa_error(rsa::Error::Decryption), Error::DataDecode);
        assert_eq!(map_rsa_error(rsa::Error::Internal), Error::Unknown(0));
    }
}
