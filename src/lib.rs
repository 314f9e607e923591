#![warn(missing_docs)]

//! A small RSA toolkit: key-pair generation, PKCS#1-padded encryption and
//! decryption, digest-then-sign/verify across five hash algorithms, key
//! introspection, and interchange between raw PKCS#1 key bytes and the
//! PEM/DER `SubjectPublicKeyInfo` format used by OpenSSL.
//!
//! The heavy lifting — modular arithmetic, prime search, hashing — is
//! delegated to a provider behind the capability traits in [`traits`];
//! the built-in [`SoftwareProvider`] backs them with the [`rsa`], [`sha1`]
//! and [`sha2`] crates.
//!
//! # Encrypt and decrypt
//!
//! ```
//! use rsa_kit::{Padding, Rsa};
//!
//! let rsa = Rsa::new();
//! let pair = rsa.generate_key_pair(2048)?;
//!
//! let ciphertext = rsa.encrypt(b"hello world", &pair.public, Padding::default())?;
//! let plaintext = rsa.decrypt(&ciphertext, &pair.private, Padding::default())?;
//! assert_eq!(plaintext, b"hello world");
//! # Ok::<(), rsa_kit::Error>(())
//! ```
//!
//! # Sign and verify
//!
//! ```
//! use rsa_kit::{DigestAlgorithm, Rsa};
//!
//! let rsa = Rsa::new();
//! let pair = rsa.generate_key_pair(2048)?;
//!
//! let signature = rsa.sign(b"hello world", &pair.private, DigestAlgorithm::Sha512)?;
//! assert!(rsa.verify(b"hello world", &pair.public, DigestAlgorithm::Sha512, &signature)?);
//! assert!(!rsa.verify(b"hello earth", &pair.public, DigestAlgorithm::Sha512, &signature)?);
//! # Ok::<(), rsa_kit::Error>(())
//! ```
//!
//! # PEM interchange
//!
//! Public keys round-trip through the OpenSSL-compatible
//! `SubjectPublicKeyInfo` PEM form; keys without the DER header import
//! just as well.
//!
//! ```
//! use rsa_kit::{KeyClass, KeyHandle, Rsa};
//!
//! let pair = Rsa::new().generate_key_pair(2048)?;
//! let pem = pair.public.pem()?;
//! assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
//!
//! let imported = KeyHandle::import_from_pem(&pem, KeyClass::Public)?;
//! assert_eq!(imported.raw_bytes()?, pair.public.raw_bytes()?);
//! # Ok::<(), rsa_kit::Error>(())
//! ```

pub mod der;
pub mod digest;
pub mod errors;
pub mod pem;
pub mod provider;
pub mod traits;

mod key;
mod ops;
mod padding;

pub use crate::{
    digest::DigestAlgorithm,
    errors::{Error, ErrorCode, Result},
    key::{KeyAttributes, KeyClass, KeyHandle, KeyPair, KeyType},
    ops::Rsa,
    padding::Padding,
    provider::{SoftwareKey, SoftwareProvider},
};
