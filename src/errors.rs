//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with the `rsa-kit` error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Identifies where an error code comes from.
///
/// The native provider reports signed status codes; the toolkit raises a
/// handful of codes of its own. The two namespaces are kept apart so an
/// internal code can never collide with a genuine provider status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Status code reported by the native crypto provider.
    Provider(i32),
    /// Toolkit-internal code, raised before any provider interaction.
    Internal(u16),
}

/// Error types.
///
/// A closed taxonomy: every fallible operation in the toolkit surfaces
/// exactly one of these values. Provider statuses outside the known table
/// become [`Error::Unknown`] and retain the original code for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The requested function or operation is not implemented.
    UnimplementedFunction,
    /// One or more parameters passed to a function were not valid.
    InvalidParameter,
    /// The provider failed to allocate memory.
    MemoryAllocationFailed,
    /// No keychain is available.
    KeychainUnavailable,
    /// Authorization or authentication failed.
    AuthFailed,
    /// A key with the same primary attributes already exists.
    DuplicateKey,
    /// The key cannot be found.
    KeyNotFound,
    /// User interaction is required but has been disabled.
    InteractionNotAllowed,
    /// A required entitlement is missing.
    MissingEntitlement,
    /// PEM, DER, or base64 input could not be decoded into usable bytes.
    DataDecode,
    /// The requested digest algorithm is not one of the supported values.
    InvalidDigest,
    /// Any provider status outside the known table; carries the raw code.
    Unknown(i32),
}

impl Error {
    /// Maps a native provider status code into the closed taxonomy.
    ///
    /// Statuses without a dedicated kind come back as [`Error::Unknown`]
    /// with the original code preserved.
    pub fn from_provider_status(status: i32) -> Self {
        match status {
            -4 => Error::UnimplementedFunction,
            -50 => Error::InvalidParameter,
            -108 => Error::MemoryAllocationFailed,
            -25291 => Error::KeychainUnavailable,
            -25293 => Error::AuthFailed,
            -25299 => Error::DuplicateKey,
            -25300 => Error::KeyNotFound,
            -25308 => Error::InteractionNotAllowed,
            -26275 => Error::DataDecode,
            -34018 => Error::MissingEntitlement,
            other => Error::Unknown(other),
        }
    }

    /// The stable numeric code for this error, tagged by origin.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::UnimplementedFunction => ErrorCode::Provider(-4),
            Error::InvalidParameter => ErrorCode::Provider(-50),
            Error::MemoryAllocationFailed => ErrorCode::Provider(-108),
            Error::KeychainUnavailable => ErrorCode::Provider(-25291),
            Error::AuthFailed => ErrorCode::Provider(-25293),
            Error::DuplicateKey => ErrorCode::Provider(-25299),
            Error::KeyNotFound => ErrorCode::Provider(-25300),
            Error::InteractionNotAllowed => ErrorCode::Provider(-25308),
            Error::DataDecode => ErrorCode::Provider(-26275),
            Error::MissingEntitlement => ErrorCode::Provider(-34018),
            Error::InvalidDigest => ErrorCode::Internal(10),
            Error::Unknown(code) => ErrorCode::Provider(*code),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnimplementedFunction => {
                write!(f, "the function or operation is not implemented")
            }
            Error::InvalidParameter => {
                write!(f, "one or more parameters passed to a function were not valid")
            }
            Error::MemoryAllocationFailed => write!(f, "failed to allocate memory"),
            Error::KeychainUnavailable => write!(f, "no keychain is available"),
            Error::AuthFailed => write!(f, "authorization or authentication failed"),
            Error::DuplicateKey => {
                write!(f, "a key with the same primary attributes already exists")
            }
            Error::KeyNotFound => write!(f, "the key cannot be found"),
            Error::InteractionNotAllowed => {
                write!(f, "user interaction is required but has been disabled")
            }
            Error::MissingEntitlement => write!(f, "a required entitlement is missing"),
            Error::DataDecode => write!(f, "unable to decode the provided data"),
            Error::InvalidDigest => write!(
                f,
                "invalid digest; available values: SHA1, SHA224, SHA256, SHA384, SHA512"
            ),
            Error::Unknown(code) => write!(f, "unknown error (provider status {})", code),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_dedicated_kinds() {
        assert_eq!(Error::from_provider_status(-4), Error::UnimplementedFunction);
        assert_eq!(Error::from_provider_status(-50), Error::InvalidParameter);
        assert_eq!(Error::from_provider_status(-108), Error::MemoryAllocationFailed);
        assert_eq!(Error::from_provider_status(-25291), Error::KeychainUnavailable);
        assert_eq!(Error::from_provider_status(-25293), Error::AuthFailed);
        assert_eq!(Error::from_provider_status(-25299), Error::DuplicateKey);
        assert_eq!(Error::from_provider_status(-25300), Error::KeyNotFound);
        assert_eq!(Error::from_provider_status(-25308), Error::InteractionNotAllowed);
        assert_eq!(Error::from_provider_status(-26275), Error::DataDecode);
        assert_eq!(Error::from_provider_status(-34018), Error::MissingEntitlement);
    }

    #[test]
    fn unknown_status_retains_the_original_code() {
        let err = Error::from_provider_status(-99999);
        assert_eq!(err, Error::Unknown(-99999));
        assert_eq!(err.code(), ErrorCode::Provider(-99999));
    }

    #[test]
    fn internal_codes_stay_out_of_the_provider_namespace() {
        assert_eq!(Error::InvalidDigest.code(), ErrorCode::Internal(10));
        // Every provider-originated kind round-trips through its status code.
        for status in [
            -4, -50, -108, -25291, -25293, -25299, -25300, -25308, -26275, -34018,
        ] {
            assert_eq!(
                Error::from_provider_status(status).code(),
                ErrorCode::Provider(status)
            );
        }
    }

    #[test]
    fn descriptions_are_stable() {
        assert_eq!(Error::KeyNotFound.to_string(), "the key cannot be found");
        assert_eq!(
            Error::Unknown(-1234).to_string(),
            "unknown error (provider status -1234)"
        );
    }
}
