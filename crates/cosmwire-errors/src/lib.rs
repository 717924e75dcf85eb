//! Error handling types shared by the cosmwire crates.
//!
//! Each crate keeps its own `thiserror` enum; this crate holds the numeric
//! code table those enums report through [`ErrorCode`], and the catch-all
//! [`Error`] used at the binary boundary.

use thiserror::Error;

/// Top-level error carried across crate boundaries
#[derive(Error, Debug)]
pub enum Error {
    /// Input bytes could not be decoded
    #[error("decode failed:: {0}")]
    Decode(String),

    /// Amino JSON could not be converted
    #[error("amino conversion failed:: {0}")]
    Amino(String),

    /// Type URL or amino type is not registered
    #[error("not found:: {0}")]
    NotFound(String),

    /// Transport or remote node failure
    #[error("rpc failed:: {0}")]
    Rpc(String),

    /// Invalid request error
    #[error("invalid request:: {0}")]
    InvalidRequest(String),

    /// Custom error with error code
    #[error("error {code}: {message}")]
    Custom { code: u32, message: String },
}

impl Error {
    /// Wrap any coded error, keeping its code and message
    pub fn from_coded<E: ErrorCode + std::fmt::Display>(err: &E) -> Self {
        Error::Custom {
            code: err.code(),
            message: format!("{}: {}", err.codespace(), err),
        }
    }
}

/// Result type alias for cosmwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric classification for errors surfaced to callers
pub trait ErrorCode {
    /// The module's codespace (e.g. "codec")
    fn codespace(&self) -> &'static str;

    /// The numeric code within [`codes`]
    fn code(&self) -> u32;
}

impl ErrorCode for Error {
    fn codespace(&self) -> &'static str {
        "cosmwire"
    }

    fn code(&self) -> u32 {
        match self {
            Error::Decode(_) => codes::DECODE,
            Error::Amino(_) => codes::AMINO,
            Error::NotFound(_) => codes::NOT_FOUND,
            Error::Rpc(_) => codes::RPC,
            Error::InvalidRequest(_) => codes::INVALID_ARGUMENT,
            Error::Custom { code, .. } => *code,
        }
    }
}

/// Error codes used across the workspace
pub mod codes {
    /// Success
    pub const OK: u32 = 0;
    /// Internal error
    pub const INTERNAL: u32 = 1;
    /// Malformed or truncated protobuf input
    pub const DECODE: u32 = 2;
    /// Invalid argument
    pub const INVALID_ARGUMENT: u32 = 3;
    /// Amino JSON conversion failed
    pub const AMINO: u32 = 4;
    /// Not found
    pub const NOT_FOUND: u32 = 5;
    /// Message type mismatch
    pub const TYPE_MISMATCH: u32 = 6;
    /// Numeric parse or range failure
    pub const MATH: u32 = 7;
    /// Transport failure
    pub const RPC: u32 = 8;
    /// Non-zero ABCI response code
    pub const ABCI: u32 = 9;
    /// Configuration failure
    pub const CONFIG: u32 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("broken")]
    struct Broken;

    impl ErrorCode for Broken {
        fn codespace(&self) -> &'static str {
            "test"
        }

        fn code(&self) -> u32 {
            codes::MATH
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRequest("missing field".to_string());
        assert_eq!(err.to_string(), "invalid request:: missing field");
        assert_eq!(err.code(), codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_from_coded_keeps_code() {
        let err = Error::from_coded(&Broken);
        assert_eq!(err.code(), codes::MATH);
        assert_eq!(err.to_string(), "error 7: test: broken");
    }
}
