//! Codec error type

use cosmwire_errors::{codes, ErrorCode};
use cosmwire_math::MathError;
use prost::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors raised while encoding, decoding or converting messages
#[derive(Error, Debug)]
pub enum CodecError {
    /// Encoding failed
    #[error("failed to encode protobuf: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding failed
    #[error("failed to decode protobuf: {0}")]
    Decode(#[from] DecodeError),

    /// Amino JSON was not valid for the target type
    #[error("invalid amino json: {0}")]
    Json(#[from] serde_json::Error),

    /// Type URL not found in registry
    #[error("type URL not found: {0}")]
    TypeNotFound(String),

    /// Amino type name not found in registry
    #[error("amino type not found: {0}")]
    AminoTypeNotFound(String),

    /// Message type mismatch
    #[error("message type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A bytes field held something other than base64
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// A 64-bit integer field held something other than a decimal string
    #[error("invalid integer string: {0}")]
    InvalidInteger(String),

    /// A timestamp or duration could not be converted
    #[error("invalid time value: {0}")]
    InvalidTime(String),

    /// Decimal parse failure
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

impl ErrorCode for CodecError {
    fn codespace(&self) -> &'static str {
        "codec"
    }

    fn code(&self) -> u32 {
        match self {
            CodecError::Encode(_) => codes::INTERNAL,
            CodecError::Decode(_) => codes::DECODE,
            CodecError::TypeNotFound(_) | CodecError::AminoTypeNotFound(_) => codes::NOT_FOUND,
            CodecError::TypeMismatch { .. } => codes::TYPE_MISMATCH,
            CodecError::Math(_) => codes::MATH,
            CodecError::Json(_)
            | CodecError::InvalidBase64(_)
            | CodecError::InvalidInteger(_)
            | CodecError::InvalidTime(_) => codes::AMINO,
        }
    }
}

impl From<CodecError> for cosmwire_errors::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Decode(e) => cosmwire_errors::Error::Decode(e.to_string()),
            CodecError::TypeNotFound(url) => cosmwire_errors::Error::NotFound(url),
            CodecError::AminoTypeNotFound(name) => cosmwire_errors::Error::NotFound(name),
            other => cosmwire_errors::Error::from_coded(&other),
        }
    }
}
