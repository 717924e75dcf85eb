//! Mathematical types for cosmwire
//!
//! `Int` parses the arbitrary-precision integer strings Cosmos SDK carries
//! on the wire (coin amounts, tally counts). `Dec` is the SDK's fixed-point
//! decimal with 18 fractional digits.

pub mod decimal;
pub mod int;

pub use decimal::{Dec, DEC_PRECISION};
pub use int::Int;

use cosmwire_errors::{codes, ErrorCode};
use thiserror::Error;

/// Errors produced while parsing or operating on numeric types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("invalid integer: {0}")]
    InvalidInt(String),

    #[error("invalid decimal: {0}")]
    InvalidDec(String),

    #[error("too many fractional digits in {0}: at most 18 allowed")]
    PrecisionExceeded(String),

    #[error("division by zero")]
    DivisionByZero,
}

impl ErrorCode for MathError {
    fn codespace(&self) -> &'static str {
        "math"
    }

    fn code(&self) -> u32 {
        codes::MATH
    }
}
