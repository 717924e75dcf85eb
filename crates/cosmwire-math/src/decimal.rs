//! Fixed-point decimal type for precise calculations
//!
//! A `Dec` is an integer count of 10^-18 units. On the protobuf wire the SDK
//! carries that count ("atomics") as a plain integer string, while Amino JSON
//! and user input use the human decimal form.

use crate::MathError;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Number of fractional digits carried by a [`Dec`]
pub const DEC_PRECISION: usize = 18;

fn precision_multiplier() -> BigInt {
    BigInt::from(10u64).pow(DEC_PRECISION as u32)
}

/// Fixed-point decimal with 18 decimal places of precision
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(BigInt);

impl Dec {
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn one() -> Self {
        Self(precision_multiplier())
    }

    pub fn from_i64(n: i64) -> Self {
        Self(BigInt::from(n) * precision_multiplier())
    }

    pub fn from_u64(n: u64) -> Self {
        Self(BigInt::from(n) * precision_multiplier())
    }

    /// Build from the scaled integer string used on the protobuf wire
    ///
    /// `"500000000000000000"` is `0.5`.
    pub fn from_atomics(s: &str) -> Result<Self, MathError> {
        if s.is_empty() || s.starts_with('+') {
            return Err(MathError::InvalidDec(s.to_string()));
        }
        BigInt::from_str(s)
            .map(Self)
            .map_err(|_| MathError::InvalidDec(s.to_string()))
    }

    /// Scaled integer string used on the protobuf wire
    pub fn to_atomics(&self) -> String {
        self.0.to_string()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplication truncating toward zero at the 18th digit
    pub fn mul_truncate(&self, other: &Self) -> Self {
        Self((&self.0 * &other.0) / precision_multiplier())
    }

    /// Division truncating toward zero at the 18th digit
    pub fn checked_quo(&self, other: &Self) -> Result<Self, MathError> {
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self((&self.0 * precision_multiplier()) / &other.0))
    }

    /// Decimal form with exactly 18 fractional digits, as Amino JSON prints it
    pub fn to_fixed_string(&self) -> String {
        let (int_part, frac_part) = self.split_digits();
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}{int_part}.{frac_part}")
    }

    fn split_digits(&self) -> (String, String) {
        let digits = self.0.abs().to_string();
        if digits.len() > DEC_PRECISION {
            let (int_part, frac_part) = digits.split_at(digits.len() - DEC_PRECISION);
            (int_part.to_string(), frac_part.to_string())
        } else {
            ("0".to_string(), format!("{digits:0>width$}", width = DEC_PRECISION))
        }
    }
}

impl FromStr for Dec {
    type Err = MathError;

    /// Parse `-?\d+(\.\d{0,18})?`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MathError::InvalidDec(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac_part.len() > DEC_PRECISION {
            return Err(MathError::PrecisionExceeded(s.to_string()));
        }

        let combined = format!("{int_part}{frac_part:0<width$}", width = DEC_PRECISION);
        let atomics = BigInt::from_str(&combined).map_err(|_| invalid())?;
        Ok(Self(if negative { -atomics } else { atomics }))
    }
}

impl fmt::Display for Dec {
    /// Shortest decimal form: `0.5`, `1`, `-12.25`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.split_digits();
        let frac = frac_part.trim_end_matches('0');
        if self.is_negative() {
            write!(f, "-")?;
        }
        if frac.is_empty() {
            write!(f, "{int_part}")
        } else {
            write!(f, "{int_part}.{frac}")
        }
    }
}

impl Serialize for Dec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_fixed_string())
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Add for Dec {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Dec {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Dec {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_half_to_atomics() {
        let half: Dec = "0.5".parse().unwrap();
        assert_eq!(half.to_atomics(), "500000000000000000");
        assert_eq!(half.to_fixed_string(), "0.500000000000000000");
        assert_eq!(half.to_string(), "0.5");
    }

    #[test]
    fn test_from_atomics() {
        let d = Dec::from_atomics("1250000000000000000").unwrap();
        assert_eq!(d.to_string(), "1.25");
        assert_eq!(Dec::from_atomics("0").unwrap(), Dec::zero());
        assert!(Dec::from_atomics("0.5").is_err());
        assert!(Dec::from_atomics("").is_err());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("1".parse::<Dec>().unwrap(), Dec::one());
        assert_eq!("1.".parse::<Dec>().unwrap(), Dec::one());
        assert_eq!("-0.25".parse::<Dec>().unwrap().to_string(), "-0.25");
        assert_eq!(
            "0.000000000000000001".parse::<Dec>().unwrap().to_atomics(),
            "1"
        );
        assert!(".5".parse::<Dec>().is_err());
        assert!("1.2.3".parse::<Dec>().is_err());
        assert!("abc".parse::<Dec>().is_err());
        assert!("-".parse::<Dec>().is_err());
    }

    #[test]
    fn test_precision_exceeded() {
        let err = "0.0000000000000000001".parse::<Dec>().unwrap_err();
        assert!(matches!(err, MathError::PrecisionExceeded(_)));
    }

    #[test]
    fn test_display_whole_and_negative() {
        assert_eq!(Dec::from_i64(-3).to_string(), "-3");
        assert_eq!(Dec::from_i64(-3).to_fixed_string(), "-3.000000000000000000");
        assert_eq!(Dec::zero().to_string(), "0");
        assert_eq!(Dec::zero().to_fixed_string(), "0.000000000000000000");
    }

    #[test]
    fn test_arithmetic() {
        let a: Dec = "1.5".parse().unwrap();
        let b: Dec = "0.25".parse().unwrap();
        assert_eq!((a.clone() + b.clone()).to_string(), "1.75");
        assert_eq!((a.clone() - b.clone()).to_string(), "1.25");
        assert_eq!(a.mul_truncate(&b).to_string(), "0.375");
        assert_eq!(a.checked_quo(&b).unwrap().to_string(), "6");
        assert_eq!(a.checked_quo(&Dec::zero()), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_serde_uses_fixed_form() {
        let d: Dec = "0.1".parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"0.100000000000000000\"");
        let back: Dec = serde_json::from_str("\"0.1\"").unwrap();
        assert_eq!(back, d);
    }

    proptest! {
        #[test]
        fn prop_atomics_roundtrip(n in any::<i64>()) {
            let d = Dec::from_atomics(&n.to_string()).unwrap();
            prop_assert_eq!(d.to_atomics(), n.to_string());
            let reparsed: Dec = d.to_string().parse().unwrap();
            prop_assert_eq!(&reparsed, &d);
            let fixed: Dec = d.to_fixed_string().parse().unwrap();
            prop_assert_eq!(fixed, d);
        }
    }
}
