//! Arbitrary precision integer type

use crate::MathError;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Arbitrary precision signed integer, serialized as a decimal string
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(BigInt);

impl Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Int {
    pub fn from_i64(n: i64) -> Self {
        Self(BigInt::from(n))
    }

    pub fn from_u64(n: u64) -> Self {
        Self(BigInt::from(n))
    }

    pub fn from_bigint(n: BigInt) -> Self {
        Self(n)
    }

    pub fn zero() -> Self {
        Self(BigInt::zero())
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

    /// Checked division; `None` when dividing by zero
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &other.0))
        }
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Narrow to u64 when the value fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }
}

impl FromStr for Int {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // BigInt accepts a leading '+', the SDK does not
        if s.is_empty() || s.starts_with('+') {
            return Err(MathError::InvalidInt(s.to_string()));
        }
        BigInt::from_str(s)
            .map(Self)
            .map_err(|_| MathError::InvalidInt(s.to_string()))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Int {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<i64> for Int {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl Add for Int {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Int {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul for Int {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Neg for Int {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_large_amount() {
        let amount: Int = "340282366920938463463374607431768211456".parse().unwrap();
        assert!(amount.is_positive());
        assert_eq!(amount.to_u64(), None);
        assert_eq!(
            amount.to_string(),
            "340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Int>().is_err());
        assert!("+5".parse::<Int>().is_err());
        assert!("12a".parse::<Int>().is_err());
        assert!("1.5".parse::<Int>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Int::from_u64(100);
        let b = Int::from_i64(-30);
        assert_eq!((a.clone() + b.clone()).to_string(), "70");
        assert_eq!((a.clone() - b.clone()).to_string(), "130");
        assert_eq!((a.clone() * b).to_string(), "-3000");
        assert_eq!(a.checked_div(&Int::zero()), None);
        assert_eq!(a.checked_div(&Int::from_u64(3)), Some(Int::from_u64(33)));
    }

    #[test]
    fn test_serde_as_string() {
        let n = Int::from_u64(18_446_744_073_709_551_615);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"18446744073709551615\"");
        let back: Int = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
