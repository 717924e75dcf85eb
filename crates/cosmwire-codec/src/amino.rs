//! Amino JSON conversion
//!
//! Amino JSON is the legacy signing representation: snake_case keys, 64-bit
//! integers as decimal strings, bytes as base64, fixed-point decimals with
//! 18 fractional digits, and zero scalars left out entirely. Messages travel
//! wrapped as `{"type": <amino name>, "value": {...}}`.

use crate::error::{CodecError, Result};
use crate::protobuf::Any;
use crate::registry::GLOBAL_TYPE_REGISTRY;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use cosmwire_math::Dec;
use prost_types::{Duration, Timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Amino envelope: the message's amino name plus its Amino JSON value
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AminoMsg {
    #[serde(rename = "type")]
    pub r#type: String,
    pub value: serde_json::Value,
}

/// Conversion between a protobuf message and its Amino JSON form
pub trait AminoConvert: Sized {
    /// The Amino JSON shape of this message
    type Amino: Serialize + DeserializeOwned + Default;

    /// Legacy amino name, e.g. `cosmos-sdk/MsgSend`
    const AMINO_TYPE: &'static str;

    fn to_amino(&self) -> Result<Self::Amino>;

    fn from_amino(amino: Self::Amino) -> Result<Self>;

    /// Wrap in the `{type, value}` envelope
    fn to_amino_msg(&self) -> Result<AminoMsg> {
        Ok(AminoMsg {
            r#type: Self::AMINO_TYPE.to_string(),
            value: self.to_amino_json()?,
        })
    }

    /// Unwrap an envelope, rejecting a foreign amino name
    fn from_amino_msg(msg: AminoMsg) -> Result<Self> {
        if msg.r#type != Self::AMINO_TYPE {
            return Err(CodecError::TypeMismatch {
                expected: Self::AMINO_TYPE.to_string(),
                actual: msg.r#type,
            });
        }
        Self::from_amino_json(msg.value)
    }

    fn to_amino_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_amino()?)?)
    }

    /// `null` is treated as an empty object
    fn from_amino_json(value: serde_json::Value) -> Result<Self> {
        let amino = match value {
            serde_json::Value::Null => Self::Amino::default(),
            value => serde_json::from_value(value)?,
        };
        Self::from_amino(amino)
    }
}

/// Whether an Amino field should be left out of the output
///
/// Absent optional values are omitted, lists are always written.
pub trait AminoOmit {
    fn omit(&self) -> bool;
}

impl<T> AminoOmit for Option<T> {
    fn omit(&self) -> bool {
        self.is_none()
    }
}

impl<T> AminoOmit for Vec<T> {
    fn omit(&self) -> bool {
        false
    }
}

/// `skip_serializing_if` hook used by generated Amino structs
pub fn is_omitted<T: AminoOmit>(value: &T) -> bool {
    value.omit()
}

pub fn omit_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn omit_zero_u64(value: u64) -> Option<String> {
    (value != 0).then(|| value.to_string())
}

pub fn omit_zero_i64(value: i64) -> Option<String> {
    (value != 0).then(|| value.to_string())
}

pub fn omit_zero<T: Default + PartialEq + Copy>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

pub fn parse_u64(value: Option<String>) -> Result<u64> {
    match value {
        None => Ok(0),
        Some(s) => s.parse().map_err(|_| CodecError::InvalidInteger(s)),
    }
}

pub fn parse_i64(value: Option<String>) -> Result<i64> {
    match value {
        None => Ok(0),
        Some(s) => s.parse().map_err(|_| CodecError::InvalidInteger(s)),
    }
}

pub fn u64_list_to_amino(values: &[u64]) -> Vec<String> {
    values.iter().map(u64::to_string).collect()
}

pub fn u64_list_from_amino(values: Vec<String>) -> Result<Vec<u64>> {
    values.into_iter().map(|s| parse_u64(Some(s))).collect()
}

/// Permissive enum parsing: accepts the variant number, its decimal string
/// form, or the protobuf name. `None` means the caller should fall back to
/// its unrecognized variant.
pub fn enum_from_json<E>(
    value: &serde_json::Value,
    from_name: impl Fn(&str) -> Option<E>,
    from_number: impl Fn(i32) -> Option<E>,
) -> Option<E> {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .and_then(from_number),
        serde_json::Value::String(s) => match s.parse::<i32>() {
            Ok(n) => from_number(n),
            Err(_) => from_name(s),
        },
        _ => None,
    }
}

/// Raw number of an enum field, kept as is even when no variant matches it
pub fn enum_number(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub fn bytes_to_amino(value: &[u8]) -> Option<String> {
    (!value.is_empty()).then(|| STANDARD.encode(value))
}

pub fn bytes_from_amino(value: Option<String>) -> Result<Vec<u8>> {
    match value {
        None => Ok(Vec::new()),
        Some(s) => STANDARD
            .decode(s.as_bytes())
            .map_err(|e| CodecError::InvalidBase64(format!("{s}: {e}"))),
    }
}

pub fn bytes_list_to_amino(values: &[Vec<u8>]) -> Vec<String> {
    values.iter().map(|v| STANDARD.encode(v)).collect()
}

pub fn bytes_list_from_amino(values: Vec<String>) -> Result<Vec<Vec<u8>>> {
    values
        .into_iter()
        .map(|s| bytes_from_amino(Some(s)))
        .collect()
}

/// Zero decimals are omitted, others print all 18 fractional digits
pub fn dec_to_amino(value: &Dec) -> Option<String> {
    (!value.is_zero()).then(|| value.to_fixed_string())
}

pub fn dec_from_amino(value: Option<String>) -> Result<Dec> {
    match value {
        None => Ok(Dec::zero()),
        Some(s) => Ok(s.parse()?),
    }
}

pub fn to_amino_opt<T: AminoConvert>(value: &Option<T>) -> Result<Option<T::Amino>> {
    value.as_ref().map(AminoConvert::to_amino).transpose()
}

pub fn from_amino_opt<T: AminoConvert>(value: Option<T::Amino>) -> Result<Option<T>> {
    value.map(T::from_amino).transpose()
}

pub fn to_amino_vec<T: AminoConvert>(values: &[T]) -> Result<Vec<T::Amino>> {
    values.iter().map(AminoConvert::to_amino).collect()
}

pub fn from_amino_vec<T: AminoConvert>(values: Vec<T::Amino>) -> Result<Vec<T>> {
    values.into_iter().map(T::from_amino).collect()
}

/// Nested `Any` values resolve through the global registry
pub fn any_to_amino(value: &Option<Any>) -> Result<Option<AminoMsg>> {
    value
        .as_ref()
        .map(|any| GLOBAL_TYPE_REGISTRY.any_to_amino_msg(any))
        .transpose()
}

pub fn any_from_amino(value: Option<AminoMsg>) -> Result<Option<Any>> {
    value
        .map(|msg| GLOBAL_TYPE_REGISTRY.amino_msg_to_any(&msg))
        .transpose()
}

pub fn anys_to_amino(values: &[Any]) -> Result<Vec<AminoMsg>> {
    values
        .iter()
        .map(|any| GLOBAL_TYPE_REGISTRY.any_to_amino_msg(any))
        .collect()
}

pub fn anys_from_amino(values: Vec<AminoMsg>) -> Result<Vec<Any>> {
    values
        .iter()
        .map(|msg| GLOBAL_TYPE_REGISTRY.amino_msg_to_any(msg))
        .collect()
}

/// RFC 3339 with nanosecond precision trimmed to what is needed
pub fn timestamp_to_amino(value: &Option<Timestamp>) -> Result<Option<String>> {
    let Some(ts) = value else {
        return Ok(None);
    };
    let nanos = u32::try_from(ts.nanos)
        .map_err(|_| CodecError::InvalidTime(format!("negative nanos {}", ts.nanos)))?;
    let dt = DateTime::<Utc>::from_timestamp(ts.seconds, nanos)
        .ok_or_else(|| CodecError::InvalidTime(format!("{}s out of range", ts.seconds)))?;
    Ok(Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
}

pub fn timestamp_from_amino(value: Option<String>) -> Result<Option<Timestamp>> {
    let Some(s) = value else {
        return Ok(None);
    };
    let dt = DateTime::parse_from_rfc3339(&s)
        .map_err(|e| CodecError::InvalidTime(format!("{s}: {e}")))?
        .with_timezone(&Utc);
    Ok(Some(Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }))
}

/// Durations are written as a total nanosecond count
pub fn duration_to_amino(value: &Option<Duration>) -> Option<String> {
    value.as_ref().map(|d| {
        let total = i128::from(d.seconds) * 1_000_000_000 + i128::from(d.nanos);
        total.to_string()
    })
}

pub fn duration_from_amino(value: Option<String>) -> Result<Option<Duration>> {
    let Some(s) = value else {
        return Ok(None);
    };
    let total: i128 = s.parse().map_err(|_| CodecError::InvalidInteger(s.clone()))?;
    let seconds = i64::try_from(total / 1_000_000_000)
        .map_err(|_| CodecError::InvalidTime(format!("{s}ns out of range")))?;
    Ok(Some(Duration {
        seconds,
        nanos: (total % 1_000_000_000) as i32,
    }))
}

#[doc(hidden)]
#[macro_export]
macro_rules! __amino_ty {
    (string) => { ::std::option::Option<::std::string::String> };
    (uint64) => { ::std::option::Option<::std::string::String> };
    (int64) => { ::std::option::Option<::std::string::String> };
    (uint32) => { ::std::option::Option<u32> };
    (int32) => { ::std::option::Option<i32> };
    (bool) => { ::std::option::Option<bool> };
    (bytes) => { ::std::option::Option<::std::string::String> };
    (enumeration ($e:ty)) => { ::std::option::Option<$crate::__private::serde_json::Value> };
    (dec) => { ::std::option::Option<::std::string::String> };
    (message ($t:ty)) => { ::std::option::Option<<$t as $crate::AminoConvert>::Amino> };
    (messages ($t:ty)) => { ::std::vec::Vec<<$t as $crate::AminoConvert>::Amino> };
    (strings) => { ::std::vec::Vec<::std::string::String> };
    (uint64s) => { ::std::vec::Vec<::std::string::String> };
    (bytes_list) => { ::std::vec::Vec<::std::string::String> };
    (any) => { ::std::option::Option<$crate::AminoMsg> };
    (anys) => { ::std::vec::Vec<$crate::AminoMsg> };
    (timestamp) => { ::std::option::Option<::std::string::String> };
    (duration) => { ::std::option::Option<::std::string::String> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __to_amino {
    (string, $v:expr) => { $crate::amino::omit_empty($v) };
    (uint64, $v:expr) => { $crate::amino::omit_zero_u64(*$v) };
    (int64, $v:expr) => { $crate::amino::omit_zero_i64(*$v) };
    (uint32, $v:expr) => { $crate::amino::omit_zero(*$v) };
    (int32, $v:expr) => { $crate::amino::omit_zero(*$v) };
    (bool, $v:expr) => { $crate::amino::omit_zero(*$v) };
    (bytes, $v:expr) => { $crate::amino::bytes_to_amino($v) };
    (enumeration ($e:ty), $v:expr) => {
        $crate::amino::omit_zero(*$v).map($crate::__private::serde_json::Value::from)
    };
    (dec, $v:expr) => { $crate::amino::dec_to_amino($v) };
    (message ($t:ty), $v:expr) => { $crate::amino::to_amino_opt::<$t>($v)? };
    (messages ($t:ty), $v:expr) => { $crate::amino::to_amino_vec::<$t>($v)? };
    (strings, $v:expr) => { ::std::clone::Clone::clone($v) };
    (uint64s, $v:expr) => { $crate::amino::u64_list_to_amino($v) };
    (bytes_list, $v:expr) => { $crate::amino::bytes_list_to_amino($v) };
    (any, $v:expr) => { $crate::amino::any_to_amino($v)? };
    (anys, $v:expr) => { $crate::amino::anys_to_amino($v)? };
    (timestamp, $v:expr) => { $crate::amino::timestamp_to_amino($v)? };
    (duration, $v:expr) => { $crate::amino::duration_to_amino($v) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __from_amino {
    (string, $v:expr) => { $v.unwrap_or_default() };
    (uint64, $v:expr) => { $crate::amino::parse_u64($v)? };
    (int64, $v:expr) => { $crate::amino::parse_i64($v)? };
    (uint32, $v:expr) => { $v.unwrap_or_default() };
    (int32, $v:expr) => { $v.unwrap_or_default() };
    (bool, $v:expr) => { $v.unwrap_or_default() };
    (bytes, $v:expr) => { $crate::amino::bytes_from_amino($v)? };
    (enumeration ($e:ty), $v:expr) => {
        match $v {
            ::std::option::Option::Some(value) => $crate::amino::enum_number(&value)
                .unwrap_or_else(|| <$e>::from_json(&value) as i32),
            ::std::option::Option::None => 0,
        }
    };
    (dec, $v:expr) => { $crate::amino::dec_from_amino($v)? };
    (message ($t:ty), $v:expr) => { $crate::amino::from_amino_opt::<$t>($v)? };
    (messages ($t:ty), $v:expr) => { $crate::amino::from_amino_vec::<$t>($v)? };
    (strings, $v:expr) => { $v };
    (uint64s, $v:expr) => { $crate::amino::u64_list_from_amino($v)? };
    (bytes_list, $v:expr) => { $crate::amino::bytes_list_from_amino($v)? };
    (any, $v:expr) => { $crate::amino::any_from_amino($v)? };
    (anys, $v:expr) => { $crate::amino::anys_from_amino($v)? };
    (timestamp, $v:expr) => { $crate::amino::timestamp_from_amino($v)? };
    (duration, $v:expr) => { $crate::amino::duration_from_amino($v)? };
}

/// Generate the Amino struct and the [`AminoConvert`] impl for a message
///
/// ```ignore
/// amino_message!(MsgSend => MsgSendAmino = "cosmos-sdk/MsgSend" {
///     from_address: string,
///     to_address: string,
///     amount: messages(Coin),
/// });
/// ```
#[macro_export]
macro_rules! amino_message {
    ($ty:ident => $amino:ident = $name:literal {
        $( $field:ident : $kind:ident $( ( $($arg:tt)* ) )? ),* $(,)?
    }) => {
        #[doc = concat!("Amino JSON form of [`", stringify!($ty), "`]")]
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $amino {
            $(
                #[serde(skip_serializing_if = "::cosmwire_codec::amino::is_omitted")]
                pub $field: $crate::__amino_ty!($kind $( ($($arg)*) )?),
            )*
        }

        impl $crate::AminoConvert for $ty {
            type Amino = $amino;
            const AMINO_TYPE: &'static str = $name;

            #[allow(unused_variables)]
            fn to_amino(&self) -> $crate::Result<$amino> {
                ::std::result::Result::Ok($amino {
                    $( $field: $crate::__to_amino!($kind $( ($($arg)*) )?, &self.$field), )*
                })
            }

            #[allow(unused_variables)]
            fn from_amino(amino: $amino) -> $crate::Result<Self> {
                ::std::result::Result::Ok(Self {
                    $( $field: $crate::__from_amino!($kind $( ($($arg)*) )?, amino.$field), )*
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_helpers() {
        assert_eq!(omit_empty(""), None);
        assert_eq!(omit_empty("a"), Some("a".to_string()));
        assert_eq!(omit_zero_u64(0), None);
        assert_eq!(omit_zero_u64(u64::MAX), Some("18446744073709551615".to_string()));
        assert_eq!(omit_zero(false), None);
        assert_eq!(omit_zero(7i32), Some(7));
        assert_eq!(parse_u64(None).unwrap(), 0);
        assert_eq!(parse_i64(Some("-5".to_string())).unwrap(), -5);
        assert!(parse_u64(Some("x".to_string())).is_err());
    }

    #[test]
    fn test_enum_from_json() {
        let by_name = |s: &str| (s == "ONE").then_some(1);
        let by_number = |n: i32| (0..=1).contains(&n).then_some(n);
        assert_eq!(enum_from_json(&serde_json::json!(1), by_name, by_number), Some(1));
        assert_eq!(enum_from_json(&serde_json::json!("1"), by_name, by_number), Some(1));
        assert_eq!(enum_from_json(&serde_json::json!("ONE"), by_name, by_number), Some(1));
        assert_eq!(enum_from_json(&serde_json::json!(7), by_name, by_number), None);
        assert_eq!(enum_from_json(&serde_json::json!("TWO"), by_name, by_number), None);
        assert_eq!(enum_from_json(&serde_json::json!(true), by_name, by_number), None);
    }

    #[test]
    fn test_enum_number_keeps_unknown_values() {
        assert_eq!(enum_number(&serde_json::json!(9)), Some(9));
        assert_eq!(enum_number(&serde_json::json!("9")), Some(9));
        assert_eq!(enum_number(&serde_json::json!(-3)), Some(-3));
        assert_eq!(enum_number(&serde_json::json!("VOTE_OPTION_YES")), None);
        assert_eq!(enum_number(&serde_json::json!(4_294_967_296_i64)), None);
        assert_eq!(enum_number(&serde_json::Value::Null), None);
    }

    #[test]
    fn test_bytes_base64() {
        assert_eq!(bytes_to_amino(&[]), None);
        assert_eq!(bytes_to_amino(&[1, 2, 3]), Some("AQID".to_string()));
        assert_eq!(bytes_from_amino(Some("AQID".to_string())).unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            bytes_from_amino(Some("%%%".to_string())),
            Err(CodecError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_dec_amino_form() {
        let half: Dec = "0.5".parse().unwrap();
        assert_eq!(dec_to_amino(&half), Some("0.500000000000000000".to_string()));
        assert_eq!(dec_to_amino(&Dec::zero()), None);
        assert_eq!(dec_from_amino(Some("0.5".to_string())).unwrap(), half);
        assert_eq!(dec_from_amino(None).unwrap(), Dec::zero());

        // scaled atomics are not special cased
        let atomics = dec_from_amino(Some("500000000000000000".to_string())).unwrap();
        assert_ne!(atomics, half);
        assert_eq!(atomics, "500000000000000000".parse().unwrap());
    }

    #[test]
    fn test_timestamp_rfc3339() {
        let ts = Some(Timestamp {
            seconds: 1_700_000_000,
            nanos: 500_000_000,
        });
        let s = timestamp_to_amino(&ts).unwrap().unwrap();
        assert_eq!(s, "2023-11-14T22:13:20.500Z");
        assert_eq!(timestamp_from_amino(Some(s)).unwrap(), ts);
        assert_eq!(timestamp_to_amino(&None).unwrap(), None);
    }

    #[test]
    fn test_duration_nanos() {
        let d = Some(Duration {
            seconds: 172_800,
            nanos: 5,
        });
        let s = duration_to_amino(&d).unwrap();
        assert_eq!(s, "172800000000005");
        assert_eq!(duration_from_amino(Some(s)).unwrap(), d);
    }

    #[test]
    fn test_amino_msg_serde() {
        let msg: AminoMsg =
            serde_json::from_str(r#"{"type":"cosmos-sdk/MsgSend","value":{"a":"1"}}"#).unwrap();
        assert_eq!(msg.r#type, "cosmos-sdk/MsgSend");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"cosmos-sdk/MsgSend","value":{"a":"1"}}"#);
    }
}
