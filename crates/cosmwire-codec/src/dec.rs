//! Protobuf wire helpers for fixed-point decimal fields
//!
//! The SDK declares these fields as `string` but fills them with the
//! decimal's scaled integer ("atomics"): `0.5` travels as
//! `"500000000000000000"`. The helpers mirror `prost::encoding::string` so
//! hand-written `Message` impls can treat a [`Dec`] like any other field.

use bytes::{Buf, BufMut};
use cosmwire_math::Dec;
use prost::encoding::{string, DecodeContext, WireType};
use prost::DecodeError;

/// Encode a decimal field; the zero decimal is not emitted
pub fn encode(tag: u32, value: &Dec, buf: &mut impl BufMut) {
    if !value.is_zero() {
        string::encode(tag, &value.to_atomics(), buf);
    }
}

/// Merge a decimal field, replacing the current value
pub fn merge(
    wire_type: WireType,
    value: &mut Dec,
    buf: &mut impl Buf,
    ctx: DecodeContext,
) -> Result<(), DecodeError> {
    let mut atomics = String::new();
    string::merge(wire_type, &mut atomics, buf, ctx)?;
    *value = if atomics.is_empty() {
        Dec::zero()
    } else {
        Dec::from_atomics(&atomics).map_err(|e| DecodeError::new(e.to_string()))?
    };
    Ok(())
}

pub fn encoded_len(tag: u32, value: &Dec) -> usize {
    if value.is_zero() {
        0
    } else {
        string::encoded_len(tag, &value.to_atomics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_on_the_wire() {
        let half: Dec = "0.5".parse().unwrap();
        let mut buf = Vec::new();
        encode(2, &half, &mut buf);

        let mut expected = vec![0x12, 18];
        expected.extend_from_slice(b"500000000000000000");
        assert_eq!(buf, expected);
        assert_eq!(encoded_len(2, &half), buf.len());

        let mut slice = &buf[1..];
        let mut decoded = Dec::zero();
        merge(
            WireType::LengthDelimited,
            &mut decoded,
            &mut slice,
            DecodeContext::default(),
        )
        .unwrap();
        assert_eq!(decoded, half);
    }

    #[test]
    fn test_zero_not_emitted() {
        let mut buf = Vec::new();
        encode(1, &Dec::zero(), &mut buf);
        assert!(buf.is_empty());
        assert_eq!(encoded_len(1, &Dec::zero()), 0);
    }

    #[test]
    fn test_non_integer_atomics_rejected() {
        let payload = [3u8, b'0', b'.', b'5'];
        let mut slice = &payload[..];
        let mut decoded = Dec::zero();
        let result = merge(
            WireType::LengthDelimited,
            &mut decoded,
            &mut slice,
            DecodeContext::default(),
        );
        assert!(result.is_err());
    }
}
