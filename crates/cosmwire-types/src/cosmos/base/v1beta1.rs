//! `cosmos.base.v1beta1` coin types

use bytes::{Buf, BufMut};
use cosmwire_codec::{
    amino_message, cosmos_message, dec, partial_message, register_types, type_url, TypeRegistry,
};
use cosmwire_math::{Dec, Int, MathError};
use prost::encoding::{string, DecodeContext, WireType};
use prost::DecodeError;

/// Coin defines a token with a denomination and an amount.
///
/// NOTE: The amount field is an Int which implements the custom method
/// signatures required by gogoproto.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl ToString) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }

    /// Parse the amount as an arbitrary precision integer
    pub fn amount_int(&self) -> Result<Int, MathError> {
        if self.amount.is_empty() {
            return Ok(Int::zero());
        }
        self.amount.parse()
    }
}

cosmos_message!(Coin => CoinAmino, CoinPartial;
    "/cosmos.base.v1beta1.Coin", "cosmos-sdk/Coin" {
        denom: string,
        amount: string,
    });

/// DecCoin defines a token with a denomination and a decimal amount.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl prost::Message for DecCoin {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if !self.denom.is_empty() {
            string::encode(1, &self.denom, buf);
        }
        dec::encode(2, &self.amount, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => string::merge(wire_type, &mut self.denom, buf, ctx),
            2 => dec::merge(wire_type, &mut self.amount, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let denom = if self.denom.is_empty() {
            0
        } else {
            string::encoded_len(1, &self.denom)
        };
        denom + dec::encoded_len(2, &self.amount)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

type_url!(DecCoin => "/cosmos.base.v1beta1.DecCoin");

amino_message!(DecCoin => DecCoinAmino = "cosmos-sdk/DecCoin" {
    denom: string,
    amount: dec,
});

partial_message!(DecCoin => DecCoinPartial {
    denom: string,
    amount: dec,
});

/// IntProto defines a Protobuf wrapper around an Int object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntProto {
    #[prost(string, tag = "1")]
    pub int: String,
}

cosmos_message!(IntProto => IntProtoAmino, IntProtoPartial;
    "/cosmos.base.v1beta1.IntProto", "cosmos-sdk/IntProto" {
        int: string,
    });

/// DecProto defines a Protobuf wrapper around a Dec object.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DecProto {
    pub dec: Dec,
}

impl prost::Message for DecProto {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        dec::encode(1, &self.dec, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => dec::merge(wire_type, &mut self.dec, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        dec::encoded_len(1, &self.dec)
    }

    fn clear(&mut self) {
        self.dec = Dec::zero();
    }
}

type_url!(DecProto => "/cosmos.base.v1beta1.DecProto");

amino_message!(DecProto => DecProtoAmino = "cosmos-sdk/DecProto" {
    dec: dec,
});

partial_message!(DecProto => DecProtoPartial {
    dec: dec,
});

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [Coin, DecCoin, IntProto, DecProto]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::AminoConvert;
    use prost::Message;

    #[test]
    fn test_coin_amount_int() {
        let coin = Coin::new("uatom", "1000000000000000000000000");
        assert_eq!(
            coin.amount_int().unwrap().to_string(),
            "1000000000000000000000000"
        );
        assert!(Coin::default().amount_int().unwrap().is_zero());
        assert!(Coin::new("uatom", "1.5").amount_int().is_err());
    }

    #[test]
    fn test_dec_coin_wire_and_amino() {
        let coin = DecCoin {
            denom: "stake".to_string(),
            amount: "1.25".parse().unwrap(),
        };
        let bytes = coin.encode_to_vec();
        let mut expected = vec![0x0a, 5];
        expected.extend_from_slice(b"stake");
        expected.extend_from_slice(&[0x12, 19]);
        expected.extend_from_slice(b"1250000000000000000");
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), coin.encoded_len());
        assert_eq!(DecCoin::decode(bytes.as_slice()).unwrap(), coin);

        let json = coin.to_amino_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "denom": "stake", "amount": "1.250000000000000000" })
        );
        assert_eq!(DecCoin::from_amino_json(json).unwrap(), coin);
    }

    #[test]
    fn test_dec_proto_zero_is_empty() {
        assert!(DecProto::default().encode_to_vec().is_empty());
        let mut d = DecProto {
            dec: Dec::one(),
        };
        d.clear();
        assert_eq!(d, DecProto::default());
    }
}
