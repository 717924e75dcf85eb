//! Encoding and decoding utilities for Cosmos SDK messages.
//!
//! This crate provides the pieces every generated message type builds on:
//! the protobuf `Any` wrapper and type URLs, Amino JSON conversion,
//! construction from partial values, the fixed-point decimal wire helpers,
//! and the global type registry used to resolve `Any` at runtime.

extern crate self as cosmwire_codec;

pub mod amino;
pub mod dec;
pub mod error;
pub mod partial;
pub mod protobuf;
pub mod registry;

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export commonly used types
pub use amino::{AminoConvert, AminoMsg};
pub use cosmwire_math::Dec;
pub use error::{CodecError, Result};
pub use partial::FromPartial;
pub use prost_types::{Duration, Timestamp};
pub use protobuf::{Any, MessageExt};
pub use registry::{MessageDyn, TypeRegistry, GLOBAL_TYPE_REGISTRY};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Codec trait for encoding and decoding messages
pub trait Codec: Send + Sync {
    /// Encode a message to protobuf bytes
    fn encode<T: Message>(&self, msg: &T) -> Result<Vec<u8>>;

    /// Decode protobuf bytes to a message
    fn decode<T: Message + Default>(&self, data: &[u8]) -> Result<T>;

    /// Encode a message to its Amino JSON string
    fn encode_json<T: AminoConvert>(&self, msg: &T) -> Result<String>;

    /// Decode an Amino JSON string to a message
    fn decode_json<T: AminoConvert>(&self, data: &str) -> Result<T>;
}

/// Protobuf codec implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtoCodec;

impl ProtoCodec {
    /// Create a new protobuf codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for ProtoCodec {
    fn encode<T: Message>(&self, msg: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(msg.encoded_len());
        msg.encode(&mut buf)?;
        Ok(buf)
    }

    fn decode<T: Message + Default>(&self, data: &[u8]) -> Result<T> {
        Ok(T::decode(data)?)
    }

    fn encode_json<T: AminoConvert>(&self, msg: &T) -> Result<String> {
        to_json_string(&msg.to_amino()?)
    }

    fn decode_json<T: AminoConvert>(&self, data: &str) -> Result<T> {
        T::from_amino_json(serde_json::from_str(data)?)
    }
}

fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parse a value previously written by [`Codec::encode_json`] without
/// going through a message type
pub fn parse_json<T: DeserializeOwned>(data: &str) -> Result<T> {
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Ping {
        #[prost(int64, tag = "1")]
        pub height: i64,
        #[prost(string, repeated, tag = "2")]
        pub peers: Vec<String>,
    }

    cosmos_message!(Ping => PingAmino, PingPartial; "/test.Ping", "test/Ping" {
        height: int64,
        peers: strings,
    });

    #[test]
    fn test_proto_codec() {
        let codec = ProtoCodec::new();
        let ping = Ping {
            height: -3,
            peers: vec!["a".to_string(), "b".to_string()],
        };
        let bytes = codec.encode(&ping).unwrap();
        assert_eq!(codec.decode::<Ping>(&bytes).unwrap(), ping);

        let json = codec.encode_json(&ping).unwrap();
        assert_eq!(json, r#"{"height":"-3","peers":["a","b"]}"#);
        assert_eq!(codec.decode_json::<Ping>(&json).unwrap(), ping);
    }

    #[test]
    fn test_truncated_input_fails() {
        let codec = ProtoCodec::new();
        let err = codec.decode::<Ping>(&[0x12, 0x05, b'a']).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn test_parse_json() {
        let amino: PingAmino = parse_json(r#"{"height":"7"}"#).unwrap();
        assert_eq!(amino.height.as_deref(), Some("7"));
        assert!(amino.peers.is_empty());
    }
}
