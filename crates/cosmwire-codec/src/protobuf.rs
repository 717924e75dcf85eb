//! Protobuf `Any` and type URL support
//!
//! Every message that can travel inside an `Any` implements [`MessageExt`],
//! which binds its fully-qualified type URL (`/cosmos.bank.v1beta1.MsgSend`).

use crate::error::{CodecError, Result};
use prost::Message;

/// Cosmos SDK Any type
///
/// Wraps an encoded message together with the type URL naming it.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Any {
    /// Type URL uniquely identifies the type of the serialized message
    ///
    /// Type URLs use the format: /fully.qualified.protobuf.Name
    #[prost(string, tag = "1")]
    pub type_url: String,

    /// Binary serialization of the protobuf message
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

impl Any {
    /// Create a new Any from a message and type URL
    pub fn from_msg<M: Message>(msg: &M, type_url: impl Into<String>) -> Self {
        Self {
            type_url: type_url.into(),
            value: msg.encode_to_vec(),
        }
    }

    /// Pack a message into an Any under its own type URL
    pub fn pack<M: MessageExt>(msg: &M) -> Self {
        Self::from_msg(msg, M::TYPE_URL)
    }

    /// Unpack an Any into a specific message type, checking the type URL
    pub fn unpack<M: MessageExt>(&self) -> Result<M> {
        M::from_any(self)
    }

    /// Check if this Any contains a message of the given type
    pub fn is<M: MessageExt>(&self) -> bool {
        self.type_url == M::TYPE_URL
    }

    /// Get the type URL without the leading slash
    pub fn type_url_without_prefix(&self) -> &str {
        self.type_url.strip_prefix('/').unwrap_or(&self.type_url)
    }
}

/// Extension trait for messages with type URL support
pub trait MessageExt: Message + Default + Sized {
    /// The type URL for this message type
    const TYPE_URL: &'static str;

    /// Get the type URL for this message
    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    /// Encode into an `Any` carrying this type's URL
    fn to_any(&self) -> Any {
        Any::pack(self)
    }

    /// Decode from an `Any`, rejecting a foreign type URL
    fn from_any(any: &Any) -> Result<Self> {
        if any.type_url != Self::TYPE_URL {
            return Err(CodecError::TypeMismatch {
                expected: Self::TYPE_URL.to_string(),
                actual: any.type_url.clone(),
            });
        }
        Ok(Self::decode(any.value.as_slice())?)
    }
}

/// Implement [`MessageExt`] for a list of types
///
/// ```ignore
/// type_url!(MsgSend => "/cosmos.bank.v1beta1.MsgSend");
/// ```
#[macro_export]
macro_rules! type_url {
    ($($ty:ty => $url:expr),+ $(,)?) => {
        $(
            impl $crate::MessageExt for $ty {
                const TYPE_URL: &'static str = $url;
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct TestMessage {
        #[prost(string, tag = "1")]
        pub content: String,
        #[prost(uint64, tag = "2")]
        pub value: u64,
    }

    type_url!(TestMessage => "/test.TestMessage");

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct OtherMessage {
        #[prost(bool, tag = "1")]
        pub flag: bool,
    }

    type_url!(OtherMessage => "/test.OtherMessage");

    #[test]
    fn test_any_pack_unpack() {
        let msg = TestMessage {
            content: "hello".to_string(),
            value: 42,
        };

        let any = Any::pack(&msg);
        assert_eq!(any.type_url, "/test.TestMessage");
        assert_eq!(any.type_url_without_prefix(), "test.TestMessage");
        assert!(any.is::<TestMessage>());
        assert!(!any.is::<OtherMessage>());

        let unpacked: TestMessage = any.unpack().unwrap();
        assert_eq!(unpacked, msg);
    }

    #[test]
    fn test_unpack_wrong_type() {
        let any = OtherMessage { flag: true }.to_any();
        let err = any.unpack::<TestMessage>().unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn test_any_wire_layout() {
        let any = Any {
            type_url: "/a".to_string(),
            value: vec![0x08, 0x01],
        };
        assert_eq!(
            any.encode_to_vec(),
            vec![0x0a, 0x02, b'/', b'a', 0x12, 0x02, 0x08, 0x01]
        );
        assert_eq!(Any::decode(any.encode_to_vec().as_slice()).unwrap(), any);
    }
}
