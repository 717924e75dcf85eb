//! Construction from partially specified messages
//!
//! Each message has a `<Type>Partial` companion whose fields are all
//! optional. Missing fields fall back to their zero value; nested partials
//! are completed recursively. An absent submessage stays absent.

/// Build a complete message from its partial form
pub trait FromPartial: Sized {
    type Partial: Default;

    fn from_partial(partial: Self::Partial) -> Self;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __partial_ty {
    (string) => { ::std::string::String };
    (uint64) => { u64 };
    (int64) => { i64 };
    (uint32) => { u32 };
    (int32) => { i32 };
    (bool) => { bool };
    (bytes) => { ::std::vec::Vec<u8> };
    (enumeration ($e:ty)) => { i32 };
    (dec) => { $crate::Dec };
    (message ($t:ty)) => { <$t as $crate::FromPartial>::Partial };
    (messages ($t:ty)) => { ::std::vec::Vec<<$t as $crate::FromPartial>::Partial> };
    (strings) => { ::std::vec::Vec<::std::string::String> };
    (uint64s) => { ::std::vec::Vec<u64> };
    (bytes_list) => { ::std::vec::Vec<::std::vec::Vec<u8>> };
    (any) => { $crate::Any };
    (anys) => { ::std::vec::Vec<$crate::Any> };
    (timestamp) => { $crate::Timestamp };
    (duration) => { $crate::Duration };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __from_partial {
    (message ($t:ty), $v:expr) => {
        $v.map(<$t as $crate::FromPartial>::from_partial)
    };
    (messages ($t:ty), $v:expr) => {
        $v.unwrap_or_default()
            .into_iter()
            .map(<$t as $crate::FromPartial>::from_partial)
            .collect()
    };
    (any, $v:expr) => { $v };
    (timestamp, $v:expr) => { $v };
    (duration, $v:expr) => { $v };
    ($kind:ident $( ($($arg:tt)*) )?, $v:expr) => { $v.unwrap_or_default() };
}

/// Generate the partial struct and the [`FromPartial`] impl for a message
///
/// Field kinds are the same as for [`amino_message!`](crate::amino_message).
#[macro_export]
macro_rules! partial_message {
    ($ty:ident => $partial:ident {
        $( $field:ident : $kind:ident $( ( $($arg:tt)* ) )? ),* $(,)?
    }) => {
        #[doc = concat!("Partially specified [`", stringify!($ty), "`]")]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $partial {
            $( pub $field: ::std::option::Option<$crate::__partial_ty!($kind $( ($($arg)*) )?)>, )*
        }

        impl $crate::FromPartial for $ty {
            type Partial = $partial;

            #[allow(unused_variables)]
            fn from_partial(partial: $partial) -> Self {
                Self {
                    $( $field: $crate::__from_partial!($kind $( ($($arg)*) )?, partial.$field), )*
                }
            }
        }
    };
}

/// Bind a message's type URL and amino name and generate its Amino and
/// partial companions in one go
///
/// ```ignore
/// cosmos_message!(MsgSend => MsgSendAmino, MsgSendPartial;
///     "/cosmos.bank.v1beta1.MsgSend", "cosmos-sdk/MsgSend" {
///         from_address: string,
///         to_address: string,
///         amount: messages(Coin),
///     });
/// ```
#[macro_export]
macro_rules! cosmos_message {
    ($ty:ident => $amino:ident, $partial:ident; $url:literal, $name:literal {
        $( $body:tt )*
    }) => {
        $crate::type_url!($ty => $url);
        $crate::amino_message!($ty => $amino = $name { $($body)* });
        $crate::partial_message!($ty => $partial { $($body)* });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AminoConvert, MessageExt};
    use prost::Message;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Inner {
        #[prost(string, tag = "1")]
        pub denom: String,
        #[prost(string, tag = "2")]
        pub amount: String,
    }

    cosmos_message!(Inner => InnerAmino, InnerPartial;
        "/test.Inner", "test/Inner" {
            denom: string,
            amount: string,
        });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Outer {
        #[prost(uint64, tag = "1")]
        pub id: u64,
        #[prost(message, optional, tag = "2")]
        pub single: Option<Inner>,
        #[prost(message, repeated, tag = "3")]
        pub many: Vec<Inner>,
        #[prost(bytes = "vec", tag = "4")]
        pub memo: Vec<u8>,
        #[prost(bool, tag = "5")]
        pub flag: bool,
        #[prost(message, optional, tag = "6")]
        pub at: Option<crate::Timestamp>,
    }

    cosmos_message!(Outer => OuterAmino, OuterPartial;
        "/test.Outer", "test/Outer" {
            id: uint64,
            single: message(Inner),
            many: messages(Inner),
            memo: bytes,
            flag: bool,
            at: timestamp,
        });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Empty {}

    cosmos_message!(Empty => EmptyAmino, EmptyPartial; "/test.Empty", "test/Empty" {});

    #[test]
    fn test_from_partial_defaults() {
        let outer = Outer::from_partial(OuterPartial {
            id: Some(9),
            many: Some(vec![InnerPartial {
                denom: Some("uatom".to_string()),
                amount: None,
            }]),
            ..Default::default()
        });
        assert_eq!(outer.id, 9);
        assert_eq!(outer.single, None);
        assert_eq!(
            outer.many,
            vec![Inner {
                denom: "uatom".to_string(),
                amount: String::new(),
            }]
        );
        assert!(outer.memo.is_empty());
        assert!(!outer.flag);
        assert_eq!(Outer::from_partial(OuterPartial::default()), Outer::default());
    }

    #[test]
    fn test_nested_partial_becomes_present() {
        let outer = Outer::from_partial(OuterPartial {
            single: Some(InnerPartial::default()),
            ..Default::default()
        });
        assert_eq!(outer.single, Some(Inner::default()));
    }

    #[test]
    fn test_amino_omits_zero_and_keeps_lists() {
        let outer = Outer {
            id: 0,
            single: None,
            many: vec![],
            memo: vec![],
            flag: false,
            at: None,
        };
        let json = outer.to_amino_json().unwrap();
        assert_eq!(json, serde_json::json!({ "many": [] }));

        let outer = Outer {
            id: 12,
            memo: vec![0xff],
            flag: true,
            ..Default::default()
        };
        let json = outer.to_amino_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "12", "many": [], "memo": "/w==", "flag": true })
        );
    }

    #[test]
    fn test_amino_roundtrip_and_missing_keys() {
        let outer = Outer {
            id: u64::MAX,
            single: Some(Inner {
                denom: "stake".to_string(),
                amount: "10".to_string(),
            }),
            many: vec![Inner::default()],
            memo: b"hi".to_vec(),
            flag: true,
            at: Some(crate::Timestamp {
                seconds: 1,
                nanos: 0,
            }),
        };
        let msg = outer.to_amino_msg().unwrap();
        assert_eq!(msg.r#type, "test/Outer");
        assert_eq!(Outer::from_amino_msg(msg).unwrap(), outer);

        let sparse = Outer::from_amino_json(serde_json::json!({ "flag": true })).unwrap();
        assert_eq!(
            sparse,
            Outer {
                flag: true,
                ..Default::default()
            }
        );
        assert_eq!(Empty::from_amino_json(serde_json::Value::Null).unwrap(), Empty {});
    }

    #[test]
    fn test_amino_msg_type_checked() {
        let msg = Inner::default().to_amino_msg().unwrap();
        let err = Outer::from_amino_msg(msg).unwrap_err();
        assert!(matches!(err, crate::CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn test_type_url_bound() {
        assert_eq!(Outer::TYPE_URL, "/test.Outer");
        let any = Outer::default().to_any();
        assert_eq!(Outer::decode(any.value.as_slice()).unwrap(), Outer::default());
    }
}
