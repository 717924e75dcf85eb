//! `cosmos.crypto.ed25519` keys

use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// PubKey is an ed25519 public key for handling Tendermint keys in SDK.
/// It's needed for Any serialization and SDK compatibility.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

/// PrivKey defines a ed25519 private key.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PrivKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

cosmos_message!(PubKey => PubKeyAmino, PubKeyPartial;
    "/cosmos.crypto.ed25519.PubKey", "tendermint/PubKeyEd25519" {
        key: bytes,
    });

cosmos_message!(PrivKey => PrivKeyAmino, PrivKeyPartial;
    "/cosmos.crypto.ed25519.PrivKey", "tendermint/PrivKeyEd25519" {
        key: bytes,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [PubKey, PrivKey]);
}
