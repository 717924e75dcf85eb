//! `cosmos.crypto.secp256k1` keys

use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// PubKey defines a secp256k1 public key
/// Key is the compressed form of the pubkey. The first byte depends is a 0x02 byte
/// if the y-coordinate is the lexicographically largest of the two associated with
/// the x-coordinate. Otherwise the first byte is a 0x03.
/// This prefix is followed with the x-coordinate.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

/// PrivKey defines a secp256k1 private key.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PrivKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

cosmos_message!(PubKey => PubKeyAmino, PubKeyPartial;
    "/cosmos.crypto.secp256k1.PubKey", "tendermint/PubKeySecp256k1" {
        key: bytes,
    });

cosmos_message!(PrivKey => PrivKeyAmino, PrivKeyPartial;
    "/cosmos.crypto.secp256k1.PrivKey", "tendermint/PrivKeySecp256k1" {
        key: bytes,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [PubKey, PrivKey]);
}
