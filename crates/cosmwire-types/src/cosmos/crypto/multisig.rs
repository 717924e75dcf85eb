//! `cosmos.crypto.multisig` threshold keys

pub mod v1beta1;

use cosmwire_codec::{cosmos_message, register_types, Any, TypeRegistry};

/// LegacyAminoPubKey specifies a public key type
/// which nests multiple public keys and a threshold,
/// it uses legacy amino address rules.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegacyAminoPubKey {
    #[prost(uint32, tag = "1")]
    pub threshold: u32,
    #[prost(message, repeated, tag = "2")]
    pub public_keys: Vec<Any>,
}

cosmos_message!(LegacyAminoPubKey => LegacyAminoPubKeyAmino, LegacyAminoPubKeyPartial;
    "/cosmos.crypto.multisig.LegacyAminoPubKey", "tendermint/PubKeyMultisigThreshold" {
        threshold: uint32,
        public_keys: anys,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [LegacyAminoPubKey]);
    v1beta1::register(registry);
}
