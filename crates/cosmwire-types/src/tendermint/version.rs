//! `tendermint.version`

use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// Consensus captures the consensus rules for processing a block in the
/// blockchain, including all blockchain data structures and the rules of the
/// application's state transition machine.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Consensus {
    #[prost(uint64, tag = "1")]
    pub block: u64,
    #[prost(uint64, tag = "2")]
    pub app: u64,
}

cosmos_message!(Consensus => ConsensusAmino, ConsensusPartial;
    "/tendermint.version.Consensus", "/tendermint.version.Consensus" {
        block: uint64,
        app: uint64,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [Consensus]);
}
