//! `tendermint.abci` events attached to transaction results

use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// Event allows application developers to attach additional information to
/// ResponseFinalizeBlock and ResponseCheckTx.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(message, repeated, tag = "2")]
    pub attributes: Vec<EventAttribute>,
}

/// EventAttribute is a single key-value pair, associated with an event.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventAttribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
    /// nondeterministic
    #[prost(bool, tag = "3")]
    pub index: bool,
}

cosmos_message!(Event => EventAmino, EventPartial;
    "/tendermint.abci.Event", "/tendermint.abci.Event" {
        r#type: string,
        attributes: messages(EventAttribute),
    });

cosmos_message!(EventAttribute => EventAttributeAmino, EventAttributePartial;
    "/tendermint.abci.EventAttribute", "/tendermint.abci.EventAttribute" {
        key: string,
        value: string,
        index: bool,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [Event, EventAttribute]);
}
