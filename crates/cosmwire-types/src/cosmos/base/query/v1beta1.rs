//! `cosmos.base.query.v1beta1` pagination

use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// PageRequest is to be embedded in gRPC request messages for efficient
/// pagination.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PageRequest {
    /// key is a value returned in PageResponse.next_key to begin
    /// querying the next page most efficiently. Only one of offset or key
    /// should be set.
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    /// offset is a numeric offset that can be used when key is unavailable.
    #[prost(uint64, tag = "2")]
    pub offset: u64,
    /// limit is the total number of results to be returned in the result page.
    #[prost(uint64, tag = "3")]
    pub limit: u64,
    /// count_total is set to true to indicate that the result set should
    /// include a count of the total number of items available for pagination.
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    /// reverse is set to true if results are to be returned in the descending
    /// order.
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

/// PageResponse is to be embedded in gRPC response messages where the
/// corresponding request message has used PageRequest.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PageResponse {
    /// next_key is the key to be passed to PageRequest.key to
    /// query the next page most efficiently. It will be empty if
    /// there are no more results.
    #[prost(bytes = "vec", tag = "1")]
    pub next_key: Vec<u8>,
    /// total is total number of results available if PageRequest.count_total
    /// was set, its value is undefined otherwise
    #[prost(uint64, tag = "2")]
    pub total: u64,
}

cosmos_message!(PageRequest => PageRequestAmino, PageRequestPartial;
    "/cosmos.base.query.v1beta1.PageRequest", "cosmos-sdk/PageRequest" {
        key: bytes,
        offset: uint64,
        limit: uint64,
        count_total: bool,
        reverse: bool,
    });

cosmos_message!(PageResponse => PageResponseAmino, PageResponsePartial;
    "/cosmos.base.query.v1beta1.PageResponse", "cosmos-sdk/PageResponse" {
        next_key: bytes,
        total: uint64,
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(registry, [PageRequest, PageResponse]);
}
