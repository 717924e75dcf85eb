use super::tx::Tx;
use crate::cosmos::base::abci::v1beta1::{GasInfo, Result as AbciResult, TxResponse};
use crate::cosmos::base::query::v1beta1::{PageRequest, PageResponse};
use crate::tendermint::types::{Block, BlockId};
use cosmwire_codec::amino::enum_from_json;
use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// OrderBy defines the sorting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderBy {
    /// ORDER_BY_UNSPECIFIED specifies an unknown sorting order. OrderBy defaults
    /// to ASC in this case.
    Unspecified = 0,
    /// ORDER_BY_ASC defines ascending order
    Asc = 1,
    /// ORDER_BY_DESC defines descending order
    Desc = 2,
    Unrecognized = -1,
}

impl OrderBy {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            OrderBy::Unspecified => "ORDER_BY_UNSPECIFIED",
            OrderBy::Asc => "ORDER_BY_ASC",
            OrderBy::Desc => "ORDER_BY_DESC",
            OrderBy::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "ORDER_BY_UNSPECIFIED" => Some(Self::Unspecified),
            "ORDER_BY_ASC" => Some(Self::Asc),
            "ORDER_BY_DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

/// BroadcastMode specifies the broadcast mode for the TxService.Broadcast RPC
/// method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BroadcastMode {
    /// zero-value for mode ordering
    Unspecified = 0,
    /// DEPRECATED: use BROADCAST_MODE_SYNC instead,
    /// BROADCAST_MODE_BLOCK is not supported by the SDK from v0.47.x onwards.
    Block = 1,
    /// BROADCAST_MODE_SYNC defines a tx broadcasting mode where the client waits
    /// for a CheckTx execution response only.
    Sync = 2,
    /// BROADCAST_MODE_ASYNC defines a tx broadcasting mode where the client
    /// returns immediately.
    Async = 3,
    Unrecognized = -1,
}

impl BroadcastMode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BroadcastMode::Unspecified => "BROADCAST_MODE_UNSPECIFIED",
            BroadcastMode::Block => "BROADCAST_MODE_BLOCK",
            BroadcastMode::Sync => "BROADCAST_MODE_SYNC",
            BroadcastMode::Async => "BROADCAST_MODE_ASYNC",
            BroadcastMode::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "BROADCAST_MODE_UNSPECIFIED" => Some(Self::Unspecified),
            "BROADCAST_MODE_BLOCK" => Some(Self::Block),
            "BROADCAST_MODE_SYNC" => Some(Self::Sync),
            "BROADCAST_MODE_ASYNC" => Some(Self::Async),
            _ => None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

/// GetTxsEventRequest is the request type for the Service.TxsByEvents
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxsEventRequest {
    /// events is the list of transaction event type.
    /// Deprecated post v0.47.x: use query instead, which should contain a valid
    /// events query.
    #[prost(string, repeated, tag = "1")]
    pub events: Vec<String>,
    /// pagination defines a pagination for the request.
    /// Deprecated post v0.46.x: use page and limit instead.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
    #[prost(enumeration = "OrderBy", tag = "3")]
    pub order_by: i32,
    /// page is the page number to query, starts at 1. If not provided, will
    /// default to first page.
    #[prost(uint64, tag = "4")]
    pub page: u64,
    /// limit is the total number of results to be returned in the result page.
    /// If left empty it will default to a value to be set by each app.
    #[prost(uint64, tag = "5")]
    pub limit: u64,
    /// query defines the transaction event query that is proxied to Tendermint's
    /// TxSearch RPC method. The query must be valid.
    #[prost(string, tag = "6")]
    pub query: String,
}

/// GetTxsEventResponse is the response type for the Service.TxsByEvents
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxsEventResponse {
    /// txs is the list of queried transactions.
    #[prost(message, repeated, tag = "1")]
    pub txs: Vec<Tx>,
    /// tx_responses is the list of queried TxResponses.
    #[prost(message, repeated, tag = "2")]
    pub tx_responses: Vec<TxResponse>,
    /// pagination defines a pagination for the response.
    /// Deprecated post v0.46.x: use total instead.
    #[prost(message, optional, tag = "3")]
    pub pagination: Option<PageResponse>,
    /// total is total number of results available
    #[prost(uint64, tag = "4")]
    pub total: u64,
}

/// BroadcastTxRequest is the request type for the Service.BroadcastTxRequest
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BroadcastTxRequest {
    /// tx_bytes is the raw transaction.
    #[prost(bytes = "vec", tag = "1")]
    pub tx_bytes: Vec<u8>,
    #[prost(enumeration = "BroadcastMode", tag = "2")]
    pub mode: i32,
}

/// BroadcastTxResponse is the response type for the
/// Service.BroadcastTx method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BroadcastTxResponse {
    /// tx_response is the queried TxResponses.
    #[prost(message, optional, tag = "1")]
    pub tx_response: Option<TxResponse>,
}

/// SimulateRequest is the request type for the Service.Simulate
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimulateRequest {
    /// tx is the transaction to simulate.
    /// Deprecated. Send raw tx bytes instead.
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
    /// tx_bytes is the raw transaction.
    #[prost(bytes = "vec", tag = "2")]
    pub tx_bytes: Vec<u8>,
}

/// SimulateResponse is the response type for the
/// Service.SimulateRPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimulateResponse {
    /// gas_info is the information about gas used in the simulation.
    #[prost(message, optional, tag = "1")]
    pub gas_info: Option<GasInfo>,
    /// result is the result of the simulation.
    #[prost(message, optional, tag = "2")]
    pub result: Option<AbciResult>,
}

/// GetTxRequest is the request type for the Service.GetTx
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxRequest {
    /// hash is the tx hash to query, encoded as a hex string.
    #[prost(string, tag = "1")]
    pub hash: String,
}

/// GetTxResponse is the response type for the Service.GetTx method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxResponse {
    /// tx is the queried transaction.
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
    /// tx_response is the queried TxResponses.
    #[prost(message, optional, tag = "2")]
    pub tx_response: Option<TxResponse>,
}

/// TxDecodeRequest is the request type for the Service.TxDecode
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxDecodeRequest {
    /// tx_bytes is the raw transaction.
    #[prost(bytes = "vec", tag = "1")]
    pub tx_bytes: Vec<u8>,
}

/// TxDecodeResponse is the response type for the
/// Service.TxDecode method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxDecodeResponse {
    /// tx is the decoded transaction.
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
}

/// TxEncodeRequest is the request type for the Service.TxEncode
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxEncodeRequest {
    /// tx is the transaction to encode.
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
}

/// TxEncodeResponse is the response type for the
/// Service.TxEncode method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxEncodeResponse {
    /// tx_bytes is the encoded transaction bytes.
    #[prost(bytes = "vec", tag = "1")]
    pub tx_bytes: Vec<u8>,
}

/// TxEncodeAminoRequest is the request type for the Service.TxEncodeAmino
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxEncodeAminoRequest {
    #[prost(string, tag = "1")]
    pub amino_json: String,
}

/// TxEncodeAminoResponse is the response type for the Service.TxEncodeAmino
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxEncodeAminoResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub amino_binary: Vec<u8>,
}

/// TxDecodeAminoRequest is the request type for the Service.TxDecodeAmino
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxDecodeAminoRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub amino_binary: Vec<u8>,
}

/// TxDecodeAminoResponse is the response type for the Service.TxDecodeAmino
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxDecodeAminoResponse {
    #[prost(string, tag = "1")]
    pub amino_json: String,
}

/// GetBlockWithTxsRequest is the request type for the Service.GetBlockWithTxs
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBlockWithTxsRequest {
    /// height is the height of the block to query.
    #[prost(int64, tag = "1")]
    pub height: i64,
    /// pagination defines a pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// GetBlockWithTxsResponse is the response type for the Service.GetBlockWithTxs
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBlockWithTxsResponse {
    /// txs are the transactions in the block.
    #[prost(message, repeated, tag = "1")]
    pub txs: Vec<Tx>,
    #[prost(message, optional, tag = "2")]
    pub block_id: Option<BlockId>,
    #[prost(message, optional, tag = "3")]
    pub block: Option<Block>,
    /// pagination defines a pagination for the response.
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageResponse>,
}

impl BroadcastTxRequest {
    pub fn new(tx_bytes: Vec<u8>, mode: BroadcastMode) -> Self {
        Self {
            tx_bytes,
            mode: mode as i32,
        }
    }
}

cosmos_message!(GetTxsEventRequest => GetTxsEventRequestAmino, GetTxsEventRequestPartial;
    "/cosmos.tx.v1beta1.GetTxsEventRequest", "cosmos-sdk/GetTxsEventRequest" {
        events: strings,
        pagination: message(PageRequest),
        order_by: enumeration(OrderBy),
        page: uint64,
        limit: uint64,
        query: string,
    });

cosmos_message!(GetTxsEventResponse => GetTxsEventResponseAmino, GetTxsEventResponsePartial;
    "/cosmos.tx.v1beta1.GetTxsEventResponse", "cosmos-sdk/GetTxsEventResponse" {
        txs: messages(Tx),
        tx_responses: messages(TxResponse),
        pagination: message(PageResponse),
        total: uint64,
    });

cosmos_message!(BroadcastTxRequest => BroadcastTxRequestAmino, BroadcastTxRequestPartial;
    "/cosmos.tx.v1beta1.BroadcastTxRequest", "cosmos-sdk/BroadcastTxRequest" {
        tx_bytes: bytes,
        mode: enumeration(BroadcastMode),
    });

cosmos_message!(BroadcastTxResponse => BroadcastTxResponseAmino, BroadcastTxResponsePartial;
    "/cosmos.tx.v1beta1.BroadcastTxResponse", "cosmos-sdk/BroadcastTxResponse" {
        tx_response: message(TxResponse),
    });

cosmos_message!(SimulateRequest => SimulateRequestAmino, SimulateRequestPartial;
    "/cosmos.tx.v1beta1.SimulateRequest", "cosmos-sdk/SimulateRequest" {
        tx: message(Tx),
        tx_bytes: bytes,
    });

cosmos_message!(SimulateResponse => SimulateResponseAmino, SimulateResponsePartial;
    "/cosmos.tx.v1beta1.SimulateResponse", "cosmos-sdk/SimulateResponse" {
        gas_info: message(GasInfo),
        result: message(AbciResult),
    });

cosmos_message!(GetTxRequest => GetTxRequestAmino, GetTxRequestPartial;
    "/cosmos.tx.v1beta1.GetTxRequest", "cosmos-sdk/GetTxRequest" {
        hash: string,
    });

cosmos_message!(GetTxResponse => GetTxResponseAmino, GetTxResponsePartial;
    "/cosmos.tx.v1beta1.GetTxResponse", "cosmos-sdk/GetTxResponse" {
        tx: message(Tx),
        tx_response: message(TxResponse),
    });

cosmos_message!(TxDecodeRequest => TxDecodeRequestAmino, TxDecodeRequestPartial;
    "/cosmos.tx.v1beta1.TxDecodeRequest", "cosmos-sdk/TxDecodeRequest" {
        tx_bytes: bytes,
    });

cosmos_message!(TxDecodeResponse => TxDecodeResponseAmino, TxDecodeResponsePartial;
    "/cosmos.tx.v1beta1.TxDecodeResponse", "cosmos-sdk/TxDecodeResponse" {
        tx: message(Tx),
    });

cosmos_message!(TxEncodeRequest => TxEncodeRequestAmino, TxEncodeRequestPartial;
    "/cosmos.tx.v1beta1.TxEncodeRequest", "cosmos-sdk/TxEncodeRequest" {
        tx: message(Tx),
    });

cosmos_message!(TxEncodeResponse => TxEncodeResponseAmino, TxEncodeResponsePartial;
    "/cosmos.tx.v1beta1.TxEncodeResponse", "cosmos-sdk/TxEncodeResponse" {
        tx_bytes: bytes,
    });

cosmos_message!(TxEncodeAminoRequest => TxEncodeAminoRequestAmino, TxEncodeAminoRequestPartial;
    "/cosmos.tx.v1beta1.TxEncodeAminoRequest", "cosmos-sdk/TxEncodeAminoRequest" {
        amino_json: string,
    });

cosmos_message!(TxEncodeAminoResponse => TxEncodeAminoResponseAmino, TxEncodeAminoResponsePartial;
    "/cosmos.tx.v1beta1.TxEncodeAminoResponse", "cosmos-sdk/TxEncodeAminoResponse" {
        amino_binary: bytes,
    });

cosmos_message!(TxDecodeAminoRequest => TxDecodeAminoRequestAmino, TxDecodeAminoRequestPartial;
    "/cosmos.tx.v1beta1.TxDecodeAminoRequest", "cosmos-sdk/TxDecodeAminoRequest" {
        amino_binary: bytes,
    });

cosmos_message!(TxDecodeAminoResponse => TxDecodeAminoResponseAmino, TxDecodeAminoResponsePartial;
    "/cosmos.tx.v1beta1.TxDecodeAminoResponse", "cosmos-sdk/TxDecodeAminoResponse" {
        amino_json: string,
    });

cosmos_message!(GetBlockWithTxsRequest => GetBlockWithTxsRequestAmino, GetBlockWithTxsRequestPartial;
    "/cosmos.tx.v1beta1.GetBlockWithTxsRequest", "cosmos-sdk/GetBlockWithTxsRequest" {
        height: int64,
        pagination: message(PageRequest),
    });

cosmos_message!(GetBlockWithTxsResponse => GetBlockWithTxsResponseAmino, GetBlockWithTxsResponsePartial;
    "/cosmos.tx.v1beta1.GetBlockWithTxsResponse", "cosmos-sdk/GetBlockWithTxsResponse" {
        txs: messages(Tx),
        block_id: message(BlockId),
        block: message(Block),
        pagination: message(PageResponse),
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            GetTxsEventRequest,
            GetTxsEventResponse,
            BroadcastTxRequest,
            BroadcastTxResponse,
            SimulateRequest,
            SimulateResponse,
            GetTxRequest,
            GetTxResponse,
            TxDecodeRequest,
            TxDecodeResponse,
            TxEncodeRequest,
            TxEncodeResponse,
            TxEncodeAminoRequest,
            TxEncodeAminoResponse,
            TxDecodeAminoRequest,
            TxDecodeAminoResponse,
            GetBlockWithTxsRequest,
            GetBlockWithTxsResponse,
        ]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::AminoConvert;
    use prost::Message;

    #[test]
    fn test_broadcast_mode_names() {
        assert_eq!(BroadcastMode::Sync.as_str_name(), "BROADCAST_MODE_SYNC");
        assert_eq!(
            BroadcastMode::from_json(&serde_json::json!("BROADCAST_MODE_ASYNC")),
            BroadcastMode::Async
        );
        assert_eq!(
            BroadcastMode::from_json(&serde_json::json!(9)),
            BroadcastMode::Unrecognized
        );
        assert_eq!(OrderBy::from_str_name("ORDER_BY_DESC"), Some(OrderBy::Desc));
    }

    #[test]
    fn test_broadcast_request_wire() {
        let req = BroadcastTxRequest::new(vec![0xaa], BroadcastMode::Sync);
        assert_eq!(req.encode_to_vec(), vec![0x0a, 0x01, 0xaa, 0x10, 0x02]);

        let json = req.to_amino_json().unwrap();
        assert_eq!(json, serde_json::json!({ "tx_bytes": "qg==", "mode": 2 }));
        assert_eq!(BroadcastTxRequest::from_amino_json(json).unwrap(), req);
    }

    #[test]
    fn test_get_txs_event_defaults() {
        let req = GetTxsEventRequest::decode(&[][..]).unwrap();
        assert_eq!(req.order_by(), OrderBy::Unspecified);
        assert!(req.events.is_empty());
        assert_eq!(req.pagination, None);
    }

    #[test]
    fn test_get_block_with_txs_amino() {
        let req = GetBlockWithTxsRequest {
            height: 42,
            pagination: None,
        };
        assert_eq!(req.encode_to_vec(), vec![0x08, 42]);
        assert_eq!(
            req.to_amino_json().unwrap(),
            serde_json::json!({ "height": "42" })
        );

        let res = GetBlockWithTxsResponse {
            block_id: Some(BlockId {
                hash: vec![0x01],
                part_set_header: None,
            }),
            ..Default::default()
        };
        let back = GetBlockWithTxsResponse::decode(res.encode_to_vec().as_slice()).unwrap();
        assert_eq!(back, res);
        assert_eq!(res.to_amino_json().unwrap()["block_id"]["hash"], "AQ==");
    }
}
