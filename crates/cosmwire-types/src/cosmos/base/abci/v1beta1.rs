//! `cosmos.base.abci.v1beta1` transaction results

use crate::tendermint::abci::Event;
use cosmwire_codec::{cosmos_message, register_types, Any, TypeRegistry};

/// TxResponse defines a structure containing relevant tx data and metadata. The
/// tags are stringified and the log is JSON decoded.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxResponse {
    /// The block height
    #[prost(int64, tag = "1")]
    pub height: i64,
    /// The transaction hash.
    #[prost(string, tag = "2")]
    pub txhash: String,
    /// Namespace for the Code
    #[prost(string, tag = "3")]
    pub codespace: String,
    /// Response code.
    #[prost(uint32, tag = "4")]
    pub code: u32,
    /// Result bytes, if any.
    #[prost(string, tag = "5")]
    pub data: String,
    /// The output of the application's logger (raw string). May be
    /// non-deterministic.
    #[prost(string, tag = "6")]
    pub raw_log: String,
    /// The output of the application's logger (typed). May be non-deterministic.
    #[prost(message, repeated, tag = "7")]
    pub logs: Vec<AbciMessageLog>,
    /// Additional information. May be non-deterministic.
    #[prost(string, tag = "8")]
    pub info: String,
    /// Amount of gas requested for transaction.
    #[prost(int64, tag = "9")]
    pub gas_wanted: i64,
    /// Amount of gas consumed by transaction.
    #[prost(int64, tag = "10")]
    pub gas_used: i64,
    /// The request transaction bytes.
    #[prost(message, optional, tag = "11")]
    pub tx: Option<Any>,
    /// Time of the previous block. For heights > 1, it's the weighted median of
    /// the timestamps of the valid votes in the block.LastCommit. For height == 1,
    /// it's genesis time.
    #[prost(string, tag = "12")]
    pub timestamp: String,
    /// Events defines all the events emitted by processing a transaction.
    #[prost(message, repeated, tag = "13")]
    pub events: Vec<Event>,
}

/// ABCIMessageLog defines a structure containing an indexed tx ABCI message log.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbciMessageLog {
    #[prost(uint32, tag = "1")]
    pub msg_index: u32,
    #[prost(string, tag = "2")]
    pub log: String,
    /// Events contains a slice of Event objects that were emitted during some
    /// execution.
    #[prost(message, repeated, tag = "3")]
    pub events: Vec<StringEvent>,
}

/// StringEvent defines en Event object wrapper where all the attributes
/// contain key/value pairs that are strings instead of raw bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringEvent {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(message, repeated, tag = "2")]
    pub attributes: Vec<Attribute>,
}

/// Attribute defines an attribute wrapper where the key and value are
/// strings instead of raw bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

/// GasInfo defines tx execution gas context.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct GasInfo {
    /// GasWanted is the maximum units of work we allow this tx to perform.
    #[prost(uint64, tag = "1")]
    pub gas_wanted: u64,
    /// GasUsed is the amount of gas actually consumed.
    #[prost(uint64, tag = "2")]
    pub gas_used: u64,
}

/// Result is the union of ResponseFormat and ResponseCheckTx.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Result {
    /// Data is any data returned from message or handler execution. It MUST be
    /// length prefixed in order to separate data from multiple message executions.
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
    /// Log contains the log information from message or handler execution.
    #[prost(string, tag = "2")]
    pub log: String,
    /// Events contains a slice of Event objects that were emitted during message
    /// or handler execution.
    #[prost(message, repeated, tag = "3")]
    pub events: Vec<Event>,
    /// msg_responses contains the Msg handler responses type packed in Anys.
    #[prost(message, repeated, tag = "4")]
    pub msg_responses: Vec<Any>,
}

/// SimulationResponse defines the response generated when a transaction is
/// successfully simulated.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimulationResponse {
    #[prost(message, optional, tag = "1")]
    pub gas_info: Option<GasInfo>,
    #[prost(message, optional, tag = "2")]
    pub result: Option<Result>,
}

/// MsgData defines the data returned in a Result object during message
/// execution.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgData {
    #[prost(string, tag = "1")]
    pub msg_type: String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// TxMsgData defines a list of MsgData. A transaction will have a MsgData
/// object for each message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxMsgData {
    #[prost(message, repeated, tag = "1")]
    pub data: Vec<MsgData>,
    /// msg_responses contains the Msg handler responses packed into Anys.
    #[prost(message, repeated, tag = "2")]
    pub msg_responses: Vec<Any>,
}

/// SearchTxsResult defines a structure for querying txs pageable
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchTxsResult {
    /// Count of all txs
    #[prost(uint64, tag = "1")]
    pub total_count: u64,
    /// Count of txs in current page
    #[prost(uint64, tag = "2")]
    pub count: u64,
    /// Index of current page, start from 1
    #[prost(uint64, tag = "3")]
    pub page_number: u64,
    /// Count of total pages
    #[prost(uint64, tag = "4")]
    pub page_total: u64,
    /// Max count txs per page
    #[prost(uint64, tag = "5")]
    pub limit: u64,
    /// List of txs in current page
    #[prost(message, repeated, tag = "6")]
    pub txs: Vec<TxResponse>,
}

cosmos_message!(TxResponse => TxResponseAmino, TxResponsePartial;
    "/cosmos.base.abci.v1beta1.TxResponse", "cosmos-sdk/TxResponse" {
        height: int64,
        txhash: string,
        codespace: string,
        code: uint32,
        data: string,
        raw_log: string,
        logs: messages(AbciMessageLog),
        info: string,
        gas_wanted: int64,
        gas_used: int64,
        tx: any,
        timestamp: string,
        events: messages(Event),
    });

cosmos_message!(AbciMessageLog => AbciMessageLogAmino, AbciMessageLogPartial;
    "/cosmos.base.abci.v1beta1.ABCIMessageLog", "cosmos-sdk/ABCIMessageLog" {
        msg_index: uint32,
        log: string,
        events: messages(StringEvent),
    });

cosmos_message!(StringEvent => StringEventAmino, StringEventPartial;
    "/cosmos.base.abci.v1beta1.StringEvent", "cosmos-sdk/StringEvent" {
        r#type: string,
        attributes: messages(Attribute),
    });

cosmos_message!(Attribute => AttributeAmino, AttributePartial;
    "/cosmos.base.abci.v1beta1.Attribute", "cosmos-sdk/Attribute" {
        key: string,
        value: string,
    });

cosmos_message!(GasInfo => GasInfoAmino, GasInfoPartial;
    "/cosmos.base.abci.v1beta1.GasInfo", "cosmos-sdk/GasInfo" {
        gas_wanted: uint64,
        gas_used: uint64,
    });

cosmos_message!(Result => ResultAmino, ResultPartial;
    "/cosmos.base.abci.v1beta1.Result", "cosmos-sdk/Result" {
        data: bytes,
        log: string,
        events: messages(Event),
        msg_responses: anys,
    });

cosmos_message!(SimulationResponse => SimulationResponseAmino, SimulationResponsePartial;
    "/cosmos.base.abci.v1beta1.SimulationResponse", "cosmos-sdk/SimulationResponse" {
        gas_info: message(GasInfo),
        result: message(Result),
    });

cosmos_message!(MsgData => MsgDataAmino, MsgDataPartial;
    "/cosmos.base.abci.v1beta1.MsgData", "cosmos-sdk/MsgData" {
        msg_type: string,
        data: bytes,
    });

cosmos_message!(TxMsgData => TxMsgDataAmino, TxMsgDataPartial;
    "/cosmos.base.abci.v1beta1.TxMsgData", "cosmos-sdk/TxMsgData" {
        data: messages(MsgData),
        msg_responses: anys,
    });

cosmos_message!(SearchTxsResult => SearchTxsResultAmino, SearchTxsResultPartial;
    "/cosmos.base.abci.v1beta1.SearchTxsResult", "cosmos-sdk/SearchTxsResult" {
        total_count: uint64,
        count: uint64,
        page_number: uint64,
        page_total: uint64,
        limit: uint64,
        txs: messages(TxResponse),
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            TxResponse,
            AbciMessageLog,
            StringEvent,
            Attribute,
            GasInfo,
            Result,
            SimulationResponse,
            MsgData,
            TxMsgData,
            SearchTxsResult,
        ]
    );
}
