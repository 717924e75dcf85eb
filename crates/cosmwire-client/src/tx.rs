//! Client for `cosmos.tx.v1beta1.Service`.

use crate::{rpc_methods, Rpc};
use cosmwire_types::cosmos::tx::v1beta1::*;
use std::sync::Arc;

const SERVICE: &str = "cosmos.tx.v1beta1.Service";

/// Transaction service client
#[derive(Clone)]
pub struct ServiceClient {
    rpc: Arc<dyn Rpc>,
}

impl ServiceClient {
    pub fn new(rpc: Arc<dyn Rpc>) -> Self {
        Self { rpc }
    }

    rpc_methods! { SERVICE;
        /// Run a transaction without committing it, reporting gas used
        simulate => "Simulate" (SimulateRequest) -> SimulateResponse;
        get_tx => "GetTx" (GetTxRequest) -> GetTxResponse;
        broadcast_tx => "BroadcastTx" (BroadcastTxRequest) -> BroadcastTxResponse;
        get_txs_event => "GetTxsEvent" (GetTxsEventRequest) -> GetTxsEventResponse;
        /// Block at a height with its transactions decoded
        get_block_with_txs => "GetBlockWithTxs" (GetBlockWithTxsRequest) -> GetBlockWithTxsResponse;
        tx_decode => "TxDecode" (TxDecodeRequest) -> TxDecodeResponse;
        tx_encode => "TxEncode" (TxEncodeRequest) -> TxEncodeResponse;
        /// Amino JSON to legacy amino binary, done by the node
        tx_encode_amino => "TxEncodeAmino" (TxEncodeAminoRequest) -> TxEncodeAminoResponse;
        tx_decode_amino => "TxDecodeAmino" (TxDecodeAminoRequest) -> TxDecodeAminoResponse;
    }
}
