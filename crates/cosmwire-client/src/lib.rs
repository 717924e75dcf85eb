//! Query and service clients for Cosmos SDK nodes.
//!
//! Every client is a thin struct over a shared [`Rpc`] transport. A call
//! encodes the request message, hands the bytes to the transport under a
//! `service`/`method` pair and decodes the reply into the response type.
//! [`AbciQueryRpc`] is the transport that talks to a node's JSON-RPC
//! `abci_query` endpoint; tests substitute an in-memory one.

pub mod abci;
pub mod auth;
pub mod bank;
pub mod config;
pub mod gov;
pub mod staking;
pub mod tx;

pub use abci::AbciQueryRpc;
pub use config::{ClientConfig, ConfigError};

use async_trait::async_trait;
use cosmwire_codec::CodecError;
use cosmwire_errors::{codes, ErrorCode};
use prost::Message;
use thiserror::Error;
use tracing::trace;

/// Client error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// HTTP request error
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("json parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Request or response bytes could not be handled
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// JSON-RPC level error returned by the node
    #[error("rpc error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    /// The application answered with a non-zero code
    #[error("abci query failed with code {code}: {log}")]
    Abci { code: u32, log: String },

    /// Invalid response
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ErrorCode for RpcError {
    fn codespace(&self) -> &'static str {
        "client"
    }

    fn code(&self) -> u32 {
        match self {
            RpcError::Codec(err) => err.code(),
            RpcError::Abci { .. } => codes::ABCI,
            RpcError::Url(_) => codes::INVALID_ARGUMENT,
            RpcError::Http(_)
            | RpcError::Json(_)
            | RpcError::JsonRpc { .. }
            | RpcError::InvalidResponse(_) => codes::RPC,
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, RpcError>;

/// Byte-level transport used by every query client
#[async_trait]
pub trait Rpc: Send + Sync {
    /// Send encoded request bytes to `service`/`method` and return the raw reply
    async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>>;
}

/// Encode `request`, send it over `rpc` and decode the reply as `Res`
pub async fn query<Req, Res>(rpc: &dyn Rpc, service: &str, method: &str, request: &Req) -> Result<Res>
where
    Req: Message,
    Res: Message + Default,
{
    let data = request.encode_to_vec();
    trace!(service, method, len = data.len(), "sending query");

    let reply = rpc.request(service, method, data).await?;
    trace!(service, method, len = reply.len(), "received reply");

    Res::decode(reply.as_slice()).map_err(|err| RpcError::Codec(CodecError::from(err)))
}

/// Generates one async method per RPC on a client holding `rpc: Arc<dyn Rpc>`
macro_rules! rpc_methods {
    ($service:expr; $( $(#[$meta:meta])* $name:ident => $method:literal ($req:ty) -> $res:ty; )*) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self, request: &$req) -> $crate::Result<$res> {
                $crate::query(self.rpc.as_ref(), $service, $method, request).await
            }
        )*
    };
}

pub(crate) use rpc_methods;
