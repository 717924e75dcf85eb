//! CometBFT JSON-RPC `abci_query` transport.

use crate::config::ClientConfig;
use crate::{Result, Rpc, RpcError};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// JSON-RPC request envelope
#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC response envelope
#[derive(Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorBody>,
}

/// Error object of a JSON-RPC response
#[derive(Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

/// `result` of an `abci_query` call
#[derive(Deserialize)]
pub struct AbciQueryResult {
    pub response: AbciQueryResponse,
}

/// The application's answer inside an `abci_query` result
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct AbciQueryResponse {
    pub code: u32,
    pub log: String,
    pub codespace: String,
    /// Base64, absent when the value is empty
    pub value: Option<String>,
    pub height: String,
}

/// [`Rpc`] implementation that routes each call through `abci_query`
#[derive(Clone)]
pub struct AbciQueryRpc {
    endpoint: Url,
    height: Option<u64>,
    http_client: HttpClient,
}

impl AbciQueryRpc {
    /// Create a transport for `endpoint` with the given request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            height: None,
            http_client,
        })
    }

    /// Create a transport from a loaded client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let rpc = Self::new(
            &config.rpc_endpoint,
            Duration::from_secs(config.timeout_seconds),
        )?;
        Ok(match config.height {
            Some(height) => rpc.at_height(height),
            None => rpc,
        })
    }

    /// Query state at a fixed block height instead of the latest one
    pub fn at_height(mut self, height: u64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// ABCI query path for a gRPC method
    pub fn path(service: &str, method: &str) -> String {
        format!("/{service}/{method}")
    }

    /// Build the JSON-RPC body for one query
    pub fn build_request(&self, path: &str, data: &[u8]) -> RpcRequest {
        let mut params = serde_json::json!({
            "path": path,
            "data": hex::encode(data),
            "prove": false,
        });
        if let Some(height) = self.height {
            params["height"] = serde_json::Value::String(height.to_string());
        }

        RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: "abci_query".to_string(),
            params,
        }
    }

    /// Extract the value bytes from a JSON-RPC reply
    pub fn parse_response(response: RpcResponse<AbciQueryResult>) -> Result<Vec<u8>> {
        if let Some(error) = response.error {
            let message = match error.data {
                Some(data) if !data.is_empty() => format!("{}: {}", error.message, data),
                _ => error.message,
            };
            return Err(RpcError::JsonRpc {
                code: error.code,
                message,
            });
        }

        let result = response
            .result
            .ok_or_else(|| RpcError::InvalidResponse("missing result field".to_string()))?;
        let reply = result.response;

        if reply.code != 0 {
            return Err(RpcError::Abci {
                code: reply.code,
                log: reply.log,
            });
        }

        match reply.value {
            Some(value) if !value.is_empty() => base64::engine::general_purpose::STANDARD
                .decode(value)
                .map_err(|err| RpcError::InvalidResponse(format!("value is not base64: {err}"))),
            _ => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl Rpc for AbciQueryRpc {
    async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>> {
        let path = Self::path(service, method);
        debug!(endpoint = %self.endpoint, %path, height = ?self.height, "abci query");

        let request = self.build_request(&path, &data);
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let body: RpcResponse<AbciQueryResult> = response.json().await?;
        Self::parse_response(body)
    }
}
