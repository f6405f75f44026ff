//! Node JSON-RPC account service.
//!
//! Talks to the wallet node's JSON-RPC 1.0 endpoint with basic auth:
//! `getnewaddress` for transparent and `z_getnewaddress` for shielded
//! addresses.

use async_trait::async_trait;
use cryp_types::AddressKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::IssuanceError;
use crate::service::AccountService;

/// Connection settings for the node RPC endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    pub url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:23205".to_string(),
            user: String::new(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Clone)]
pub struct RpcAccountService {
    http: reqwest::Client,
    config: RpcConfig,
}

impl RpcAccountService {
    pub fn new(config: RpcConfig) -> Result<Self, IssuanceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| IssuanceError::Http(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn method_for(kind: AddressKind) -> &'static str {
        match kind {
            AddressKind::Transparent => "getnewaddress",
            AddressKind::Shielded => "z_getnewaddress",
        }
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn call(&self, method: &str) -> Result<serde_json::Value, IssuanceError> {
        let body = serde_json::json!({
            "jsonrpc": "1.0",
            "id": "cryp-wallet",
            "method": method,
            "params": [],
        });

        let mut request = self.http.post(&self.config.url).json(&body);
        if !self.config.user.is_empty() {
            request = request.basic_auth(&self.config.user, Some(&self.config.password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| IssuanceError::Http(format!("request failed: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| IssuanceError::Http(format!("failed to read response: {e}")))?;

        // The node answers RPC-level failures with HTTP 500 and a JSON error body.
        let parsed: RpcResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(IssuanceError::Http(format!("node returned HTTP {status}")));
            }
            Err(e) => {
                return Err(IssuanceError::InvalidResponse(format!("invalid JSON: {e}")));
            }
        };

        if let Some(err) = parsed.error {
            return Err(IssuanceError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        if !status.is_success() {
            return Err(IssuanceError::Http(format!("node returned HTTP {status}")));
        }

        parsed
            .result
            .ok_or_else(|| IssuanceError::InvalidResponse("missing result".into()))
    }
}

#[async_trait]
impl AccountService for RpcAccountService {
    async fn issue(&self, kind: AddressKind) -> Result<String, IssuanceError> {
        let method = Self::method_for(kind);
        tracing::debug!(%kind, method, url = %self.config.url, "calling node");
        match self.call(method).await? {
            serde_json::Value::String(address) if !address.is_empty() => Ok(address),
            other => Err(IssuanceError::InvalidResponse(format!(
                "expected an address string, got {other}"
            ))),
        }
    }
}
