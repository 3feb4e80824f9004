//! Smoke test client for a running HTTP instance
//!
//! Performs `initialize`, `tools/list` and a `get_random_joke` call in sequence
//! and fails on the first step that does not produce a well-formed result.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/mcp";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum SmokeTestError {
    #[error("could not reach server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{step}: server returned status {status}")]
    UnexpectedStatus { step: &'static str, status: StatusCode },
    #[error("{step}: server returned error {error}")]
    Rpc { step: &'static str, error: Value },
    #[error("{step}: response is missing {field}")]
    MissingField {
        step: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeReport {
    pub server_name: String,
    pub server_version: String,
    pub tools: Vec<String>,
    pub joke: String,
}

pub struct SmokeTestClient {
    inner: Client,
    url: String,
}

impl SmokeTestClient {
    pub fn new(url: impl Into<String>) -> Result<Self, SmokeTestError> {
        let inner = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            inner,
            url: url.into(),
        })
    }

    pub async fn run(&self) -> Result<SmokeReport, SmokeTestError> {
        let initialize = self
            .call(
                "initialize",
                1,
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": { "roots": { "listChanged": false } },
                    "clientInfo": { "name": "test-client", "version": "1.0.0" }
                }),
            )
            .await?;
        let server_info = &initialize["serverInfo"];
        let server_name = server_info["name"]
            .as_str()
            .ok_or(SmokeTestError::MissingField {
                step: "initialize",
                field: "serverInfo.name",
            })?
            .to_string();
        let server_version = server_info["version"]
            .as_str()
            .unwrap_or("unknown")
            .to_string();

        let tools_list = self.call("tools/list", 2, json!({})).await?;
        let tools = tools_list["tools"]
            .as_array()
            .ok_or(SmokeTestError::MissingField {
                step: "tools/list",
                field: "tools",
            })?
            .iter()
            .filter_map(|tool| tool["name"].as_str().map(str::to_string))
            .collect();

        let tool_call = self
            .call(
                "tools/call",
                3,
                json!({ "name": "get_random_joke", "arguments": {} }),
            )
            .await?;
        let joke = tool_call["content"][0]["text"]
            .as_str()
            .ok_or(SmokeTestError::MissingField {
                step: "tools/call",
                field: "content[0].text",
            })?
            .to_string();

        Ok(SmokeReport {
            server_name,
            server_version,
            tools,
            joke,
        })
    }

    async fn call(
        &self,
        method: &'static str,
        id: i64,
        params: Value,
    ) -> Result<Value, SmokeTestError> {
        let response = self
            .inner
            .post(&self.url)
            .header(header::ACCEPT, "application/json")
            .json(&json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": method,
                "params": params
            }))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SmokeTestError::UnexpectedStatus {
                step: method,
                status,
            });
        }

        let mut body: Value = response.json().await?;
        if let Some(error) = body.get("error") {
            return Err(SmokeTestError::Rpc {
                step: method,
                error: error.clone(),
            });
        }

        match body.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(SmokeTestError::MissingField {
                step: method,
                field: "result",
            }),
        }
    }
}
