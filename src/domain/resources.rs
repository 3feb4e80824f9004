//! Model Context Protocol resources
//!
//! Exposes catalog statistics under the `joke://stats` URI.

use rust_mcp_sdk::schema::{
    ReadResourceContent, ReadResourceRequestParams, ReadResourceResult, Resource,
    TextResourceContents,
};
use serde_json::{json, Value};

use crate::domain::jokes::joke_stats;
use crate::mcp::rpc::{json_rpc_error, json_rpc_error_with_data, json_rpc_result};
use crate::AppState;

pub const JOKE_STATS_RESOURCE_URI: &str = "joke://stats";

pub fn build_resources_list() -> Vec<Resource> {
    vec![Resource {
        annotations: None,
        description: Some("Get statistics about the joke collection".to_string()),
        icons: vec![],
        meta: None,
        mime_type: Some("text/plain".to_string()),
        name: "joke_stats".to_string(),
        size: None,
        title: Some("Joke Statistics".to_string()),
        uri: JOKE_STATS_RESOURCE_URI.to_string(),
    }]
}

pub async fn handle_resources_read(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let resource_read: ReadResourceRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    match resource_read.uri.as_str() {
        JOKE_STATS_RESOURCE_URI => {
            let result = serde_json::to_value(ReadResourceResult {
                contents: vec![ReadResourceContent::from(TextResourceContents {
                    meta: None,
                    mime_type: Some("text/plain".to_string()),
                    text: joke_stats(&state.catalog),
                    uri: JOKE_STATS_RESOURCE_URI.to_string(),
                })],
                meta: None,
            })
            .expect("read joke stats result serialization");

            json_rpc_result(id, result)
        }
        _ => json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": "resource_not_found",
                "message": "unknown resource uri",
                "details": {
                    "uri": resource_read.uri,
                },
            })),
        ),
    }
}
