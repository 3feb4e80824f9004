//! Joke tools exposed via Model Context Protocol
//!
//! Provides `get_random_joke`, `get_joke_by_category`, `get_multiple_jokes` and
//! `list_joke_categories`, all backed by the shared catalog and random source.

use rust_mcp_sdk::{
    macros,
    schema::{CallToolRequestParams, CallToolResult, ContentBlock, TextContent, Tool},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{
    catalog::Category,
    jokes::{joke_by_category, list_categories, multiple_jokes, random_joke},
    utils::{normalize_category, normalize_joke_count},
};
use crate::mcp::rpc::{
    app_error_to_json_rpc, json_rpc_error, json_rpc_error_with_data, json_rpc_result,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct CountParams {
    pub count: i64,
}

#[macros::mcp_tool(
    name = "get_random_joke",
    description = "Get a random joke from all categories"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetRandomJokeTool {}

#[macros::mcp_tool(
    name = "get_joke_by_category",
    description = "Get a random joke from a specific category"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetJokeByCategoryTool {
    /// The category of joke to retrieve (programming, dad, or knock_knock)
    pub category: String,
}

#[macros::mcp_tool(
    name = "get_multiple_jokes",
    description = "Get multiple random jokes at once"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetMultipleJokesTool {
    /// Number of jokes to retrieve (1-10)
    pub count: i64,
}

#[macros::mcp_tool(
    name = "list_joke_categories",
    description = "List all available joke categories"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct ListJokeCategoriesTool {}

pub fn build_tools_list() -> Vec<Tool> {
    vec![
        GetRandomJokeTool::tool(),
        with_category_enum(GetJokeByCategoryTool::tool()),
        GetMultipleJokesTool::tool(),
        ListJokeCategoriesTool::tool(),
    ]
}

/// Restricts the `category` argument schema to the known category ids.
fn with_category_enum(tool: Tool) -> Tool {
    let mut value = serde_json::to_value(tool).expect("tool serialization");
    if let Some(category) = value
        .pointer_mut("/inputSchema/properties/category")
        .and_then(Value::as_object_mut)
    {
        let ids = Category::ALL.into_iter().map(Category::id).collect::<Vec<_>>();
        category.insert("enum".to_string(), json!(ids));
    }
    serde_json::from_value(value).expect("tool deserialization")
}

pub async fn handle_tools_call(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let tool_call: CallToolRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };
    let arguments = json!(tool_call.arguments.unwrap_or_default());

    match tool_call.name.as_str() {
        "get_random_joke" => text_result(id, random_joke(&state.catalog, state.random.as_ref())),
        "get_joke_by_category" => {
            let params: CategoryParams = match serde_json::from_value(arguments) {
                Ok(value) => value,
                Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
            };

            match normalize_category(&params.category) {
                Ok(category) => text_result(
                    id,
                    joke_by_category(&state.catalog, state.random.as_ref(), category),
                ),
                Err(err) => app_error_to_json_rpc(id, err),
            }
        }
        "get_multiple_jokes" => {
            let params: CountParams = match serde_json::from_value(arguments) {
                Ok(value) => value,
                Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
            };

            match normalize_joke_count(params.count) {
                Ok(count) => text_result(
                    id,
                    multiple_jokes(&state.catalog, state.random.as_ref(), count),
                ),
                Err(err) => app_error_to_json_rpc(id, err),
            }
        }
        "list_joke_categories" => text_result(id, list_categories()),
        _ => json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": "tool_not_found",
                "message": "unknown tool name",
                "details": {
                    "name": tool_call.name,
                },
            })),
        ),
    }
}

fn text_result(id: Option<Value>, text: String) -> Value {
    json_rpc_result(
        id,
        serde_json::to_value(CallToolResult {
            content: vec![ContentBlock::from(TextContent::new(text, None, None))],
            is_error: None,
            meta: None,
            structured_content: None,
        })
        .expect("tool result serialization"),
    )
}
