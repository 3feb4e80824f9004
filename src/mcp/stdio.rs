//! Stdio transport for the Model Context Protocol
//!
//! Reads newline-delimited JSON-RPC messages from stdin and writes one response
//! line per answered message to stdout. Runs until the input stream closes.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::mcp::{rpc::json_rpc_error, server::handle_json_rpc_payload};
use crate::AppState;

pub async fn serve_stdio(state: AppState) -> std::io::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    serve_lines(&state, reader, writer).await
}

pub async fn serve_lines<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Ok(payload) => handle_json_rpc_payload(state, payload).await,
            Err(err) => {
                debug!(error = %err, "stdio frame is not valid json");
                Some(json_rpc_error(None, -32700, "Parse error"))
            }
        };

        if let Some(response) = response {
            let mut frame = response.to_string();
            frame.push('\n');
            writer.write_all(frame.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    info!("stdin closed, stopping stdio transport");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::Value;

    use super::serve_lines;
    use crate::domain::{catalog::Catalog, random::SeededRandom};
    use crate::AppState;

    async fn run(input: &str) -> Vec<Value> {
        let state = AppState::new(Catalog::builtin(), Arc::new(SeededRandom::new(5)));
        let mut output = Vec::new();
        serve_lines(&state, input.as_bytes(), &mut output)
            .await
            .expect("stdio session");

        String::from_utf8(output)
            .expect("utf8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json response line"))
            .collect()
    }

    #[tokio::test]
    async fn answers_requests_and_skips_notifications() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"list_joke_categories","arguments":{}}}"#,
            "\n",
        );

        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(responses[1]["id"], 2);
        assert!(responses[1]["result"]["content"][0]["text"]
            .as_str()
            .expect("text content")
            .starts_with("Available joke categories:"));
    }

    #[tokio::test]
    async fn invalid_json_line_yields_parse_error() {
        let responses = run("{not json\n").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn invalid_category_is_reported_not_fatal() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"get_joke_by_category","arguments":{"category":"puns"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#,
            "\n",
        );

        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["data"]["code"], "invalid_category");
        assert_eq!(responses[1]["id"], 8);
        assert!(responses[1]["result"].is_object());
    }
}
