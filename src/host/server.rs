use super::commands::{get_commands_list, handle_command};
use crate::commands::StudioState;
use crate::error::{Result, StudioError};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

const SERVER_NAME: &str = "course-studio-host";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line-delimited JSON front door to the studio commands.
///
/// Each request is `{"id", "method", "params"}`; each response carries the
/// same `id` and either `result` or `error`.
pub struct StudioHost {
    state: StudioState,
}

impl StudioHost {
    pub fn new(state: StudioState) -> Self {
        Self { state }
    }

    pub async fn handle_request(&self, request: &Value) -> Result<Value> {
        let method = request
            .get("method")
            .and_then(|m| m.as_str())
            .ok_or_else(|| StudioError::InvalidArgument("Missing method".to_string()))?;

        match method {
            "initialize" => Ok(self.handle_initialize()),
            "commands/list" => Ok(get_commands_list()),
            "commands/call" => self.handle_command_call(request).await,
            "ping" => Ok(serde_json::json!({})),
            _ => Err(StudioError::InvalidArgument(format!(
                "Unknown method: {}",
                method
            ))),
        }
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
            },
            "capabilities": {
                "commands": {},
            }
        })
    }

    async fn handle_command_call(&self, request: &Value) -> Result<Value> {
        let params = request
            .get("params")
            .ok_or_else(|| StudioError::InvalidArgument("Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|n| n.as_str())
            .ok_or_else(|| StudioError::InvalidArgument("Missing command name".to_string()))?;

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or(serde_json::json!({}));

        debug!("Command {}", name);
        handle_command(&self.state, name, arguments).await
    }

    /// Handles one raw request line and renders the response line.
    pub async fn handle_line(&self, line: &str) -> String {
        let request: Value = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                return serde_json::json!({
                    "id": Value::Null,
                    "error": format!("Invalid request: {}", e),
                })
                .to_string();
            }
        };
        let id = request.get("id").cloned().unwrap_or(Value::Null);

        let response = match self.handle_request(&request).await {
            Ok(result) => serde_json::json!({ "id": id, "result": result }),
            Err(e) => {
                warn!("Request failed: {}", e);
                serde_json::json!({ "id": id, "error": e })
            }
        };
        response.to_string()
    }

    /// Serves requests from `input` until it closes.
    pub async fn serve<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: tokio::io::AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(input).lines();
        info!("Studio host ready");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line).await;
            output.write_all(response.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        info!("Input closed, studio host stopping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::SimulatedUploader;
    use std::sync::Arc;
    use std::time::Duration;

    fn host() -> StudioHost {
        StudioHost::new(StudioState::with_uploader(
            "English",
            Arc::new(SimulatedUploader::new(Duration::from_millis(1), 50)),
        ))
    }

    #[tokio::test]
    async fn test_initialize_and_ping() {
        let host = host();
        let init = host
            .handle_request(&serde_json::json!({"method": "initialize"}))
            .await
            .unwrap();
        assert_eq!(init["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(init["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(init.get("protocolVersion").is_none());
        assert!(host
            .handle_request(&serde_json::json!({"method": "ping"}))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_line_carries_id_and_error() {
        let host = host();
        let response: Value =
            serde_json::from_str(&host.handle_line(r#"{"id":7,"method":"bogus"}"#).await).unwrap();
        assert_eq!(response["id"], 7);
        assert!(response["error"].as_str().unwrap().contains("Unknown method"));

        let response: Value = serde_json::from_str(&host.handle_line("{not json").await).unwrap();
        assert!(response["id"].is_null());
    }

    #[tokio::test]
    async fn test_serve_round_trip() {
        let host = host();
        let input = concat!(
            r#"{"id":1,"method":"commands/call","params":{"name":"curriculum.add_section"}}"#,
            "\n\n",
            r#"{"id":2,"method":"commands/call","params":{"name":"wizard.overview"}}"#,
            "\n"
        );
        let mut output = Vec::new();
        host.serve(input.as_bytes(), &mut output).await.unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0]["result"].is_string());
        assert_eq!(lines[1]["result"]["section_count"], 1);
        assert_eq!(lines[1]["result"]["active_panel"], "intended-learners");
    }
}
