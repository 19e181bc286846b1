//! unitref MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout. Logs go to stderr.
//!
//! Tools:
//! - list_categories: Measurement categories, optionally by group
//! - list_units: Units of a category
//! - convert: Convert a value between two units
//! - format_number: Format a number like a conversion result
//! - conversion_table: Reference table for a pair of units
//! - conversion_factor: Factor and reverse factor for a pair of units
//! - common_conversions: Frequently requested conversions
//! - render_page: Render a site page to markdown

mod tools;

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use unitref_core::UnitrefError;
use unitref_site::{Site, SiteConfig};
use unitref_units::CATALOG;
use tools::ToolError;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unitref";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_ORIGIN: &str = "https://unitref.example";

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

/// Site origin from the environment
fn site_origin() -> String {
    env::var("UNITREF_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

impl McpResponse {
    fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

impl From<UnitrefError> for McpError {
    fn from(err: UnitrefError) -> Self {
        McpError {
            code: INVALID_PARAMS,
            message: err.to_string(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(_) => McpError::invalid_params(err.to_string()),
            ToolError::Failed(e) => e.into(),
        }
    }
}

fn main() {
    init_logging();

    let config = SiteConfig::new(site_origin());
    let site = match Site::new(config) {
        Ok(site) => site,
        Err(e) => {
            error!(error = %e, "failed to initialize site");
            std::process::exit(1);
        }
    };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "unitref MCP server started");
    info!(origin = site.config().origin(), "site origin");
    info!(
        categories = CATALOG.categories().len(),
        units = CATALOG.unit_count(),
        "catalog loaded"
    );
    debug!(
        stdin_tty = io::stdin().is_terminal(),
        stdout_tty = io::stdout().is_terminal(),
        "stdio"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("server ready, waiting for requests");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let Some(response) = handle_line(&site, line) else {
                    continue;
                };
                if let Err(e) = write_response(&response) {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("server shutting down");
}

/// Handle one input line. Notifications produce no response.
fn handle_line(site: &Site, line: &str) -> Option<McpResponse> {
    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "error parsing request");
            return Some(McpResponse::failure(None, McpError {
                code: PARSE_ERROR,
                message: format!("Parse error: {}", e),
                data: None,
            }));
        }
    };

    debug!(method = %request.method, "processing");
    let response = handle_request(site, &request);

    // Notifications (no id) never receive a response
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()
}

fn handle_request(site: &Site, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => Ok(tools::definitions()),
        "tools/call" => handle_tool_call(site, &request.params),

        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse::success(request.id.clone(), r),
        Err(e) => McpResponse::failure(request.id.clone(), e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion reference: catalog, conversions and site pages"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "unitref converts values between units of 14 measurement categories. Use list_categories and list_units to discover ids; units may also be given by symbol. Show formatted results exactly as returned."
    }))
}

fn handle_tool_call(site: &Site, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    tools::call(site, name, &args).map_err(|e| {
        warn!(tool = name, error = %e, "tool call failed");
        McpError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::new(SiteConfig::new(DEFAULT_ORIGIN)).unwrap()
    }

    fn respond(line: &str) -> Option<JsonValue> {
        handle_line(&site(), line).map(|r| serde_json::to_value(&r).unwrap())
    }

    #[test]
    fn test_initialize_echoes_protocol() {
        let response = respond(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test"}}}"#,
        )
        .unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "unitref");
    }

    #[test]
    fn test_notification_gets_no_response() {
        assert!(respond(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).is_none());
    }

    #[test]
    fn test_parse_error() {
        let response = respond("{not json").unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert!(response.get("id").is_none());
    }

    #[test]
    fn test_unknown_method() {
        let response = respond(r#"{"jsonrpc":"2.0","id":"a","method":"resources/list"}"#).unwrap();
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(response["id"], "a");
    }

    #[test]
    fn test_tools_list() {
        let response = respond(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#).unwrap();
        let names: Vec<_> = response["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "list_categories",
                "list_units",
                "convert",
                "format_number",
                "conversion_table",
                "conversion_factor",
                "common_conversions",
                "render_page"
            ]
        );
    }

    #[test]
    fn test_tool_call() {
        let response = respond(
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"convert","arguments":{"value":1,"category":"length","from":"kilometer","to":"mile"}}}"#,
        )
        .unwrap();
        assert_eq!(response["result"]["formatted"], "0.62137119");
    }

    #[test]
    fn test_tool_error_carries_structured_data() {
        let response = respond(
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"list_units","arguments":{"category":"mass"}}}"#,
        )
        .unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
        assert_eq!(response["error"]["data"]["code"], "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_unknown_tool() {
        let response = respond(
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"teleport"}}"#,
        )
        .unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
        assert_eq!(response["error"]["message"], "Unknown tool: teleport");
    }
}
