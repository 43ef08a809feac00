//! Integration tests for MCP protocol handling.
//!
//! These tests drive the server the way a client would: one JSON-RPC message
//! per line, through the full initialise, list and call lifecycle.

use serde_json::{json, Value};
use sfm10_footprint_mcp::config::StyleConfig;
use sfm10_footprint_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use sfm10_footprint_mcp::mcp::server::{McpServer, ServerState};
use sfm10_footprint_mcp::mcp::LineTransport;
use sfm10_footprint_mcp::wizard::Sfm10Params;

const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}"#;
const INITIALIZED: &str = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;

fn new_server() -> McpServer {
    McpServer::new(Sfm10Params::parameter_store(), StyleConfig::default())
}

fn reply(server: &mut McpServer, line: &str) -> Value {
    let message = server.handle_line(line).expect("expected a reply");
    serde_json::to_value(message).unwrap()
}

fn call_tool(server: &mut McpServer, name: &str, arguments: &Value) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 10,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    });
    reply(server, &request.to_string())
}

fn tool_output(response: &Value) -> Value {
    assert!(response["result"].get("isError").is_none(), "{response}");
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

fn initialised_server() -> McpServer {
    let mut server = new_server();
    reply(&mut server, INITIALIZE);
    assert!(server.handle_line(INITIALIZED).is_none());
    server
}

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let IncomingMessage::Request(req) = parse_message(INITIALIZE).unwrap() else {
        panic!("Expected Request");
    };
    assert_eq!(req.method, "initialize");
    assert_eq!(req.id, RequestId::Number(1));
}

#[test]
fn test_parse_notification() {
    let IncomingMessage::Notification(notif) = parse_message(INITIALIZED).unwrap() else {
        panic!("Expected Notification");
    };
    assert_eq!(notif.method, "notifications/initialized");
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_initialize_response() {
    let mut server = new_server();
    let response = reply(&mut server, INITIALIZE);

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "sfm10-footprint-mcp");
    assert_eq!(server.state(), ServerState::Initialising);
}

#[test]
fn test_double_initialize_rejected() {
    let mut server = initialised_server();
    let response = reply(&mut server, INITIALIZE);
    assert_eq!(response["error"]["code"], -32600);
}

#[test]
fn test_ping_before_initialisation() {
    let mut server = new_server();
    let response = reply(&mut server, r#"{"jsonrpc":"2.0","id":"p","method":"ping"}"#);
    assert_eq!(response["id"], "p");
    assert!(response["result"].is_object());
}

#[test]
fn test_unknown_method() {
    let mut server = initialised_server();
    let response = reply(&mut server, r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#);
    assert_eq!(response["error"]["code"], -32601);
}

#[test]
fn test_malformed_line_gets_parse_error() {
    let mut server = new_server();
    let response = reply(&mut server, "{not json");
    assert_eq!(response["error"]["code"], -32700);
    assert!(response.get("id").is_none());
}

#[test]
fn test_blank_line_is_ignored() {
    let mut server = new_server();
    assert!(server.handle_line("   ").is_none());
}

// =============================================================================
// Tool Tests
// =============================================================================

#[test]
fn test_tools_list() {
    let mut server = initialised_server();
    let response = reply(&mut server, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#);

    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["list_parameters", "generate_footprint", "render_footprint"]);
}

#[test]
fn test_list_parameters() {
    let mut server = initialised_server();
    let output = tool_output(&call_tool(&mut server, "list_parameters", &json!({})));

    assert_eq!(output["wizard"], "SFM10");
    assert_eq!(output["parameters"]["Pads"].as_object().unwrap().len(), 8);
    assert_eq!(output["parameters"]["Body"].as_object().unwrap().len(), 7);

    let count = &output["parameters"]["Pads"]["horizontal pads count"];
    assert_eq!(count["unit"], "natural");
    assert_eq!(count["default"], 24.0);
}

#[test]
fn test_generate_footprint_default() {
    let mut server = initialised_server();
    let output = tool_output(&call_tool(&mut server, "generate_footprint", &json!({})));

    assert_eq!(output["name"], "SFM10");
    assert_eq!(output["pad_count"], 31);

    let designators: Vec<u64> = output["pads"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["designator"].as_u64().unwrap())
        .collect();
    assert_eq!(designators, (1..=31).collect::<Vec<_>>());

    let kinds: Vec<&str> = output["commands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["kind"].as_str().unwrap())
        .collect();
    let first_graphic = kinds.iter().position(|k| *k != "pad").unwrap();
    assert_eq!(first_graphic, 31);
    assert!(kinds[first_graphic..].iter().all(|k| *k != "pad"));
    assert_eq!(kinds[kinds.len() - 2..], ["value", "reference"]);
}

#[test]
fn test_generate_footprint_rejects_odd_horizontal_count() {
    let mut server = initialised_server();
    let args = json!({ "parameters": { "Pads": { "horizontal pads count": 25 } } });
    let response = call_tool(&mut server, "generate_footprint", &args);

    assert_eq!(response["result"]["isError"], true);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("horizontal pads count"));
}

#[test]
fn test_overrides_do_not_persist() {
    let mut server = initialised_server();
    let args = json!({ "parameters": { "Pads": { "vertical pads count": 3 } } });
    let first = tool_output(&call_tool(&mut server, "generate_footprint", &args));
    let second = tool_output(&call_tool(&mut server, "generate_footprint", &json!({})));

    assert_eq!(first["pad_count"], 27);
    assert_eq!(second["pad_count"], 31);
}

#[test]
fn test_render_footprint() {
    let mut server = initialised_server();
    let output = tool_output(&call_tool(
        &mut server,
        "render_footprint",
        &json!({ "max_width": 40, "max_height": 20 }),
    ));

    let render = output["render"].as_str().unwrap();
    assert!(render.starts_with("Footprint: SFM10"));
    assert!(render.contains('#'));
}

#[test]
fn test_unknown_tool() {
    let mut server = initialised_server();
    let response = call_tool(&mut server, "delete_everything", &json!({}));
    assert_eq!(response["result"]["isError"], true);
}

// =============================================================================
// Transport Tests
// =============================================================================

#[test]
fn test_serve_over_line_transport() {
    let input = format!(
        "{INITIALIZE}\n{INITIALIZED}\n{}\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#
    );
    let mut transport = LineTransport::new(input.as_bytes(), Vec::new());
    let mut server = new_server();

    tokio_test::block_on(server.serve(&mut transport)).unwrap();

    let output = String::from_utf8(transport.into_writer()).unwrap();
    let lines: Vec<Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["id"], 2);
    assert_eq!(server.state(), ServerState::ShuttingDown);
}
