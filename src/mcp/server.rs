//! MCP server for the SFM10 footprint wizard.
//!
//! This module implements the MCP server lifecycle:
//!
//! 1. **Initialisation**: Capability negotiation and version agreement
//! 2. **Operation**: Handling tool calls and other requests
//! 3. **Shutdown**: Graceful connection termination
//!
//! # Tools
//!
//! - `list_parameters`: the wizard's parameters with units, defaults and
//!   current values
//! - `generate_footprint`: pads, courtyard, silkscreen and the recorded draw
//!   commands for one set of parameter overrides
//! - `render_footprint`: an ASCII preview of the same footprint

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::config::StyleConfig;
use crate::draw::DrawList;
use crate::mcp::protocol::{
    parse_message, IncomingMessage, JsonRpcError, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, OutgoingMessage, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::{LineTransport, StdioTransport};
use crate::render::{render_ascii, RenderOptions, MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH};
use crate::wizard::{Footprint, FootprintWizard, ParameterStore, ParameterValues, Sfm10Wizard};

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapabilities>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ToolCapabilities::default()),
        }
    }
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// Whether the tool list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // skip_serializing_if passes &T
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// A tool definition for tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// Creates a successful result holding pretty-printed JSON.
    fn json(value: &Value) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialise tool output");
                Self::error("Internal error: failed to serialise tool output")
            }
        }
    }
}

/// The MCP server for the SFM10 footprint wizard.
pub struct McpServer {
    /// Current server state.
    state: ServerState,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    /// The wizard behind the tools.
    wizard: Sfm10Wizard,
    /// Parameter values every call starts from.
    store: ParameterStore,
    /// Text size and stroke widths for emitted graphics.
    style: StyleConfig,
}

impl McpServer {
    /// Creates a server whose tools start from `store` and draw with `style`.
    #[must_use]
    pub const fn new(store: ParameterStore, style: StyleConfig) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            protocol_version: None,
            wizard: Sfm10Wizard,
            store,
            style,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Returns the negotiated protocol version, once initialised.
    #[must_use]
    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Runs the MCP server on stdio with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut transport = StdioTransport::stdio();
        self.run_with_shutdown(&mut transport).await
    }

    /// Serves messages from `transport` until its input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn serve<R, W>(&mut self, transport: &mut LineTransport<R, W>) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            let line_result = transport.read_line().await;
            if self.handle_transport_result(transport, line_result).await? {
                return Ok(());
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self, transport: &mut StdioTransport) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = transport.read_line() => {
                    if self.handle_transport_result(transport, line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self, transport: &mut StdioTransport) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = transport.read_line() => {
                    if self.handle_transport_result(transport, line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result<R, W>(
        &mut self,
        transport: &mut LineTransport<R, W>,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(line) = line_result? else {
            tracing::info!("Input closed, shutting down");
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if let Some(reply) = self.handle_line(&line) {
            transport.send(&reply).await?;
        }

        Ok(self.state == ServerState::ShuttingDown)
    }

    /// Handles a single line of input.
    ///
    /// Returns the reply to send, or `None` for blank lines and notifications.
    pub fn handle_line(&mut self, line: &str) -> Option<OutgoingMessage> {
        if line.trim().is_empty() {
            return None;
        }

        match parse_message(line) {
            Ok(IncomingMessage::Request(req)) => Some(self.handle_request(&req).into()),
            Ok(IncomingMessage::Notification(notif)) => {
                self.handle_notification(&notif);
                None
            }
            Err(error) => {
                tracing::warn!(code = error.error.code, "Rejected malformed message");
                Some(OutgoingMessage::Error(error))
            }
        }
    }

    /// Handles an incoming request.
    fn handle_request(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        tracing::debug!(id = %req.id, method = %req.method, "Request");

        match req.method.as_str() {
            "initialize" => self.handle_initialize(req),
            "tools/list" => self.handle_tools_list(req),
            "tools/call" => self.handle_tools_call(req),
            "ping" => Ok(Self::handle_ping(req)),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        }
    }

    /// Handles an incoming notification.
    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            tracing::info!("Client initialised, server running");
            self.state = ServerState::Running;
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::invalid_request_message(
                req.id.clone(),
                "Server already initialised",
            ));
        }

        let params: InitializeParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid initialize params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing initialize params")
            })?;

        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                version = client.version.as_deref().unwrap_or("unknown"),
                requested = %params.protocol_version,
                "Initialising"
            );
        }

        let negotiated_version = MCP_PROTOCOL_VERSION.to_string();

        self.protocol_version = Some(negotiated_version.clone());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": negotiated_version,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "tools": Self::get_tool_definitions(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid tool call params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing tool call params")
            })?;

        let result = match params.name.as_str() {
            "list_parameters" => self.call_list_parameters(&params.arguments),
            "generate_footprint" => self.call_generate_footprint(&params.arguments),
            "render_footprint" => self.call_render_footprint(&params.arguments),
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        if result.is_error {
            tracing::warn!(tool = %params.name, "Tool call failed");
        }

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::internal_error(
                req.id.clone(),
                "Internal error: failed to serialise result",
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Handles the ping request.
    fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({}))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::invalid_request_message(
                id.clone(),
                "Server not initialised",
            ));
        }
        Ok(())
    }

    /// Returns the list of available tools.
    #[allow(clippy::too_many_lines)]
    fn get_tool_definitions() -> Vec<ToolDefinition> {
        let parameters_schema = json!({
            "type": "object",
            "description": "Optional parameter overrides keyed by category then name, \
                            e.g. {\"Pads\": {\"vertical pads count\": 6}}. \
                            Use list_parameters to see every category and name.",
            "additionalProperties": {
                "type": "object",
                "additionalProperties": { "type": "number" }
            }
        });

        vec![
            ToolDefinition {
                name: "list_parameters".to_string(),
                description: Some(
                    "List the SFM10 wizard's parameters grouped by category (Pads, Body), \
                     with unit, default and current value. Lengths are in millimetres; \
                     counts are natural numbers."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {}
                }),
            },
            ToolDefinition {
                name: "generate_footprint".to_string(),
                description: Some(
                    "Generate the SFM10 footprint: pads on three sides numbered from the \
                     bottom row anticlockwise, the courtyard rectangle, and a silkscreen \
                     outline broken wherever it would pass within the pad clearance. \
                     Returns the geometry and the ordered draw commands. \
                     All coordinates are in millimetres with Y growing downwards."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "parameters": parameters_schema
                    }
                }),
            },
            ToolDefinition {
                name: "render_footprint".to_string(),
                description: Some(
                    "Render the SFM10 footprint as ASCII art for a quick visual check. \
                     Pads show as '#' with the last digit of their number at the centre."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "parameters": parameters_schema,
                        "scale": {
                            "type": "number",
                            "description": "Characters per mm (default: 2.0)"
                        },
                        "max_width": {
                            "type": "integer",
                            "description": "Maximum width in characters (default: 80, at most 500)"
                        },
                        "max_height": {
                            "type": "integer",
                            "description": "Maximum height in characters (default: 40, at most 200)"
                        }
                    }
                }),
            },
        ]
    }

    /// Applies the `parameters` argument, if any, to the configured store.
    fn store_with_overrides(&self, arguments: &Value) -> Result<ParameterStore, String> {
        let Some(overrides) = arguments.get("parameters").filter(|v| !v.is_null()) else {
            return Ok(self.store.clone());
        };

        let values: ParameterValues = serde_json::from_value(overrides.clone())
            .map_err(|e| format!("Invalid parameters: {e}"))?;

        self.store
            .with_overrides(&values)
            .map_err(|e| format!("Invalid parameters: {e}"))
    }

    /// Builds the footprint for the given tool arguments.
    fn build_footprint(&self, arguments: &Value) -> Result<Footprint, String> {
        let store = self.store_with_overrides(arguments)?;
        self.wizard.build(&store).map_err(|e| e.to_string())
    }

    fn call_list_parameters(&self, _arguments: &Value) -> ToolCallResult {
        ToolCallResult::json(&json!({
            "wizard": self.wizard.name(),
            "description": self.wizard.description(),
            "parameters": self.store,
        }))
    }

    fn call_generate_footprint(&self, arguments: &Value) -> ToolCallResult {
        let footprint = match self.build_footprint(arguments) {
            Ok(footprint) => footprint,
            Err(e) => return ToolCallResult::error(e),
        };

        let widths = self.style.line_widths();
        let mut pads = DrawList::new(widths);
        let mut graphics = DrawList::new(widths);
        footprint.emit(self.style.text_size, &mut pads, &mut graphics);

        let mut commands = pads.into_commands();
        commands.extend(graphics.into_commands());

        ToolCallResult::json(&json!({
            "status": "success",
            "name": footprint.name,
            "value": footprint.value,
            "pad_count": footprint.pads.len(),
            "pads": footprint.pads,
            "body": footprint.body,
            "courtyard": footprint.courtyard,
            "silkscreen": footprint.silkscreen,
            "commands": commands,
        }))
    }

    fn call_render_footprint(&self, arguments: &Value) -> ToolCallResult {
        let defaults = RenderOptions::default();
        let options = RenderOptions {
            scale: arguments
                .get("scale")
                .and_then(Value::as_f64)
                .unwrap_or(defaults.scale),
            max_width: arguments
                .get("max_width")
                .and_then(Value::as_u64)
                .map_or(defaults.max_width, |v| usize::try_from(v).unwrap_or(usize::MAX)),
            max_height: arguments
                .get("max_height")
                .and_then(Value::as_u64)
                .map_or(defaults.max_height, |v| usize::try_from(v).unwrap_or(usize::MAX)),
        };

        if !options.scale.is_finite() || options.scale <= 0.0 {
            return ToolCallResult::error("scale must be greater than 0");
        }
        if options.max_width > MAX_CANVAS_WIDTH {
            return ToolCallResult::error(format!(
                "max_width {} exceeds the maximum of {MAX_CANVAS_WIDTH} characters",
                options.max_width
            ));
        }
        if options.max_height > MAX_CANVAS_HEIGHT {
            return ToolCallResult::error(format!(
                "max_height {} exceeds the maximum of {MAX_CANVAS_HEIGHT} characters",
                options.max_height
            ));
        }

        let footprint = match self.build_footprint(arguments) {
            Ok(footprint) => footprint,
            Err(e) => return ToolCallResult::error(e),
        };

        ToolCallResult::json(&json!({
            "status": "success",
            "name": footprint.name,
            "scale": options.scale,
            "render": render_ascii(&footprint, &options),
        }))
    }
}
