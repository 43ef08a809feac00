//! Model Context Protocol (MCP) server implementation.
//!
//! This module exposes the SFM10 footprint wizard as MCP tools. The server
//! communicates over stdio using newline-delimited JSON-RPC 2.0 messages.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        MCP Server                         │
//! │                                                           │
//! │   ┌─────────────┐    ┌─────────────┐    ┌─────────────┐   │
//! │   │  Transport  │───▶│   Server    │───▶│   Wizard    │   │
//! │   │   (lines)   │    │ (lifecycle) │    │  (SFM10)    │   │
//! │   └─────────────┘    └─────────────┘    └─────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod protocol;
pub mod server;
pub mod transport;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use server::McpServer;
pub use transport::{LineTransport, StdioTransport};
