//! sfm10-footprint-mcp: footprint generator for the SFM10 package
//!
//! This library computes the SFM10 land pattern from a small set of named
//! parameters and serves it to AI assistants over MCP:
//!
//! - **Pads**: a row along the bottom, a column on the right and a row along
//!   the top, numbered anticlockwise from the bottom-left pad
//! - **Courtyard**: the body rectangle grown by the configured margins
//! - **Silkscreen**: the body outline with gaps wherever a pad's clearance
//!   zone crosses it, and with slivers below the minimum length dropped
//!
//! Generation is pure: the host receives pads through a [`draw::PadSink`] and
//! graphics through a [`draw::DrawingSurface`].
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`draw`] - Host drawing collaborators and the recording [`draw::DrawList`]
//! - [`error`] - Error types
//! - [`geometry`] - Pad arrays, rectangles and interval subtraction
//! - [`mcp`] - MCP protocol implementation
//! - [`render`] - ASCII previews
//! - [`wizard`] - Parameter store, validation and the SFM10 wizard

pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod mcp;
pub mod render;
pub mod wizard;
