//! prepcalc Tools module
//!
//! Request/response wrappers the MCP server calls into.

pub mod conversion;
pub mod scaling;
pub mod status;
pub mod tax;
