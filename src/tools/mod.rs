//! kcalc Tools module
//!
//! Tool implementations shared by the MCP server and the report binary.

pub mod energy;
pub mod nutrition;
pub mod report;
pub mod status;
