//! # echo_core
//!
//! Core domain logic for the MCP echo server.

pub mod decode;
pub mod echo;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
