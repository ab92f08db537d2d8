// Clippy allows for reasonable defaults
// These suppress warnings where the suggested change doesn't improve readability
#![allow(clippy::single_char_add_str)] // push_str("\n") reads better than push('\n')
#![allow(clippy::collapsible_if)] // Separate ifs can be more readable

// Module declarations
pub mod ai;
pub mod config;
pub mod hackathons;
pub mod models;
pub mod shutdown;

// Server module (HTTP API)
pub mod server;

// Re-export models for use in handlers and tests
pub use models::*;
