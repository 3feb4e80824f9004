//! Joke catalog and the tool/resource integrations built on it
//!
//! Provides the core business logic of the joke server exposed over the MCP protocol

pub mod catalog;
pub mod jokes;
pub mod random;
pub mod resources;
pub mod tools;
pub mod utils;
