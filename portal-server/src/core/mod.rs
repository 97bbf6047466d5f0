//! Core module - configuration, state, server lifecycle and errors
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - state shared with handlers
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup / lifecycle errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
