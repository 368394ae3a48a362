// src/cli/mod.rs
//! CLI surface and command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
pub use handlers::FilterArgs;
