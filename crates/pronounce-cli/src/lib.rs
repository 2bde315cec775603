//! `pronounce` command-line adapter.
//!
//! `main.rs` is the composition root; this library holds the parser,
//! settings resolution, dispatch, and command handlers so they can be tested.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod app;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use app::run;
pub use bootstrap::{init_tracing, resolve_settings};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
