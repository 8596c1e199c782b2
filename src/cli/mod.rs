//! CLI layer
//!
//! Command-line interface using clap.

pub mod args;
pub mod commands;
pub mod context;
pub mod exit;
pub mod output;

pub use context::ShareContext;
pub use output::Output;
