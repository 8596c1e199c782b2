//! Core logic for gitshare

pub mod config;
pub mod share;

pub use config::ShareConfig;
pub use share::{ShareError, ShareRequest, ShareSession, ShareWorkflow, Step};
