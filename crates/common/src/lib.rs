//! Shared helpers for the workspace: logging setup and a few wire-level constants.

pub mod types;
pub mod utils;
