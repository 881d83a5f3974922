//! CLI command implementations.

pub mod common;
pub mod config;
pub mod edit;
pub mod level;
pub mod patterns;
