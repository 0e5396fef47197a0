//! CLI library components for the medical dataset generator.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
