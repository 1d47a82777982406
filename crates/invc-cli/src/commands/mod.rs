//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod import;
pub mod new;
pub mod preset;
pub mod render;
pub mod themes;
