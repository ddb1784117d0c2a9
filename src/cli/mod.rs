//! Command-line interface for spindle.
//!
//! This module provides CLI commands for ripping, converting, tagging,
//! and organizing music files.

mod commands;

pub use commands::{Cli, Commands, run_command};
