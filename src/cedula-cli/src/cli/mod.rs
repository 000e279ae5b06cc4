//! CLI argument definitions for cedula
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod record;
mod user;

pub use core::{AuthArgs, Cli, Commands, OutputFormat};
pub use record::{RecordCommand, RecordEdits};
pub use user::UserCommand;
