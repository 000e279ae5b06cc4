//! Record command CLI definitions

use clap::{Args, Subcommand};
use std::path::PathBuf;

use super::core::{AuthArgs, OutputFormat};

/// Corrections applied to a parsed record before it is stored
#[derive(Args, Debug, Clone, Default)]
pub struct RecordEdits {
    /// Document number
    #[arg(long)]
    pub number: Option<String>,

    /// Given names
    #[arg(long)]
    pub given_names: Option<String>,

    /// Surnames
    #[arg(long)]
    pub surnames: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: Option<String>,

    /// Sex (M or F)
    #[arg(long)]
    pub sex: Option<String>,

    /// Place of issuance (department-municipality)
    #[arg(long)]
    pub place_of_issuance: Option<String>,
}

#[derive(Subcommand)]
pub enum RecordCommand {
    /// Decode a payload, apply corrections and store the record
    Add {
        /// Payload text (reads --file or stdin if not provided)
        payload: Option<String>,

        /// Read the raw payload bytes from a file
        #[arg(short, long, conflicts_with = "payload")]
        file: Option<PathBuf>,

        #[command(flatten)]
        edits: RecordEdits,

        /// Show the record that would be stored without storing it
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// List stored records
    List {
        /// Only show records whose number or names contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of records to show
        #[arg(long)]
        limit: Option<usize>,

        /// Output format: table (default), csv, json
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Show database statistics
    Stats {
        #[command(flatten)]
        auth: AuthArgs,
    },
}
