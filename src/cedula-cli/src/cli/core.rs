//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::record::RecordCommand;
use super::user::UserCommand;

/// Output format for printed records
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "cedula")]
#[command(about = "Colombian ID card barcode reader", long_about = None)]
pub struct Cli {
    /// Records database (defaults to the configured path, then the data directory)
    #[arg(long, global = true, env = "CEDULA_DB")]
    pub db: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/cedula/config.toml)
    #[arg(long, global = true, env = "CEDULA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Operator credentials
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// Operator username
    #[arg(long, env = "CEDULA_USER")]
    pub user: Option<String>,

    /// Operator password
    #[arg(long, env = "CEDULA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a barcode payload and print the identity fields
    #[command(visible_alias = "p")]
    Parse {
        /// Payload text (reads --file or stdin if not provided)
        payload: Option<String>,

        /// Read the raw payload bytes from a file
        #[arg(short, long, conflicts_with = "payload")]
        file: Option<PathBuf>,

        /// Output format: table (default), csv, json
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// Stored records (add, list, stats)
    #[command(visible_alias = "r")]
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },

    /// Export stored records to a CSV file (admin only)
    #[command(visible_alias = "e")]
    Export {
        /// Only export records matching this text
        #[arg(short, long)]
        search: Option<String>,

        /// Directory to write the export file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Send all stored records to the sync server (admin only)
    Sync {
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Configure the sync server (changes are admin only)
    #[command(visible_alias = "c")]
    Configure {
        /// Sync server host name or address
        #[arg(long)]
        server: Option<String>,

        /// Sync server port
        #[arg(long)]
        port: Option<u16>,

        /// Enable synchronization
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Disable synchronization
        #[arg(long)]
        disable: bool,

        /// Default records database path
        #[arg(long)]
        database: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Operator accounts (admin only)
    #[command(visible_alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
}
