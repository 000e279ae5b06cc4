//! User command CLI definitions

use cedula_idb::Role;
use clap::Subcommand;

use super::core::AuthArgs;

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create an operator account
    Add {
        /// New account name
        username: String,

        /// New account password
        #[arg(long)]
        new_password: String,

        /// Role: admin or lector
        #[arg(long, default_value = "lector")]
        role: Role,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// List operator accounts
    List {
        #[command(flatten)]
        auth: AuthArgs,
    },
}
