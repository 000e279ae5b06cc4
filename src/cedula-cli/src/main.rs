mod cli;
mod commands;
mod config;
mod file_io;
mod sync;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cedula_cli=debug,cedula_idb=debug"
    } else {
        "cedula_cli=info,cedula_idb=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let db = Config::load_from(&config_path)?.database_path(cli.db.as_deref())?;
    tracing::debug!(config = %config_path.display(), db = %db.display(), "resolved paths");

    match cli.command {
        Commands::Parse {
            payload,
            file,
            format,
        } => {
            commands::parse::handle(payload.as_deref(), file.as_deref(), format)?;
        }

        Commands::Record { command } => match command {
            RecordCommand::Add {
                payload,
                file,
                edits,
                dry_run,
                auth,
            } => {
                commands::record::add(
                    &db,
                    &auth,
                    payload.as_deref(),
                    file.as_deref(),
                    &edits,
                    dry_run,
                )?;
            }

            RecordCommand::List {
                search,
                limit,
                format,
                auth,
            } => {
                commands::record::list(&db, &auth, search.as_deref(), limit, format)?;
            }

            RecordCommand::Stats { auth } => {
                commands::record::stats(&db, &auth)?;
            }
        },

        Commands::Export {
            search,
            output,
            auth,
        } => {
            commands::export::handle(&db, &auth, search.as_deref(), &output)?;
        }

        Commands::Sync { auth } => {
            commands::sync::handle(&config_path, &db, &auth)?;
        }

        Commands::Configure {
            server,
            port,
            enable,
            disable,
            database,
            show,
            auth,
        } => {
            let update = commands::configure::ConfigUpdate {
                server,
                port,
                enabled: if enable {
                    Some(true)
                } else if disable {
                    Some(false)
                } else {
                    None
                },
                database,
            };
            commands::configure::handle(&config_path, &db, update, show, &auth)?;
        }

        Commands::User { command } => match command {
            UserCommand::Add {
                username,
                new_password,
                role,
                auth,
            } => {
                commands::user::add(&db, &auth, &username, &new_password, role)?;
            }

            UserCommand::List { auth } => {
                commands::user::list(&db, &auth)?;
            }
        },
    }

    Ok(())
}
