mod cli;
mod host;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{error, info};
use vault_core::{Application, VaultConfig};

use crate::cli::ConsoleSender;

/// Vault: service registry for economy, permission and chat providers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
struct CliArgs {
    /// Config file (.json, .yaml/.yml or .toml) seeding the simulated host
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the release check on startup
    #[arg(long)]
    no_update_check: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the active and registered provider for each capability
    Info,
    /// Copy every balance from one economy to another
    Convert {
        /// Economy to read balances from
        from: String,
        /// Economy to write balances to
        to: String,
    },
    /// Show the command help
    Help {
        page: Option<String>,
    },
}

impl Commands {
    /// Words passed to `/vault`
    fn vault_args(&self) -> Vec<String> {
        match self {
            Commands::Info => vec!["info".to_string()],
            Commands::Convert { from, to } => vec!["convert".to_string(), from.clone(), to.clone()],
            Commands::Help { page } => std::iter::once("help".to_string()).chain(page.clone()).collect(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => match VaultConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => VaultConfig::default(),
    };
    if args.no_update_check {
        config.update.enabled = false;
    }

    let directory = Arc::new(host::build_directory(&config.host));
    let seed = config.host.clone();
    let mut app = Application::new(config, directory);
    if let Err(e) = app.start() {
        eprintln!("Failed to start: {}", e);
        return ExitCode::FAILURE;
    }
    host::register_economies(&seed, &app.services());

    let command = app.command();
    let vault_args = args
        .command
        .as_ref()
        .map(Commands::vault_args)
        .unwrap_or_default();

    let outcome = if matches!(args.command, Some(Commands::Convert { .. })) {
        // Conversion walks every known player; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let words: Vec<&str> = vault_args.iter().map(String::as_str).collect();
            command.execute(&ConsoleSender, &words);
        })
        .await
    } else {
        let words: Vec<&str> = vault_args.iter().map(String::as_str).collect();
        command.execute(&ConsoleSender, &words);
        Ok(())
    };

    if let Err(e) = outcome {
        error!("Command task failed: {}", e);
    }

    if let Some(status) = app.await_update_check().await {
        info!("Update check finished: {:?}", status);
    }

    match app.shutdown() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to shut down cleanly: {}", e);
            ExitCode::FAILURE
        }
    }
}
