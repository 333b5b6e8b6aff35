mod cli;
mod commands;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use venuesync_core::MarketStore;
use venuesync_store::JsonFileStorage;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need the data store
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "venuesync", &mut std::io::stdout());
            Ok(())
        }

        // All other commands operate on the local data store
        cmd => {
            let store = open_store(&cli.global);
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &store, &cli.global)
        }
    }
}

/// Open the market store against the resolved data directory.
///
/// Precedence for the data directory: `--data-dir` flag (or env), then
/// the config file, then the platform default.
fn open_store(global: &GlobalOpts) -> MarketStore {
    let cfg = venuesync_config::load_config_or_default();
    let data_dir = global
        .data_dir
        .clone()
        .or_else(|| cfg.data_dir.clone())
        .unwrap_or_else(venuesync_store::default_data_dir);

    tracing::debug!(dir = %data_dir.display(), "opening data directory");
    let port = Arc::new(JsonFileStorage::open(data_dir));
    MarketStore::open(port, cfg.pricing.tax_rate)
}
