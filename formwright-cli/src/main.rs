use clap::Parser;
use formwright_fields::FormConfig;

mod cli;
mod commands;
mod recipe;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            commands::EXIT_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = match &cli.config {
        Some(path) => FormConfig::load_from(path)?,
        None => FormConfig::load()?,
    };
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Types { format } => commands::run_types(format),
        Commands::Widgets { recipe } => commands::run_widgets(config, &recipe),
        Commands::Submit {
            recipe,
            values,
            format,
        } => commands::run_submit(config, &recipe, &values, format),
    }
}

fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
