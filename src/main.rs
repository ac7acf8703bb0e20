use anyhow::Result;
use clap::Parser;

use dataset_detect::cli::{Cli, Command};
use dataset_detect::commands;
use dataset_detect::config::Config;
use dataset_detect::DetectError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    let result = match cli.command {
        Command::Detect(args) => {
            tracing::info!(?args, "Starting detection");
            commands::detect::run(args, &config)
        }
        Command::Formats => commands::formats::run(&config),
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(())
        }
    };

    if let Err(DetectError::UnknownFormats(formats)) = &result {
        eprintln!("Error: Unknown format(s): {}", formats);
        std::process::exit(2);
    }

    Ok(result?)
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dataset_detect={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
