mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "/etc/fhpass/config.yaml";
const LOCAL_CONFIG_PATH: &str = "fhpass.yaml";

/// Fiberhome HG6145F1 admin password generator
#[derive(Parser)]
#[command(name = "fhpass")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (default: /etc/fhpass/config.yaml, then ./fhpass.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Hash the MAC exactly as typed instead of upper-casing it first
    #[arg(long, global = true)]
    keep_case: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the admin password of one or more MAC addresses
    Derive {
        /// MAC addresses (e.g., E0:1C:FC:12:34:56); read from stdin when omitted
        macs: Vec<String>,
        /// Output format (overrides the configuration file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Prompt for MAC addresses until 'quit' (default)
    Interactive,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing, on stderr so stdout only carries results
    let default_filter = if cli.verbose {
        "fhpass_cli=debug"
    } else {
        "fhpass_cli=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = load_config(cli.config.as_deref())?;

    // Command line flags win over the configuration file
    if cli.keep_case {
        config.uppercase_input = false;
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Derive { macs, format } => {
            if let Some(format) = format {
                config.output = format;
            }
            commands::derive::handle(&config, macs, stdin.lock(), &mut stdout)?;
        }
        Commands::Interactive => {
            commands::interactive::run(&config, stdin.lock(), &mut stdout)?;
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}

/// Load the configuration named on the command line, or look in the default
/// locations and fall back to built-in defaults.
fn load_config(explicit: Option<&str>) -> Result<Config> {
    if let Some(path) = explicit {
        let config = Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?;
        info!("Loaded configuration from {}", path);
        return Ok(config);
    }

    let Some(path) = [DEFAULT_CONFIG_PATH, LOCAL_CONFIG_PATH]
        .into_iter()
        .find(|p| Path::new(p).exists())
    else {
        info!("No configuration file found, using defaults");
        return Ok(Config::default());
    };

    match Config::from_file(path) {
        Ok(config) => {
            info!("Loaded configuration from {}", path);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration from {}: {}", path, e);
            info!("Using default configuration");
            Ok(Config::default())
        }
    }
}
