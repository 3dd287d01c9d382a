//! Statusprobe CLI
//!
//! Run the smoke checks against a status-check API and exit non-zero if any fail.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use statusprobe::checks::{ApiChecker, CHECKS};
use statusprobe::config::{BASE_URL_ENV, Config};

/// Statusprobe - smoke checks for a status-check REST API
#[derive(Debug, Parser)]
#[command(name = "statusprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Used when no subcommand is given
    #[command(flatten)]
    check: CheckArgs,

    /// Runs `check` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The command to run; a bare invocation is `check` with the top-level options
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Check(self.check))
    }
}

/// Target selection for a check run
#[derive(Debug, Clone, Default, Args)]
struct CheckArgs {
    /// Base URL of the API under test
    #[arg(short, long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the smoke checks
    Check(CheckArgs),

    /// Generate a default configuration file
    Init {
        /// Output file path
        #[arg(short, long, default_value = "statusprobe.yaml")]
        output: PathBuf,
    },

    /// List the checks in the order they run
    List,

    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = "statusprobe.yaml")]
        config: PathBuf,
    },
}

fn setup_logging(verbose: bool, json: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.json);

    let result = execute(cli.into_command()).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "statusprobe failed");
        eprintln!("Error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// Run a command; `Ok(false)` means it ran but some check failed
async fn execute(command: Commands) -> Result<bool> {
    match command {
        Commands::Check(args) => run_checks(&args).await,
        Commands::Init { output } => init_config(&output).map(|()| true),
        Commands::List => {
            list_checks();
            Ok(true)
        }
        Commands::Validate { config } => validate_config(&config).map(|()| true),
    }
}

/// Process exit status: 0 only when everything succeeded
fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

/// Config file (or defaults) with the flag/env base URL layered on top
fn load_config(args: &CheckArgs) -> Result<Config> {
    let config = Config::load(args.config.as_deref()).with_context(|| match &args.config {
        Some(p) => format!("Failed to load config from {}", p.display()),
        None => "Failed to build default config".to_string(),
    })?;
    Ok(config.with_base_url(args.base_url.clone()))
}

/// Run the smoke sequence; `Ok(true)` when every check passed
async fn run_checks(args: &CheckArgs) -> Result<bool> {
    let config = load_config(args)?;
    let client = config.to_client().context("Failed to create API client")?;
    let ctx = config.to_check_context();

    tracing::info!(
        base_url = %client.base_url(),
        timeout = ?config.target.timeout,
        "Configuration loaded"
    );

    let mut checker = ApiChecker::new(client);
    let run = checker.run_all(&ctx).await;

    Ok(run.all_passed())
}

/// Generate a default configuration file
fn init_config(output: &Path) -> Result<()> {
    let yaml = Config::default()
        .to_yaml()
        .context("Failed to serialize config")?;

    std::fs::write(output, &yaml)
        .with_context(|| format!("Failed to write config to {}", output.display()))?;

    tracing::info!(path = %output.display(), "Configuration file created");
    println!("Created {}", output.display());
    println!();
    println!("Edit the file to point at your API, then run:");
    println!("  statusprobe check --config {}", output.display());

    Ok(())
}

/// List the checks in the order they run
fn list_checks() {
    println!("Checks (run in this order):");
    println!();

    for (name, check) in CHECKS.iter() {
        println!(
            "  {name:14} {:4} /{:8} - {}",
            check.method(),
            check.endpoint(),
            check.description()
        );
    }
}

/// Validate a configuration file
fn validate_config(config_path: &Path) -> Result<()> {
    tracing::info!(config = %config_path.display(), "Validating configuration");

    let config = Config::from_file(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    println!("Configuration is valid!");
    println!();
    println!("Base URL: {}", config.target.base_url);
    match config.target.timeout {
        Some(t) => println!("Timeout: {t:?}"),
        None => println!("Timeout: client default"),
    }
    println!("Client name prefix: {}", config.client_name_prefix);

    Ok(())
}
