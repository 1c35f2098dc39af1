//! CLI Adapter.

mod add;
mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "slsgen")]
#[command(version)]
#[command(
    about = "Add serverless deployment scaffolding to an Angular project",
    long_about = None
)]
struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Project root; defaults to the current directory
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add serverless scaffolding for a provider
    #[clap(visible_alias = "a")]
    Add(add::AddArgs),
    /// Show what earlier runs set up
    #[clap(visible_alias = "st")]
    Status {
        /// Project directory, relative to the root
        #[arg(short, long, default_value = ".")]
        directory: String,
        /// Client project used to check the server-rendering target
        #[arg(long)]
        client_project: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result: Result<(), AppError> = match cli.command {
        Commands::Add(args) => add::run_add(cli.root, args),
        Commands::Status { directory, client_project } => {
            status::run_status(cli.root, &directory, client_project.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("slsgen={level},reqwest=warn")))
        .unwrap_or_else(|_| EnvFilter::new("slsgen=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}
