//! Add command implementation.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::Select;

use crate::app::api::{AddOutcome, InstallStatus};
use crate::domain::{AppError, Provider, ServerlessOptions};

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Project directory, relative to the root
    #[arg(short, long)]
    directory: Option<String>,
    /// Project name
    #[arg(short, long)]
    project: Option<String>,
    /// Client project in angular.json; defaults to --project
    #[arg(long)]
    client_project: Option<String>,
    /// Provider: aws, gcloud, or firebase
    #[arg(long)]
    provider: Option<String>,
    /// Serverless descriptor filename for AWS
    #[arg(long)]
    aws_filename: Option<String>,
    /// Serverless descriptor filename for Google Cloud
    #[arg(long)]
    gcloud_filename: Option<String>,
    /// Firebase project id written to .firebaserc
    #[arg(long)]
    firebase_project: Option<String>,
    /// Do not run npm install afterwards
    #[arg(long)]
    skip_install: bool,
    /// Do not send error reports
    #[arg(long)]
    disable_telemetry: bool,
    /// List the changes without writing them
    #[arg(long)]
    dry_run: bool,
    /// TOML file with options; flags override its values
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
}

pub fn run_add(root: Option<PathBuf>, args: AddArgs) -> Result<(), AppError> {
    let root = super::resolve_root(root)?;
    let dry_run = args.dry_run;
    let provider_given = args.provider.is_some();

    let mut options = resolve_options(&root, args)?;
    if !provider_given && options.provider == Provider::None && is_interactive() {
        match prompt_provider()? {
            Some(provider) => options.provider = provider,
            None => return Ok(()),
        }
    }

    let outcome = crate::app::api::add_serverless_at(root, options, dry_run)?;
    print_outcome(&outcome);
    Ok(())
}

/// Merge the options file (if any) with command-line flags.
fn resolve_options(root: &Path, args: AddArgs) -> Result<ServerlessOptions, AppError> {
    let mut options = match &args.options {
        Some(path) => {
            let path = if path.is_absolute() { path.clone() } else { root.join(path) };
            let content = std::fs::read_to_string(&path)
                .map_err(|_| AppError::FileNotFound(path.display().to_string()))?;
            ServerlessOptions::from_toml(&path.display().to_string(), &content)?
        }
        None => ServerlessOptions::default(),
    };

    if let Some(directory) = args.directory {
        options.directory = directory;
    }
    if let Some(project) = args.project {
        options.project = Some(project);
    }
    if let Some(client_project) = args.client_project {
        options.client_project = Some(client_project);
    }
    if let Some(name) = args.provider {
        let provider = Provider::from_name(&name);
        if provider == Provider::None {
            tracing::warn!(provider = %name, "unknown provider, no provider branch will run");
        }
        options.provider = provider;
    }
    if let Some(filename) = args.aws_filename {
        options.serverless.aws.filename = Some(filename);
    }
    if let Some(filename) = args.gcloud_filename {
        options.serverless.gcloud.filename = Some(filename);
    }
    if let Some(id) = args.firebase_project {
        options.firebase_project = Some(id);
    }
    options.skip_install |= args.skip_install;
    options.disable_telemetry |= args.disable_telemetry;

    Ok(options.normalized())
}

fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

fn prompt_provider() -> Result<Option<Provider>, AppError> {
    let items: Vec<&str> =
        Provider::SELECTABLE.iter().map(|provider| provider.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Select provider")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select provider: {}", err)))?;

    Ok(selection.map(|index| Provider::SELECTABLE[index]))
}

fn print_outcome(result: &AddOutcome) {
    let outcome = &result.outcome;

    if result.dry_run {
        println!("Dry run: {} change(s) would be written", result.changes.len());
    }
    for change in &result.changes {
        println!("  {:<8} {}", change.kind.label(), change.path);
    }
    if let Some(entry) = &outcome.server_entry {
        for moved in &entry.quarantined {
            println!("  moved    {}", moved);
        }
    }

    match &result.install {
        InstallStatus::Completed(task) => {
            println!("✅ Installed dependencies in {}", task.working_directory);
        }
        InstallStatus::Failed { task, details } => {
            println!(
                "⚠️  Dependency install in {} failed: {}. Run `npm install` manually.",
                task.working_directory, details
            );
        }
        InstallStatus::NotRun => {}
    }

    if !result.dry_run {
        println!(
            "✅ Added serverless scaffolding ({}) to {}",
            outcome.provider.as_str(),
            outcome.directory
        );
    }
}
