//! API Facade for the application.
//!
//! Functions here build the adapters, run a command against a staged project
//! tree, and commit the result to disk.

use std::path::PathBuf;

use crate::adapters::{
    EmbeddedTemplateStore, NoopErrorReporter, NpmInstaller, StagedTree, TelemetryReporter,
    TreeChange, TypeScriptPatcher,
};
use crate::app::{
    AppContext,
    commands::{serverless, status as status_command},
};
use crate::domain::InstallTask;

pub use crate::app::commands::serverless::{ServerEntry, ServerlessOutcome, Stage};
pub use crate::app::commands::status::{DescriptorStatus, StatusReport};
pub use crate::domain::{AppError, Provider, ServerlessOptions};

/// What happened to the scheduled dependency install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// Nothing was scheduled (`skipInstall`) or the run was a dry run.
    NotRun,
    Completed(InstallTask),
    /// The install failed after the tree was committed. Generated files stay.
    Failed { task: InstallTask, details: String },
}

/// Result of `add_serverless`.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub outcome: ServerlessOutcome,
    /// Files created, modified, or deleted, sorted by path.
    pub changes: Vec<TreeChange>,
    pub dry_run: bool,
    pub install: InstallStatus,
}

fn create_context(
    disable_telemetry: bool,
) -> AppContext<EmbeddedTemplateStore, TypeScriptPatcher, TelemetryReporter> {
    let reporter = if disable_telemetry {
        TelemetryReporter::Noop(NoopErrorReporter)
    } else {
        TelemetryReporter::from_env()
    };
    AppContext::new(EmbeddedTemplateStore::new(), TypeScriptPatcher::new(), reporter)
}

/// Add serverless scaffolding to the project in the current directory.
pub fn add_serverless(options: ServerlessOptions, dry_run: bool) -> Result<AddOutcome, AppError> {
    add_serverless_at(std::env::current_dir()?, options, dry_run)
}

/// Add serverless scaffolding to the project rooted at `root`.
///
/// Nothing touches the disk unless every stage succeeds. With `dry_run` the
/// staged changes are returned but never written.
pub fn add_serverless_at(
    root: impl Into<PathBuf>,
    options: ServerlessOptions,
    dry_run: bool,
) -> Result<AddOutcome, AppError> {
    let root = root.into();
    let ctx = create_context(options.disable_telemetry);
    let mut tree = StagedTree::new(root.clone());

    let outcome = serverless::execute(&mut tree, &ctx, options)?;

    if dry_run {
        return Ok(AddOutcome {
            changes: tree.changes(),
            outcome,
            dry_run,
            install: InstallStatus::NotRun,
        });
    }

    let changes = tree.commit()?;
    let install = match outcome.install.clone() {
        Some(task) => match NpmInstaller::new(root).run(&task) {
            Ok(()) => InstallStatus::Completed(task),
            Err(err) => {
                tracing::warn!(error = %err, "dependency install failed");
                InstallStatus::Failed { task, details: err.to_string() }
            }
        },
        None => InstallStatus::NotRun,
    };

    Ok(AddOutcome { outcome, changes, dry_run, install })
}

/// Report the serverless setup of the project in the current directory.
pub fn status(directory: &str, client_project: Option<&str>) -> Result<StatusReport, AppError> {
    status_at(std::env::current_dir()?, directory, client_project)
}

/// Report the serverless setup of the project rooted at `root`.
pub fn status_at(
    root: impl Into<PathBuf>,
    directory: &str,
    client_project: Option<&str>,
) -> Result<StatusReport, AppError> {
    let tree = StagedTree::new(root.into());
    status_command::execute(&tree, directory, client_project)
}
