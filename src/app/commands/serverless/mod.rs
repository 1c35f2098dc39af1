//! Serverless command: add deployment scaffolding to a web project.
//!
//! Stages run in a fixed order against one project tree. The first failure
//! aborts the run; the caller discards the tree without committing it.

mod app_entry;
mod dependencies;
mod environment;
mod firebase;
mod local_server;
mod manifest_scripts;
mod project_state;
mod provider_branch;
mod rendering_mode;
mod template_overlay;

use crate::app::AppContext;
use crate::domain::{AppError, InstallTask, Provider, ServerlessOptions};
use crate::ports::{ErrorReporter, FailureReport, ProjectTree, SourcePatcher, TemplateStore};

pub use project_state::{ProjectState, read_settings};
pub use rendering_mode::{RenderingMode, ServerEntry};

/// Subsystem name attached to telemetry reports.
pub const SUBSYSTEM: &str = "serverless";

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StateCheck,
    TemplateApply,
    ProviderBranch,
    DependencyAdd,
    LocalServerFileGen,
    EnvironmentPatch,
    AppEntryPatch,
    ManifestScriptPatch,
    InstallSchedule,
    SettingsPersist,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::StateCheck => "state-check",
            Stage::TemplateApply => "template-apply",
            Stage::ProviderBranch => "provider-branch",
            Stage::DependencyAdd => "dependency-add",
            Stage::LocalServerFileGen => "local-server",
            Stage::EnvironmentPatch => "environment-patch",
            Stage::AppEntryPatch => "app-entry-patch",
            Stage::ManifestScriptPatch => "manifest-scripts",
            Stage::InstallSchedule => "install-schedule",
            Stage::SettingsPersist => "settings-persist",
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerlessOutcome {
    pub directory: String,
    pub provider: Provider,
    pub universal: bool,
    /// Server entry installed by the common overlay; `None` when the overlay was skipped.
    pub server_entry: Option<ServerEntry>,
    pub dist_folder: String,
    /// Stages that ran, in order. Conditional stages that were skipped are absent.
    pub stages: Vec<Stage>,
    /// Dependency install to run once the tree is committed.
    pub install: Option<InstallTask>,
}

/// Run the pipeline, reporting any failure to telemetry unless disabled.
pub fn execute<S, P, R>(
    tree: &mut dyn ProjectTree,
    ctx: &AppContext<S, P, R>,
    options: ServerlessOptions,
) -> Result<ServerlessOutcome, AppError>
where
    S: TemplateStore,
    P: SourcePatcher,
    R: ErrorReporter,
{
    let options = options.normalized();
    let result = run(tree, ctx, &options);

    if let Err(error) = &result {
        if !options.disable_telemetry {
            let report = FailureReport { subsystem: SUBSYSTEM, error, options: &options };
            if let Err(report_error) = ctx.reporter().report(&report) {
                tracing::warn!(error = %report_error, "failed to report error telemetry");
            }
        }
    }
    result
}

fn run<S, P, R>(
    tree: &mut dyn ProjectTree,
    ctx: &AppContext<S, P, R>,
    options: &ServerlessOptions,
) -> Result<ServerlessOutcome, AppError>
where
    S: TemplateStore,
    P: SourcePatcher,
    R: ErrorReporter,
{
    let mut stages = Vec::new();
    let mut enter = |stage: Stage| {
        tracing::info!(stage = stage.name(), "serverless stage");
        stages.push(stage);
    };

    enter(Stage::StateCheck);
    let mut state = ProjectState::read(tree, options)?;

    let server_entry = if state.settings.universal_done() {
        tracing::info!("universal setup already recorded, skipping common overlay");
        None
    } else {
        enter(Stage::TemplateApply);
        Some(rendering_mode::apply(tree, ctx.templates(), &state)?)
    };

    enter(Stage::ProviderBranch);
    provider_branch::apply(tree, ctx.templates(), &state, options)?;

    enter(Stage::DependencyAdd);
    dependencies::add_common(tree, &state)?;

    enter(Stage::LocalServerFileGen);
    let dist_folder = local_server::apply(tree, ctx.templates(), &state)?;

    if environment::applies(&state, options) {
        enter(Stage::EnvironmentPatch);
        environment::apply(tree, &state, options)?;
        enter(Stage::AppEntryPatch);
        app_entry::apply(tree, ctx.patcher(), &state, options)?;
    }

    enter(Stage::ManifestScriptPatch);
    manifest_scripts::apply(tree, &state, options)?;

    let install = if options.skip_install {
        None
    } else {
        enter(Stage::InstallSchedule);
        let directory = state.paths.directory();
        Some(InstallTask {
            working_directory: if directory.is_empty() { ".".to_string() } else { directory.to_string() },
        })
    };

    enter(Stage::SettingsPersist);
    state.settings.record_serverless(options)?;
    tree.write(&state.paths.tool_settings(), &state.settings.to_json_string()?)?;

    Ok(ServerlessOutcome {
        directory: options.directory.clone(),
        provider: options.provider,
        universal: state.universal,
        server_entry,
        dist_folder,
        stages,
        install,
    })
}
