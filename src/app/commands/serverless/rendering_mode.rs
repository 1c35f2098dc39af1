//! Choose and install the server entry for the project's rendering mode.

use chrono::Local;

use super::project_state::{ProjectState, is_universal, workspace_config};
use super::template_overlay;
use crate::domain::template_set::placeholders;
use crate::domain::{AppError, MergeStrategy, ProjectPaths, TemplateSet, TreeOp};
use crate::ports::{ProjectTree, TemplateStore};

const QUARANTINE_STAMP: &str = "%Y%m%d%H%M%S%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingMode {
    /// Server-side rendering via the server bundle.
    Universal,
    /// Static file serving of the browser build.
    Static,
}

/// What the resolver installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    pub mode: RenderingMode,
    /// Files moved out of the active build.
    pub quarantined: Vec<String>,
}

/// Merge the common overlay and install `server.ts` for the detected mode.
pub fn apply(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    state: &ProjectState,
) -> Result<ServerEntry, AppError> {
    let stamp = Local::now().format(QUARANTINE_STAMP).to_string();
    apply_with_stamp(tree, templates, state, &stamp)
}

fn apply_with_stamp(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    state: &ProjectState,
    stamp: &str,
) -> Result<ServerEntry, AppError> {
    let paths = &state.paths;
    template_overlay::merge(tree, templates, TemplateSet::Common, paths, MergeStrategy::Overwrite)?;

    let universal = is_universal(tree, paths, &state.client_project)?;
    let (mode, active, inactive) = if universal {
        (RenderingMode::Universal, paths.universal_server_template(), paths.static_server_template())
    } else {
        (RenderingMode::Static, paths.static_server_template(), paths.universal_server_template())
    };

    let entry = paths.server_entry();
    let mut quarantined = Vec::new();
    let mut ops = Vec::new();
    for displaced in [entry.as_str(), inactive.as_str()] {
        if !tree.exists(displaced) {
            continue;
        }
        let target = quarantine_path(tree, paths, displaced, stamp);
        ops.push(TreeOp::rename(displaced, target.clone()));
        quarantined.push(target);
    }
    ops.push(TreeOp::rename(active, entry.clone()));
    tree.apply_all(&ops)?;

    let workspace = workspace_config(tree, paths)?;
    let browser = workspace.browser_dist_folder(&state.client_project)?;
    let server = workspace.server_dist_folder(&state.client_project)?;
    template_overlay::substitute(tree, &entry, placeholders::DIST_BROWSER_FOLDER, &browser)?;
    template_overlay::substitute(tree, &entry, placeholders::DIST_SERVER_FOLDER, &server)?;

    tracing::info!(?mode, quarantined = quarantined.len(), "installed server entry");
    Ok(ServerEntry { mode, quarantined })
}

/// Unused quarantine path for `file` under `<directory>/temp/`.
fn quarantine_path(tree: &dyn ProjectTree, paths: &ProjectPaths, file: &str, stamp: &str) -> String {
    let name = file.rsplit('/').next().unwrap_or(file);
    let base = format!("{}/{}.{}", paths.quarantine_dir(), name, stamp);
    let mut candidate = base.clone();
    let mut counter = 1;
    while tree.exists(&candidate) {
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }
    candidate
}
