//! Serverless environment variant and base-href entries.

use super::project_state::{ProjectState, workspace_config};
use crate::domain::environment_file;
use crate::domain::paths::{DEFAULT_ENVIRONMENT_FILE, SERVERLESS_ENVIRONMENT_FILE};
use crate::domain::{AppError, Provider, ServerlessOptions};
use crate::ports::ProjectTree;

const BASE_HREF_KEY: &str = "baseHref";
const SERVERLESS_MARKER: &str = "serverless";

/// Whether the environment and app-entry patches apply to this run.
pub fn applies(state: &ProjectState, options: &ServerlessOptions) -> bool {
    state.universal && options.provider != Provider::Firebase
}

/// Create the serverless environment, set `baseHref` in every environment
/// file, and register the serverless build configuration.
///
/// Returns false when skipped.
pub fn apply(
    tree: &mut dyn ProjectTree,
    state: &ProjectState,
    options: &ServerlessOptions,
) -> Result<bool, AppError> {
    if !applies(state, options) {
        return Ok(false);
    }
    let paths = &state.paths;

    let production = tree.read(&paths.production_environment())?;
    tree.write(&paths.serverless_environment(), &production)?;

    let serverless_base = options.provider.serverless_base_path();
    for path in tree.visit_dir(&paths.environments_dir())? {
        if !path.ends_with(".ts") {
            continue;
        }
        let file_name = path.rsplit('/').next().unwrap_or(&path);
        let base_href = if file_name.contains(SERVERLESS_MARKER) { serverless_base } else { "/" };
        let content = tree.read(&path)?;
        let patched = environment_file::set_entry(&content, BASE_HREF_KEY, base_href)
            .map_err(|err| AppError::source_patch(path.clone(), err))?;
        if patched != content {
            tree.overwrite(&path, &patched)?;
        }
    }

    let config_path = paths.workspace_config();
    let mut workspace = workspace_config(tree, paths)?;
    let updated = workspace.add_serverless_configuration(
        &state.client_project,
        DEFAULT_ENVIRONMENT_FILE,
        SERVERLESS_ENVIRONMENT_FILE,
    )?;
    tree.overwrite(&config_path, &workspace.to_json_string()?)?;
    tracing::info!(targets = updated, "registered serverless build configuration");
    Ok(true)
}
