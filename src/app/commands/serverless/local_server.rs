use serde_json::json;

use super::project_state::{ProjectState, workspace_config};
use super::template_overlay;
use crate::domain::AppError;
use crate::domain::template_set::placeholders;
use crate::ports::{ProjectTree, TemplateStore};

const LOCAL_SERVER_TEMPLATE: &str = "local.js";

/// Generate `local.js` and point the webpack server build at the dist folder.
///
/// Returns the resolved dist folder.
pub fn apply(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    state: &ProjectState,
) -> Result<String, AppError> {
    let paths = &state.paths;
    let dist_folder = workspace_config(tree, paths)?.dist_folder(&state.client_project)?;

    let launcher = templates.render(LOCAL_SERVER_TEMPLATE, &json!({ "dist_folder": dist_folder }))?;
    tree.write(&paths.local_server(), &launcher)?;

    template_overlay::substitute(
        tree,
        &paths.webpack_server_config(),
        placeholders::DIST_FOLDER,
        &dist_folder,
    )?;
    Ok(dist_folder)
}
