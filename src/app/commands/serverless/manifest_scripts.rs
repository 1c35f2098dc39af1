use super::dependencies::update_manifest;
use super::project_state::ProjectState;
use crate::domain::scripts::build_scripts;
use crate::domain::{AppError, ServerlessOptions};
use crate::ports::ProjectTree;

/// Write the build and deploy script table into the package manifest.
pub fn apply(
    tree: &mut dyn ProjectTree,
    state: &ProjectState,
    options: &ServerlessOptions,
) -> Result<(), AppError> {
    let scripts = build_scripts(options.provider, state.universal, &state.client_project);
    update_manifest(tree, &state.paths, |manifest| {
        for (name, command) in &scripts {
            manifest.set_script(name, command)?;
        }
        Ok(())
    })
}
