//! Read-only view of the project the pipeline runs against.

use crate::domain::{AppError, ProjectPaths, ServerlessOptions, ToolSettings, WorkspaceConfig};
use crate::ports::ProjectTree;

/// State threaded through every pipeline stage.
///
/// Read once at the start of a run; the settings record is merged with this
/// invocation's options and written back by the last stage.
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub paths: ProjectPaths,
    pub client_project: String,
    pub settings: ToolSettings,
    pub universal: bool,
}

impl ProjectState {
    pub fn read(tree: &dyn ProjectTree, options: &ServerlessOptions) -> Result<Self, AppError> {
        let paths = ProjectPaths::new(&options.directory);
        let client_project = options.client_project()?.to_string();
        let settings = read_settings(tree, &paths)?;
        let universal = is_universal(tree, &paths, &client_project)?;
        Ok(Self { paths, client_project, settings, universal })
    }

    /// Whether a previous run already set up serverless scaffolding.
    pub fn was_serverless_configured(&self) -> bool {
        self.settings.serverless_done()
    }
}

/// Parse the workspace configuration. The file is required.
pub fn workspace_config(
    tree: &dyn ProjectTree,
    paths: &ProjectPaths,
) -> Result<WorkspaceConfig, AppError> {
    let path = paths.workspace_config();
    let content = tree.read(&path)?;
    WorkspaceConfig::parse(&path, &content)
}

/// True if the client project declares a server-rendering build target.
pub fn is_universal(
    tree: &dyn ProjectTree,
    paths: &ProjectPaths,
    client_project: &str,
) -> Result<bool, AppError> {
    workspace_config(tree, paths)?.is_universal(client_project)
}

/// Tool settings record; an absent file reads as an empty record.
pub fn read_settings(tree: &dyn ProjectTree, paths: &ProjectPaths) -> Result<ToolSettings, AppError> {
    let path = paths.tool_settings();
    if !tree.exists(&path) {
        return Ok(ToolSettings::default());
    }
    ToolSettings::parse(&path, &tree.read(&path)?)
}
