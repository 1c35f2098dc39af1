//! Status command: report what earlier runs set up in a project.

use serde::Deserialize;

use super::serverless::ProjectState;
use crate::domain::{AppError, ProjectPaths, Provider, ServerlessOptions};
use crate::ports::ProjectTree;

/// Snapshot of a project's serverless setup.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub directory: String,
    pub universal_recorded: bool,
    pub serverless_recorded: bool,
    /// Whether the client project has a server-rendering target, when it could be resolved.
    pub universal_build: Option<bool>,
    pub previous: Option<ServerlessOptions>,
    pub descriptor: Option<DescriptorStatus>,
}

impl StatusReport {
    pub fn provider(&self) -> Option<Provider> {
        self.previous.as_ref().map(|options| options.provider)
    }
}

/// Serverless framework descriptor found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorStatus {
    pub path: String,
    pub service: Option<String>,
}

#[derive(Deserialize)]
struct Descriptor {
    service: Option<serde_yaml::Value>,
}

pub fn execute(
    tree: &dyn ProjectTree,
    directory: &str,
    client_project: Option<&str>,
) -> Result<StatusReport, AppError> {
    let paths = ProjectPaths::new(directory);
    let settings = super::serverless::read_settings(tree, &paths)?;
    let previous = settings.previous_serverless();

    let project = client_project
        .map(str::to_string)
        .or_else(|| previous.as_ref().and_then(|options| options.client_project.clone()));
    let universal_build = match project {
        Some(project) => {
            let options = ServerlessOptions {
                directory: directory.to_string(),
                client_project: Some(project),
                ..ServerlessOptions::default()
            }
            .normalized();
            match ProjectState::read(tree, &options) {
                Ok(state) => Some(state.universal),
                Err(AppError::FileNotFound(_)) | Err(AppError::ProjectNotFound(_)) => None,
                Err(err) => return Err(err),
            }
        }
        None => None,
    };

    let descriptor = match previous.as_ref() {
        Some(options) if options.provider.uses_serverless_framework() => {
            read_descriptor(tree, &paths.join(options.descriptor_filename(options.provider)))?
        }
        _ => None,
    };

    Ok(StatusReport {
        directory: paths.directory().to_string(),
        universal_recorded: settings.universal_done(),
        serverless_recorded: settings.serverless_done(),
        universal_build,
        previous,
        descriptor,
    })
}

fn read_descriptor(tree: &dyn ProjectTree, path: &str) -> Result<Option<DescriptorStatus>, AppError> {
    if !tree.exists(path) {
        return Ok(None);
    }
    let content = tree.read(path)?;
    let descriptor: Descriptor = serde_yaml::from_str(&content).map_err(|err| {
        AppError::config_error(format!("Malformed serverless descriptor {}: {}", path, err))
    })?;
    let service = descriptor.service.and_then(|value| match value {
        serde_yaml::Value::String(name) => Some(name),
        serde_yaml::Value::Mapping(map) => {
            map.get("name").and_then(serde_yaml::Value::as_str).map(str::to_string)
        }
        _ => None,
    });
    Ok(Some(DescriptorStatus { path: path.to_string(), service }))
}
