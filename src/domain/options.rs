use serde::{Deserialize, Serialize};

use super::paths::normalize_directory;
use super::provider::DEFAULT_DESCRIPTOR;
use super::{AppError, Provider};

/// Descriptor filename override for a serverless framework provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Provider-specific option groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderOverrides {
    pub aws: DescriptorOverride,
    pub gcloud: DescriptorOverride,
}

/// Options for adding serverless scaffolding to a project.
///
/// Serialized with camelCase keys; this is also the shape persisted under
/// `serverless` in the tool settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerlessOptions {
    /// Project directory, relative to the tree root.
    pub directory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_project: Option<String>,
    pub provider: Provider,
    pub serverless: ProviderOverrides,
    pub skip_install: bool,
    pub disable_telemetry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firebase_project: Option<String>,
}

impl Default for ServerlessOptions {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            project: None,
            client_project: None,
            provider: Provider::None,
            serverless: ProviderOverrides::default(),
            skip_install: false,
            disable_telemetry: false,
            firebase_project: None,
        }
    }
}

impl ServerlessOptions {
    /// Parse an options file written in TOML.
    pub fn from_toml(path: &str, content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|err| AppError::MalformedOptions {
            path: path.to_string(),
            details: err.to_string(),
        })
    }

    /// Fill derived fields: `clientProject` falls back to `project`, the
    /// directory is normalized, and blank overrides are dropped.
    pub fn normalized(mut self) -> Self {
        if self.client_project.as_deref().is_none_or(|name| name.trim().is_empty()) {
            self.client_project = self.project.clone();
        }
        self.directory = match normalize_directory(&self.directory) {
            dir if dir.is_empty() => ".".to_string(),
            dir => dir,
        };
        for filename in [&mut self.serverless.aws.filename, &mut self.serverless.gcloud.filename] {
            if filename.as_deref().is_some_and(|name| name.trim().is_empty()) {
                *filename = None;
            }
        }
        self
    }

    /// Client project name, required by every pipeline step.
    pub fn client_project(&self) -> Result<&str, AppError> {
        self.client_project
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                AppError::config_error("A client project is required (set --client-project or --project)")
            })
    }

    /// Descriptor filename for the given provider, honoring overrides.
    pub fn descriptor_filename(&self, provider: Provider) -> &str {
        let configured = match provider {
            Provider::Aws => self.serverless.aws.filename.as_deref(),
            Provider::Gcloud => self.serverless.gcloud.filename.as_deref(),
            Provider::Firebase | Provider::None => None,
        };
        configured.unwrap_or(DEFAULT_DESCRIPTOR)
    }
}
