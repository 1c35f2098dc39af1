use serde::{Deserialize, Serialize};

use super::package_manifest::NodeDependency;
use super::template_set::TemplateSet;

/// Target serverless hosting platform.
///
/// Unknown names deserialize to `None`, which runs no provider-specific branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Gcloud,
    Firebase,
    #[default]
    #[serde(other)]
    None,
}

const SERVERLESS_FRAMEWORK: NodeDependency = NodeDependency::dev("serverless", "1.40.0");

const AWS_DEPENDENCIES: &[NodeDependency] = &[
    NodeDependency::runtime("aws-serverless-express", "^3.2.0"),
    NodeDependency::dev("serverless-apigw-binary", "^0.4.4"),
];

const GCLOUD_DEPENDENCIES: &[NodeDependency] = &[
    NodeDependency::dev("firebase-admin", "^5.11.0"),
    NodeDependency::dev("firebase-functions", "^0.9.1"),
    NodeDependency::runtime("serverless-google-cloudfunctions", "^1.1.1"),
];

/// Default name of the serverless framework descriptor.
pub const DEFAULT_DESCRIPTOR: &str = "serverless.yml";

impl Provider {
    /// Providers a user can pick.
    pub const SELECTABLE: [Provider; 3] = [Provider::Aws, Provider::Gcloud, Provider::Firebase];

    /// Parse a provider name. Anything unrecognized maps to `Provider::None`.
    pub fn from_name(name: &str) -> Provider {
        match name.trim().to_ascii_lowercase().as_str() {
            "aws" => Provider::Aws,
            "gcloud" => Provider::Gcloud,
            "firebase" => Provider::Firebase,
            _ => Provider::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Gcloud => "gcloud",
            Provider::Firebase => "firebase",
            Provider::None => "none",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Aws => "AWS Lambda",
            Provider::Gcloud => "Google Cloud Functions",
            Provider::Firebase => "Firebase Functions",
            Provider::None => "no provider",
        }
    }

    /// URL prefix the platform mounts the application under.
    pub fn serverless_base_path(self) -> &'static str {
        match self {
            Provider::Aws => "/production/",
            Provider::Gcloud => "/http/",
            Provider::Firebase | Provider::None => "/",
        }
    }

    /// Whether deployment goes through the serverless framework CLI.
    pub fn uses_serverless_framework(self) -> bool {
        matches!(self, Provider::Aws | Provider::Gcloud)
    }

    /// Template overlay merged for this provider.
    pub fn template_set(self) -> Option<TemplateSet> {
        match self {
            Provider::Aws => Some(TemplateSet::Aws),
            Provider::Gcloud => Some(TemplateSet::Gcloud),
            Provider::Firebase => Some(TemplateSet::Firebase),
            Provider::None => None,
        }
    }

    /// Descriptor file name inside the provider template set, before renaming.
    pub fn descriptor_template(self) -> Option<&'static str> {
        match self {
            Provider::Aws => Some("serverless-aws.yml"),
            Provider::Gcloud => Some("serverless-gcloud.yml"),
            Provider::Firebase | Provider::None => None,
        }
    }

    /// Platform entry file generated by the provider template set.
    pub fn entry_artifact(self) -> Option<&'static str> {
        match self {
            Provider::Aws => Some("lambda.js"),
            Provider::Gcloud => Some("index.js"),
            Provider::Firebase => Some("functions/index.js"),
            Provider::None => None,
        }
    }

    /// Dependencies added to the package manifest by the provider branch.
    pub fn dependencies(self) -> Vec<NodeDependency> {
        match self {
            Provider::Aws => std::iter::once(SERVERLESS_FRAMEWORK)
                .chain(AWS_DEPENDENCIES.iter().copied())
                .collect(),
            Provider::Gcloud => std::iter::once(SERVERLESS_FRAMEWORK)
                .chain(GCLOUD_DEPENDENCIES.iter().copied())
                .collect(),
            Provider::Firebase | Provider::None => Vec::new(),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
