pub mod environment_file;
pub mod error;
pub mod options;
pub mod package_manifest;
pub mod paths;
pub mod provider;
pub mod scripts;
pub mod settings;
pub mod source_outline;
pub mod template_set;
pub mod tree_op;
pub mod workspace_config;

pub use error::{AppError, PatchError};
pub use options::{DescriptorOverride, ProviderOverrides, ServerlessOptions};
pub use package_manifest::{COMMON_DEPENDENCIES, DependencyKind, NodeDependency, PackageManifest};
pub use paths::ProjectPaths;
pub use provider::{DEFAULT_DESCRIPTOR, Provider};
pub use settings::{TOOL_SETTINGS_FILE, ToolSettings};
pub use template_set::{MergeStrategy, TemplateFile, TemplateSet};
pub use tree_op::TreeOp;
pub use workspace_config::WorkspaceConfig;

/// Dependency installation deferred until after the tree is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTask {
    /// Directory to run the install in, relative to the tree root.
    pub working_directory: String,
}
