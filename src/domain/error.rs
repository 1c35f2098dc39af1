use std::io;

use thiserror::Error;

/// Failure raised by the source-patching collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PatchError(pub String);

impl PatchError {
    pub fn new<S: Into<String>>(reason: S) -> Self {
        PatchError(reason.into())
    }
}

/// Library-wide error type for slsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An expected project or template file is absent.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A file was created where one already exists.
    #[error("File already exists: {0}")]
    FileExists(String),

    /// A fail-on-conflict template merge met a different existing file.
    #[error("Merge conflict while applying '{template}' templates: {path} already exists")]
    MergeConflict { template: String, path: String },

    /// A JSON document in the project could not be parsed or has the wrong shape.
    #[error("Malformed JSON in {path}: {details}")]
    MalformedJson { path: String, details: String },

    /// Options file could not be parsed.
    #[error("Malformed options file {path}: {details}")]
    MalformedOptions { path: String, details: String },

    /// Client project is not declared in the workspace configuration.
    #[error("Project '{0}' not found in angular.json")]
    ProjectNotFound(String),

    /// Source file could not be patched.
    #[error("Unable to patch {path}: {source}")]
    SourcePatch {
        path: String,
        #[source]
        source: PatchError,
    },

    /// Path escapes the project root or is otherwise unusable.
    #[error("Invalid project path '{0}': must be relative and stay inside the project root")]
    InvalidPath(String),

    /// Embedded template set or generated-file template is missing.
    #[error("Template '{0}' is missing from the embedded assets")]
    TemplateMissing(String),

    /// Template rendering failed.
    #[error("Failed to render template {name}: {details}")]
    TemplateRender { name: String, details: String },

    /// Error telemetry delivery failed.
    #[error("Telemetry delivery failed: {0}")]
    Telemetry(String),

    /// Dependency installation failed.
    #[error("Dependency install failed in {directory}: {details}")]
    InstallFailed { directory: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn malformed_json<P: Into<String>>(path: P, err: impl std::fmt::Display) -> Self {
        AppError::MalformedJson { path: path.into(), details: err.to_string() }
    }

    pub fn source_patch<P: Into<String>>(path: P, source: PatchError) -> Self {
        AppError::SourcePatch { path: path.into(), source }
    }

    /// Stable variant name, used as the error class in telemetry reports.
    pub fn class_name(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IoError",
            AppError::Configuration(_) => "ConfigurationError",
            AppError::FileNotFound(_) => "FileNotFound",
            AppError::FileExists(_) => "FileExists",
            AppError::MergeConflict { .. } => "MergeConflict",
            AppError::MalformedJson { .. } => "MalformedJson",
            AppError::MalformedOptions { .. } => "MalformedOptions",
            AppError::ProjectNotFound(_) => "ProjectNotFound",
            AppError::SourcePatch { .. } => "SourcePatchError",
            AppError::InvalidPath(_) => "InvalidPath",
            AppError::TemplateMissing(_) => "TemplateMissing",
            AppError::TemplateRender { .. } => "TemplateRenderError",
            AppError::Telemetry(_) => "TelemetryError",
            AppError::InstallFailed { .. } => "InstallFailed",
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MalformedJson { .. }
            | AppError::MalformedOptions { .. }
            | AppError::SourcePatch { .. }
            | AppError::InvalidPath(_)
            | AppError::TemplateRender { .. } => io::ErrorKind::InvalidInput,
            AppError::FileNotFound(_)
            | AppError::ProjectNotFound(_)
            | AppError::TemplateMissing(_) => io::ErrorKind::NotFound,
            AppError::FileExists(_) | AppError::MergeConflict { .. } => {
                io::ErrorKind::AlreadyExists
            }
            AppError::Telemetry(_) | AppError::InstallFailed { .. } => io::ErrorKind::Other,
        }
    }
}
