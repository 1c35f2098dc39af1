pub mod embedded_templates;
pub mod http_reporter;
pub mod npm_installer;
pub mod staged_tree;
pub mod typescript_patcher;

pub use embedded_templates::EmbeddedTemplateStore;
pub use http_reporter::{HttpErrorReporter, NoopErrorReporter, TelemetryConfig, TelemetryReporter};
pub use npm_installer::NpmInstaller;
pub use staged_tree::{ChangeKind, StagedTree, TreeChange};
pub use typescript_patcher::TypeScriptPatcher;
