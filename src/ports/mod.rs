mod error_reporter;
mod project_tree;
mod source_patcher;
mod template_store;

pub use error_reporter::{ErrorReporter, FailureReport};
pub use project_tree::ProjectTree;
pub use source_patcher::{InjectedParameter, SourcePatcher};
pub use template_store::TemplateStore;
