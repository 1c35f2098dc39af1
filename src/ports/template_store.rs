use serde_json::Value;

use crate::domain::{AppError, TemplateFile, TemplateSet};

/// Port for template overlays and generated-file templates.
pub trait TemplateStore {
    /// Files of a template set, with paths relative to the set root, sorted by path.
    fn template_files(&self, set: TemplateSet) -> Result<Vec<TemplateFile>, AppError>;

    /// Render a generated-file template with the given context.
    fn render(&self, name: &str, context: &Value) -> Result<String, AppError>;
}
