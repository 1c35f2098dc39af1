use std::sync::OnceLock;

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use crate::domain::{AppError, TemplateFile, TemplateSet};
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");
static GENERATED_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/generated");

/// Suffix of generated-file templates; the rendered file drops it.
const TEMPLATE_SUFFIX: &str = ".j2";

/// Template store backed by assets compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template_files(&self, set: TemplateSet) -> Result<Vec<TemplateFile>, AppError> {
        let root = TEMPLATES_DIR
            .get_dir(set.dir_name())
            .ok_or_else(|| AppError::TemplateMissing(set.dir_name().to_string()))?;

        let prefix = format!("{}/", set.dir_name());
        let mut files = Vec::new();
        collect_files(root, &mut files);
        for file in &mut files {
            if let Some(stripped) = file.path.strip_prefix(&prefix) {
                file.path = stripped.to_string();
            }
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn render(&self, name: &str, context: &Value) -> Result<String, AppError> {
        let file_name = format!("{name}{TEMPLATE_SUFFIX}");
        let template = GENERATED_DIR
            .get_file(&file_name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::TemplateMissing(name.to_string()))?;

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, context).map_err(|err| AppError::TemplateRender {
            name: name.to_string(),
            details: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn collect_files(dir: &'static Dir, files: &mut Vec<TemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    let path = file
                        .path()
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy().to_string())
                        .collect::<Vec<_>>()
                        .join("/");
                    files.push(TemplateFile { path, content: content.to_string() });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}
