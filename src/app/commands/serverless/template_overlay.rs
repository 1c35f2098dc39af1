//! Merge embedded template sets into the project directory.

use crate::domain::{AppError, MergeStrategy, ProjectPaths, TemplateSet, TreeOp};
use crate::ports::{ProjectTree, TemplateStore};

/// Merge a template set into the project directory. Returns the tree paths written.
pub fn merge(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    set: TemplateSet,
    paths: &ProjectPaths,
    strategy: MergeStrategy,
) -> Result<Vec<String>, AppError> {
    let mut ops = Vec::new();
    for file in templates.template_files(set)? {
        let target = paths.join(&file.path);
        match strategy {
            MergeStrategy::Overwrite => ops.push(TreeOp::write(target, file.content)),
            MergeStrategy::Error => {
                if !tree.exists(&target) {
                    ops.push(TreeOp::create(target, file.content));
                } else if tree.read(&target)? != file.content {
                    return Err(AppError::MergeConflict {
                        template: set.dir_name().to_string(),
                        path: target,
                    });
                }
            }
        }
    }

    tree.apply_all(&ops)?;
    tracing::debug!(set = set.dir_name(), files = ops.len(), "merged template set");
    Ok(ops.iter().filter_map(|op| op.target().map(str::to_string)).collect())
}

/// Replace every occurrence of `placeholder` in a tree file.
pub fn substitute(
    tree: &mut dyn ProjectTree,
    path: &str,
    placeholder: &str,
    value: &str,
) -> Result<(), AppError> {
    let content = tree.read(path)?;
    if content.contains(placeholder) {
        tree.overwrite(path, &content.replace(placeholder, value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{EmbeddedTemplateStore, StagedTree};

    #[test]
    fn overwrite_replaces_existing_files() {
        let mut tree = StagedTree::with_files([("app/server_static.ts", "custom")]);
        let written = merge(
            &mut tree,
            &EmbeddedTemplateStore::new(),
            TemplateSet::Common,
            &ProjectPaths::new("app"),
            MergeStrategy::Overwrite,
        )
        .unwrap();

        assert_eq!(written.len(), 3);
        assert!(tree.read("app/server_static.ts").unwrap().contains("__distBrowserFolder__"));
        assert!(tree.exists("app/webpack.server.config.js"));
    }

    #[test]
    fn error_strategy_rejects_differing_files() {
        let mut tree = StagedTree::with_files([("app/lambda.js", "// mine")]);
        let err = merge(
            &mut tree,
            &EmbeddedTemplateStore::new(),
            TemplateSet::Aws,
            &ProjectPaths::new("app"),
            MergeStrategy::Error,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MergeConflict { ref path, .. } if path == "app/lambda.js"));
    }

    #[test]
    fn error_strategy_accepts_identical_files() {
        let store = EmbeddedTemplateStore::new();
        let paths = ProjectPaths::new(".");
        let mut tree = StagedTree::in_memory();
        merge(&mut tree, &store, TemplateSet::Gcloud, &paths, MergeStrategy::Error).unwrap();
        let again = merge(&mut tree, &store, TemplateSet::Gcloud, &paths, MergeStrategy::Error)
            .unwrap();
        assert!(again.is_empty());
        assert!(tree.exists("index.js"));
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let mut tree = StagedTree::with_files([("serverless.yml", "__appName__ __appName__")]);
        substitute(&mut tree, "serverless.yml", "__appName__", "shop").unwrap();
        assert_eq!(tree.read("serverless.yml").unwrap(), "shop shop");
    }
}
