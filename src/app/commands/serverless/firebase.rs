//! Firebase hosting and functions scaffolding.

use serde_json::{Map, Value, json};

use super::dependencies::update_manifest;
use super::project_state::ProjectState;
use super::template_overlay;
use crate::domain::scripts::FIREBASE_PROD_DEPLOY;
use crate::domain::{AppError, MergeStrategy, ServerlessOptions, TemplateSet};
use crate::ports::{ProjectTree, TemplateStore};

const FIREBASE_ADMIN_VERSION: &str = "~5.12.0";
const FIREBASE_FUNCTIONS_VERSION: &str = "^1.0.1";
const FUNCTIONS_NODE_MODULES: &str = "/functions/node_modules/";
const FUNCTIONS_PACKAGE_TEMPLATE: &str = "functions-package.json";

pub fn apply(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    state: &ProjectState,
    options: &ServerlessOptions,
) -> Result<(), AppError> {
    let paths = &state.paths;
    ignore_functions_modules(tree, &paths.gitignore())?;

    let functions_package = templates.render(
        FUNCTIONS_PACKAGE_TEMPLATE,
        &json!({
            "firebase_admin_version": FIREBASE_ADMIN_VERSION,
            "firebase_functions_version": FIREBASE_FUNCTIONS_VERSION,
        }),
    )?;
    tree.write(&paths.functions_package_json(), &functions_package)?;

    let firebaserc = paths.firebaserc();
    if !tree.exists(&firebaserc) {
        let settings = match options.firebase_project.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => json!({ "projects": { "default": id } }),
            _ => json!({}),
        };
        tree.create(&firebaserc, &to_pretty_json(&firebaserc, &settings)?)?;
    }

    let firebase_json = paths.firebase_json();
    let mut document = if tree.exists(&firebase_json) {
        match serde_json::from_str::<Value>(&tree.read(&firebase_json)?) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(AppError::malformed_json(
                    firebase_json,
                    "expected a JSON object at the root",
                ));
            }
            Err(err) => return Err(AppError::malformed_json(firebase_json, err)),
        }
    } else {
        Map::new()
    };
    document.insert("hosting".to_string(), hosting());
    tree.write(&firebase_json, &to_pretty_json(&firebase_json, &Value::Object(document))?)?;

    update_manifest(tree, paths, |manifest| {
        manifest.set_script("build:prod:deploy", FIREBASE_PROD_DEPLOY)
    })?;

    template_overlay::merge(tree, templates, TemplateSet::Firebase, paths, MergeStrategy::Overwrite)?;
    Ok(())
}

fn hosting() -> Value {
    json!({
        "public": "functions/dist",
        "rewrites": [
            { "source": "**", "function": "http" }
        ]
    })
}

/// Append the functions `node_modules` entry to `.gitignore`, creating it if needed.
fn ignore_functions_modules(tree: &mut dyn ProjectTree, path: &str) -> Result<(), AppError> {
    if !tree.exists(path) {
        return tree.create(path, &format!("{}\n", FUNCTIONS_NODE_MODULES));
    }
    let content = tree.read(path)?;
    if content.lines().any(|line| line.trim() == FUNCTIONS_NODE_MODULES) {
        return Ok(());
    }
    let separator = if content.is_empty() || content.ends_with('\n') { "" } else { "\n" };
    tree.overwrite(path, &format!("{}{}{}\n", content, separator, FUNCTIONS_NODE_MODULES))
}

fn to_pretty_json(path: &str, value: &Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::malformed_json(path, err))
}
