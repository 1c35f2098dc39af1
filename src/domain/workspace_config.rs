//! Read and patch the Angular CLI workspace configuration (`angular.json`).

use serde_json::{Map, Value, json};

use super::AppError;

/// Builder that marks an architect target as a server-rendering build.
pub const SERVER_BUILDER: &str = "@angular-devkit/build-angular:server";

const DEFAULT_SERVER_DIST: &str = "dist/server";
const SERVERLESS_CONFIGURATION: &str = "serverless";

/// Parsed `angular.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceConfig {
    path: String,
    document: Value,
}

impl WorkspaceConfig {
    pub fn parse(path: &str, content: &str) -> Result<Self, AppError> {
        let document: Value =
            serde_json::from_str(content).map_err(|err| AppError::malformed_json(path, err))?;
        if !document.is_object() {
            return Err(AppError::malformed_json(path, "expected a JSON object at the root"));
        }
        Ok(Self { path: path.to_string(), document })
    }

    fn project(&self, project: &str) -> Result<&Value, AppError> {
        self.document
            .get("projects")
            .and_then(|projects| projects.get(project))
            .ok_or_else(|| AppError::ProjectNotFound(project.to_string()))
    }

    fn architect(&self, project: &str) -> Result<Option<&Map<String, Value>>, AppError> {
        Ok(self.project(project)?.get("architect").and_then(Value::as_object))
    }

    fn server_targets(&self, project: &str) -> Result<Vec<&Value>, AppError> {
        Ok(self
            .architect(project)?
            .map(|architect| {
                architect
                    .values()
                    .filter(|target| {
                        target.get("builder").and_then(Value::as_str) == Some(SERVER_BUILDER)
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    /// True when the project declares a server-rendering build target.
    pub fn is_universal(&self, project: &str) -> Result<bool, AppError> {
        Ok(!self.server_targets(project)?.is_empty())
    }

    /// Output folder of the browser build.
    pub fn browser_dist_folder(&self, project: &str) -> Result<String, AppError> {
        self.architect(project)?
            .and_then(|architect| architect.get("build"))
            .and_then(|build| build.pointer("/options/outputPath"))
            .and_then(Value::as_str)
            .map(trim_folder)
            .ok_or_else(|| {
                AppError::malformed_json(
                    self.path.clone(),
                    format!("project '{}' has no architect.build.options.outputPath", project),
                )
            })
    }

    /// Output folder of the server build; `dist/server` when none is declared.
    pub fn server_dist_folder(&self, project: &str) -> Result<String, AppError> {
        Ok(self
            .server_targets(project)?
            .into_iter()
            .find_map(|target| target.pointer("/options/outputPath").and_then(Value::as_str))
            .map(trim_folder)
            .unwrap_or_else(|| DEFAULT_SERVER_DIST.to_string()))
    }

    /// Folder holding the server bundle consumed by `local.js` and webpack.
    ///
    /// Universal projects share a parent folder between browser and server
    /// output; static projects serve straight from the browser output.
    pub fn dist_folder(&self, project: &str) -> Result<String, AppError> {
        let browser = self.browser_dist_folder(project)?;
        if !self.is_universal(project)? {
            return Ok(browser);
        }
        Ok(match browser.rsplit_once('/') {
            Some((parent, _)) if !parent.is_empty() => parent.to_string(),
            _ => browser,
        })
    }

    /// Give every server target a `serverless` configuration that swaps the
    /// default environment file for the serverless variant.
    ///
    /// Returns the number of targets updated.
    pub fn add_serverless_configuration(
        &mut self,
        project: &str,
        replace: &str,
        with: &str,
    ) -> Result<usize, AppError> {
        self.project(project)?;
        let path = self.path.clone();
        let architect = self
            .document
            .pointer_mut(&format!("/projects/{}/architect", escape_pointer(project)))
            .and_then(Value::as_object_mut);
        let Some(architect) = architect else {
            return Ok(0);
        };

        let mut updated = 0;
        for target in architect.values_mut() {
            if target.get("builder").and_then(Value::as_str) != Some(SERVER_BUILDER) {
                continue;
            }
            let Some(target) = target.as_object_mut() else { continue };
            let configurations = target
                .entry("configurations")
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or_else(|| {
                    AppError::malformed_json(path.clone(), "\"configurations\" must be an object")
                })?;
            configurations.insert(
                SERVERLESS_CONFIGURATION.to_string(),
                json!({ "fileReplacements": [ { "replace": replace, "with": with } ] }),
            );
            updated += 1;
        }
        Ok(updated)
    }

    /// Serialize with four-space indentation, matching the Angular CLI.
    pub fn to_json_string(&self) -> Result<String, AppError> {
        use serde::Serialize;

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.document
            .serialize(&mut serializer)
            .map_err(|err| AppError::malformed_json(self.path.clone(), err))?;
        let mut out = String::from_utf8(buffer)
            .map_err(|err| AppError::malformed_json(self.path.clone(), err))?;
        out.push('\n');
        Ok(out)
    }
}

fn trim_folder(folder: &str) -> String {
    folder.trim().trim_start_matches("./").trim_end_matches('/').to_string()
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}
