//! Project path catalog.
//!
//! Every path is relative to the tree root and uses `/` separators.

use super::settings::TOOL_SETTINGS_FILE;

/// Strip `./` prefixes, trailing slashes and duplicate separators. `.` becomes empty.
pub fn normalize_directory(directory: &str) -> String {
    directory
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Paths of the files the pipeline reads and writes inside one project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    directory: String,
}

impl ProjectPaths {
    pub fn new(directory: &str) -> Self {
        Self { directory: normalize_directory(directory) }
    }

    /// Normalized project directory; empty for the tree root.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Join a project-relative path onto the project directory.
    pub fn join(&self, relative: &str) -> String {
        let relative = relative.trim_start_matches("./").trim_start_matches('/');
        if self.directory.is_empty() {
            relative.to_string()
        } else if relative.is_empty() {
            self.directory.clone()
        } else {
            format!("{}/{}", self.directory, relative)
        }
    }

    pub fn package_json(&self) -> String {
        self.join("package.json")
    }

    pub fn workspace_config(&self) -> String {
        self.join("angular.json")
    }

    pub fn tool_settings(&self) -> String {
        self.join(TOOL_SETTINGS_FILE)
    }

    pub fn server_entry(&self) -> String {
        self.join("server.ts")
    }

    pub fn universal_server_template(&self) -> String {
        self.join("server_universal.ts")
    }

    pub fn static_server_template(&self) -> String {
        self.join("server_static.ts")
    }

    pub fn quarantine_dir(&self) -> String {
        self.join("temp")
    }

    pub fn webpack_server_config(&self) -> String {
        self.join("webpack.server.config.js")
    }

    pub fn local_server(&self) -> String {
        self.join("local.js")
    }

    pub fn environments_dir(&self) -> String {
        self.join("src/environments")
    }

    pub fn production_environment(&self) -> String {
        self.join("src/environments/environment.prod.ts")
    }

    pub fn serverless_environment(&self) -> String {
        self.join("src/environments/environment.serverless.ts")
    }

    pub fn app_component(&self) -> String {
        self.join("src/app/app.component.ts")
    }

    pub fn gitignore(&self) -> String {
        self.join(".gitignore")
    }

    pub fn firebase_json(&self) -> String {
        self.join("firebase.json")
    }

    pub fn firebaserc(&self) -> String {
        self.join(".firebaserc")
    }

    pub fn functions_package_json(&self) -> String {
        self.join("functions/package.json")
    }
}

/// Environment file replaced in serverless builds, relative to the project.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "src/environments/environment.ts";

/// Serverless environment variant, relative to the project.
pub const SERVERLESS_ENVIRONMENT_FILE: &str = "src/environments/environment.serverless.ts";
