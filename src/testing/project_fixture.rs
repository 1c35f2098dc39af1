use std::collections::BTreeMap;

use serde_json::json;

use crate::adapters::StagedTree;
use crate::domain::ServerlessOptions;
use crate::domain::workspace_config::SERVER_BUILDER;

const APP_COMPONENT: &str = "import { Component } from '@angular/core';

@Component({
  selector: 'app-root',
  templateUrl: './app.component.html',
  styleUrls: ['./app.component.css']
})
export class AppComponent {
  title = 'app';
}
";

/// Builder for a minimal Angular CLI project inside a tree.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    project: String,
    directory: String,
    universal: bool,
    overrides: BTreeMap<String, Option<String>>,
}

impl ProjectFixture {
    /// Project with a server-rendering build target, in a directory named after it.
    pub fn universal(project: &str) -> Self {
        Self::new(project, true)
    }

    /// Project with only a browser build.
    pub fn static_site(project: &str) -> Self {
        Self::new(project, false)
    }

    fn new(project: &str, universal: bool) -> Self {
        Self {
            project: project.to_string(),
            directory: project.to_string(),
            universal,
            overrides: BTreeMap::new(),
        }
    }

    pub fn in_directory(mut self, directory: &str) -> Self {
        self.directory = directory.to_string();
        self
    }

    /// Add or replace a file; `path` is relative to the tree root.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.overrides.insert(path.to_string(), Some(content.to_string()));
        self
    }

    /// Drop a generated file; `path` is relative to the tree root.
    pub fn without(mut self, path: &str) -> Self {
        self.overrides.insert(path.to_string(), None);
        self
    }

    /// Default options for a project in `directory` named `app`.
    pub fn options(directory: &str) -> ServerlessOptions {
        ServerlessOptions {
            directory: directory.to_string(),
            project: Some("app".to_string()),
            client_project: Some("app".to_string()),
            ..ServerlessOptions::default()
        }
        .normalized()
    }

    pub fn files(&self) -> BTreeMap<String, String> {
        let join = |relative: &str| {
            if self.directory.is_empty() || self.directory == "." {
                relative.to_string()
            } else {
                format!("{}/{}", self.directory, relative)
            }
        };

        let mut files = BTreeMap::new();
        files.insert(join("package.json"), self.package_json());
        files.insert(join("angular.json"), self.workspace_config());
        files.insert(
            join("src/environments/environment.ts"),
            "export const environment = {\n  production: false\n};\n".to_string(),
        );
        files.insert(
            join("src/environments/environment.prod.ts"),
            "export const environment = {\n  production: true\n};\n".to_string(),
        );
        files.insert(join("src/app/app.component.ts"), APP_COMPONENT.to_string());

        for (path, content) in &self.overrides {
            match content {
                Some(content) => files.insert(path.clone(), content.clone()),
                None => files.remove(path),
            };
        }
        files
    }

    pub fn tree(&self) -> StagedTree {
        StagedTree::with_files(self.files())
    }

    fn package_json(&self) -> String {
        let manifest = json!({
            "name": self.project,
            "version": "0.0.0",
            "scripts": {
                "ng": "ng",
                "start": "ng serve",
                "build": "ng build",
                "test": "ng test"
            },
            "dependencies": { "@angular/core": "^6.0.3" },
            "devDependencies": { "@angular/cli": "~6.0.8" }
        });
        serde_json::to_string_pretty(&manifest).unwrap_or_default()
    }

    fn workspace_config(&self) -> String {
        let browser_output = if self.universal {
            "dist/browser".to_string()
        } else {
            format!("dist/{}", self.project)
        };
        let mut architect = json!({
            "build": {
                "builder": "@angular-devkit/build-angular:browser",
                "options": { "outputPath": browser_output, "main": "src/main.ts" }
            }
        });
        if self.universal {
            architect["server"] = json!({
                "builder": SERVER_BUILDER,
                "options": { "outputPath": "dist/server", "main": "src/main.server.ts" }
            });
        }
        let mut projects = serde_json::Map::new();
        projects.insert(self.project.clone(), json!({ "root": "", "architect": architect }));
        let config = json!({
            "version": 1,
            "projects": projects,
            "defaultProject": self.project
        });
        serde_json::to_string_pretty(&config).unwrap_or_default()
    }
}
