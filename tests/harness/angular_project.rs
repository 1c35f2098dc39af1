//! Minimal Angular workspace written to disk for CLI and library tests.

use std::fs;
use std::path::Path;

use serde_json::{Map, json};

const SERVER_BUILDER: &str = "@angular-devkit/build-angular:server";

const APP_COMPONENT: &str = "import { Component } from '@angular/core';

@Component({
  selector: 'app-root',
  templateUrl: './app.component.html'
})
export class AppComponent {
  title = 'app';
}
";

/// Builder for a project laid out the way the Angular CLI generates it.
pub(crate) struct AngularProject {
    name: String,
    universal: bool,
}

impl AngularProject {
    /// Project with a server-rendering target.
    pub(crate) fn universal(name: &str) -> Self {
        Self { name: name.to_string(), universal: true }
    }

    /// Browser-only project.
    pub(crate) fn static_site(name: &str) -> Self {
        Self { name: name.to_string(), universal: false }
    }

    /// Write the project files below `dir`.
    pub(crate) fn write_to(&self, dir: &Path) {
        write(dir, "package.json", &self.package_json());
        write(dir, "angular.json", &self.workspace_config());
        write(
            dir,
            "src/environments/environment.ts",
            "export const environment = {\n  production: false\n};\n",
        );
        write(
            dir,
            "src/environments/environment.prod.ts",
            "export const environment = {\n  production: true\n};\n",
        );
        write(dir, "src/app/app.component.ts", APP_COMPONENT);
    }

    fn package_json(&self) -> String {
        let manifest = json!({
            "name": self.name,
            "version": "0.0.0",
            "scripts": { "ng": "ng", "start": "ng serve", "build": "ng build" },
            "dependencies": { "@angular/core": "^6.0.3" }
        });
        serde_json::to_string_pretty(&manifest).unwrap()
    }

    fn workspace_config(&self) -> String {
        let output = if self.universal { "dist/browser".to_string() } else { format!("dist/{}", self.name) };
        let mut architect = json!({
            "build": {
                "builder": "@angular-devkit/build-angular:browser",
                "options": { "outputPath": output }
            }
        });
        if self.universal {
            architect["server"] = json!({
                "builder": SERVER_BUILDER,
                "options": { "outputPath": "dist/server" }
            });
        }
        let mut projects = Map::new();
        projects.insert(self.name.clone(), json!({ "root": "", "architect": architect }));
        serde_json::to_string_pretty(&json!({ "version": 1, "projects": projects })).unwrap()
    }
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
