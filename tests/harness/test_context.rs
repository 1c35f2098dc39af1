//! Shared testing harness for `slsgen` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::AngularProject;

/// Isolated project root for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Empty root directory.
    pub(crate) fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Root with a universal Angular project named `app` in `app/`.
    pub(crate) fn universal_project() -> Self {
        let ctx = Self::new();
        AngularProject::universal("app").write_to(&ctx.project_dir());
        ctx
    }

    /// Root with a browser-only Angular project named `app` in `app/`.
    pub(crate) fn static_project() -> Self {
        let ctx = Self::new();
        AngularProject::static_site("app").write_to(&ctx.project_dir());
        ctx
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding the generated project.
    pub(crate) fn project_dir(&self) -> PathBuf {
        self.root.path().join("app")
    }

    /// Command running the binary from the root with telemetry unconfigured.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("slsgen").expect("Failed to locate slsgen binary");
        cmd.current_dir(self.root())
            .env_remove("SLSGEN_TELEMETRY_API_KEY")
            .env_remove("SLSGEN_TELEMETRY_ENDPOINT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `slsgen add` for the `app` project with installs skipped.
    pub(crate) fn add(&self, provider: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["add", "--directory", "app", "--project", "app", "--provider", provider])
            .arg("--skip-install");
        cmd
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.project_dir().join(relative).exists()
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn read_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative, e))
    }

    /// Value of a `package.json` script.
    pub(crate) fn script(&self, name: &str) -> Option<String> {
        self.read_json("package.json")["scripts"][name].as_str().map(str::to_string)
    }

    /// Every file below the project directory with its content, sorted by path.
    pub(crate) fn snapshot(&self) -> Vec<(String, String)> {
        let mut files = Vec::new();
        collect(&self.project_dir(), &self.project_dir(), &mut files);
        files.sort();
        files
    }
}

fn collect(base: &Path, dir: &Path, files: &mut Vec<(String, String)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let relative = path.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/");
            files.push((relative, fs::read_to_string(&path).unwrap_or_default()));
        }
    }
}
