use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, InstallTask};

/// Environment variable overriding the package manager executable.
pub const NPM_PROGRAM_ENV: &str = "SLSGEN_NPM";

/// Runs scheduled dependency installs after the tree is committed.
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    root: PathBuf,
    program: String,
}

impl NpmInstaller {
    pub fn new(root: PathBuf) -> Self {
        let program = std::env::var(NPM_PROGRAM_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "npm".to_string());
        Self { root, program }
    }

    pub fn with_program(root: PathBuf, program: impl Into<String>) -> Self {
        Self { root, program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `<program> install` in the task's working directory.
    pub fn run(&self, task: &InstallTask) -> Result<(), AppError> {
        let cwd = self.root.join(Path::new(&task.working_directory));
        tracing::info!(directory = %cwd.display(), program = %self.program, "installing dependencies");

        let output = Command::new(&self.program).arg("install").current_dir(&cwd).output().map_err(
            |e| AppError::InstallFailed {
                directory: task.working_directory.clone(),
                details: format!("{} install: {}", self.program, e),
            },
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::InstallFailed {
                directory: task.working_directory.clone(),
                details: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }
        Ok(())
    }
}
