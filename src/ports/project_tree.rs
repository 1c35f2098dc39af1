//! Virtual project tree port.
//!
//! The tree is the single mutable resource of a pipeline run. Implementations
//! stage changes in memory; the host decides whether to commit them.

use crate::domain::{AppError, TreeOp};

/// Port for the virtual file tree a pipeline mutates.
///
/// All `path` arguments are relative to the tree root and use `/` separators.
/// Implementations must reject paths that escape the root.
pub trait ProjectTree {
    /// Check whether a file exists.
    fn exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read(&self, path: &str) -> Result<String, AppError>;

    /// Create a new file. Fails if the file already exists.
    fn create(&mut self, path: &str, content: &str) -> Result<(), AppError>;

    /// Replace an existing file. Fails if the file does not exist.
    fn overwrite(&mut self, path: &str, content: &str) -> Result<(), AppError>;

    /// Delete a file. Fails if the file does not exist.
    fn delete(&mut self, path: &str) -> Result<(), AppError>;

    /// Move a file. Fails if the source is missing or the destination exists.
    fn rename(&mut self, from: &str, to: &str) -> Result<(), AppError>;

    /// All files below `dir`, recursively, sorted.
    fn visit_dir(&self, dir: &str) -> Result<Vec<String>, AppError>;

    /// Create or overwrite a file.
    fn write(&mut self, path: &str, content: &str) -> Result<(), AppError> {
        if self.exists(path) { self.overwrite(path, content) } else { self.create(path, content) }
    }

    /// Apply a named operation.
    fn apply(&mut self, op: &TreeOp) -> Result<(), AppError> {
        tracing::debug!(%op, "tree operation");
        match op {
            TreeOp::Create { path, content } => self.create(path, content),
            TreeOp::Write { path, content } => self.write(path, content),
            TreeOp::Delete { path } => {
                if self.exists(path) {
                    self.delete(path)?;
                }
                Ok(())
            }
            TreeOp::Rename { from, to } => self.rename(from, to),
        }
    }

    /// Apply operations in order, stopping at the first failure.
    fn apply_all(&mut self, ops: &[TreeOp]) -> Result<(), AppError> {
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }
}
