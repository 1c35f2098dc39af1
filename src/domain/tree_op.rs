use std::fmt;

/// A named mutation of the project tree.
///
/// Pipeline steps describe their file changes as operations so the same
/// sequence can be applied, logged, or inspected in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeOp {
    /// Create a file that must not exist yet.
    Create { path: String, content: String },
    /// Create or overwrite.
    Write { path: String, content: String },
    /// Remove a file if present.
    Delete { path: String },
    /// Move a file; the destination must not exist.
    Rename { from: String, to: String },
}

impl TreeOp {
    pub fn create(path: impl Into<String>, content: impl Into<String>) -> Self {
        TreeOp::Create { path: path.into(), content: content.into() }
    }

    pub fn write(path: impl Into<String>, content: impl Into<String>) -> Self {
        TreeOp::Write { path: path.into(), content: content.into() }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        TreeOp::Delete { path: path.into() }
    }

    pub fn rename(from: impl Into<String>, to: impl Into<String>) -> Self {
        TreeOp::Rename { from: from.into(), to: to.into() }
    }

    /// Path the operation leaves content at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            TreeOp::Create { path, .. } | TreeOp::Write { path, .. } => Some(path),
            TreeOp::Rename { to, .. } => Some(to),
            TreeOp::Delete { .. } => None,
        }
    }
}

impl fmt::Display for TreeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeOp::Create { path, .. } => write!(f, "create {}", path),
            TreeOp::Write { path, .. } => write!(f, "write {}", path),
            TreeOp::Delete { path } => write!(f, "delete {}", path),
            TreeOp::Rename { from, to } => write!(f, "rename {} -> {}", from, to),
        }
    }
}
