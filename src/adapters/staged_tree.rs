//! Staging implementation of `ProjectTree`.
//!
//! Reads fall through to a base layer (a directory on disk or an in-memory
//! map); writes and deletes are staged and only reach the base on `commit`.
//! Dropping the tree without committing discards every change.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectTree;

/// Kind of change a staged path represents relative to the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Created,
    Modified,
    Deleted,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Created => "create",
            ChangeKind::Modified => "update",
            ChangeKind::Deleted => "delete",
        }
    }
}

/// A staged change, as reported for dry runs and commits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TreeChange {
    pub path: String,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone)]
enum Base {
    Disk(PathBuf),
    Memory(BTreeMap<String, String>),
}

/// Virtual project tree with staged writes and an explicit commit.
#[derive(Debug, Clone)]
pub struct StagedTree {
    base: Base,
    /// `Some(content)` for staged writes, `None` for staged deletes.
    staged: BTreeMap<String, Option<String>>,
}

impl StagedTree {
    /// Stage changes on top of a directory on disk.
    pub fn new(root: PathBuf) -> Self {
        Self { base: Base::Disk(root), staged: BTreeMap::new() }
    }

    /// Stage changes on top of the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Stage changes on top of an empty in-memory base.
    pub fn in_memory() -> Self {
        Self { base: Base::Memory(BTreeMap::new()), staged: BTreeMap::new() }
    }

    /// Stage changes on top of an in-memory base seeded with `files`.
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let files = files
            .into_iter()
            .filter_map(|(path, content)| {
                normalize_path(&path.into()).ok().map(|path| (path, content.into()))
            })
            .collect();
        Self { base: Base::Memory(files), staged: BTreeMap::new() }
    }

    fn base_read(&self, path: &str) -> Option<String> {
        match &self.base {
            Base::Disk(root) => {
                let full = root.join(path);
                if full.is_file() { fs::read_to_string(full).ok() } else { None }
            }
            Base::Memory(files) => files.get(path).cloned(),
        }
    }

    fn base_exists(&self, path: &str) -> bool {
        match &self.base {
            Base::Disk(root) => root.join(path).is_file(),
            Base::Memory(files) => files.contains_key(path),
        }
    }

    fn base_files_under(&self, dir: &str) -> Result<Vec<String>, AppError> {
        match &self.base {
            Base::Disk(root) => {
                let mut files = Vec::new();
                let start = if dir.is_empty() { root.clone() } else { root.join(dir) };
                if start.is_dir() {
                    walk_disk(root, &start, &mut files)?;
                }
                Ok(files)
            }
            Base::Memory(map) => {
                Ok(map.keys().filter(|path| is_under(path, dir)).cloned().collect())
            }
        }
    }

    /// Staged changes that differ from the base, sorted by path.
    pub fn changes(&self) -> Vec<TreeChange> {
        self.staged
            .iter()
            .filter_map(|(path, staged)| {
                let base = self.base_read(path);
                let kind = match (staged, base) {
                    (Some(_), None) => ChangeKind::Created,
                    (Some(new), Some(old)) if *new != old => ChangeKind::Modified,
                    (None, Some(_)) => ChangeKind::Deleted,
                    _ => return None,
                };
                Some(TreeChange { path: path.clone(), kind })
            })
            .collect()
    }

    /// Content of a file in the committed base, ignoring staged changes.
    pub fn base_content(&self, path: &str) -> Option<String> {
        normalize_path(path).ok().and_then(|path| self.base_read(&path))
    }

    /// Write staged changes to the base and return what changed.
    pub fn commit(&mut self) -> Result<Vec<TreeChange>, AppError> {
        let changes = self.changes();
        let staged = std::mem::take(&mut self.staged);
        match &mut self.base {
            Base::Disk(root) => {
                for (path, content) in &staged {
                    let full = root.join(path);
                    match content {
                        Some(content) => {
                            if let Some(parent) = full.parent() {
                                fs::create_dir_all(parent)?;
                            }
                            fs::write(&full, content)?;
                        }
                        None => {
                            if full.is_file() {
                                fs::remove_file(&full)?;
                            }
                        }
                    }
                }
            }
            Base::Memory(files) => {
                for (path, content) in staged {
                    match content {
                        Some(content) => {
                            files.insert(path, content);
                        }
                        None => {
                            files.remove(&path);
                        }
                    }
                }
            }
        }
        Ok(changes)
    }
}

impl ProjectTree for StagedTree {
    fn exists(&self, path: &str) -> bool {
        let Ok(path) = normalize_path(path) else { return false };
        match self.staged.get(&path) {
            Some(staged) => staged.is_some(),
            None => self.base_exists(&path),
        }
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        let normalized = normalize_path(path)?;
        let content = match self.staged.get(&normalized) {
            Some(staged) => staged.clone(),
            None => self.base_read(&normalized),
        };
        content.ok_or_else(|| AppError::FileNotFound(normalized))
    }

    fn create(&mut self, path: &str, content: &str) -> Result<(), AppError> {
        let normalized = normalize_path(path)?;
        if self.exists(&normalized) {
            return Err(AppError::FileExists(normalized));
        }
        self.staged.insert(normalized, Some(content.to_string()));
        Ok(())
    }

    fn overwrite(&mut self, path: &str, content: &str) -> Result<(), AppError> {
        let normalized = normalize_path(path)?;
        if !self.exists(&normalized) {
            return Err(AppError::FileNotFound(normalized));
        }
        self.staged.insert(normalized, Some(content.to_string()));
        Ok(())
    }

    fn delete(&mut self, path: &str) -> Result<(), AppError> {
        let normalized = normalize_path(path)?;
        if !self.exists(&normalized) {
            return Err(AppError::FileNotFound(normalized));
        }
        self.staged.insert(normalized, None);
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), AppError> {
        let content = self.read(from)?;
        let to = normalize_path(to)?;
        if self.exists(&to) {
            return Err(AppError::FileExists(to));
        }
        self.delete(from)?;
        self.staged.insert(to, Some(content));
        Ok(())
    }

    fn visit_dir(&self, dir: &str) -> Result<Vec<String>, AppError> {
        let dir = if dir.trim().is_empty() || dir == "." { String::new() } else { normalize_path(dir)? };
        let mut files: BTreeSet<String> = self.base_files_under(&dir)?.into_iter().collect();
        for (path, staged) in &self.staged {
            if !is_under(path, &dir) {
                continue;
            }
            match staged {
                Some(_) => files.insert(path.clone()),
                None => files.remove(path),
            };
        }
        Ok(files.into_iter().collect())
    }
}

/// Normalize a tree path to `a/b/c` form, rejecting absolute and escaping paths.
fn normalize_path(path: &str) -> Result<String, AppError> {
    let mut segments: Vec<String> = Vec::new();
    for component in Path::new(path.trim()).components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().to_string()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AppError::InvalidPath(path.to_string()));
            }
        }
    }
    if segments.is_empty() {
        return Err(AppError::InvalidPath(path.to_string()));
    }
    Ok(segments.join("/"))
}

fn is_under(path: &str, dir: &str) -> bool {
    dir.is_empty() || path.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'))
}

fn walk_disk(root: &Path, dir: &Path, files: &mut Vec<String>) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if entry.file_name() == "node_modules" || entry.file_name() == ".git" {
                continue;
            }
            walk_disk(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/");
            files.push(relative);
        }
    }
    Ok(())
}
