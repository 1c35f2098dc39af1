use serde_json::{Map, Value};

use super::AppError;

/// Section of the package manifest a dependency belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    pub fn manifest_key(self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Dev => "devDependencies",
        }
    }
}

/// A pinned npm dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDependency {
    pub kind: DependencyKind,
    pub name: &'static str,
    pub version: &'static str,
}

impl NodeDependency {
    pub const fn runtime(name: &'static str, version: &'static str) -> Self {
        Self { kind: DependencyKind::Runtime, name, version }
    }

    pub const fn dev(name: &'static str, version: &'static str) -> Self {
        Self { kind: DependencyKind::Dev, name, version }
    }
}

/// Dependencies every provider needs to build the server bundle.
pub const COMMON_DEPENDENCIES: &[NodeDependency] = &[
    NodeDependency::dev("ts-loader", "4.2.0"),
    NodeDependency::dev("webpack-cli", "2.1.2"),
    NodeDependency::runtime("cors", "~2.8.4"),
    NodeDependency::runtime("cp-cli", "^1.1.0"),
];

/// Parsed `package.json`, with key order preserved on write.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: String,
    document: Map<String, Value>,
}

impl PackageManifest {
    pub fn parse(path: &str, content: &str) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_str(content).map_err(|err| AppError::malformed_json(path, err))?;
        match value {
            Value::Object(document) => Ok(Self { path: path.to_string(), document }),
            _ => Err(AppError::malformed_json(path, "expected a JSON object at the root")),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Add or overwrite a dependency entry.
    pub fn add_dependency(&mut self, dependency: &NodeDependency) -> Result<(), AppError> {
        let section = self.section_mut(dependency.kind.manifest_key())?;
        section.insert(dependency.name.to_string(), Value::String(dependency.version.to_string()));
        Ok(())
    }

    /// Add or overwrite a script entry.
    pub fn set_script(&mut self, name: &str, command: &str) -> Result<(), AppError> {
        let scripts = self.section_mut("scripts")?;
        scripts.insert(name.to_string(), Value::String(command.to_string()));
        Ok(())
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.document.get("scripts")?.get(name)?.as_str()
    }

    pub fn dependency(&self, kind: DependencyKind, name: &str) -> Option<&str> {
        self.document.get(kind.manifest_key())?.get(name)?.as_str()
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String, AppError> {
        let mut out = serde_json::to_string_pretty(&self.document)
            .map_err(|err| AppError::malformed_json(&self.path, err))?;
        out.push('\n');
        Ok(out)
    }

    fn section_mut(&mut self, key: &str) -> Result<&mut Map<String, Value>, AppError> {
        let entry = self.document.entry(key.to_string()).or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::malformed_json(
                self.path.clone(),
                format!("\"{}\" must be an object", key),
            )),
        }
    }
}
