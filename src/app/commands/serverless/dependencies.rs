use super::project_state::ProjectState;
use crate::domain::{AppError, COMMON_DEPENDENCIES, NodeDependency, PackageManifest, ProjectPaths};
use crate::ports::ProjectTree;

/// Add the dependencies every provider needs to build the server bundle.
pub fn add_common(tree: &mut dyn ProjectTree, state: &ProjectState) -> Result<(), AppError> {
    add(tree, &state.paths, COMMON_DEPENDENCIES)
}

/// Add or overwrite dependencies in the project's package manifest.
pub fn add(
    tree: &mut dyn ProjectTree,
    paths: &ProjectPaths,
    dependencies: &[NodeDependency],
) -> Result<(), AppError> {
    update_manifest(tree, paths, |manifest| {
        for dependency in dependencies {
            manifest.add_dependency(dependency)?;
        }
        Ok(())
    })
}

/// Read, modify and write back `package.json`. The manifest must exist.
pub fn update_manifest<F>(tree: &mut dyn ProjectTree, paths: &ProjectPaths, f: F) -> Result<(), AppError>
where
    F: FnOnce(&mut PackageManifest) -> Result<(), AppError>,
{
    let path = paths.package_json();
    let original = tree.read(&path)?;
    let mut manifest = PackageManifest::parse(&path, &original)?;
    f(&mut manifest)?;
    let updated = manifest.to_json_string()?;
    if updated != original {
        tree.overwrite(&path, &updated)?;
    }
    Ok(())
}
