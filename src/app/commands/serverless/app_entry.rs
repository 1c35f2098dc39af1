//! Patch the root component so server renders resolve assets under the
//! serverless base path.

use super::environment::applies;
use super::project_state::ProjectState;
use crate::domain::{AppError, PatchError, ServerlessOptions};
use crate::ports::{InjectedParameter, ProjectTree, SourcePatcher};

const LIFECYCLE_METHOD: &str = "ngOnInit";
const BASE_HREF_MARKER: &str = "environment.baseHref";

const BASE_HREF_BLOCK: &str = "\
if (!isPlatformBrowser(this.platformId)) {
  let bases = this.document.getElementsByTagName('base');

  if (bases.length > 0) {
    bases[0].setAttribute('href', environment.baseHref);
  }
}";

const DOCUMENT: InjectedParameter<'static> = InjectedParameter {
    name: "document",
    type_name: "any",
    module: "@angular/common",
    token: "DOCUMENT",
};

const PLATFORM_ID: InjectedParameter<'static> = InjectedParameter {
    name: "platformId",
    type_name: "any",
    module: "@angular/core",
    token: "PLATFORM_ID",
};

/// Returns false when skipped.
pub fn apply(
    tree: &mut dyn ProjectTree,
    patcher: &dyn SourcePatcher,
    state: &ProjectState,
    options: &ServerlessOptions,
) -> Result<bool, AppError> {
    if !applies(state, options) {
        return Ok(false);
    }

    let path = state.paths.app_component();
    let source = tree.read(&path)?;
    let patched = patch_component(patcher, &source).map_err(|err| AppError::source_patch(&path, err))?;
    if patched != source {
        tree.overwrite(&path, &patched)?;
    }
    Ok(true)
}

fn patch_component(patcher: &dyn SourcePatcher, source: &str) -> Result<String, PatchError> {
    let existing = patcher.method_body(source, LIFECYCLE_METHOD);

    let mut out = patcher.add_import(source, "environment", "../environments/environment")?;
    out = patcher.implement_interface(&out, "OnInit", "@angular/core")?;
    out = patcher.add_import(&out, "Inject", "@angular/core")?;
    out = patcher.add_import(&out, "isPlatformBrowser", "@angular/common")?;
    out = patcher.add_dependency_injection(&out, &DOCUMENT)?;
    out = patcher.add_dependency_injection(&out, &PLATFORM_ID)?;

    match existing {
        Some(body) if body.contains(BASE_HREF_MARKER) => Ok(out),
        Some(body) => patcher.update_method_body(&out, LIFECYCLE_METHOD, &append_block(&body)),
        None => patcher.add_method(
            &out,
            &format!("public ngOnInit(): void {{\n{}\n}}", indent(BASE_HREF_BLOCK, "  ")),
        ),
    }
}

/// Append the base-href block to a method body, keeping its indentation.
fn append_block(body: &str) -> String {
    let closing = match body.rfind('\n') {
        Some(position) if body[position + 1..].trim().is_empty() => &body[position + 1..],
        _ => "",
    };
    let statements = body.trim_end();
    let inner = body
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line[..line.len() - line.trim_start().len()].to_string())
        .unwrap_or_else(|| format!("{}  ", closing));
    format!("{}\n{}\n{}", statements, indent(BASE_HREF_BLOCK, &inner), closing)
}

fn indent(block: &str, prefix: &str) -> String {
    block
        .lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{prefix}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}
