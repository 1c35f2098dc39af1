//! Patch entries of the `environment` object literal in Angular environment files.

use super::PatchError;
use super::source_outline::{line_indent, outline, skip_whitespace};

/// Set `key` to the string `value` in the exported `environment` object,
/// replacing an existing entry or inserting a new one as the first entry.
pub fn set_entry(source: &str, key: &str, value: &str) -> Result<String, PatchError> {
    let object = outline(source)?
        .environment
        .ok_or_else(|| PatchError::new("no `environment` object literal found"))?;
    let literal = format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"));

    if let Some(entry) = object.properties.iter().find(|property| property.key == key) {
        let mut out = String::with_capacity(source.len() + literal.len());
        out.push_str(&source[..entry.value.start]);
        out.push_str(&literal);
        out.push_str(&source[entry.value.end..]);
        return Ok(out);
    }

    let (open, close) = (object.braces.open, object.braces.close);
    let body = &source[object.braces.inner()];
    let mut out = String::with_capacity(source.len() + key.len() + literal.len() + 8);
    out.push_str(&source[..=open]);
    if body.trim().is_empty() {
        let indent = line_indent(source, open);
        out.push_str(&format!("\n{indent}  {key}: {literal}\n{indent}"));
        out.push_str(&source[close..]);
    } else {
        let first = object
            .properties
            .first()
            .map(|property| property.start)
            .unwrap_or_else(|| skip_whitespace(source, open + 1));
        let multiline = body.contains('\n');
        let indent = if multiline { line_indent(source, first) } else { " " };
        let separator = if multiline { "\n" } else { "" };
        out.push_str(&format!("{separator}{indent}{key}: {literal},"));
        out.push_str(&source[open + 1..]);
    }
    Ok(out)
}
