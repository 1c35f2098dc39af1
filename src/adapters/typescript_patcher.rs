//! TypeScript patcher for Angular component classes.
//!
//! Parses each file with oxc and edits the text at AST spans, so the rest of
//! the file keeps its formatting. Works on the first class declared in a file.
//! Every operation is idempotent.

use crate::domain::PatchError;
use crate::domain::source_outline::{ClassOutline, line_indent, outline};
use crate::ports::{InjectedParameter, SourcePatcher};

const DEFAULT_MEMBER_INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptPatcher;

impl TypeScriptPatcher {
    pub fn new() -> Self {
        Self
    }
}

impl SourcePatcher for TypeScriptPatcher {
    fn add_import(&self, source: &str, symbol: &str, module: &str) -> Result<String, PatchError> {
        let imports = outline(source)?.imports;
        if imports.iter().any(|import| import.bindings.iter().any(|b| b == symbol)) {
            return Ok(source.to_string());
        }

        if let Some(braces) =
            imports.iter().filter(|import| import.module == module).find_map(|import| import.braces)
        {
            let inner = &source[braces.inner()];
            let trimmed = inner.trim_end();
            let insert_at = braces.open + 1 + trimmed.len();
            let addition = if trimmed.trim().is_empty() {
                format!(" {symbol} ")
            } else if trimmed.ends_with(',') {
                format!(" {symbol}")
            } else {
                format!(", {symbol}")
            };
            let resume = if trimmed.trim().is_empty() { braces.close } else { insert_at };
            return Ok(format!("{}{}{}", &source[..insert_at], addition, &source[resume..]));
        }

        let statement = format!("import {{ {symbol} }} from '{module}';");
        match imports.last() {
            Some(last) => {
                Ok(format!("{}\n{}{}", &source[..last.end], statement, &source[last.end..]))
            }
            None => Ok(format!("{statement}\n{source}")),
        }
    }

    fn implement_interface(
        &self,
        source: &str,
        interface: &str,
        module: &str,
    ) -> Result<String, PatchError> {
        let source = self.add_import(source, interface, module)?;
        let class = first_class(&source)?;
        if class.implements.iter().any(|implemented| implemented.name == interface) {
            return Ok(source);
        }

        match class.implements.last() {
            Some(last) => {
                Ok(format!("{}, {}{}", &source[..last.end], interface, &source[last.end..]))
            }
            None => Ok(format!(
                "{} implements {}{}",
                &source[..class.header_end],
                interface,
                &source[class.header_end..]
            )),
        }
    }

    fn add_dependency_injection(
        &self,
        source: &str,
        parameter: &InjectedParameter<'_>,
    ) -> Result<String, PatchError> {
        let source = self.add_import(source, parameter.token, parameter.module)?;
        let source = self.add_import(&source, "Inject", "@angular/core")?;
        let class = first_class(&source)?;
        let (open, close) = (class.body.open, class.body.close);
        let declaration = format!(
            "@Inject({}) private {}: {}",
            parameter.token, parameter.name, parameter.type_name
        );

        if let Some(constructor) = &class.constructor {
            if constructor.parameter_names.iter().any(|name| name == parameter.name) {
                return Ok(source);
            }
            let params = constructor.params;
            let trimmed = source[params.inner()].trim_end();
            if trimmed.trim().is_empty() {
                return Ok(format!(
                    "{}{}{}",
                    &source[..=params.open],
                    declaration,
                    &source[params.close..]
                ));
            }
            let insert_at = params.open + 1 + trimmed.len();
            let separator = if trimmed.ends_with(',') { " " } else { ", " };
            return Ok(format!(
                "{}{}{}{}",
                &source[..insert_at],
                separator,
                declaration,
                &source[insert_at..]
            ));
        }

        let indent = member_indent(&source, &class);
        if source[class.body.inner()].trim().is_empty() {
            return Ok(format!(
                "{}\n{indent}constructor({declaration}) {{}}\n{}{}",
                &source[..=open],
                line_indent(&source, open),
                &source[close..]
            ));
        }
        Ok(format!(
            "{}\n{indent}constructor({declaration}) {{}}{}",
            &source[..=open],
            &source[open + 1..]
        ))
    }

    fn method_body(&self, source: &str, method: &str) -> Option<String> {
        let class = first_class(source).ok()?;
        let found = class.methods.iter().find(|candidate| candidate.name == method)?;
        Some(source[found.body.inner()].to_string())
    }

    fn update_method_body(
        &self,
        source: &str,
        method: &str,
        body: &str,
    ) -> Result<String, PatchError> {
        let class = first_class(source)?;
        let found = class
            .methods
            .iter()
            .find(|candidate| candidate.name == method)
            .ok_or_else(|| PatchError::new(format!("method `{method}` not found")))?;
        Ok(format!("{}{}{}", &source[..=found.body.open], body, &source[found.body.close..]))
    }

    fn add_method(&self, source: &str, method_source: &str) -> Result<String, PatchError> {
        let class = first_class(source)?;
        let close = class.body.close;
        let method = dedent(method_source);
        if dedent(&source[class.body.inner()]).contains(&method) {
            return Ok(source.to_string());
        }

        let indent = member_indent(source, &class);
        let indented = method
            .lines()
            .map(|line| if line.trim().is_empty() { String::new() } else { format!("{indent}{line}") })
            .collect::<Vec<_>>()
            .join("\n");
        let before = source[..close].trim_end();
        let gap = if before.ends_with('{') { "\n" } else { "\n\n" };
        let closing_indent = line_indent(source, close);
        Ok(format!("{before}{gap}{indented}\n{closing_indent}{}", &source[close..]))
    }
}

fn first_class(source: &str) -> Result<ClassOutline, PatchError> {
    outline(source)?.class.ok_or_else(|| PatchError::new("no class declaration found"))
}

/// Indentation of class members, taken from the first member line.
fn member_indent(source: &str, class: &ClassOutline) -> String {
    if let Some(first) = class.first_member
        && source[class.body.open + 1..first].contains('\n')
    {
        return line_indent(source, first).to_string();
    }
    format!("{}{}", line_indent(source, class.body.open), DEFAULT_MEMBER_INDENT)
}

/// Strip leading/trailing blank lines and the common indentation.
fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else { return String::new() };
    let lines = &lines[first..=last];
    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| if line.trim().is_empty() { "" } else { line[common..].trim_end() })
        .collect::<Vec<_>>()
        .join("\n")
}
