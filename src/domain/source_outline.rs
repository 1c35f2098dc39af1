//! Byte-range outline of a TypeScript module, read from the oxc AST.
//!
//! Patches are text edits at these ranges, so formatting and comments outside
//! an edit survive untouched. The parse tree never outlives [`outline`].

use std::ops::Range;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Class, ClassElement, Declaration, ExportDefaultDeclarationKind, Expression,
    ImportDeclaration, ImportDeclarationSpecifier, MethodDefinitionKind, ObjectExpression,
    ObjectPropertyKind, PropertyKey, Statement, VariableDeclaration,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

use super::PatchError;

const ENVIRONMENT_BINDING: &str = "environment";

/// Positions of a matching pair of delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub open: usize,
    pub close: usize,
}

impl Delimited {
    /// Range between the delimiters.
    pub fn inner(&self) -> Range<usize> {
        self.open + 1..self.close
    }
}

#[derive(Debug, Default)]
pub struct SourceOutline {
    pub imports: Vec<ImportOutline>,
    /// First class declared at the top level, exported or not.
    pub class: Option<ClassOutline>,
    /// Object literal assigned to the top-level `environment` binding.
    pub environment: Option<ObjectOutline>,
}

#[derive(Debug)]
pub struct ImportOutline {
    /// End of the statement, including its semicolon.
    pub end: usize,
    pub module: String,
    /// Braces of the named import list.
    pub braces: Option<Delimited>,
    /// Local names the statement binds.
    pub bindings: Vec<String>,
}

#[derive(Debug)]
pub struct ClassOutline {
    /// End of the header text before the body brace, trailing whitespace excluded.
    pub header_end: usize,
    pub implements: Vec<Implemented>,
    pub body: Delimited,
    /// Start of the first member, if any.
    pub first_member: Option<usize>,
    pub constructor: Option<ConstructorOutline>,
    pub methods: Vec<MethodOutline>,
}

#[derive(Debug)]
pub struct Implemented {
    pub name: String,
    pub end: usize,
}

#[derive(Debug)]
pub struct ConstructorOutline {
    pub params: Delimited,
    pub parameter_names: Vec<String>,
}

#[derive(Debug)]
pub struct MethodOutline {
    pub name: String,
    pub body: Delimited,
}

#[derive(Debug)]
pub struct ObjectOutline {
    pub braces: Delimited,
    pub properties: Vec<PropertyOutline>,
}

#[derive(Debug)]
pub struct PropertyOutline {
    pub key: String,
    pub start: usize,
    pub value: Range<usize>,
}

/// Parse `source` as TypeScript and collect the ranges patches work on.
pub fn outline(source: &str) -> Result<SourceOutline, PatchError> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::ts()).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        let reason = parsed
            .errors
            .first()
            .map(|error| error.to_string())
            .unwrap_or_else(|| String::from("unrecoverable syntax error"));
        return Err(PatchError::new(format!("cannot parse TypeScript: {reason}")));
    }

    let mut result = SourceOutline::default();
    for statement in parsed.program.body.iter() {
        match statement {
            Statement::ImportDeclaration(import) => {
                result.imports.push(import_outline(source, import));
            }
            Statement::ClassDeclaration(class) => set_class(&mut result, source, class),
            Statement::VariableDeclaration(declaration) => {
                set_environment(&mut result, source, declaration);
            }
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::ClassDeclaration(class)) => set_class(&mut result, source, class),
                Some(Declaration::VariableDeclaration(declaration)) => {
                    set_environment(&mut result, source, declaration);
                }
                _ => {}
            },
            Statement::ExportDefaultDeclaration(export) => {
                if let ExportDefaultDeclarationKind::ClassDeclaration(class) = &export.declaration {
                    set_class(&mut result, source, class);
                }
            }
            _ => {}
        }
    }
    Ok(result)
}

fn import_outline(source: &str, import: &ImportDeclaration<'_>) -> ImportOutline {
    let start = import.span.start as usize;
    let mut end = import.span.end as usize;
    if source[end..].starts_with(';') {
        end += 1;
    }

    let clause_end = import.source.span.start as usize;
    let clause = &source[start..clause_end];
    let braces = clause
        .find('{')
        .zip(clause.rfind('}'))
        .map(|(open, close)| Delimited { open: start + open, close: start + close });

    let bindings = import
        .specifiers
        .iter()
        .flat_map(|specifiers| specifiers.iter())
        .map(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(named) => named.local.name.to_string(),
            ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
                default.local.name.to_string()
            }
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
                namespace.local.name.to_string()
            }
        })
        .collect();

    ImportOutline { end, module: import.source.value.to_string(), braces, bindings }
}

fn set_class(result: &mut SourceOutline, source: &str, class: &Class<'_>) {
    if result.class.is_some() {
        return;
    }
    let Some(body) = delimited(source, class.body.span, '{', '}') else { return };

    let implements = class
        .implements
        .iter()
        .map(|item| {
            let text = span_text(source, item.span);
            let name = text.split('<').next().unwrap_or(text).trim();
            Implemented { name: name.to_string(), end: item.span.end as usize }
        })
        .collect();

    let mut constructor = None;
    let mut methods = Vec::new();
    for element in class.body.body.iter() {
        let ClassElement::MethodDefinition(method) = element else { continue };
        let function = &method.value;
        if method.kind == MethodDefinitionKind::Constructor {
            if let Some(params) = delimited(source, function.params.span, '(', ')') {
                let parameter_names = function
                    .params
                    .items
                    .iter()
                    .map(|param| leading_identifier(span_text(source, param.pattern.span())))
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
                constructor.get_or_insert(ConstructorOutline { params, parameter_names });
            }
            continue;
        }
        if method.computed {
            continue;
        }
        let (Some(name), Some(body)) = (property_name(&method.key), function.body.as_ref())
        else {
            continue;
        };
        if let Some(body) = delimited(source, body.span, '{', '}') {
            methods.push(MethodOutline { name, body });
        }
    }

    result.class = Some(ClassOutline {
        header_end: source[..body.open].trim_end().len(),
        implements,
        body,
        first_member: class.body.body.first().map(|element| element.span().start as usize),
        constructor,
        methods,
    });
}

fn set_environment(result: &mut SourceOutline, source: &str, declaration: &VariableDeclaration<'_>) {
    if result.environment.is_some() {
        return;
    }
    for declarator in declaration.declarations.iter() {
        let name = leading_identifier(&source[declarator.span.start as usize..]);
        if name != ENVIRONMENT_BINDING {
            continue;
        }
        if let Some(Expression::ObjectExpression(object)) = &declarator.init {
            result.environment = object_outline(source, object);
            return;
        }
    }
}

fn object_outline(source: &str, object: &ObjectExpression<'_>) -> Option<ObjectOutline> {
    let braces = delimited(source, object.span, '{', '}')?;
    let properties = object
        .properties
        .iter()
        .filter_map(|property| match property {
            ObjectPropertyKind::ObjectProperty(property) if !property.computed => {
                let key = property_name(&property.key)?;
                let value = property.value.span();
                Some(PropertyOutline {
                    key,
                    start: property.span.start as usize,
                    value: value.start as usize..value.end as usize,
                })
            }
            _ => None,
        })
        .collect();
    Some(ObjectOutline { braces, properties })
}

fn property_name(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(identifier) => Some(identifier.name.to_string()),
        PropertyKey::StringLiteral(literal) => Some(literal.value.to_string()),
        _ => None,
    }
}

fn span_text(source: &str, span: Span) -> &str {
    &source[span.start as usize..span.end as usize]
}

/// Delimiters around `span`, whether or not the span includes them.
fn delimited(source: &str, span: Span, open: char, close: char) -> Option<Delimited> {
    let (start, end) = (span.start as usize, span.end as usize);
    let open = if source[start..].starts_with(open) { start } else { source[..start].rfind(open)? };
    let close = if source[..end].ends_with(close) {
        end - 1
    } else {
        end + source[end..].find(close)?
    };
    Some(Delimited { open, close })
}

fn leading_identifier(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(text.len());
    &text[..end]
}

/// Index of the first non-whitespace character at or after `index`.
pub fn skip_whitespace(source: &str, index: usize) -> usize {
    let rest = &source[index..];
    index + (rest.len() - rest.trim_start().len())
}

/// Leading whitespace of the line containing `index`.
pub fn line_indent(source: &str, index: usize) -> &str {
    let start = source[..index].rfind('\n').map(|p| p + 1).unwrap_or(0);
    let line = &source[start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}
