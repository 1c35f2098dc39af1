//! Source-rewriting port for the root application component.
//!
//! Every operation takes the current file text and returns the patched text.
//! Operations are idempotent: applying one twice yields the same text.

use crate::domain::PatchError;

/// Constructor parameter provided through an injection token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedParameter<'a> {
    pub name: &'a str,
    pub type_name: &'a str,
    /// Module the injection token is imported from.
    pub module: &'a str,
    pub token: &'a str,
}

/// Port for import, interface, and method insertion in a component class.
pub trait SourcePatcher {
    /// Import `symbol` from `module` unless it is already imported.
    fn add_import(&self, source: &str, symbol: &str, module: &str) -> Result<String, PatchError>;

    /// Make the first class implement `interface`, importing it from `module`.
    fn implement_interface(
        &self,
        source: &str,
        interface: &str,
        module: &str,
    ) -> Result<String, PatchError>;

    /// Add an injected constructor parameter, creating the constructor if needed.
    fn add_dependency_injection(
        &self,
        source: &str,
        parameter: &InjectedParameter<'_>,
    ) -> Result<String, PatchError>;

    /// Body of a class method, without its braces. `None` when the method is absent.
    fn method_body(&self, source: &str, method: &str) -> Option<String>;

    /// Replace the body of an existing method.
    fn update_method_body(
        &self,
        source: &str,
        method: &str,
        body: &str,
    ) -> Result<String, PatchError>;

    /// Append a method to the first class.
    fn add_method(&self, source: &str, method_source: &str) -> Result<String, PatchError>;
}
