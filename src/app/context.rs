use crate::ports::{ErrorReporter, SourcePatcher, TemplateStore};

/// Application context holding the collaborators a pipeline run needs.
pub struct AppContext<S: TemplateStore, P: SourcePatcher, R: ErrorReporter> {
    templates: S,
    patcher: P,
    reporter: R,
}

impl<S: TemplateStore, P: SourcePatcher, R: ErrorReporter> AppContext<S, P, R> {
    /// Create a new application context.
    pub fn new(templates: S, patcher: P, reporter: R) -> Self {
        Self { templates, patcher, reporter }
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a reference to the source patcher.
    pub fn patcher(&self) -> &P {
        &self.patcher
    }

    /// Get a reference to the error reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
