mod project_fixture;
mod recording_reporter;

pub use self::project_fixture::ProjectFixture;
pub use self::recording_reporter::{RecordedReport, RecordingReporter};

use crate::adapters::{EmbeddedTemplateStore, TypeScriptPatcher};
use crate::app::AppContext;

/// Context with the real template store and patcher and a recording reporter.
pub fn test_context() -> AppContext<EmbeddedTemplateStore, TypeScriptPatcher, RecordingReporter> {
    AppContext::new(EmbeddedTemplateStore::new(), TypeScriptPatcher::new(), RecordingReporter::new())
}
