use crate::domain::{AppError, ServerlessOptions};

/// A pipeline failure with the metadata attached to telemetry reports.
#[derive(Debug, Clone, Copy)]
pub struct FailureReport<'a> {
    /// Generator that failed.
    pub subsystem: &'a str,
    pub error: &'a AppError,
    pub options: &'a ServerlessOptions,
}

/// Port for best-effort error telemetry.
pub trait ErrorReporter {
    /// Deliver a failure report. Callers ignore the result beyond logging it.
    fn report(&self, report: &FailureReport<'_>) -> Result<(), AppError>;
}
