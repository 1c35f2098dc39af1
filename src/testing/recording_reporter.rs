use std::sync::Mutex;

use crate::domain::{AppError, ServerlessOptions};
use crate::ports::{ErrorReporter, FailureReport};

/// Owned copy of a delivered report.
#[derive(Debug, Clone)]
pub struct RecordedReport {
    pub subsystem: String,
    pub error_class: &'static str,
    pub message: String,
    pub options: ServerlessOptions,
}

#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<RecordedReport>>,
    fail: bool,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter whose deliveries always fail after recording.
    pub fn failing() -> Self {
        Self { reports: Mutex::new(Vec::new()), fail: true }
    }

    pub fn reports(&self) -> Vec<RecordedReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, report: &FailureReport<'_>) -> Result<(), AppError> {
        self.reports.lock().unwrap().push(RecordedReport {
            subsystem: report.subsystem.to_string(),
            error_class: report.error.class_name(),
            message: report.error.to_string(),
            options: report.options.clone(),
        });
        if self.fail {
            return Err(AppError::Telemetry("endpoint unreachable".into()));
        }
        Ok(())
    }
}
