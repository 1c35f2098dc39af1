//! Error telemetry over HTTP, using the Bugsnag notifier payload format.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, ServerlessOptions};
use crate::ports::{ErrorReporter, FailureReport};

pub const API_KEY_ENV: &str = "SLSGEN_TELEMETRY_API_KEY";
pub const ENDPOINT_ENV: &str = "SLSGEN_TELEMETRY_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://notify.bugsnag.com";

const API_KEY_HEADER: &str = "Bugsnag-Api-Key";
const PAYLOAD_VERSION_HEADER: &str = "Bugsnag-Payload-Version";
const PAYLOAD_VERSION: &str = "5";
const NOTIFIER_URL: &str = "https://github.com/maciejtreder/ng-toolkit";
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Telemetry endpoint settings resolved from the environment.
#[derive(Clone)]
pub struct TelemetryConfig {
    pub api_key: String,
    pub endpoint: Url,
}

impl std::fmt::Debug for TelemetryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TelemetryConfig {
    /// Read settings from the environment. `None` when no API key is set.
    pub fn from_env() -> Result<Option<Self>, AppError> {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Ok(None),
        };
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            AppError::config_error(format!("Invalid {} '{}': {}", ENDPOINT_ENV, endpoint, e))
        })?;
        Ok(Some(Self { api_key, endpoint }))
    }
}

/// Posts failure reports to a Bugsnag-compatible endpoint.
#[derive(Clone)]
pub struct HttpErrorReporter {
    config: TelemetryConfig,
    client: Client,
}

impl std::fmt::Debug for HttpErrorReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpErrorReporter").field("config", &self.config).finish()
    }
}

impl HttpErrorReporter {
    pub fn new(config: TelemetryConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Telemetry(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }
}

impl ErrorReporter for HttpErrorReporter {
    fn report(&self, report: &FailureReport<'_>) -> Result<(), AppError> {
        let payload = Notification::new(&self.config.api_key, report);
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(PAYLOAD_VERSION_HEADER, PAYLOAD_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .map_err(|e| AppError::Telemetry(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Telemetry(format!("endpoint answered {}", status.as_u16())));
        }
        tracing::debug!(error_class = report.error.class_name(), "failure reported");
        Ok(())
    }
}

/// Reporter used when telemetry is disabled or unconfigured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopErrorReporter;

impl ErrorReporter for NoopErrorReporter {
    fn report(&self, report: &FailureReport<'_>) -> Result<(), AppError> {
        tracing::debug!(error_class = report.error.class_name(), "telemetry disabled, report dropped");
        Ok(())
    }
}

/// Either reporter, chosen at startup.
#[derive(Debug, Clone)]
pub enum TelemetryReporter {
    Http(HttpErrorReporter),
    Noop(NoopErrorReporter),
}

impl TelemetryReporter {
    /// Build from the environment. Unconfigured or misconfigured telemetry
    /// becomes a no-op; reporting never blocks a run.
    pub fn from_env() -> Self {
        let reporter = TelemetryConfig::from_env()
            .and_then(|config| config.map(HttpErrorReporter::new).transpose());
        match reporter {
            Ok(Some(reporter)) => TelemetryReporter::Http(reporter),
            Ok(None) => TelemetryReporter::Noop(NoopErrorReporter),
            Err(err) => {
                tracing::warn!(error = %err, "telemetry disabled");
                TelemetryReporter::Noop(NoopErrorReporter)
            }
        }
    }
}

impl ErrorReporter for TelemetryReporter {
    fn report(&self, report: &FailureReport<'_>) -> Result<(), AppError> {
        match self {
            TelemetryReporter::Http(reporter) => reporter.report(report),
            TelemetryReporter::Noop(reporter) => reporter.report(report),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Notification<'a> {
    api_key: &'a str,
    payload_version: &'static str,
    notifier: Notifier,
    events: Vec<Event<'a>>,
}

#[derive(Serialize)]
struct Notifier {
    name: &'static str,
    version: &'static str,
    url: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Event<'a> {
    exceptions: Vec<ExceptionRecord>,
    severity: &'static str,
    unhandled: bool,
    #[serde(rename = "metaData")]
    meta_data: MetaData<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExceptionRecord {
    error_class: &'static str,
    message: String,
    stacktrace: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct MetaData<'a> {
    subsystem: Subsystem<'a>,
}

#[derive(Serialize)]
struct Subsystem<'a> {
    package: &'a str,
    options: &'a ServerlessOptions,
}

impl<'a> Notification<'a> {
    fn new(api_key: &'a str, report: &'a FailureReport<'a>) -> Self {
        Self {
            api_key,
            payload_version: PAYLOAD_VERSION,
            notifier: Notifier {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                url: NOTIFIER_URL,
            },
            events: vec![Event {
                exceptions: vec![ExceptionRecord {
                    error_class: report.error.class_name(),
                    message: report.error.to_string(),
                    stacktrace: Vec::new(),
                }],
                severity: "error",
                unhandled: false,
                meta_data: MetaData {
                    subsystem: Subsystem { package: report.subsystem, options: report.options },
                },
            }],
        }
    }
}
