//! slsgen: add serverless deployment scaffolding to an Angular project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AddOutcome, InstallStatus, ServerlessOutcome, StatusReport, add_serverless, add_serverless_at,
    status, status_at,
};
pub use domain::{AppError, Provider, ServerlessOptions};
