//! Shared error types for the services crate.

use thiserror::Error;

/// Failures talking to the language-model backend.
///
/// These never reach the presentation layer directly: the gateway maps them to
/// an error-flagged transcript or a fixed apology.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("language model backend is not configured")]
    Disabled,
    #[error("language model returned an empty response")]
    EmptyResponse,
    #[error("language model request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Core(#[from] learner_core::Error),
}
