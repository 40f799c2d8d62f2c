use thiserror::Error;

/// Message shown when the service fails without saying why.
pub const SERVER_ERROR_FALLBACK: &str = "Server error occurred";

/// Failures of a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Empty or whitespace-only organization name. Surfaced as a blocking
    /// alert; nothing is submitted.
    #[error("Please enter a GitHub organization name.")]
    Validation,

    /// A submission arrived while another request was still in flight.
    #[error("an analysis is already in progress")]
    InFlight,

    /// The service answered with a non-success status.
    #[error("{0}")]
    Server(String),

    /// The request never produced a usable body (network failure, bad JSON).
    #[error("{0}")]
    Transport(String),
}

impl AnalysisError {
    /// Build a server error from the body's `error` field, if any.
    pub fn server(message: Option<&str>) -> Self {
        AnalysisError::Server(message.unwrap_or(SERVER_ERROR_FALLBACK).to_string())
    }

    pub fn inline_text(&self) -> String {
        format!("An error occurred: {self}")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
}
