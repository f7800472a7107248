//! Typed errors for the session and for the generation endpoint.
//!
//! Every variant carries text fit to show inline in the UI; none of them is
//! fatal to the process. A later successful submit clears any of these.

use thiserror::Error;

/// Shown when submit is pressed with a blank app name or description.
pub const VALIDATION_MESSAGE: &str = "Enter an app name and a description first.";

/// Shown when the endpoint rejects a request without an `error` field.
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Icon generation failed. Check the API key configured for the deployment.";

/// Failures of session operations, raised before any network traffic.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{VALIDATION_MESSAGE}")]
    MissingFields,

    #[error("a generation request is already in flight")]
    Busy,

    #[error("no icon with id {0} in history")]
    UnknownIcon(String),

    #[error("session controller is shut down")]
    ShutDown,
}

/// Failures of a single generation call. One attempt per call, no retries.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Non-2xx response; carries the server's `error` text when it sent one.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// 2xx response without an image reference in the body.
    #[error("generation endpoint returned no image")]
    Malformed,
}
