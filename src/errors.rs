use serde::Serialize;
use thiserror::Error;

/// Errors raised by the simulated storefront services.
///
/// Catalog lookups never produce an error: a miss is `None` or an empty
/// `Vec`. Only the mock actions (login, register, review submission) and
/// configuration loading have failure paths.
#[derive(Error, Debug, Clone, Serialize)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Failure of an external collaborator (the chat assistant boundary).
    /// A missing response from the remote model is fatal for that request;
    /// there is no retry.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::AuthError(msg.into())
    }
}
