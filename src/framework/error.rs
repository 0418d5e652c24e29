//! # Framework Errors
//!
//! Every failure a request can produce, from the first failing validation check
//! to a closed actor channel. The `#[error]` strings are the user-visible messages;
//! [`ResourceError::status_code`] gives the status the dispatch layer renders.

/// Errors returned by resource actors, clients and the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// A payload failed one of its validation checks.
    #[error("{0}")]
    Validation(String),

    /// No record matches the route identifier.
    #[error("{resource} does not exist: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The resource path exists but does not support the method.
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// No resource is mounted at the path.
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Actor closed")]
    ActorClosed,

    #[error("Actor dropped response channel")]
    ActorDropped,
}

impl ResourceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn method_not_allowed(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            method: method.into(),
            path: path.into(),
        }
    }

    /// The status code this error is rendered with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. } | Self::PathNotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::ActorClosed | Self::ActorDropped => 500,
        }
    }
}
