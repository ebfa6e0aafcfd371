use thiserror::Error;

/// User-facing message shown for any failed prediction attempt
pub const FAILURE_MESSAGE: &str = "Failed to get prediction. Please check your inputs.";

/// Errors raised while turning submitted values into `HealthParameters`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Field {field} is not a number: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// Invalid transitions of the UI session
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A prediction request is already in flight")]
    Busy,

    #[error("No prediction request is in flight")]
    NotSubmitting,

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ParameterError),
}

/// Opaque failure of a prediction request.
///
/// Transport errors, non-success statuses and malformed bodies all collapse
/// into this one value; the detail is for logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Prediction request failed: {detail}")]
pub struct RequestFailure {
    detail: String,
}

impl RequestFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// The message the user sees, regardless of the cause
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}
