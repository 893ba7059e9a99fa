//! Form definitions backing the table routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod table_event;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form body: {0}")]
    Malformed(String),

    #[error("unknown event: {0}")]
    UnknownEvent(String),

    #[error("missing sort field")]
    MissingField,

    #[error("invalid sort field")]
    InvalidField,

    #[error("missing request id")]
    MissingId,

    #[error("invalid request id")]
    InvalidId,
}
