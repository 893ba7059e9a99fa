//! Service layer between the table routes, the renderer and host callbacks.

use thiserror::Error;

use crate::forms::FormError;

pub mod table;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Form(String),

    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("render error: {0}")]
    Render(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<tera::Error> for ServiceError {
    fn from(val: tera::Error) -> Self {
        ServiceError::Render(val.to_string())
    }
}
