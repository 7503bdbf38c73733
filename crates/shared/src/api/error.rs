use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "backend")]
use {
    axum::response::{IntoResponse, Response},
    tracing::{error, warn},
};

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
pub const NOT_FOUND_MESSAGE: &str = "not found";

/// Error type for routes that have no endpoint specific failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Nothing {}

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field check that failed, in the order the fields were checked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F: Into<String>, M: Into<String>>(&mut self, field: F, message: M) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// `Ok` if nothing was pushed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(e) => f.write_str(&e.message),
            None => f.write_str("Validation failed"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum ServerError<T> {
    /// Endpoint specific error, see [`crate::api::response_errors`]
    Inner { code: StatusCode, inner: T },
    Validation { inner: ValidationError },
    Status { code: StatusCode, message: String },
    NotFound,
    Other { message: String },
}

/// Builds a [`ServerError::Other`] from format args
#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

impl<T> ServerError<T> {
    pub fn status<S: Into<String>>(code: StatusCode, message: S) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> StatusCode {
        match self {
            Self::Inner { code, .. } | Self::Status { code, .. } => *code,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: fmt::Display> ServerError<T> {
    /// The plain text sent back to the client
    pub fn message(&self) -> String {
        let message = match self {
            Self::Inner { inner, .. } => inner.to_string(),
            Self::Validation { inner } => inner.to_string(),
            Self::Status { message, .. } | Self::Other { message } => message.clone(),
            Self::NotFound => NOT_FOUND_MESSAGE.to_owned(),
        };

        if message.is_empty() {
            INTERNAL_SERVER_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for ServerError<T> {}

impl<T> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        Self::Validation { inner }
    }
}

#[cfg(feature = "backend")]
impl<T> From<rusqlite::Error> for ServerError<T> {
    fn from(err: rusqlite::Error) -> Self {
        Self::Other {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::InteractError> for ServerError<T> {
    fn from(err: deadpool_sqlite::InteractError) -> Self {
        Self::Other {
            message: format!("Database interaction failed: {err}"),
        }
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::PoolError> for ServerError<T> {
    fn from(err: deadpool_sqlite::PoolError) -> Self {
        Self::Other {
            message: format!("Database pool error: {err}"),
        }
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::BuildError> for ServerError<T> {
    fn from(err: deadpool_sqlite::BuildError) -> Self {
        Self::Other {
            message: format!("Database pool build failed: {err}"),
        }
    }
}

#[cfg(feature = "backend")]
impl<T: fmt::Display> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.message();

        if code.is_server_error() {
            error!(%code, reason = %message, "Request failed");
        } else {
            warn!(%code, reason = %message, "Request failed");
        }

        (code, message).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validation_reports_first_error() {
        let mut errors = ValidationError::new();
        errors.push("description", "Description too long, not greater than 25");
        errors.push("duration", "Duration too short, at least 1 minute");

        let err: ServerError<Nothing> = errors.into();
        assert_eq!(err.code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Description too long, not greater than 25");
    }

    #[test]
    fn test_empty_validation_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
    }

    #[test]
    fn test_defaults() {
        let err = ServerError::<Nothing>::Other {
            message: String::new(),
        };
        assert_eq!(err.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), INTERNAL_SERVER_ERROR_MESSAGE);

        let err = ServerError::<Nothing>::NotFound;
        assert_eq!(err.code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "not found");
    }

    #[test]
    fn test_other_error_macro() {
        let err: ServerError<Nothing> = crate::other_error!("pool {} failed", 3);
        assert_eq!(err.message(), "pool 3 failed");
    }
}
