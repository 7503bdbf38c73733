use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{Nothing, ServerError};

/// Declares an endpoint error enum where every variant carries the status
/// code it is reported with and its client facing message
macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[error($($message:tt)*)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($($message)*)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl $name {
            pub fn code(&self) -> StatusCode {
                match self {
                    $( $name::$variant { .. } => $variant_code, )*
                }
            }
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                Self::Inner { code: inner.code(), inner }
            }
        }
    };
}

response_error!(CreateUserError {
    // Reported as a generic server failure rather than a conflict
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[error("username already taken")]
    UsernameTaken,
});

response_error!(ExerciseError {
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[error("Unknown user with _id")]
    UnknownUser,
});

// Aliases used to allow future expansion of the errors without having to go
// back and update all routes that use them
pub type AddExerciseError = ExerciseError;
pub type LogError = ExerciseError;
pub type FetchError = Nothing;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_username_taken_is_server_error() {
        let err: ServerError<CreateUserError> = CreateUserError::UsernameTaken.into();
        assert_eq!(err.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "username already taken");
    }

    #[test]
    fn test_unknown_user_message() {
        let err: ServerError<LogError> = ExerciseError::UnknownUser.into();
        assert_eq!(err.message(), "Unknown user with _id");
    }
}
