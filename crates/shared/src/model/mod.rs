mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

use crate::api::error::ValidationError;

/// Explicit field checks, run before anything is handed to the database
pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}
