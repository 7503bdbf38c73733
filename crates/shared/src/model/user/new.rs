use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ValidationError, payloads::NewUserRequest},
    model::ValidateModel,
    types::ShortId,
};
#[cfg(feature = "backend")]
use exemplar::Model;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
pub struct NewUser {
    pub id: ShortId,
    pub username: String,
}

impl NewUser {
    /// New user with a freshly generated id
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: ShortId::generate(),
            username: username.into(),
        }
    }

    pub fn from_request(req: NewUserRequest) -> Result<Self, ValidationError> {
        req.validate()?;
        Ok(Self::new(req.username.unwrap_or_default()))
    }
}

impl ValidateModel for NewUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.username.as_deref().map_or(true, str::is_empty) {
            errors.push("username", "username is required");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_username_required() {
        let err = NewUser::from_request(NewUserRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "username is required");

        let err = NewUser::from_request(NewUserRequest::new("")).unwrap_err();
        assert_eq!(err.first().unwrap().field, "username");
    }

    #[test]
    fn test_from_request_generates_id() {
        let a = NewUser::from_request(NewUserRequest::new("bob")).unwrap();
        let b = NewUser::from_request(NewUserRequest::new("bob")).unwrap();
        assert_eq!(a.username, "bob");
        assert_ne!(a.id, b.id);
    }
}
