use serde::{Deserialize, Serialize};

use crate::{model::User, types::ShortId};

/// Body of a registration request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub username: Option<String>,
}

impl NewUserRequest {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: ShortId,
}

impl From<User> for CreatedUser {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// One `"username:<u>, _id:<id>"` line per user
pub type UserListing = Vec<String>;
