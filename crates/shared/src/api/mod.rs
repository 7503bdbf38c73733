use const_format::concatcp;
pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/exercise/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    NewUser,
    AddExercise,
    Log,
    Users,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            NewUser => concatcp!(API_BASE_PATH, "new-user"),
            AddExercise => concatcp!(API_BASE_PATH, "add"),
            Log => concatcp!(API_BASE_PATH, "log"),
            Users => concatcp!(API_BASE_PATH, "users"),
        }
    }
}
