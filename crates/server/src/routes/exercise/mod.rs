mod new_user;
pub use new_user::*;

mod add_exercise;
pub use add_exercise::*;

mod log;
pub use log::*;

mod users;
pub use users::*;
