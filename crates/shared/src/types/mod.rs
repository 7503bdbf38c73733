mod short_id;
pub use short_id::*;

mod number_or_string;
pub use number_or_string::*;
