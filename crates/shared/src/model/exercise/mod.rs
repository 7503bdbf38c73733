mod exercise;
pub use exercise::*;

mod new;
pub use new::*;

mod log_filter;
pub use log_filter::*;
