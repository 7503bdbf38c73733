pub mod cli;

pub mod db;

pub mod routes;
pub use routes::app;

mod json_or_form;
pub use json_or_form::*;

mod state;
pub use state::*;
