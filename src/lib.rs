#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate slog_global;

mod errors;
pub use errors::*;

pub mod cmd;
pub mod setup;
