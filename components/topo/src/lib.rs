#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate slog_global;

#[macro_use]
mod macros;

mod addr;
pub use addr::*;

mod errors;
pub use errors::*;

mod node;
pub use node::*;

mod slotset;
pub use slotset::*;

mod topo;
pub use topo::*;
