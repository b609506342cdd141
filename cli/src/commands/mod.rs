//! CLI command implementations.

mod convert;
mod info;

pub use convert::convert;
pub use info::show_info;
