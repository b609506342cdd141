//! UI utilities for terminal output.

mod banner;
mod preview;

pub use banner::print_banner;
pub use preview::print_grid;
