//! Helper functions for building page markup

mod date;
mod html;

pub use date::*;
pub use html::*;
