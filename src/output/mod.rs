//! Terminal output formatting
//!
//! Tree rendering and small display utilities.

pub mod formatters;
pub mod render;

pub use formatters::format_duration;
pub use render::render;
