//! CLI command implementations.

pub mod common;
pub mod generate;
pub mod limits;
pub mod presets;
pub mod render;
pub mod spectrum;
