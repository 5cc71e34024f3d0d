//! CLI library components for relfind.

pub mod logging;
pub mod pipeline;
