//! Per-frame and per-rebuild logic: text layout, grid sampling, animation.

pub mod animate;
pub mod layout;
pub mod sampler;
