//! Core infrastructure: RNG, the drawing-surface abstraction, and the
//! in-memory raster used by tests and headless hosts.

#[macro_use]
pub mod safety;
pub mod random;
pub mod raster;
pub mod surface;
