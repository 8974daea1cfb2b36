//! Public API: the browser-canvas surface and the wasm-bindgen facade.

pub mod canvas;
pub mod wasm;
