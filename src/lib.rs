//! FontDots Engine - dotted-text particle field in WASM
//!
//! Renders text onto a canvas, samples the opaque pixels into a sparse dot
//! field, and animates the dots once per host animation frame (converging on
//! their rest points, scattering around the pointer).
//!
//! Architecture:
//! - core/     - RNG, surface abstraction, in-memory raster
//! - domain/   - Render configuration and the dot model
//! - systems/  - Layout, sampling, per-frame animation
//! - field/    - Orchestration only (the single state owner)
//! - api/      - Public wasm API and the browser-canvas surface

// Safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod api;
pub mod domain;
pub mod field;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 FontDots WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::api::canvas::CanvasSurface;
pub use crate::api::wasm::FontDots;
pub use crate::core::raster::RasterSurface;
pub use crate::core::surface::{Gradient, GradientAxis, Surface};
pub use crate::domain::config::{
    ConfigError, FieldSettings, GradientKind, RenderConfig, SpawnDirection, TextAlign,
    TextBaseline, Viewport,
};
pub use crate::domain::dot::Dot;
pub use crate::field::{FieldCore, RunState};
