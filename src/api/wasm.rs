//! wasm-bindgen facade.
//!
//! The JS host constructs `FontDots` with a canvas and a JSON settings
//! document, wires pointer and resize events to the setters, and drives
//! `tick()` from `requestAnimationFrame`, re-arming only while it returns
//! `true`:
//!
//! ```js
//! const field = new FontDots(canvas, JSON.stringify({ text: "HELLO" }));
//! field.start();
//! const frame = () => { if (field.tick()) requestAnimationFrame(frame); };
//! requestAnimationFrame(frame);
//! ```

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::api::canvas::CanvasSurface;
use crate::domain::config::{FieldSettings, Viewport};
use crate::field::{FieldCore, RunState};

fn window_viewport() -> Result<Viewport, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
    Ok(Viewport::new(width.max(1), height.max(1)))
}

#[wasm_bindgen]
pub struct FontDots {
    core: FieldCore<CanvasSurface>,
}

#[wasm_bindgen]
impl FontDots {
    /// Create the field on `canvas` from a JSON settings document.
    /// `"{}"` selects the defaults; unsupported textAlign/textBaseline
    /// values reject here, before any dot exists.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, settings_json: &str) -> Result<FontDots, JsValue> {
        let settings = FieldSettings::from_json(settings_json).map_err(|e| JsValue::from_str(&e))?;
        let surface = CanvasSurface::new(canvas)?;
        let viewport = window_viewport()?;
        // Wall-clock seed: the default field is non-reproducible on purpose.
        let seed = js_sys::Date::now() as u32;
        let core = FieldCore::with_seed(surface, settings, viewport, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    pub fn start(&mut self) {
        self.core.start();
    }

    /// Request a stop; the next `tick()` returns `false` and the host loop
    /// winds down.
    pub fn stop(&mut self) {
        self.core.stop();
    }

    /// One animation frame. Returns whether the host should re-arm.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Viewport changed: re-layout, re-render, resample. The dot batch is
    /// replaced wholesale.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let viewport = window_viewport()?;
        self.core.resize(viewport);
        Ok(())
    }

    /// Pointer moved over the canvas, in client coordinates.
    #[wasm_bindgen(js_name = pointerMoved)]
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        let (x, y) = self.core.surface().pointer_to_surface(client_x, client_y);
        self.core.set_pointer(x, y);
    }

    /// Pointer left the canvas.
    #[wasm_bindgen(js_name = pointerLeft)]
    pub fn pointer_left(&mut self) {
        self.core.clear_pointer();
    }

    #[wasm_bindgen(getter)]
    pub fn dot_count(&self) -> u32 {
        self.core.dot_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.core.state() == RunState::Running
    }
}
