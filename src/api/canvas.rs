//! Browser-canvas implementation of the drawing surface.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::surface::{Gradient, GradientAxis, Surface};
use crate::domain::config::{TextAlign, TextBaseline};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Translate client (event) coordinates into surface pixels. The canvas
    /// internal resolution and its CSS box can differ; pointer math has to
    /// happen in surface pixels or the hover radius drifts under scaling.
    pub fn pointer_to_surface(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        let scale_x = if rect.width() > 0.0 {
            self.canvas.width() as f64 / rect.width()
        } else {
            1.0
        };
        let scale_y = if rect.height() > 0.0 {
            self.canvas.height() as f64 / rect.height()
        } else {
            1.0
        };
        (
            (client_x - rect.left()) * scale_x,
            (client_y - rect.top()) * scale_y,
        )
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // Pin the CSS box to the internal resolution so surface pixels and
        // screen pixels line up one-to-one.
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn measure_text(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or(0.0)
    }

    fn set_fill_gradient(&mut self, gradient: &Gradient) {
        let (x1, y1) = match gradient.axis {
            GradientAxis::Horizontal => (self.canvas.width() as f64, 0.0),
            GradientAxis::Vertical => (0.0, self.canvas.height() as f64),
        };
        let brush = self.ctx.create_linear_gradient(0.0, 0.0, x1, y1);
        for (offset, color) in &gradient.stops {
            // Only fails for out-of-range offsets or bogus colors, both of
            // which the host author sees immediately on screen.
            let _ = brush.add_color_stop(*offset as f32, color);
        }
        self.ctx.set_fill_style_canvas_gradient(&brush);
    }

    fn set_text_style(&mut self, align: TextAlign, baseline: TextBaseline) {
        self.ctx.set_text_align(align.as_css());
        self.ctx.set_text_baseline(baseline.as_css());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn snapshot_alpha(&self) -> Vec<u8> {
        let width = self.canvas.width();
        let height = self.canvas.height();
        // Read-back only fails for foreign-origin content, which this
        // surface never draws.
        match self
            .ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
        {
            Ok(image) => {
                let rgba = image.data();
                rgba.iter().skip(3).step_by(4).copied().collect()
            }
            Err(_) => vec![0; (width * height) as usize],
        }
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
