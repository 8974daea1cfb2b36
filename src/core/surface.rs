//! Drawing-surface abstraction.
//!
//! The field core only needs a small slice of a 2-D canvas: resizing, text
//! measurement and fill, a linear gradient brush, whole-surface alpha
//! read-back (to find the opaque pixels under the glyphs), and filled
//! circles. `api::canvas::CanvasSurface` implements this over a browser
//! canvas; `core::raster::RasterSurface` implements it in memory for tests
//! and headless hosts.

use crate::domain::config::{TextAlign, TextBaseline};

/// Which way a [`Gradient`] sweeps across the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    Vertical,
    Horizontal,
}

/// A linear gradient brush: color stops at offsets in `[0, 1]` along the
/// axis. Colors are CSS color strings, passed through to the host surface.
#[derive(Debug, Clone)]
pub struct Gradient {
    pub axis: GradientAxis,
    pub stops: Vec<(f64, String)>,
}

/// Minimal 2-D raster surface the field renders against.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resize the backing store. Implementations may reset brush and text
    /// state, as a browser canvas does; the renderer re-applies everything
    /// after resizing.
    fn resize(&mut self, width: u32, height: u32);

    /// Select the font for subsequent measurement and fills.
    /// `font` is a CSS font shorthand, e.g. `"96px Poppins"`.
    fn set_font(&mut self, font: &str);

    /// Advance width of `text` in the current font, in surface pixels.
    fn measure_text(&self, text: &str) -> f64;

    /// Install a gradient fill brush for subsequent text fills.
    fn set_fill_gradient(&mut self, gradient: &Gradient);

    /// Set alignment and baseline for subsequent text fills.
    fn set_text_style(&mut self, align: TextAlign, baseline: TextBaseline);

    /// Fill one line of text anchored at `(x, y)` per the current style.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Read back the full alpha plane, row-major, one byte per pixel.
    fn snapshot_alpha(&self) -> Vec<u8>;

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    /// Fill a circle of `radius` centered at `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}
