//! In-memory raster surface.
//!
//! Backs the native test suite and headless hosts. Coverage is a single
//! alpha plane; colors are not stored (the sampler only ever reads alpha).
//! Text is rendered as block glyphs: every non-whitespace character covers a
//! fixed-proportion box, which is enough to exercise layout, sampling, and
//! animation without a font stack. Tests that need an exact mask write it
//! directly with [`RasterSurface::set_alpha`] / [`RasterSurface::fill_rect`].

use crate::core::surface::{Gradient, Surface};
use crate::domain::config::{TextAlign, TextBaseline};

/// Glyph box proportions relative to the font size.
const GLYPH_ADVANCE: f64 = 0.6;
const GLYPH_HEIGHT: f64 = 0.8;

const DEFAULT_FONT_SIZE: f64 = 16.0;

#[derive(Debug)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    alpha: Vec<u8>,

    font_size: f64,
    align: TextAlign,
    baseline: TextBaseline,
    gradient: Option<Gradient>,

    // Circles drawn since the last clear, for redraw assertions.
    circles: Vec<(f64, f64, f64)>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; (width * height) as usize],
            font_size: DEFAULT_FONT_SIZE,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
            gradient: None,
            circles: Vec::new(),
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[self.index(x, y)]
    }

    /// Write a single alpha value (test masks).
    pub fn set_alpha(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.alpha[idx] = value;
        }
    }

    /// Mark a rectangle opaque, clipped to the surface.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + w).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((y + h).ceil().max(0.0) as u32).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = self.index(px, py);
                fast!(self.alpha, [idx] = 255);
            }
        }
    }

    /// Circles drawn since the last [`Surface::clear`].
    pub fn circles(&self) -> &[(f64, f64, f64)] {
        &self.circles
    }

    /// Last gradient installed by the renderer, for layout assertions.
    pub fn last_gradient(&self) -> Option<&Gradient> {
        self.gradient.as_ref()
    }

    fn glyph_box(&self) -> (f64, f64) {
        (self.font_size * GLYPH_ADVANCE, self.font_size * GLYPH_HEIGHT)
    }

    /// Baseline-relative top of the glyph box, mirroring canvas anchoring
    /// closely enough for grid sampling.
    fn glyph_top(&self, y: f64, glyph_h: f64) -> f64 {
        match self.baseline {
            TextBaseline::Top | TextBaseline::Hanging => y,
            TextBaseline::Middle => y - glyph_h / 2.0,
            TextBaseline::Alphabetic | TextBaseline::Ideographic | TextBaseline::Bottom => {
                y - glyph_h
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.alpha = vec![0; (width * height) as usize];
        // A browser canvas resets its context state on resize; match it.
        self.font_size = DEFAULT_FONT_SIZE;
        self.align = TextAlign::Left;
        self.baseline = TextBaseline::Alphabetic;
        self.gradient = None;
        self.circles.clear();
    }

    fn set_font(&mut self, font: &str) {
        // CSS shorthand "<size>px <family>".
        if let Some(size) = font
            .split("px")
            .next()
            .and_then(|s| s.trim().parse::<f64>().ok())
        {
            self.font_size = size;
        }
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_size * GLYPH_ADVANCE
    }

    fn set_fill_gradient(&mut self, gradient: &Gradient) {
        self.gradient = Some(gradient.clone());
    }

    fn set_text_style(&mut self, align: TextAlign, baseline: TextBaseline) {
        self.align = align;
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let (advance, glyph_h) = self.glyph_box();
        let total = self.measure_text(text);
        let start_x = match self.align {
            TextAlign::Left => x,
            TextAlign::Center => x - total / 2.0,
            TextAlign::Right => x - total,
        };
        let top = self.glyph_top(y, glyph_h);

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            self.fill_rect(start_x + i as f64 * advance, top, advance, glyph_h);
        }
    }

    fn snapshot_alpha(&self) -> Vec<u8> {
        self.alpha.clone()
    }

    fn clear(&mut self) {
        self.alpha.fill(0);
        self.circles.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.circles.push((x, y, radius));

        let x0 = (x - radius).floor().max(0.0) as u32;
        let y0 = (y - radius).floor().max(0.0) as u32;
        let x1 = (((x + radius).ceil() + 1.0).max(0.0) as u32).min(self.width);
        let y1 = (((y + radius).ceil() + 1.0).max(0.0) as u32).min(self.height);
        let r2 = radius * radius;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f64 - x;
                let dy = py as f64 - y;
                if dx * dx + dy * dy <= r2 {
                    let idx = self.index(px, py);
                    fast!(self.alpha, [idx] = 255);
                }
            }
        }
    }
}
