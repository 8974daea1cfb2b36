//! Text layout and rendering onto the surface.
//!
//! Sizes the surface (fit-to-content clipped to the viewport, or the full
//! viewport), installs the gradient brush, and fills each line of text at
//! its alignment/baseline anchor. Runs once at setup and again on every
//! resize; the sampler reads the resulting alpha plane.

use crate::core::surface::{Gradient, GradientAxis, Surface};
use crate::domain::config::{GradientKind, RenderConfig, TextAlign, TextBaseline, Viewport};

/// Literal substring the host uses to mark line breaks in the text.
pub const LINE_BREAK_MARKER: &str = "CRLF";

/// Lay the configured text out on the surface and render it.
pub fn layout_and_render<S: Surface>(surface: &mut S, config: &RenderConfig, viewport: Viewport) {
    let font = config.font();
    surface.set_font(&font);

    let lines: Vec<&str> = config.text.split(LINE_BREAK_MARKER).collect();
    let line_height = config.font_size;
    let total_text_height = lines.len() as f64 * line_height;
    let widest = lines
        .iter()
        .map(|line| surface.measure_text(line))
        .fold(0.0, f64::max);

    let (width, height) = if config.full_surface {
        (viewport.width.max(1), viewport.height.max(1))
    } else {
        let fit_w = (widest + config.padding_left + config.padding_right).ceil() as u32;
        let fit_h = (total_text_height + 2.0 * config.padding_y).ceil() as u32;
        (fit_w.clamp(1, viewport.width.max(1)), fit_h.max(1))
    };

    // Resizing resets context state on a browser canvas; re-apply the font.
    surface.resize(width, height);
    surface.set_font(&font);

    let start_x = match config.align {
        TextAlign::Left => config.padding_left,
        TextAlign::Center => (width as f64 + config.padding_left - config.padding_right) / 2.0,
        TextAlign::Right => width as f64 - config.padding_right,
    };

    if let Some(gradient) = build_gradient(config, height as f64, line_height) {
        surface.set_fill_gradient(&gradient);
    }
    surface.set_text_style(config.align, config.baseline);

    for (i, line) in lines.iter().enumerate() {
        let y = line_y(config, height as f64, total_text_height, line_height, lines.len(), i);
        surface.fill_text(line, start_x, y);
    }
}

/// Gradient brush for the whole surface.
///
/// Vertical is a hard two-stop split at the bottom of the first line; the
/// horizontal branch is a plain 0→1 sweep that ignores line structure
/// entirely. Multi-line horizontal gradients are left as they are, not
/// generalized.
fn build_gradient(config: &RenderConfig, height: f64, line_height: f64) -> Option<Gradient> {
    match config.gradient {
        GradientKind::Vertical => {
            let first_line_end = config.padding_y + line_height;
            let split = (first_line_end / height).clamp(0.0, 1.0);
            Some(Gradient {
                axis: GradientAxis::Vertical,
                stops: vec![
                    (0.0, config.gradient_start.clone()),
                    (split, config.gradient_start.clone()),
                    (split, config.gradient_end.clone()),
                    (1.0, config.gradient_end.clone()),
                ],
            })
        }
        GradientKind::Horizontal => Some(Gradient {
            axis: GradientAxis::Horizontal,
            stops: vec![
                (0.0, config.gradient_start.clone()),
                (1.0, config.gradient_end.clone()),
            ],
        }),
        GradientKind::None => None,
    }
}

/// Anchor y for line `i` of `n`, per the configured baseline. `hanging` and
/// `ideographic` stack from the top like `top` does.
fn line_y(
    config: &RenderConfig,
    height: f64,
    total_text_height: f64,
    line_height: f64,
    n: usize,
    i: usize,
) -> f64 {
    match config.baseline {
        TextBaseline::Top | TextBaseline::Hanging | TextBaseline::Ideographic => {
            config.padding_y + i as f64 * line_height
        }
        TextBaseline::Middle => (height - total_text_height) / 2.0 + i as f64 * line_height,
        TextBaseline::Bottom | TextBaseline::Alphabetic => {
            height - config.padding_y - (n - 1 - i) as f64 * line_height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::raster::RasterSurface;
    use crate::domain::config::FieldSettings;

    fn config(settings: FieldSettings) -> RenderConfig {
        settings.validate().unwrap()
    }

    fn base_settings() -> FieldSettings {
        FieldSettings {
            text: "AB".to_string(),
            font_size: 10.0,
            padding_left: 4.0,
            padding_right: 4.0,
            padding_y: 5.0,
            text_align: "left".to_string(),
            text_baseline: "top".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn fit_to_content_sizes_from_measured_text() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(base_settings());
        layout_and_render(&mut surface, &cfg, Viewport::new(500, 300));
        // Block glyphs: 2 chars * 10px * 0.6 = 12px, plus 4+4 padding.
        assert_eq!(surface.width(), 20);
        // One line * 10px, plus 5px padding top and bottom.
        assert_eq!(surface.height(), 20);
    }

    #[test]
    fn fit_to_content_clips_to_viewport_width() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(FieldSettings {
            text: "WIDE TEXT LINE".to_string(),
            font_size: 100.0,
            ..base_settings()
        });
        layout_and_render(&mut surface, &cfg, Viewport::new(200, 300));
        assert_eq!(surface.width(), 200);
    }

    #[test]
    fn full_surface_uses_viewport_dimensions() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(FieldSettings {
            full_surface: true,
            ..base_settings()
        });
        layout_and_render(&mut surface, &cfg, Viewport::new(640, 480));
        assert_eq!((surface.width(), surface.height()), (640, 480));
    }

    #[test]
    fn vertical_gradient_splits_hard_after_first_line() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(base_settings());
        layout_and_render(&mut surface, &cfg, Viewport::new(500, 300));

        let gradient = surface.last_gradient().unwrap();
        assert_eq!(gradient.axis, GradientAxis::Vertical);
        assert_eq!(gradient.stops.len(), 4);
        // padding_y + line_height over surface height: (5 + 10) / 20.
        let split = (5.0 + 10.0) / 20.0;
        assert_eq!(gradient.stops[1].0, split);
        assert_eq!(gradient.stops[2].0, split);
        assert_eq!(gradient.stops[0].1, gradient.stops[1].1);
        assert_eq!(gradient.stops[2].1, gradient.stops[3].1);
    }

    #[test]
    fn horizontal_gradient_is_a_plain_sweep() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(FieldSettings {
            gradient_type: "gradient-horizontal".to_string(),
            ..base_settings()
        });
        layout_and_render(&mut surface, &cfg, Viewport::new(500, 300));

        let gradient = surface.last_gradient().unwrap();
        assert_eq!(gradient.axis, GradientAxis::Horizontal);
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[0].0, 0.0);
        assert_eq!(gradient.stops[1].0, 1.0);
    }

    #[test]
    fn line_break_marker_stacks_lines_by_line_height() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(FieldSettings {
            text: "ACRLFB".to_string(),
            padding_y: 0.0,
            ..base_settings()
        });
        layout_and_render(&mut surface, &cfg, Viewport::new(500, 300));

        // Two stacked 10px lines with top baseline: glyph boxes at y 0..8
        // and y 10..18.
        assert_eq!(surface.height(), 20);
        assert_eq!(surface.alpha_at(6, 4), 255);
        assert_eq!(surface.alpha_at(6, 9), 0);
        assert_eq!(surface.alpha_at(6, 14), 255);
    }

    #[test]
    fn left_alignment_starts_at_left_padding() {
        let mut surface = RasterSurface::new(1, 1);
        let cfg = config(base_settings());
        layout_and_render(&mut surface, &cfg, Viewport::new(500, 300));
        // Nothing left of the padding, coverage right after it.
        assert_eq!(surface.alpha_at(2, 8), 0);
        assert_eq!(surface.alpha_at(5, 8), 255);
    }
}
