//! Grid sampling: glyph pixels become dots.
//!
//! One alpha read-back, then a fixed-pitch walk over it. Every grid cell
//! with non-zero opacity yields a dot with a randomized radius, placed
//! off-surface per the spawn direction, with one initial approach step
//! already applied. Dot density therefore follows the glyph shape, not the
//! grid.

use crate::core::random::XorShift32;
use crate::core::surface::Surface;
use crate::domain::config::RenderConfig;
use crate::domain::dot::Dot;

/// Sample the surface into a fresh dot batch. Replaces any previous batch
/// wholesale; the caller owns the swap.
pub fn sample<S: Surface>(surface: &S, config: &RenderConfig, rng: &mut XorShift32) -> Vec<Dot> {
    let width = surface.width();
    let height = surface.height();
    let alpha = surface.snapshot_alpha();
    let spacing = config.spacing as usize;

    let mut dots = Vec::new();
    for y in (0..height).step_by(spacing) {
        for x in (0..width).step_by(spacing) {
            let idx = (y * width + x) as usize;
            if *fast!(alpha, [idx]) == 0 {
                continue;
            }

            let radius = rng.range(config.min_radius, config.max_radius);
            let mut dot = Dot::new(x as f64, y as f64, radius, rng.angle());
            dot.place(config.spawn, width as f64, height as f64, rng);
            dot.approach(config.approach_speed);
            dots.push(dot);
        }
    }
    dots
}
