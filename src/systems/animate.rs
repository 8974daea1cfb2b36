//! Per-frame animation pass.
//!
//! With the cursor inside the hover radius of a dot's rest point, the dot is
//! pushed `hover_offset` along the cursor→rest axis plus a small oscillation
//! driven by the dot's phase angle; otherwise it glides back toward rest.
//! The pass then clears the surface and redraws every dot.

use crate::core::surface::Surface;
use crate::domain::config::RenderConfig;
use crate::domain::dot::Dot;

/// Fixed oscillation magnitude, independent of `hover_offset`.
pub const JITTER_AMPLITUDE: f64 = 5.0;

/// Advance one dot by one frame.
pub fn update_dot(dot: &mut Dot, cursor: Option<(f64, f64)>, config: &RenderConfig) {
    if let Some((mx, my)) = cursor {
        let dx = dot.rest_x - mx;
        let dy = dot.rest_y - my;
        if dx * dx + dy * dy <= config.hover_distance * config.hover_distance {
            // atan2(0, 0) is 0, so a cursor exactly on the rest point pushes
            // the dot horizontally.
            let angle = dy.atan2(dx);
            dot.x = dot.rest_x
                + angle.cos() * config.hover_offset
                + dot.phase.cos() * JITTER_AMPLITUDE;
            dot.y = dot.rest_y
                + angle.sin() * config.hover_offset
                + dot.phase.sin() * JITTER_AMPLITUDE;
            dot.phase += config.jitter_rate;
            return;
        }
    }
    dot.glide(config.approach_rate);
}

/// One frame: update every dot, then clear and redraw.
pub fn step<S: Surface>(
    surface: &mut S,
    dots: &mut [Dot],
    cursor: Option<(f64, f64)>,
    config: &RenderConfig,
) {
    surface.clear();
    for dot in dots.iter_mut() {
        update_dot(dot, cursor, config);
        surface.fill_circle(dot.x, dot.y, dot.radius);
    }
}
