//! A single dot of the field.
//!
//! Each dot remembers the rest position it was sampled at and carries its
//! current position, radius, and a phase angle that drives the hover jitter.

use crate::core::random::XorShift32;
use crate::domain::config::SpawnDirection;

/// Below this distance the initial approach snaps to rest instead of
/// lerping forever.
const SNAP_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Dot {
    pub rest_x: f64,
    pub rest_y: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub phase: f64,
}

impl Dot {
    pub fn new(rest_x: f64, rest_y: f64, radius: f64, phase: f64) -> Self {
        Self {
            rest_x,
            rest_y,
            x: rest_x,
            y: rest_y,
            radius,
            phase,
        }
    }

    /// Place the dot off-surface according to the spawn direction. Distances
    /// are randomized per dot so a batch does not arrive as a rigid sheet.
    pub fn place(&mut self, direction: SpawnDirection, width: f64, height: f64, rng: &mut XorShift32) {
        match direction {
            SpawnDirection::Right => {
                self.x = width + rng.unit() * width;
                self.y = self.rest_y;
            }
            SpawnDirection::Left => {
                self.x = -rng.unit() * width;
                self.y = self.rest_y;
            }
            SpawnDirection::Top => {
                self.x = self.rest_x;
                self.y = -rng.unit() * height;
            }
            SpawnDirection::Bottom => {
                self.x = self.rest_x;
                self.y = height + rng.unit() * height;
            }
            SpawnDirection::RightTop => {
                self.x = width + rng.unit() * width;
                self.y = -rng.unit() * height;
            }
            SpawnDirection::RightBottom => {
                self.x = width + rng.unit() * width;
                self.y = height + rng.unit() * height;
            }
            SpawnDirection::LeftTop => {
                self.x = -rng.unit() * width;
                self.y = -rng.unit() * height;
            }
            SpawnDirection::LeftBottom => {
                self.x = -rng.unit() * width;
                self.y = height + rng.unit() * height;
            }
            SpawnDirection::Horizontal => {
                self.x = if rng.coin() {
                    -rng.unit() * width
                } else {
                    width + rng.unit() * width
                };
                self.y = self.rest_y;
            }
            SpawnDirection::Vertical => {
                self.x = self.rest_x;
                self.y = if rng.coin() {
                    -rng.unit() * height
                } else {
                    height + rng.unit() * height
                };
            }
            SpawnDirection::Scatter => {
                let angle = rng.angle();
                let distance = rng.unit() * width.max(height);
                self.x = self.rest_x + angle.cos() * distance;
                self.y = self.rest_y + angle.sin() * distance;
            }
            SpawnDirection::InPlace => {}
        }
    }

    /// One interpolation step toward rest, snapping when already close.
    /// Used for the initial approach after placement.
    pub fn approach(&mut self, rate: f64) {
        let dx = self.rest_x - self.x;
        let dy = self.rest_y - self.y;

        if dx.abs() > SNAP_THRESHOLD || dy.abs() > SNAP_THRESHOLD {
            self.x += dx * rate;
            self.y += dy * rate;
        } else {
            self.x = self.rest_x;
            self.y = self.rest_y;
        }
    }

    /// Pure asymptotic lerp toward rest: `new = current + (rest - current) * rate`.
    /// The per-frame update; never snaps.
    #[inline]
    pub fn glide(&mut self, rate: f64) {
        self.x += (self.rest_x - self.x) * rate;
        self.y += (self.rest_y - self.y) * rate;
    }

    /// Euclidean distance from the current position to rest.
    #[inline]
    pub fn distance_to_rest(&self) -> f64 {
        let dx = self.rest_x - self.x;
        let dy = self.rest_y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
