//! Field core - the single owner of all mutable animation state.
//!
//! `FieldCore` holds the surface, the validated configuration, the dot
//! batch, the cursor, and the RNG. Pointer and resize events go through
//! narrow setters on this owner; the per-frame `tick` is the only reader,
//! which keeps the single-writer-per-frame discipline even if a host drives
//! it from more than one place.
//!
//! The frame loop itself belongs to the host: it calls [`FieldCore::tick`]
//! once per scheduled frame and re-arms only while `tick` returns `true`.
//! `stop()` flips the run state to `Stopping`; the next tick observes it and
//! settles to `Idle` without updating or drawing, so shutdown is clean.

use crate::core::random::XorShift32;
use crate::core::surface::Surface;
use crate::domain::config::{ConfigError, FieldSettings, RenderConfig, Viewport};
use crate::domain::dot::Dot;
use crate::systems::{animate, layout, sampler};

const DEFAULT_SEED: u32 = 12345;

/// Run state of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopping,
}

#[derive(Debug)]
pub struct FieldCore<S: Surface> {
    surface: S,
    config: RenderConfig,
    viewport: Viewport,
    dots: Vec<Dot>,
    cursor: Option<(f64, f64)>,
    rng: XorShift32,
    state: RunState,
    frame: u64,
}

impl<S: Surface> FieldCore<S> {
    /// Validate the settings, lay the text out, and sample the initial dot
    /// batch. Fails before any dot is created if the settings carry an
    /// unsupported alignment or baseline.
    pub fn new(surface: S, settings: FieldSettings, viewport: Viewport) -> Result<Self, ConfigError> {
        Self::with_seed(surface, settings, viewport, DEFAULT_SEED)
    }

    /// Like [`FieldCore::new`] with an explicit RNG seed, so placements and
    /// radii are reproducible.
    pub fn with_seed(
        surface: S,
        settings: FieldSettings,
        viewport: Viewport,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        let config = settings.validate()?;
        let mut core = Self {
            surface,
            config,
            viewport,
            dots: Vec::new(),
            cursor: None,
            rng: XorShift32::new(seed),
            state: RunState::Idle,
            frame: 0,
        };
        core.rebuild();
        Ok(core)
    }

    /// Re-run layout and sampling with the stored parameters. The old dot
    /// batch is replaced wholesale.
    fn rebuild(&mut self) {
        layout::layout_and_render(&mut self.surface, &self.config, self.viewport);
        self.dots = sampler::sample(&self.surface, &self.config, &mut self.rng);
    }

    /// Viewport changed: reconfigure and resample.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rebuild();
    }

    /// Pointer moved over the surface, in surface-pixel coordinates.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    /// Pointer left the surface.
    pub fn clear_pointer(&mut self) {
        self.cursor = None;
    }

    pub fn start(&mut self) {
        self.state = RunState::Running;
    }

    /// Request a stop; honored at the top of the next tick.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopping;
        }
    }

    /// One frame: update every dot, clear, redraw. Returns whether the host
    /// should re-arm the frame loop.
    pub fn tick(&mut self) -> bool {
        match self.state {
            RunState::Idle => false,
            RunState::Stopping => {
                self.state = RunState::Idle;
                false
            }
            RunState::Running => {
                animate::step(&mut self.surface, &mut self.dots, self.cursor, &self.config);
                self.frame += 1;
                true
            }
        }
    }

    // === Accessors ===

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn dot_count(&self) -> u32 {
        self.dots.len() as u32
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
