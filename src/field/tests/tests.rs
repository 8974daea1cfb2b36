use super::*;
use crate::core::raster::RasterSurface;
use crate::domain::config::ConfigError;
use crate::systems::animate::JITTER_AMPLITUDE;

fn settings() -> FieldSettings {
    // Small full-surface field so glyph coverage is fully on-surface.
    FieldSettings {
        text: "AB".to_string(),
        font_size: 20.0,
        full_surface: true,
        spacing: 4,
        ..Default::default()
    }
}

fn core(viewport: Viewport) -> FieldCore<RasterSurface> {
    FieldCore::with_seed(RasterSurface::new(1, 1), settings(), viewport, 4242).unwrap()
}

#[test]
fn setup_samples_a_non_empty_dot_batch() {
    let core = core(Viewport::new(100, 40));
    assert!(core.dot_count() > 0);
    assert_eq!(core.state(), RunState::Idle);
    assert_eq!(core.frame(), 0);
}

#[test]
fn unsupported_alignment_aborts_before_any_dot_exists() {
    let bad = FieldSettings {
        text_align: "justified".to_string(),
        ..settings()
    };
    let err = FieldCore::new(RasterSurface::new(1, 1), bad, Viewport::new(100, 40)).unwrap_err();
    assert_eq!(err, ConfigError::UnsupportedAlign("justified".to_string()));
}

#[test]
fn unsupported_baseline_aborts_before_any_dot_exists() {
    let bad = FieldSettings {
        text_baseline: "mathematical".to_string(),
        ..settings()
    };
    let err = FieldCore::new(RasterSurface::new(1, 1), bad, Viewport::new(100, 40)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnsupportedBaseline("mathematical".to_string())
    );
}

#[test]
fn tick_is_inert_until_started() {
    let mut core = core(Viewport::new(100, 40));
    assert!(!core.tick());
    assert_eq!(core.frame(), 0);
    assert!(core.surface().circles().is_empty());
}

#[test]
fn stop_is_honored_at_the_top_of_the_next_tick() {
    let mut core = core(Viewport::new(100, 40));
    core.start();
    assert!(core.tick());
    assert!(core.tick());
    assert_eq!(core.frame(), 2);

    core.stop();
    assert_eq!(core.state(), RunState::Stopping);
    // The stopping tick neither updates nor draws.
    assert!(!core.tick());
    assert_eq!(core.state(), RunState::Idle);
    assert_eq!(core.frame(), 2);
    assert!(!core.tick());

    // Restart is a fresh Running state, not a resume hack.
    core.start();
    assert!(core.tick());
    assert_eq!(core.frame(), 3);
}

#[test]
fn stop_while_idle_stays_idle() {
    let mut core = core(Viewport::new(100, 40));
    core.stop();
    assert_eq!(core.state(), RunState::Idle);
}

#[test]
fn every_tick_redraws_the_whole_batch() {
    let mut core = core(Viewport::new(100, 40));
    core.start();
    core.tick();
    assert_eq!(core.surface().circles().len() as u32, core.dot_count());
}

#[test]
fn cursor_absent_distance_to_rest_never_increases() {
    let mut core = core(Viewport::new(100, 40));
    core.start();
    for _ in 0..100 {
        let before: Vec<f64> = core.dots().iter().map(Dot::distance_to_rest).collect();
        core.tick();
        for (dot, prev) in core.dots().iter().zip(&before) {
            assert!(dot.distance_to_rest() <= *prev + 1e-9);
        }
    }
    // And in the limit the batch has converged.
    for _ in 0..2000 {
        core.tick();
    }
    assert!(core.dots().iter().all(|d| d.distance_to_rest() < 1e-3));
}

#[test]
fn hovered_dot_sits_at_hover_offset_from_rest_plus_bounded_jitter() {
    let mut core = core(Viewport::new(100, 40));
    let (rest_x, rest_y) = {
        let dot = &core.dots()[0];
        (dot.rest_x, dot.rest_y)
    };
    let (offset, angle_to_rest) = (core.config().hover_offset, 0.0_f64);

    // Cursor just left of the rest point: cursor→rest axis is +x.
    core.set_pointer(rest_x - 10.0, rest_y);
    core.start();
    core.tick();

    let dot = &core.dots()[0];
    let expected_x = rest_x + angle_to_rest.cos() * offset;
    let expected_y = rest_y + angle_to_rest.sin() * offset;
    let jitter_dx = dot.x - expected_x;
    let jitter_dy = dot.y - expected_y;
    let jitter = (jitter_dx * jitter_dx + jitter_dy * jitter_dy).sqrt();
    assert!(jitter <= JITTER_AMPLITUDE + 1e-9);
}

#[test]
fn cursor_on_exact_rest_point_still_displaces_by_hover_offset() {
    let mut core = core(Viewport::new(100, 40));
    let (rest_x, rest_y) = {
        let dot = &core.dots()[0];
        (dot.rest_x, dot.rest_y)
    };
    core.set_pointer(rest_x, rest_y);
    core.start();
    core.tick();

    let dot = &core.dots()[0];
    let dx = dot.x - rest_x;
    let dy = dot.y - rest_y;
    let displacement = (dx * dx + dy * dy).sqrt();
    let offset = core.config().hover_offset;
    assert!(displacement >= offset - JITTER_AMPLITUDE - 1e-9);
    assert!(displacement <= offset + JITTER_AMPLITUDE + 1e-9);
}

#[test]
fn clearing_the_pointer_releases_hovered_dots() {
    let mut core = core(Viewport::new(100, 40));
    let (rest_x, rest_y) = {
        let dot = &core.dots()[0];
        (dot.rest_x, dot.rest_y)
    };
    core.set_pointer(rest_x, rest_y);
    core.start();
    core.tick();
    let displaced = core.dots()[0].distance_to_rest();
    assert!(displaced > 0.0);

    core.clear_pointer();
    assert_eq!(core.cursor(), None);
    for _ in 0..2000 {
        core.tick();
    }
    assert!(core.dots()[0].distance_to_rest() < 1e-3);
}

#[test]
fn resize_replaces_the_batch_for_the_new_dimensions() {
    let mut core = core(Viewport::new(100, 40));
    // Centered on a 100px-wide surface: all rest points left of x=100.
    assert!(core.dots().iter().all(|d| d.rest_x < 100.0));

    core.resize(Viewport::new(200, 80));
    assert_eq!(core.surface().width(), 200);
    assert!(core.dot_count() > 0);
    // Text is now centered at x=100; the batch reflects the new geometry.
    assert!(core.dots().iter().any(|d| d.rest_x > 100.0));
}

#[test]
fn same_seed_and_settings_reproduce_the_same_batch() {
    let a = core(Viewport::new(100, 40));
    let b = core(Viewport::new(100, 40));
    assert_eq!(a.dot_count(), b.dot_count());
    for (da, db) in a.dots().iter().zip(b.dots()) {
        assert_eq!((da.x, da.y, da.radius), (db.x, db.y, db.radius));
        assert_eq!((da.rest_x, da.rest_y), (db.rest_x, db.rest_y));
    }
}
