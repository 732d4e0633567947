// Property tests for the pointer repulsion math.

use glam::DVec2;
use petal_core::*;

const RADIUS: f64 = POINTER_RADIUS;

#[test]
fn no_displacement_at_or_beyond_radius() {
    let pointer = DVec2::new(0.0, 0.0);
    let at_radius = DVec2::new(RADIUS, 0.0);
    assert_eq!(repulsion_offset(pointer, at_radius, RADIUS, 10.0), DVec2::ZERO);
    let beyond = DVec2::new(RADIUS + 1.0, 0.0);
    assert_eq!(repulsion_offset(pointer, beyond, RADIUS, 10.0), DVec2::ZERO);
    let far = DVec2::new(5000.0, -3000.0);
    assert_eq!(repulsion_offset(pointer, far, RADIUS, 10.0), DVec2::ZERO);
}

#[test]
fn no_displacement_when_coincident_with_pointer() {
    let p = DVec2::new(42.0, 42.0);
    assert_eq!(repulsion_offset(p, p, RADIUS, 10.0), DVec2::ZERO);
}

#[test]
fn displacement_points_away_from_pointer() {
    let pointer = DVec2::new(100.0, 100.0);
    for (dx, dy) in [(30.0, 0.0), (0.0, -40.0), (-20.0, 25.0), (50.0, 50.0)] {
        let pos = pointer + DVec2::new(dx, dy);
        let offset = repulsion_offset(pointer, pos, RADIUS, 10.0);
        // Moving along the offset increases distance from the pointer.
        let before = (pos - pointer).length();
        let after = (pos + offset - pointer).length();
        assert!(after > before, "offset did not repel at ({dx}, {dy})");
        // And the offset is parallel to the pointer->particle direction.
        let dir = (pos - pointer).normalize();
        let along = offset.normalize().dot(dir);
        assert!((along - 1.0).abs() < 1e-9);
    }
}

#[test]
fn magnitude_increases_monotonically_toward_pointer() {
    let pointer = DVec2::ZERO;
    let mut prev = 0.0;
    // Walk inward from the radius edge; magnitude must strictly grow.
    for step in 1..150 {
        let d = RADIUS - step as f64;
        let mag = repulsion_offset(pointer, DVec2::new(d, 0.0), RADIUS, 10.0).length();
        assert!(mag > prev, "not monotone at distance {d}");
        prev = mag;
    }
}

#[test]
fn magnitude_scales_linearly_with_density() {
    let pointer = DVec2::ZERO;
    let pos = DVec2::new(50.0, 0.0);
    let base = repulsion_offset(pointer, pos, RADIUS, 1.0).length();
    for density in [2.0, 5.0, 10.0, 20.0] {
        let mag = repulsion_offset(pointer, pos, RADIUS, density).length();
        assert!((mag - base * density).abs() < 1e-9);
    }
}

#[test]
fn magnitude_matches_closed_form() {
    let pointer = DVec2::ZERO;
    let pos = DVec2::new(75.0, 0.0);
    let density = 8.0;
    let expected = (RADIUS - 75.0) / RADIUS * density * REPULSION_STRENGTH;
    let mag = repulsion_offset(pointer, pos, RADIUS, density).length();
    assert!((mag - expected).abs() < 1e-9);
}

#[test]
fn unset_pointer_applies_no_repulsion_in_step() {
    let pointer = PointerState::default();
    assert!(pointer.pos.is_none());
    let mut p = AmbientParticle {
        pos: DVec2::new(100.0, 100.0),
        vel: DVec2::new(0.1, 0.3),
        glyph: HEART,
        size: 12.0,
        color: Color::new(HEART_RGB, 0.8),
        density: 20.0,
    };
    p.step(&pointer, 800.0, 600.0);
    assert_eq!(p.pos, DVec2::new(100.1, 100.3));
}
