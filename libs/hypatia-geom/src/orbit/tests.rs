use super::*;
use approx::assert_abs_diff_eq;
use glam::DVec3;

#[test]
fn test_default_layout_endpoints() {
    let params = OrbitLayoutParams::default();
    let rings = concentric_orbits(&params).unwrap();
    assert_eq!(rings.len(), 7);

    let first = rings[0];
    assert_abs_diff_eq!(first.radius, 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(first.perspective, DEFAULT_AXIS_RATIO, epsilon = 1e-12);
    assert_abs_diff_eq!(first.tilt_degrees, 0.0, epsilon = 1e-12);

    let last = rings[6];
    let a = DEFAULT_AXIS_RATIO;
    assert_abs_diff_eq!(last.radius, 250.0, epsilon = 1e-12);
    assert_abs_diff_eq!(last.perspective, a * (1.0 + a), epsilon = 1e-12);
    assert_abs_diff_eq!(last.tilt_degrees, 45.0, epsilon = 1e-12);
    assert_abs_diff_eq!(last.minor_radius, 250.0 * a * (1.0 + a), epsilon = 1e-9);
}

#[test]
fn test_rings_grow_monotonically() {
    let rings = concentric_orbits(&OrbitLayoutParams::default()).unwrap();
    for pair in rings.windows(2) {
        assert!(pair[1].radius > pair[0].radius);
        assert!(pair[1].perspective > pair[0].perspective);
        assert!(pair[1].tilt_degrees > pair[0].tilt_degrees);
    }
}

#[test]
fn test_middle_ring() {
    let ring = orbit_ring(&OrbitLayoutParams::default(), 3).unwrap();
    assert_abs_diff_eq!(ring.radius, 150.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ring.tilt_degrees, 22.5, epsilon = 1e-12);
    assert_abs_diff_eq!(ring.inner_radius(), 149.0, epsilon = 1e-12);
}

#[test]
fn test_index_past_last_ring_extrapolates() {
    let ring = orbit_ring(&OrbitLayoutParams::default(), 12).unwrap();
    assert_abs_diff_eq!(ring.radius, 450.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ring.tilt_degrees, 90.0, epsilon = 1e-9);
}

#[test]
fn test_single_ring_sits_at_inner_radius() {
    let params = OrbitLayoutParams {
        ring_count: 1,
        ..OrbitLayoutParams::default()
    };
    let rings = concentric_orbits(&params).unwrap();
    assert_eq!(rings.len(), 1);
    assert_abs_diff_eq!(rings[0].radius, 50.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_layouts() {
    let base = OrbitLayoutParams::default();
    let zero_rings = OrbitLayoutParams { ring_count: 0, ..base };
    assert!(concentric_orbits(&zero_rings).unwrap_err().is_domain());

    let thick = OrbitLayoutParams { thickness: 50.0, ..base };
    assert!(concentric_orbits(&thick).unwrap_err().is_domain());

    let negative = OrbitLayoutParams { radius: -1.0, ..base };
    assert!(orbit_ring(&negative, 0).unwrap_err().is_domain());

    let nan = OrbitLayoutParams { axis_ratio: f64::NAN, ..base };
    assert!(orbit_ring(&nan, 0).unwrap_err().is_validation());
}

#[test]
fn test_outline_orientation_count() {
    assert_eq!(outline_orientations(3).unwrap().len(), 9);
    assert!(outline_orientations(0).unwrap_err().is_domain());
}

#[test]
fn test_outline_first_set_orientations() {
    let q = outline_orientations(3).unwrap();
    // θ = 0: two identity rotations and one quarter turn about X
    assert_abs_diff_eq!((q[0] * DVec3::Z - DVec3::Z).length(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!((q[1] * DVec3::Z - DVec3::Z).length(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!((q[2] * DVec3::Z - -DVec3::Y).length(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_outline_rings_are_unit_rotations() {
    for q in outline_orientations(5).unwrap() {
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_params_partial_json() {
    let params: OrbitLayoutParams = serde_json::from_str(r#"{"ring_count": 4}"#).unwrap();
    assert_eq!(params.ring_count, 4);
    assert_eq!(params.radius, DEFAULT_ORBIT_RADIUS);
}
