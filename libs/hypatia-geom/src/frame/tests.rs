use super::*;
use approx::assert_abs_diff_eq;

fn assert_vec_eq(a: DVec3, b: DVec3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
}

fn assert_orthonormal(basis: &Basis) {
    assert_abs_diff_eq!(basis.tangent.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis.binormal.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis.normal.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis.tangent.dot(basis.binormal), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis.tangent.dot(basis.normal), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis.binormal.dot(basis.normal), 0.0, epsilon = 1e-12);
}

#[test]
fn test_basis_from_z_normal() {
    let basis = Basis::from_normal(DVec3::Z, 0.9).unwrap();
    assert_eq!(basis.tangent, DVec3::X);
    assert_eq!(basis.binormal, DVec3::Y);
    assert_eq!(basis.normal, DVec3::Z);
}

#[test]
fn test_basis_swaps_reference_axis_near_x() {
    let basis = Basis::from_normal(DVec3::X, 0.9).unwrap();
    // Reference switched to Y; tangent is Y itself
    assert_vec_eq(basis.tangent, DVec3::Y);
    assert_vec_eq(basis.binormal, DVec3::Z);
    assert_orthonormal(&basis);
}

#[test]
fn test_basis_is_orthonormal_for_oblique_normals() {
    for normal in [
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(-0.3, 0.2, 0.9),
        DVec3::new(0.95, 0.1, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
    ] {
        let basis = Basis::from_normal(normal, 0.9).unwrap();
        assert_orthonormal(&basis);
        assert_vec_eq(basis.tangent.cross(basis.binormal), basis.normal);
    }
}

#[test]
fn test_basis_zero_normal_is_domain_error() {
    assert!(Basis::from_normal(DVec3::ZERO, 0.9).unwrap_err().is_domain());
}

#[test]
fn test_basis_matrix_maps_local_axes() {
    let basis = Basis::from_normal(DVec3::new(0.0, 1.0, 1.0), 0.9).unwrap();
    let position = DVec3::new(1.0, 2.0, 3.0);
    let m = basis.to_mat4(position);
    assert_vec_eq(m.transform_point3(DVec3::ZERO), position);
    assert_vec_eq(m.transform_vector3(DVec3::X), basis.tangent);
    assert_vec_eq(m.transform_vector3(DVec3::Y), basis.binormal);
    assert_vec_eq(m.transform_vector3(DVec3::Z), basis.normal);
}

fn square_face(z: f64) -> Vec<DVec3> {
    vec![
        DVec3::new(-1.0, -1.0, z),
        DVec3::new(1.0, -1.0, z),
        DVec3::new(1.0, 1.0, z),
        DVec3::new(-1.0, 1.0, z),
    ]
}

#[test]
fn test_face_frame_square() {
    let frame = FaceFrame::from_vertices(&square_face(2.0), &Tolerances::default()).unwrap();
    assert_vec_eq(frame.centroid, DVec3::new(0.0, 0.0, 2.0));
    assert_vec_eq(frame.normal(), DVec3::Z);
}

#[test]
fn test_face_normal_follows_winding() {
    let mut face = square_face(0.0);
    face.reverse();
    let frame = FaceFrame::from_vertices(&face, &Tolerances::default()).unwrap();
    assert_vec_eq(frame.normal(), -DVec3::Z);
}

#[test]
fn test_collinear_face_is_domain_error() {
    let face = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ];
    let err = FaceFrame::from_vertices(&face, &Tolerances::default()).unwrap_err();
    assert!(err.is_domain());
}

#[test]
fn test_short_face_is_validation_error() {
    let face = [DVec3::ZERO, DVec3::X];
    let err = FaceFrame::from_vertices(&face, &Tolerances::default()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_project_unproject_round_trip() {
    let face = [
        DVec3::new(3.0, 0.0, 1.0),
        DVec3::new(0.0, 3.0, 1.5),
        DVec3::new(-1.0, -1.0, 0.0),
        DVec3::new(1.0, -2.0, 0.25),
    ];
    let frame = FaceFrame::from_vertices(&face[..3], &Tolerances::default()).unwrap();
    for v in &face[..3] {
        let uv = frame.project(*v);
        assert_vec_eq(frame.unproject(uv, 0.0), *v);
    }
}

#[test]
fn test_unproject_offsets_along_normal() {
    let frame = FaceFrame::from_vertices(&square_face(0.0), &Tolerances::default()).unwrap();
    let p = frame.unproject(DVec2::new(0.5, -0.25), 1.5);
    assert_vec_eq(p, DVec3::new(0.5, -0.25, 1.5));
    assert_abs_diff_eq!(frame.plane_distance(p), 1.5, epsilon = 1e-12);
}

#[test]
fn test_project_polygon_preserves_shape() {
    let frame = FaceFrame::from_vertices(&square_face(5.0), &Tolerances::default()).unwrap();
    let polygon = frame.project_polygon(&square_face(5.0)).unwrap();
    assert_eq!(polygon.vertex_count(), 4);
    assert!((polygon.signed_area().abs() - 4.0).abs() < 1e-12);
}

#[test]
fn test_validate_offset() {
    assert!(validate_offset(0.0).is_ok());
    assert!(validate_offset(2.5).is_ok());
    assert!(validate_offset(-0.1).unwrap_err().is_domain());
    assert!(validate_offset(f64::NAN).unwrap_err().is_validation());
}
