use super::*;
use approx::assert_abs_diff_eq;

fn tetrahedron_parts() -> (Vec<DVec3>, Vec<Vec<usize>>) {
    (
        vec![
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(-1.0, 1.0, -1.0),
            DVec3::new(-1.0, -1.0, 1.0),
        ],
        vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]],
    )
}

#[test]
fn test_tetrahedron_is_accepted() {
    let (vertices, faces) = tetrahedron_parts();
    let poly = Polyhedron::new(vertices, faces).unwrap();
    assert_eq!(poly.face_count(), 4);
    assert_eq!(poly.face_vertices(0).unwrap().len(), 3);
    assert!(poly.face_vertices(4).is_none());
}

#[test]
fn test_too_few_vertices() {
    let (mut vertices, faces) = tetrahedron_parts();
    vertices.pop();
    assert!(Polyhedron::new(vertices, faces).unwrap_err().is_validation());
}

#[test]
fn test_too_few_faces() {
    let (vertices, mut faces) = tetrahedron_parts();
    faces.pop();
    assert!(Polyhedron::new(vertices, faces).unwrap_err().is_validation());
}

#[test]
fn test_short_face_rejected() {
    let (vertices, mut faces) = tetrahedron_parts();
    faces[2] = vec![0, 1];
    assert!(Polyhedron::new(vertices, faces).unwrap_err().is_validation());
}

#[test]
fn test_out_of_range_index_rejected() {
    let (vertices, mut faces) = tetrahedron_parts();
    faces[1] = vec![0, 1, 7];
    let err = Polyhedron::new(vertices, faces).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains('7'));
}

#[test]
fn test_dodecahedron_counts() {
    let dodec = Polyhedron::dodecahedron(12.5).unwrap();
    assert_eq!(dodec.vertices().len(), 20);
    assert_eq!(dodec.face_count(), 12);
    assert!(dodec.faces().all(|f| f.len() == 5));
}

#[test]
fn test_dodecahedron_vertices_on_circumsphere() {
    let dodec = Polyhedron::dodecahedron(12.5).unwrap();
    for v in dodec.vertices() {
        assert_abs_diff_eq!(v.length(), 12.5, epsilon = 1e-9);
    }
}

#[test]
fn test_dodecahedron_each_vertex_shared_by_three_faces() {
    let dodec = Polyhedron::dodecahedron(1.0).unwrap();
    let mut uses = [0usize; 20];
    for face in dodec.face_indices() {
        for &i in face {
            uses[i] += 1;
        }
    }
    assert!(uses.iter().all(|&n| n == 3));
}

#[test]
fn test_dodecahedron_faces_point_outward() {
    let dodec = Polyhedron::dodecahedron(3.0).unwrap();
    for face in dodec.faces() {
        let normal = (face[1] - face[0]).cross(face[2] - face[0]).normalize();
        let centroid = face.iter().copied().sum::<DVec3>() / 5.0;
        assert!(normal.dot(centroid) > 0.0);
        assert_abs_diff_eq!(normal.dot(centroid.normalize()), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_dodecahedron_faces_are_regular() {
    let dodec = Polyhedron::dodecahedron(2.0).unwrap();
    let edge = {
        let f = dodec.face_vertices(0).unwrap();
        (f[1] - f[0]).length()
    };
    for face in dodec.faces() {
        for i in 0..5 {
            let len = (face[(i + 1) % 5] - face[i]).length();
            assert_abs_diff_eq!(len, edge, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_dodecahedron_rejects_bad_radius() {
    assert!(Polyhedron::dodecahedron(0.0).unwrap_err().is_domain());
    assert!(Polyhedron::dodecahedron(-1.0).unwrap_err().is_domain());
    assert!(Polyhedron::dodecahedron(f64::INFINITY)
        .unwrap_err()
        .is_validation());
}
