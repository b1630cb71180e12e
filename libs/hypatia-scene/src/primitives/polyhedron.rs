//! # Polyhedron Primitive

use hypatia_geom::Polyhedron;

use crate::mesh::Mesh;

/// Triangulates a polyhedron.
///
/// Each face is fanned from its first vertex, which assumes convex faces.
/// Vertices are shared between faces.
pub fn polyhedron_mesh(polyhedron: &Polyhedron) -> Mesh {
    let triangle_count = polyhedron
        .face_indices()
        .iter()
        .map(|face| face.len() - 2)
        .sum();
    let mut mesh = Mesh::with_capacity(polyhedron.vertices().len(), triangle_count);

    for v in polyhedron.vertices() {
        mesh.add_vertex(*v);
    }
    for face in polyhedron.face_indices() {
        let v0 = face[0] as u32;
        for pair in face[1..].windows(2) {
            mesh.add_triangle(v0, pair[0] as u32, pair[1] as u32);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dodecahedron_mesh() {
        let dodec = Polyhedron::dodecahedron(12.5).unwrap();
        let mesh = polyhedron_mesh(&dodec);
        assert_eq!(mesh.vertex_count(), 20);
        assert_eq!(mesh.triangle_count(), 36);
        assert!(mesh.validate());
        // Outward faces enclose a positive volume
        assert!(mesh.signed_volume() > 0.0);
    }
}
