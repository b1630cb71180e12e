use glam::{DMat4, DVec3};
use hypatia_geom::Polyhedron;
use hypatia_scene::{
    build_full_torus, distribute_cuboids, CuboidDistributionParams, MeshBackend, NodeId,
    RingParams, SceneError, SceneGraph, SceneResult, TorusParams,
};

/// Backend that fails every sweep.
struct NoSweep(SceneGraph);

impl MeshBackend for NoSweep {
    fn create_curve(&mut self, name: &str, points: &[DVec3], closed: bool) -> SceneResult<NodeId> {
        self.0.create_curve(name, points, closed)
    }

    fn create_circle(&mut self, name: &str, radius: f64, normal: DVec3, sections: u32) -> SceneResult<NodeId> {
        self.0.create_circle(name, radius, normal, sections)
    }

    fn create_cuboid(&mut self, name: &str, size: DVec3) -> SceneResult<NodeId> {
        self.0.create_cuboid(name, size)
    }

    fn create_polyhedron(&mut self, name: &str, polyhedron: &Polyhedron) -> SceneResult<NodeId> {
        self.0.create_polyhedron(name, polyhedron)
    }

    fn sweep(&mut self, name: &str, _profile: NodeId, _path: NodeId) -> SceneResult<NodeId> {
        Err(SceneError::degenerate(format!("sweep '{name}' refused")))
    }

    fn extrude_ring(&mut self, name: &str, params: &RingParams) -> SceneResult<NodeId> {
        self.0.extrude_ring(name, params)
    }

    fn boolean_union(&mut self, name: &str, parts: &[NodeId]) -> SceneResult<NodeId> {
        self.0.boolean_union(name, parts)
    }

    fn set_transform(&mut self, node: NodeId, transform: DMat4) -> SceneResult<()> {
        self.0.set_transform(node, transform)
    }

    fn group(&mut self, name: &str, children: &[NodeId]) -> SceneResult<NodeId> {
        self.0.group(name, children)
    }

    fn delete(&mut self, node: NodeId) -> SceneResult<()> {
        self.0.delete(node)
    }
}

#[test]
fn backend_failure_stops_the_torus() {
    let mut backend = NoSweep(SceneGraph::new());
    let err = build_full_torus(&mut backend, &TorusParams::default()).unwrap_err();
    match err {
        SceneError::Degenerate { message } => assert!(message.contains("sweptTorus_0")),
        other => panic!("expected degenerate error, got {other:?}"),
    }
    assert!(backend.0.find("fullTorus").is_none());
}

#[test]
fn builders_accept_trait_objects() {
    let mut scene = SceneGraph::new();
    let backend: &mut dyn MeshBackend = &mut scene;
    let params = CuboidDistributionParams {
        grid: 2,
        ..CuboidDistributionParams::default()
    };
    let master = distribute_cuboids(backend, &params).unwrap();
    assert!(master.is_some());
}

#[test]
fn stale_ids_are_reported() {
    let mut scene = SceneGraph::new();
    let cube = scene.create_cuboid("cube", DVec3::ONE).unwrap();
    scene.delete(cube).unwrap();
    let err = scene.set_transform(cube, DMat4::IDENTITY).unwrap_err();
    assert_eq!(err, SceneError::UnknownNode { id: cube });
}
