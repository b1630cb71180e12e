//! # Scene Graph
//!
//! In-memory [`MeshBackend`]: an arena of named nodes with local transforms
//! and parent/child links.
//!
//! Ids index the arena directly. Deleting a node empties its slot and the
//! slot is never reused, so a stale id always fails with
//! [`SceneError::UnknownNode`].

use glam::{DMat4, DVec3};
use log::debug;

use config::constants::MAX_VERTICES;
use config::tolerances::Tolerances;
use hypatia_geom::Polyhedron;

use crate::backend::{profile_plane, MeshBackend, NodeId};
use crate::error::{SceneError, SceneResult};
use crate::mesh::Mesh;
use crate::ops::{extrude_ring, sweep_profile, RingParams};
use crate::primitives::{circle_points, create_cuboid, polyhedron_mesh};

/// What a node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Polyline in the node's local space.
    Curve { points: Vec<DVec3>, closed: bool },
    /// Triangle mesh in the node's local space.
    Mesh(Mesh),
    /// Transform-only parent.
    Group,
}

/// A scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    transform: DMat4,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            transform: DMat4::IDENTITY,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Local transform relative to the parent.
    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The mesh, if this is a mesh node.
    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group)
    }
}

/// In-memory scene.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hypatia_scene::{MeshBackend, SceneGraph};
///
/// let mut scene = SceneGraph::new();
/// let cube = scene.create_cuboid("cube", DVec3::ONE).unwrap();
/// let group = scene.group("parts", &[cube]).unwrap();
/// assert_eq!(scene.roots(), vec![group]);
/// assert_eq!(scene.node(cube).unwrap().parent(), Some(group));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Option<Node>>,
    tolerances: Tolerances,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene using the given tolerances for circles and
    /// sweeps.
    pub fn with_tolerances(tolerances: Tolerances) -> SceneResult<Self> {
        tolerances.validate()?;
        Ok(Self {
            nodes: Vec::new(),
            tolerances,
        })
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a live node.
    pub fn node(&self, id: NodeId) -> SceneResult<&Node> {
        self.nodes
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(SceneError::UnknownNode { id })
    }

    fn node_mut(&mut self, id: NodeId) -> SceneResult<&mut Node> {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(SceneError::UnknownNode { id })
    }

    /// First live node with the given name, in creation order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id)
    }

    /// Live nodes without a parent, in creation order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Iterates over live nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i as u32), node)))
    }

    /// Transform from the node's local space to world space.
    pub fn world_transform(&self, id: NodeId) -> SceneResult<DMat4> {
        let mut node = self.node(id)?;
        let mut transform = node.transform;
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            transform = node.transform * transform;
        }
        Ok(transform)
    }

    /// The node's mesh in world space.
    pub fn world_mesh(&self, id: NodeId) -> SceneResult<Mesh> {
        let mesh = self
            .node(id)?
            .mesh()
            .ok_or_else(|| SceneError::invalid_node(id, "not a mesh"))?;
        Ok(mesh.transformed(&self.world_transform(id)?))
    }

    /// The curve's points in world space and whether it is closed.
    pub fn world_curve(&self, id: NodeId) -> SceneResult<(Vec<DVec3>, bool)> {
        let NodeKind::Curve { points, closed } = &self.node(id)?.kind else {
            return Err(SceneError::invalid_node(id, "not a curve"));
        };
        let transform = self.world_transform(id)?;
        Ok((
            points.iter().map(|p| transform.transform_point3(*p)).collect(),
            *closed,
        ))
    }

    fn insert(&mut self, name: &str, kind: NodeKind) -> SceneResult<NodeId> {
        if let NodeKind::Mesh(mesh) = &kind {
            if mesh.vertex_count() > MAX_VERTICES {
                return Err(SceneError::TooManyVertices {
                    count: mesh.vertex_count(),
                    max: MAX_VERTICES,
                });
            }
        }
        let index = u32::try_from(self.nodes.len())
            .map_err(|_| SceneError::degenerate("scene node arena is full"))?;
        self.nodes.push(Some(Node::new(name, kind)));
        Ok(NodeId(index))
    }

    fn detach(&mut self, id: NodeId) -> SceneResult<()> {
        if let Some(parent) = self.node_mut(id)?.parent.take() {
            self.node_mut(parent)?.children.retain(|&child| child != id);
        }
        Ok(())
    }

    fn is_ancestor(&self, ancestor: NodeId, mut id: NodeId) -> SceneResult<bool> {
        while let Some(parent) = self.node(id)?.parent {
            if parent == ancestor {
                return Ok(true);
            }
            id = parent;
        }
        Ok(false)
    }

    fn ensure_distinct(ids: &[NodeId]) -> SceneResult<()> {
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(SceneError::invalid_node(*id, "listed more than once"));
            }
        }
        Ok(())
    }
}

impl MeshBackend for SceneGraph {
    fn create_curve(&mut self, name: &str, points: &[DVec3], closed: bool) -> SceneResult<NodeId> {
        if points.len() < 2 {
            return Err(SceneError::degenerate(format!(
                "curve '{name}' needs at least 2 points, got {}",
                points.len()
            )));
        }
        self.insert(
            name,
            NodeKind::Curve {
                points: points.to_vec(),
                closed,
            },
        )
    }

    fn create_circle(
        &mut self,
        name: &str,
        radius: f64,
        normal: DVec3,
        sections: u32,
    ) -> SceneResult<NodeId> {
        let points = circle_points(radius, normal, sections, &self.tolerances)?;
        self.insert(name, NodeKind::Curve { points, closed: true })
    }

    fn create_cuboid(&mut self, name: &str, size: DVec3) -> SceneResult<NodeId> {
        let mesh = create_cuboid(size, true)?;
        self.insert(name, NodeKind::Mesh(mesh))
    }

    fn create_polyhedron(&mut self, name: &str, polyhedron: &Polyhedron) -> SceneResult<NodeId> {
        self.insert(name, NodeKind::Mesh(polyhedron_mesh(polyhedron)))
    }

    fn sweep(&mut self, name: &str, profile: NodeId, path: NodeId) -> SceneResult<NodeId> {
        let (profile_points, _) = self.world_curve(profile)?;
        let (path_points, closed) = self.world_curve(path)?;
        let mesh = sweep_profile(
            &profile_plane(&profile_points),
            &path_points,
            closed,
            &self.tolerances,
        )?;
        self.insert(name, NodeKind::Mesh(mesh))
    }

    fn extrude_ring(&mut self, name: &str, params: &RingParams) -> SceneResult<NodeId> {
        let mesh = extrude_ring(params)?;
        self.insert(name, NodeKind::Mesh(mesh))
    }

    fn boolean_union(&mut self, name: &str, parts: &[NodeId]) -> SceneResult<NodeId> {
        if parts.is_empty() {
            return Err(SceneError::degenerate(format!(
                "union '{name}' needs at least one part"
            )));
        }
        Self::ensure_distinct(parts)?;

        let mut combined = Mesh::new();
        for &part in parts {
            combined.merge(&self.world_mesh(part)?);
        }
        for &part in parts {
            self.delete(part)?;
        }

        debug!(
            "united {} parts into '{name}': {} vertices, {} triangles",
            parts.len(),
            combined.vertex_count(),
            combined.triangle_count()
        );
        self.insert(name, NodeKind::Mesh(combined))
    }

    fn set_transform(&mut self, node: NodeId, transform: DMat4) -> SceneResult<()> {
        if !transform.is_finite() {
            return Err(SceneError::invalid_node(node, "transform is not finite"));
        }
        self.node_mut(node)?.transform = transform;
        Ok(())
    }

    fn group(&mut self, name: &str, children: &[NodeId]) -> SceneResult<NodeId> {
        Self::ensure_distinct(children)?;
        for &child in children {
            self.node(child)?;
        }

        let group = self.insert(name, NodeKind::Group)?;
        for &child in children {
            self.detach(child)?;
            self.node_mut(child)?.parent = Some(group);
        }
        self.node_mut(group)?.children = children.to_vec();
        Ok(group)
    }

    fn delete(&mut self, node: NodeId) -> SceneResult<()> {
        self.detach(node)?;
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.nodes.get_mut(id.0 as usize).and_then(Option::take) {
                pending.extend(removed.children);
            }
        }
        Ok(())
    }
}

impl SceneGraph {
    /// Moves `child` under `parent`, keeping its local transform.
    ///
    /// # Errors
    /// Invalid node error when `parent` is not a group or would become its
    /// own descendant.
    pub fn reparent(&mut self, child: NodeId, parent: NodeId) -> SceneResult<()> {
        if !self.node(parent)?.is_group() {
            return Err(SceneError::invalid_node(parent, "only groups can hold children"));
        }
        if child == parent || self.is_ancestor(child, parent)? {
            return Err(SceneError::invalid_node(child, "cannot be parented under itself"));
        }
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }
}
