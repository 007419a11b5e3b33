#![warn(missing_docs)]

//! Scene node arena and object model for the astra picking kernel.
//!
//! The scene graph proper (parenting, matrix propagation, frustum culling)
//! lives elsewhere in the engine; this crate models only what intersection
//! queries consume: a flat arena of nodes, each either a renderable
//! [`Object`] or a non-intersectable node kind, with a
//! [`Scene::visit`] capability that invokes a callback once per node.
//!
//! Node kinds are a tagged enum rather than trait-object downcasts, so
//! "things that can be intersected" are separated from containers and
//! cameras by a plain `match`.

use astra_geom::{BoundingBox, BoundingSphere, BoundsKind, GeomError, Geometry, WorldBounds};
use astra_math::{Point3, Transform};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable identifier of a node in a [`Scene`].
    pub struct NodeId;
}

/// A node in the scene arena.
#[derive(Debug, Clone)]
pub enum Node {
    /// A renderable object that can be intersected.
    Object(Object),
    /// A grouping/container node. Never intersected.
    Group {
        /// Node name, for diagnostics.
        name: String,
    },
    /// A camera node. Never intersected.
    Camera {
        /// Node name, for diagnostics.
        name: String,
    },
}

impl Node {
    /// The contained object, if this node is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// A renderable object: geometry plus the per-frame state the renderer
/// maintains for it.
///
/// Visibility, frustum membership and the model matrix are produced by the
/// surrounding engine and treated as already-correct inputs here.
#[derive(Debug, Clone)]
pub struct Object {
    /// Object name, for diagnostics.
    pub name: String,
    /// Whether the object is currently rendered.
    pub visible: bool,
    /// Whether the object is inside the view frustum this frame.
    pub in_frustum: bool,
    /// World-space position of the object's origin.
    pub position: Point3,
    /// Object-to-world model matrix.
    pub model_matrix: Transform,
    /// Vertex positions in object space.
    pub geometry: Geometry,
    /// Which bounding-volume variant this object carries.
    pub bounds: BoundsKind,
}

impl Object {
    /// Create a visible, in-frustum object at the origin with an identity
    /// model matrix.
    pub fn new(name: impl Into<String>, geometry: Geometry, bounds: BoundsKind) -> Self {
        Self {
            name: name.into(),
            visible: true,
            in_frustum: true,
            position: Point3::origin(),
            model_matrix: Transform::identity(),
            geometry,
            bounds,
        }
    }

    /// Refresh this object's bounding volume for the current query.
    ///
    /// Recomputes object-space bounds from the current geometry, then maps
    /// them into world space through the model matrix. Returns a fresh
    /// value; nothing on the object is mutated.
    pub fn world_bounds(&self) -> Result<WorldBounds, GeomError> {
        match self.bounds {
            BoundsKind::Sphere => {
                let sphere = BoundingSphere::from_geometry(&self.geometry)?;
                Ok(WorldBounds::Sphere(sphere.to_world(&self.model_matrix)))
            }
            BoundsKind::Box => {
                let aabb = BoundingBox::from_geometry(&self.geometry)?;
                Ok(WorldBounds::Box(aabb.to_world(&self.model_matrix)))
            }
        }
    }
}

/// A flat arena of scene nodes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, Node>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its id.
    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.insert(node)
    }

    /// Add an object node, returning its id.
    pub fn add_object(&mut self, object: Object) -> NodeId {
        self.add(Node::Object(object))
    }

    /// Remove a node. Returns the node if it existed.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Invoke `f` once per node currently in the scene.
    ///
    /// This is the traversal capability intersection queries consume. The
    /// order is the arena's iteration order and is deterministic for a
    /// fixed scene.
    pub fn visit(&self, mut f: impl FnMut(NodeId, &Node)) {
        for (id, node) in &self.nodes {
            f(id, node);
        }
    }
}
