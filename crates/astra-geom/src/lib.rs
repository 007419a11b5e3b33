#![warn(missing_docs)]

//! Geometry buffers and bounding volumes for the astra picking kernel.
//!
//! A [`Geometry`] holds the vertex positions of a renderable object.
//! Bounding volumes ([`BoundingSphere`], [`BoundingBox`]) are recomputed
//! from the geometry on demand and transformed into world space as fresh
//! immutable values, so a pick query never mutates scene-owned state.

use thiserror::Error;

pub mod bounds;

pub use bounds::{BoundingBox, BoundingSphere, BoundsKind, WorldBounds};

use astra_math::Point3;

/// Errors from geometry queries.
///
/// These indicate a broken contract in a collaborator (an object claiming
/// bounds it cannot have), not a recoverable runtime condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Bounds were requested from a geometry with no vertices.
    #[error("geometry has no vertices to compute bounds from")]
    EmptyGeometry,
}

/// Vertex positions of a renderable object, in object space.
///
/// Only positions are relevant to intersection testing; normals, texture
/// coordinates and index buffers live elsewhere in the engine.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    positions: Vec<Point3>,
}

impl Geometry {
    /// Create an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a geometry from a vertex position buffer.
    pub fn from_positions(positions: Vec<Point3>) -> Self {
        Self { positions }
    }

    /// Append a vertex position.
    pub fn push(&mut self, p: Point3) {
        self.positions.push(p);
    }

    /// The vertex positions.
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the geometry has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
