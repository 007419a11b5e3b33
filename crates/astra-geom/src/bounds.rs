//! Bounding volumes: sphere and axis-aligned box.
//!
//! Each renderable object carries exactly one variant (sphere preferred,
//! box fallback — see [`BoundsKind`]). Object-space bounds are recomputed
//! from geometry, then transformed into world space with the owning
//! object's model matrix. World-space bounds are returned as new values
//! rather than cached in place, so intersection tests stay pure.

use astra_math::{Point3, Transform};

use crate::{GeomError, Geometry};

/// Which bounding-volume variant an object carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsKind {
    /// Bounding sphere (preferred when present).
    #[default]
    Sphere,
    /// Axis-aligned bounding box (fallback).
    Box,
}

/// A bounding volume in world space, ready for intersection testing.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldBounds {
    /// World-space bounding sphere.
    Sphere(BoundingSphere),
    /// World-space axis-aligned bounding box.
    Box(BoundingBox),
}

/// A sphere enclosing a geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: Point3,
    /// Sphere radius. Invariant: non-negative.
    pub radius: f64,
}

impl BoundingSphere {
    /// Compute the bounding sphere of a geometry.
    ///
    /// The center is the midpoint of the axis-aligned extents and the
    /// radius the largest distance from that center to any vertex.
    pub fn from_geometry(geometry: &Geometry) -> Result<Self, GeomError> {
        let aabb = BoundingBox::from_geometry(geometry)?;
        let center = Point3::new(
            (aabb.min.x + aabb.max.x) / 2.0,
            (aabb.min.y + aabb.max.y) / 2.0,
            (aabb.min.z + aabb.max.z) / 2.0,
        );
        let radius = geometry
            .positions()
            .iter()
            .map(|p| (p - center).norm())
            .fold(0.0_f64, f64::max);
        Ok(Self { center, radius })
    }

    /// Transform into world space.
    ///
    /// The center is mapped through the matrix; the radius is scaled by the
    /// matrix's largest axis scale, which keeps the sphere enclosing under
    /// non-uniform scaling.
    pub fn to_world(&self, transform: &Transform) -> BoundingSphere {
        BoundingSphere {
            center: transform.apply_point(&self.center),
            radius: self.radius * transform.max_scale(),
        }
    }
}

/// An axis-aligned box enclosing a geometry.
///
/// Invariant: `min[i] <= max[i]` componentwise, both in object space and
/// after [`BoundingBox::to_world`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl BoundingBox {
    /// Create a box from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) box suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this box to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Test if a point lies inside the box (faces inclusive).
    pub fn contains(&self, p: &Point3) -> bool {
        self.min.x <= p.x
            && p.x <= self.max.x
            && self.min.y <= p.y
            && p.y <= self.max.y
            && self.min.z <= p.z
            && p.z <= self.max.z
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [Point3; 8] {
        [
            Point3::new(self.min.x, self.min.y, self.min.z),
            Point3::new(self.max.x, self.min.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.min.z),
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.min.x, self.min.y, self.max.z),
            Point3::new(self.max.x, self.min.y, self.max.z),
            Point3::new(self.min.x, self.max.y, self.max.z),
            Point3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Compute the axis-aligned bounds of a geometry.
    pub fn from_geometry(geometry: &Geometry) -> Result<Self, GeomError> {
        if geometry.is_empty() {
            return Err(GeomError::EmptyGeometry);
        }
        let mut aabb = Self::empty();
        for p in geometry.positions() {
            aabb.include_point(p);
        }
        Ok(aabb)
    }

    /// Transform into world space.
    ///
    /// Maps all eight corners through the matrix and takes a fresh
    /// axis-aligned min/max enclosing them, so the result stays valid
    /// under rotation.
    pub fn to_world(&self, transform: &Transform) -> BoundingBox {
        let mut aabb = Self::empty();
        for corner in self.corners() {
            aabb.include_point(&transform.apply_point(&corner));
        }
        aabb
    }
}
