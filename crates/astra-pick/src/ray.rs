//! Ray representation.

use astra_math::{Dir3, Point3, Vec3};

/// A pick ray: a finite, directed segment in world space.
///
/// Pick rays come from unprojecting a screen point at the near and far
/// clip planes, so start and end are the primary representation;
/// direction and length are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Segment start, in world space.
    pub start: Point3,
    /// Segment end, in world space.
    pub end: Point3,
}

impl Ray {
    /// Create a ray from start and end points.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// The unnormalized direction `end - start`.
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// The segment length.
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// The unit direction, or `None` for a degenerate zero-length ray.
    pub fn unit_direction(&self) -> Option<Dir3> {
        Dir3::try_new(self.direction(), 1e-12)
    }
}
