#![warn(missing_docs)]

//! Math types for the astra scene-graph picking kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! 3D scene queries: points, vectors, directions, model transforms,
//! planes, and tolerance constants.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 affine model transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Compose: `self` then `other` (self * other), applying `other` first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Largest axis scale factor: the maximum column norm of the upper-left
    /// 3x3 block. Used to rescale bounding-sphere radii conservatively under
    /// non-uniform scaling.
    pub fn max_scale(&self) -> f64 {
        let m3 = self.matrix.fixed_view::<3, 3>(0, 0);
        let mut max = 0.0_f64;
        for i in 0..3 {
            max = max.max(m3.column(i).norm());
        }
        max
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Positive half-space (same side the normal points into).
    Front,
    /// Negative half-space.
    Back,
    /// Within tolerance of the plane itself.
    OnPlane,
}

/// An infinite plane in normal form: `normal · P + d = 0` for points P on
/// the plane.
#[derive(Debug, Clone)]
pub struct Plane {
    /// Unit plane normal.
    pub normal: Dir3,
    /// Signed offset from the origin along the normal.
    pub d: f64,
}

impl Plane {
    /// Tolerance for classifying a point as lying on the plane.
    ///
    /// Signed-distance comparisons use this rather than exact zero; scenes
    /// are assumed to be modeled in units where 1e-9 is far below feature
    /// size.
    pub const ON_PLANE_EPS: f64 = 1e-9;

    /// Create a plane from a normal (normalized here) and signed offset.
    pub fn new(normal: Vec3, d: f64) -> Option<Self> {
        let normal = Dir3::try_new(normal, f64::EPSILON)?;
        Some(Self { normal, d })
    }

    /// Create the supporting plane of a triangle.
    ///
    /// Returns `None` for a degenerate (zero-area) triangle, which has no
    /// well-defined normal.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Option<Self> {
        let normal = Dir3::try_new((b - a).cross(&(c - a)), f64::EPSILON)?;
        let d = -a.coords.dot(normal.as_ref());
        Some(Self { normal, d })
    }

    /// Signed distance from a point to this plane (positive on the front side).
    pub fn distance_to(&self, p: &Point3) -> f64 {
        p.coords.dot(self.normal.as_ref()) + self.d
    }

    /// Classify a point against the plane.
    pub fn side(&self, p: &Point3) -> PlaneSide {
        let dist = self.distance_to(p);
        if dist.abs() < Self::ON_PLANE_EPS {
            PlaneSide::OnPlane
        } else if dist > 0.0 {
            PlaneSide::Front
        } else {
            PlaneSide::Back
        }
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-6 scene units).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
