//! Analytic ray intersection tests.
//!
//! Each shape has a dedicated intersector returning the world-space hit
//! point, or `None` when the ray misses. Geometric degeneracies (parallel
//! ray and plane, zero-area triangle, negative discriminant, ray shorter
//! than the intersection distance) are all misses, never errors.
//!
//! All tests take the ray as a finite start/end segment and compute in
//! `f64`. Denominator and parallelism checks compare against
//! [`PARALLEL_EPS`] rather than exact zero.

mod aabb;
mod plane;
mod sphere;
mod triangle;

pub use aabb::ray_box;
pub use plane::ray_plane;
pub use sphere::ray_sphere;
pub use triangle::ray_triangle;

use astra_geom::WorldBounds;
use astra_math::Point3;

use crate::Ray;

/// Tolerance below which a denominator or direction component is treated
/// as zero (ray parallel to a plane or slab, degenerate triangle).
///
/// The quantity compared is not always scale-free: [`ray_plane`] applies
/// this to a dot product of the *unnormalized* direction, so its parallel
/// threshold tightens with segment length (see its docs). The sphere and
/// box tests compare unit-direction components.
pub const PARALLEL_EPS: f64 = 1e-12;

/// Intersect a ray with a world-space bounding volume.
///
/// Dispatches to the sphere or box intersector based on the variant.
pub fn intersect_bounds(ray: &Ray, bounds: &WorldBounds) -> Option<Point3> {
    match bounds {
        WorldBounds::Sphere(sphere) => ray_sphere(ray, &sphere.center, sphere.radius),
        WorldBounds::Box(aabb) => ray_box(ray, aabb),
    }
}
