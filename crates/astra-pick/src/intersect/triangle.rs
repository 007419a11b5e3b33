//! Ray-triangle intersection via the supporting plane and barycentric
//! classification.

use astra_math::{Plane, Point3};

use super::{ray_plane, PARALLEL_EPS};
use crate::Ray;

/// Intersect a ray with a triangle.
///
/// Finds the candidate point on the triangle's supporting plane, then
/// classifies it with barycentric coordinates computed from the edge
/// vectors `v3 - v1` and `v2 - v1` (Gram-matrix dot-product technique).
/// Edges and vertices count as hits (`u >= 0`, `v >= 0`, `u + v <= 1`).
/// Degenerate zero-area triangles never hit.
pub fn ray_triangle(ray: &Ray, t1: &Point3, t2: &Point3, t3: &Point3) -> Option<Point3> {
    let plane = Plane::from_points(t1, t2, t3)?;
    let hit = ray_plane(ray, &plane)?;

    let v0 = t3 - t1;
    let v1 = t2 - t1;
    let v2 = hit - t1;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    if u >= 0.0 && v >= 0.0 && u + v <= 1.0 {
        Some(hit)
    } else {
        None
    }
}
