//! Ray-box intersection (Woo's slab algorithm, 1990).

use astra_geom::BoundingBox;
use astra_math::Point3;

use super::PARALLEL_EPS;
use crate::Ray;

/// Per-axis position of the ray origin relative to a slab.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    Left,
    Right,
    Middle,
}

/// Intersect a ray with a world-space axis-aligned box.
///
/// A ray starting inside the box hits immediately at its own start.
/// Otherwise, Woo's observation: of the per-axis candidate entry planes,
/// the true entry point lies on the plane with the *largest* parametric
/// distance. The reconstructed point must then fall within the other two
/// slabs. Unlike the plane and sphere tests, this one enforces segment
/// semantics: an intersection beyond the ray's length is a miss.
pub fn ray_box(ray: &Ray, aabb: &BoundingBox) -> Option<Point3> {
    let dir = ray.unit_direction()?;
    let d: [f64; 3] = [dir.as_ref().x, dir.as_ref().y, dir.as_ref().z];
    let origin: [f64; 3] = [ray.start.x, ray.start.y, ray.start.z];
    let min_b: [f64; 3] = [aabb.min.x, aabb.min.y, aabb.min.z];
    let max_b: [f64; 3] = [aabb.max.x, aabb.max.y, aabb.max.z];

    // Classify the origin against each slab and note candidate planes
    let mut inside = true;
    let mut quadrant = [Quadrant::Middle; 3];
    let mut candidate_plane = [0.0_f64; 3];
    for i in 0..3 {
        if origin[i] < min_b[i] {
            quadrant[i] = Quadrant::Left;
            candidate_plane[i] = min_b[i];
            inside = false;
        } else if origin[i] > max_b[i] {
            quadrant[i] = Quadrant::Right;
            candidate_plane[i] = max_b[i];
            inside = false;
        }
    }

    if inside {
        return Some(ray.start);
    }

    // Parametric distance to each candidate plane; -1 marks axes the ray
    // cannot reach (inside the slab already, or parallel to it)
    let mut max_t = [-1.0_f64; 3];
    for i in 0..3 {
        if quadrant[i] != Quadrant::Middle && d[i].abs() > PARALLEL_EPS {
            max_t[i] = (candidate_plane[i] - origin[i]) / d[i];
        }
    }

    // The last slab entered is the true entry point: take the largest
    let mut which_plane = 0;
    for i in 1..3 {
        if max_t[which_plane] < max_t[i] {
            which_plane = i;
        }
    }
    if max_t[which_plane] < 0.0 {
        return None;
    }

    // Reconstruct the point and confirm it lies within the other slabs
    let mut coord = [0.0_f64; 3];
    for i in 0..3 {
        if i != which_plane {
            coord[i] = origin[i] + max_t[which_plane] * d[i];
            if coord[i] < min_b[i] || coord[i] > max_b[i] {
                return None;
            }
        } else {
            coord[i] = candidate_plane[i];
        }
    }
    let hit = Point3::new(coord[0], coord[1], coord[2]);

    // Segment semantics: past the end point is a miss
    if ray.length() < (hit - ray.start).norm() {
        return None;
    }

    Some(hit)
}
