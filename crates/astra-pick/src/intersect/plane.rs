//! Ray-plane intersection (closed-form).

use astra_math::{Plane, PlaneSide, Point3};

use super::PARALLEL_EPS;
use crate::Ray;

/// Intersect a ray with a plane.
///
/// Solves `normal · (start + t * dir) + d = 0` for the parametric
/// distance `t` along the *unnormalized* direction `end - start` and
/// rejects hits behind the ray start (`t < 0`). There is no upper bound
/// on `t`: the supporting line beyond the segment end still counts, which
/// callers needing segment semantics must check themselves.
///
/// When the ray is parallel to the plane, the single degenerate hit is
/// the ray start itself, reported iff the start lies on the plane.
///
/// The parallel check compares `dir · normal` of the unnormalized
/// direction against [`PARALLEL_EPS`](super::PARALLEL_EPS), so the
/// effective angular threshold
/// shrinks as the segment grows: a long ray is classified as non-parallel
/// at a smaller cosine than a short one. Callers that need a
/// length-independent threshold should scale their segment accordingly.
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<Point3> {
    let dir = ray.direction();
    let denom = dir.dot(plane.normal.as_ref());

    if denom.abs() > PARALLEL_EPS {
        let t = -(ray.start.coords.dot(plane.normal.as_ref()) + plane.d) / denom;
        if t < 0.0 {
            return None;
        }
        Some(ray.start + t * dir)
    } else if plane.side(&ray.start) == PlaneSide::OnPlane {
        Some(ray.start)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_math::Vec3;

    #[test]
    fn test_perpendicular_hit() {
        let plane = Plane::new(Vec3::z(), 0.0).unwrap();
        let ray = Ray::new(Point3::new(3.0, 4.0, 5.0), Point3::new(3.0, 4.0, -5.0));
        let hit = ray_plane(&ray, &plane).unwrap();
        assert!((hit - Point3::new(3.0, 4.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_hit_behind_start_rejected() {
        let plane = Plane::new(Vec3::z(), 0.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 6.0));
        assert!(ray_plane(&ray, &plane).is_none());
    }

    #[test]
    fn test_hit_beyond_segment_end_accepted() {
        // Supporting-line semantics: the plane sits past the segment end
        let plane = Plane::new(Vec3::z(), 0.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Point3::new(0.0, 0.0, 9.0));
        let hit = ray_plane(&ray, &plane).unwrap();
        assert!(hit.z.abs() < 1e-12);
    }

    #[test]
    fn test_parallel_off_plane_misses() {
        let plane = Plane::new(Vec3::z(), 0.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Point3::new(5.0, 0.0, 1.0));
        assert!(ray_plane(&ray, &plane).is_none());
    }

    #[test]
    fn test_parallel_on_plane_hits_at_start() {
        let plane = Plane::new(Vec3::z(), 0.0).unwrap();
        let ray = Ray::new(Point3::new(2.0, 3.0, 0.0), Point3::new(5.0, 3.0, 0.0));
        let hit = ray_plane(&ray, &plane).unwrap();
        assert!((hit - ray.start).norm() < 1e-12);
    }

    #[test]
    fn test_parallel_threshold_scales_with_segment_length() {
        // Same tiny per-unit slope toward the plane, two segment lengths.
        // The unnormalized dot with the normal is below PARALLEL_EPS for
        // the short segment (parallel, off-plane: miss) but above it for
        // the long one (non-parallel: a far-away hit exists).
        let plane = Plane::new(Vec3::z(), 0.0).unwrap();
        let slope = 1e-13;
        let short = Ray::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0 - slope),
        );
        assert!(ray_plane(&short, &plane).is_none());
        let long = Ray::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(20.0, 0.0, 1.0 - 20.0 * slope),
        );
        let hit = ray_plane(&long, &plane).unwrap();
        assert!(hit.z.abs() < 1e-9);
    }

    #[test]
    fn test_offset_plane() {
        // Plane z = 4 has d = -4 with normal +z
        let plane = Plane::new(Vec3::z(), -4.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Point3::new(0.0, 0.0, 0.0));
        let hit = ray_plane(&ray, &plane).unwrap();
        assert!((hit.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let plane = Plane::new(Vec3::new(1.0, 1.0, 1.0), -2.0).unwrap();
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Point3::new(5.0, 1.0, 1.0));
        assert_eq!(ray_plane(&ray, &plane), ray_plane(&ray, &plane));
    }
}
