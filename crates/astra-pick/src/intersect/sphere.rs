//! Ray-sphere intersection (quadratic equation).

use astra_math::Point3;

use crate::Ray;

/// Intersect a ray with a sphere.
///
/// Solves `a*t^2 + b*t + c = 0` along the *normalized* ray direction, so
/// the parametric distance is a true distance and may exceed the
/// segment's length (supporting-line semantics, as with the plane test).
///
/// Root selection uses the numerically stable form (branch on the sign of
/// `b`), then reports the near root, or the far root when the ray starts
/// inside the sphere. A sphere entirely behind the ray start is a miss.
pub fn ray_sphere(ray: &Ray, center: &Point3, radius: f64) -> Option<Point3> {
    let dir = ray.unit_direction()?;
    let d = dir.as_ref();
    let start = ray.start;

    let a = d.dot(d);
    let b = 2.0 * d.dot(&(start - center));
    let c = center.coords.dot(&center.coords) + start.coords.dot(&start.coords)
        - 2.0 * center.coords.dot(&start.coords)
        - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let q = if b < 0.0 {
        (-b - sqrt_disc) / 2.0
    } else {
        (-b + sqrt_disc) / 2.0
    };

    // q vanishes exactly when c = 0: the start sits on the sphere surface.
    // The near non-negative root is t = 0, so the hit is the start itself.
    if q == 0.0 {
        return Some(start);
    }

    let mut t0 = q / a;
    let mut t1 = c / q;
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }

    // Sphere entirely in the ray's negative direction
    if t1 < 0.0 {
        return None;
    }

    // Start inside the sphere: the near root is behind, report the exit
    let t = if t0 < 0.0 { t1 } else { t0 };
    Some(start + t * d)
}
