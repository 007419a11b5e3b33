#![warn(missing_docs)]

//! Ray intersection primitives and screen-space picking for the astra
//! scene kernel.
//!
//! Answers "what object does this ray touch first?" for a scene of
//! bounded 3D objects. Rays are finite world-space segments (built from a
//! near/far screen unprojection), tested against per-object bounding
//! volumes that are refreshed and transformed into world space on every
//! query.
//!
//! # Architecture
//!
//! - [`Ray`] - a finite segment with start and end points
//! - [`intersect`] - analytic ray-plane, ray-triangle, ray-sphere and
//!   ray-box tests
//! - [`RayPicker`] - the per-node visitor that maintains the single best
//!   hit across a full scene traversal
//!
//! # Example
//!
//! ```
//! use astra_geom::{BoundsKind, Geometry};
//! use astra_math::Point3;
//! use astra_pick::pick_scene;
//! use astra_scene::{Object, Scene};
//!
//! let mut scene = Scene::new();
//! let mut geometry = Geometry::new();
//! for p in [
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(-1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, -1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(0.0, 0.0, -1.0),
//! ] {
//!     geometry.push(p);
//! }
//! scene.add_object(Object::new("ball", geometry, BoundsKind::Sphere));
//!
//! let picked = pick_scene(
//!     &scene,
//!     Point3::new(0.0, 0.0, 10.0),
//!     Point3::new(0.0, 0.0, -10.0),
//! )
//! .unwrap();
//! assert!(picked.is_some());
//! ```

mod ray;
pub mod intersect;
mod picker;

pub use picker::{pick_scene, PickCandidate, PickPolicy, RayPicker};
pub use ray::Ray;
