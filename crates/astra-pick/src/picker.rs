//! The ray-picking traversal: visit every node, keep the single best hit.

use astra_geom::GeomError;
use astra_math::Point3;
use astra_scene::{Node, NodeId, Scene};

use crate::intersect::intersect_bounds;
use crate::Ray;

/// How a new hit is compared against the currently picked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickPolicy {
    /// Compare the *objects'* view-depth: smaller position Z wins (nearer,
    /// camera looking down -Z).
    ///
    /// This ignores the computed hit point, so two objects at the same
    /// depth tie in visit order, and an object whose origin is farther
    /// than its silhouette can lose to one it visually occludes. Kept as
    /// the default because it is the established engine behavior; use
    /// [`PickPolicy::HitDistance`] for hit-accurate selection.
    #[default]
    ObjectDepth,
    /// Compare distance from the ray start to the hit point.
    HitDistance,
}

impl PickPolicy {
    /// True if `new` should replace `current` as the pick.
    fn prefers(&self, new: &PickCandidate, current: &PickCandidate) -> bool {
        match self {
            PickPolicy::ObjectDepth => new.position.z < current.position.z,
            PickPolicy::HitDistance => new.distance < current.distance,
        }
    }
}

/// A successfully intersected object.
#[derive(Debug, Clone, PartialEq)]
pub struct PickCandidate {
    /// The intersected node.
    pub node: NodeId,
    /// The object's world-space position (used by [`PickPolicy::ObjectDepth`]).
    pub position: Point3,
    /// World-space intersection point.
    pub hit: Point3,
    /// Distance from the ray start to the hit point.
    pub distance: f64,
}

/// Single-pass, single-pick visitor over scene nodes.
///
/// Owns the ray and the evolving pick result for the duration of one
/// query. Feed it every node via [`RayPicker::apply`] — it never
/// short-circuits, so the final pick is independent of when a hit is
/// first found. Once a candidate is recorded it is only ever replaced by
/// one the policy prefers, never cleared.
#[derive(Debug)]
pub struct RayPicker {
    ray: Ray,
    policy: PickPolicy,
    picked: Option<PickCandidate>,
}

impl RayPicker {
    /// Create a picker for a ray from `start` to `end`, with the default
    /// [`PickPolicy::ObjectDepth`] selection.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self::with_policy(start, end, PickPolicy::default())
    }

    /// Create a picker with an explicit selection policy.
    pub fn with_policy(start: Point3, end: Point3, policy: PickPolicy) -> Self {
        Self {
            ray: Ray::new(start, end),
            policy,
            picked: None,
        }
    }

    /// The pick ray.
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Visit one node, updating the pick state.
    ///
    /// Non-object nodes and invisible or out-of-frustum objects are
    /// skipped. The only error is the contract violation of an object
    /// whose geometry has no vertices to bound.
    pub fn apply(&mut self, id: NodeId, node: &Node) -> Result<(), GeomError> {
        let Some(object) = node.as_object() else {
            return Ok(());
        };
        if !object.visible || !object.in_frustum {
            return Ok(());
        }

        let bounds = object.world_bounds()?;
        log::trace!("pick: testing {} ({id:?})", object.name);

        let Some(hit) = intersect_bounds(&self.ray, &bounds) else {
            return Ok(());
        };

        let candidate = PickCandidate {
            node: id,
            position: object.position,
            hit,
            distance: (hit - self.ray.start).norm(),
        };

        let replace = match &self.picked {
            None => true,
            Some(current) => self.policy.prefers(&candidate, current),
        };
        if replace {
            log::debug!(
                "pick: {} ({id:?}) at {:?}, distance {:.4}",
                object.name,
                candidate.hit,
                candidate.distance
            );
            self.picked = Some(candidate);
        }
        Ok(())
    }

    /// The picked node, if any hit was recorded.
    pub fn picked_object(&self) -> Option<NodeId> {
        self.picked.as_ref().map(|c| c.node)
    }

    /// World-space hit point of the winning intersection, if any.
    pub fn hit_point(&self) -> Option<Point3> {
        self.picked.as_ref().map(|c| c.hit)
    }

    /// The full pick result, if any.
    pub fn picked(&self) -> Option<&PickCandidate> {
        self.picked.as_ref()
    }

    /// Consume the picker, yielding the pick result.
    pub fn into_picked(self) -> Option<PickCandidate> {
        self.picked
    }
}

/// Pick the nearest object along the segment from `start` to `end`.
///
/// Walks every node in the scene once and returns the winning candidate,
/// or `None` when nothing is intersected.
pub fn pick_scene(
    scene: &Scene,
    start: Point3,
    end: Point3,
) -> Result<Option<PickCandidate>, GeomError> {
    let mut picker = RayPicker::new(start, end);
    let mut error = None;
    scene.visit(|id, node| {
        if error.is_none() {
            if let Err(e) = picker.apply(id, node) {
                error = Some(e);
            }
        }
    });
    match error {
        Some(e) => Err(e),
        None => Ok(picker.into_picked()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_geom::{BoundsKind, Geometry};
    use astra_math::Transform;
    use astra_scene::Object;

    fn sphere_geometry(radius: f64) -> Geometry {
        Geometry::from_positions(vec![
            Point3::new(radius, 0.0, 0.0),
            Point3::new(-radius, 0.0, 0.0),
            Point3::new(0.0, radius, 0.0),
            Point3::new(0.0, -radius, 0.0),
            Point3::new(0.0, 0.0, radius),
            Point3::new(0.0, 0.0, -radius),
        ])
    }

    fn cube_geometry(half: f64) -> Geometry {
        let mut geom = Geometry::new();
        for &x in &[-half, half] {
            for &y in &[-half, half] {
                for &z in &[-half, half] {
                    geom.push(Point3::new(x, y, z));
                }
            }
        }
        geom
    }

    fn sphere_object(name: &str, position: Point3, radius: f64) -> Object {
        let mut object = Object::new(name, sphere_geometry(radius), BoundsKind::Sphere);
        object.position = position;
        object.model_matrix =
            Transform::translation(position.x, position.y, position.z);
        object
    }

    fn down_z_ray() -> (Point3, Point3) {
        (Point3::new(0.0, 0.0, 10.0), Point3::new(0.0, 0.0, -10.0))
    }

    #[test]
    fn test_pick_single_sphere() {
        let mut scene = Scene::new();
        let id = scene.add_object(sphere_object("ball", Point3::origin(), 1.0));
        let (start, end) = down_z_ray();
        let picked = pick_scene(&scene, start, end).unwrap().unwrap();
        assert_eq!(picked.node, id);
        assert!((picked.hit - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn test_pick_single_box() {
        let mut scene = Scene::new();
        let id = scene.add_object(Object::new("crate", cube_geometry(1.0), BoundsKind::Box));
        let (start, end) = down_z_ray();
        let picked = pick_scene(&scene, start, end).unwrap().unwrap();
        assert_eq!(picked.node, id);
        assert!((picked.hit - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn test_nearest_by_object_depth_wins() {
        // Camera looks down -Z: smaller Z is nearer. Both spheres lie on
        // the ray; the one at Z = -5 must win under ObjectDepth.
        let mut scene = Scene::new();
        let far = scene.add_object(sphere_object("far", Point3::new(0.0, 0.0, -2.0), 0.5));
        let near = scene.add_object(sphere_object("near", Point3::new(0.0, 0.0, -5.0), 0.5));
        let (start, end) = down_z_ray();
        let picked = pick_scene(&scene, start, end).unwrap().unwrap();
        assert_eq!(picked.node, near);
        assert_ne!(picked.node, far);
    }

    #[test]
    fn test_depth_policy_independent_of_visit_order() {
        let mut scene = Scene::new();
        let near = scene.add_object(sphere_object("near", Point3::new(0.0, 0.0, -5.0), 0.5));
        scene.add_object(sphere_object("far", Point3::new(0.0, 0.0, -2.0), 0.5));
        let (start, end) = down_z_ray();
        let picked = pick_scene(&scene, start, end).unwrap().unwrap();
        assert_eq!(picked.node, near);
    }

    #[test]
    fn test_policies_can_disagree() {
        // ObjectDepth prefers the object whose *origin* Z is smaller even
        // when the other object is hit first along the ray.
        let mut scene = Scene::new();
        let deep_origin =
            scene.add_object(sphere_object("deep", Point3::new(0.0, 0.0, -6.0), 4.0));
        let shallow = scene.add_object(sphere_object("shallow", Point3::new(0.0, 0.0, -1.0), 0.5));
        let (start, end) = down_z_ray();

        let mut by_depth = RayPicker::new(start, end);
        let mut by_hit = RayPicker::with_policy(start, end, PickPolicy::HitDistance);
        scene.visit(|id, node| {
            by_depth.apply(id, node).unwrap();
            by_hit.apply(id, node).unwrap();
        });

        // shallow's front surface (z = -0.5) is nearer the ray start than
        // deep's (z = -2), but deep's origin Z is smaller
        assert_eq!(by_hit.picked_object(), Some(shallow));
        assert_eq!(by_depth.picked_object(), Some(deep_origin));
    }

    #[test]
    fn test_invisible_and_culled_objects_skipped() {
        let mut scene = Scene::new();
        let mut hidden = sphere_object("hidden", Point3::origin(), 1.0);
        hidden.visible = false;
        scene.add_object(hidden);
        let mut culled = sphere_object("culled", Point3::origin(), 1.0);
        culled.in_frustum = false;
        scene.add_object(culled);
        let (start, end) = down_z_ray();
        assert!(pick_scene(&scene, start, end).unwrap().is_none());
    }

    #[test]
    fn test_non_object_nodes_ignored() {
        let mut scene = Scene::new();
        scene.add(Node::Group {
            name: "root".into(),
        });
        scene.add(Node::Camera {
            name: "main".into(),
        });
        let id = scene.add_object(sphere_object("ball", Point3::origin(), 1.0));
        let (start, end) = down_z_ray();
        let picked = pick_scene(&scene, start, end).unwrap().unwrap();
        assert_eq!(picked.node, id);
    }

    #[test]
    fn test_miss_leaves_prior_pick_unchanged() {
        let mut scene = Scene::new();
        let on_ray = scene.add_object(sphere_object("on-ray", Point3::origin(), 1.0));
        scene.add_object(sphere_object("far-off", Point3::new(50.0, 50.0, -8.0), 1.0));
        let (start, end) = down_z_ray();
        let mut picker = RayPicker::new(start, end);
        scene.visit(|id, node| picker.apply(id, node).unwrap());
        assert_eq!(picker.picked_object(), Some(on_ray));
        assert!((picker.hit_point().unwrap() - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn test_traversal_is_deterministic() {
        let mut scene = Scene::new();
        for i in 0..8 {
            let z = -1.0 - i as f64;
            scene.add_object(sphere_object(&format!("s{i}"), Point3::new(0.0, 0.0, z), 0.3));
        }
        let (start, end) = down_z_ray();
        let first = pick_scene(&scene, start, end).unwrap();
        let second = pick_scene(&scene, start, end).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sphere_preferred_box_fallback() {
        // Same cube vertex data, bounded two ways: the sphere variant's
        // radius sqrt(3) makes a corner-grazing ray hit it but miss the box.
        let mut scene = Scene::new();
        let id = scene.add_object(Object::new(
            "sphere-bounded",
            cube_geometry(1.0),
            BoundsKind::Sphere,
        ));
        let start = Point3::new(1.2, 1.2, 10.0);
        let end = Point3::new(1.2, 1.2, -10.0);
        let sphere_pick = pick_scene(&scene, start, end).unwrap();
        assert_eq!(sphere_pick.map(|c| c.node), Some(id));

        let mut scene = Scene::new();
        scene.add_object(Object::new(
            "box-bounded",
            cube_geometry(1.0),
            BoundsKind::Box,
        ));
        assert!(pick_scene(&scene, start, end).unwrap().is_none());
    }

    #[test]
    fn test_empty_geometry_surfaces_contract_error() {
        let mut scene = Scene::new();
        scene.add_object(Object::new("broken", Geometry::new(), BoundsKind::Sphere));
        let (start, end) = down_z_ray();
        assert_eq!(
            pick_scene(&scene, start, end),
            Err(astra_geom::GeomError::EmptyGeometry)
        );
    }

    #[test]
    fn test_ray_missing_everything() {
        let mut scene = Scene::new();
        scene.add_object(sphere_object("ball", Point3::origin(), 1.0));
        let picked = pick_scene(
            &scene,
            Point3::new(100.0, 100.0, 10.0),
            Point3::new(100.0, 100.0, -10.0),
        )
        .unwrap();
        assert!(picked.is_none());
    }

    #[test]
    fn test_scaled_object_bounds_respected() {
        // A small sphere scaled up 3x should catch a ray its unscaled
        // bounds would miss.
        let mut scene = Scene::new();
        let mut object = Object::new("scaled", sphere_geometry(1.0), BoundsKind::Sphere);
        object.model_matrix = Transform::scale(3.0, 3.0, 3.0);
        let id = scene.add_object(object);
        let picked = pick_scene(
            &scene,
            Point3::new(2.0, 0.0, 10.0),
            Point3::new(2.0, 0.0, -10.0),
        )
        .unwrap()
        .unwrap();
        assert_eq!(picked.node, id);
    }
}
