//! Intersection oracle consumed by the shader.
//!
//! The shader only needs two queries: "does this ray hit anything" for shadow
//! rays and "what is the nearest hit" for reflection bounces. They sit behind
//! the [`Intersector`] trait so a renderer can plug in its own acceleration
//! structure. [`SceneIntersector`] is the brute-force reference.

use glint_core::{BodyKind, Scene};
use glint_math::vector::dot;
use glint_math::{Interval, Ray, Vec4};

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// World-space hit point
    pub position: Vec4,
    /// Index of the body that was hit
    pub index: usize,
    /// Ray parameter of the hit
    pub t: f32,
}

impl Hit {
    /// Flat index reported for "no intersection" when a hit has to be packed
    /// into a plain integer. Inside the workspace a miss is `None`.
    pub const NO_HIT: i64 = -1;

    /// Flatten an optional hit into an index, using [`Hit::NO_HIT`] for a miss.
    pub fn index_or_sentinel(hit: Option<&Hit>) -> i64 {
        hit.map_or(Self::NO_HIT, |h| h.index as i64)
    }
}

/// Ray queries against a scene.
pub trait Intersector: Send + Sync {
    /// True if the ray hits any body other than the light in front of its
    /// origin. The light never occludes its own emission.
    fn any_hit(&self, scene: &Scene, ray: &Ray) -> bool;

    /// Nearest hit in front of the ray origin, the light included.
    ///
    /// Must be deterministic. A hit at or behind the origin is never
    /// returned.
    fn closest_hit(&self, scene: &Scene, ray: &Ray) -> Option<Hit>;
}

/// Tests every body in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneIntersector;

/// Ray parameter of the first hit on body `index` within `ray_t`.
fn hit_body(scene: &Scene, index: usize, ray: &Ray, ray_t: Interval) -> Option<f32> {
    match scene.kind(index) {
        BodyKind::Sphere => hit_sphere(scene.position(index), scene.size(index), ray, ray_t),
        BodyKind::Plane => hit_plane(scene.position(index).y, ray, ray_t),
    }
}

fn hit_sphere(center: Vec4, radius: f32, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let oc = center - ray.origin();
    let a = dot(ray.direction(), ray.direction());
    let h = dot(ray.direction(), oc);
    let c = dot(oc, oc) - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let root = (h - sqrtd) / a;
    if ray_t.surrounds(root) {
        return Some(root);
    }
    let root = (h + sqrtd) / a;
    ray_t.surrounds(root).then_some(root)
}

fn hit_plane(height: f32, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let dy = ray.direction().y;
    if dy.abs() < 1e-6 {
        return None;
    }
    let t = (height - ray.origin().y) / dy;
    ray_t.surrounds(t).then_some(t)
}

impl Intersector for SceneIntersector {
    fn any_hit(&self, scene: &Scene, ray: &Ray) -> bool {
        (0..scene.len())
            .filter(|&index| !scene.is_light(index))
            .any(|index| hit_body(scene, index, ray, Interval::FORWARD).is_some())
    }

    fn closest_hit(&self, scene: &Scene, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<(usize, f32)> = None;
        let mut ray_t = Interval::FORWARD;

        for index in 0..scene.len() {
            if let Some(t) = hit_body(scene, index, ray, ray_t) {
                closest = Some((index, t));
                ray_t = ray_t.with_max(t);
            }
        }

        closest.map(|(index, t)| Hit {
            position: ray.at(t),
            index,
            t,
        })
    }
}
