//! Hittable trait, HitRecord and closest-hit scene queries.

use glint_core::{Material, Scene};
use glint_math::{Interval, Ray, Vec3};

/// Rays that travel at least this far are treated as background.
pub const FAR_CLIP: f32 = 1000.0;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material observed at the intersection point
    pub material: Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
            t: f32::INFINITY,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object closer than `ray_t.max`.
    ///
    /// Returns true if hit, and overwrites the hit record.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}

/// Find the closest surface along `ray`.
///
/// Spheres are tested first, then the checkerboard, each only accepted when
/// strictly closer than everything found so far. Every query starts from a
/// fresh [`HitRecord`], so surfaces that only set part of the material never
/// see values left over from an earlier hit.
pub fn scene_intersect(scene: &Scene, ray: &Ray) -> Option<HitRecord> {
    let mut rec = HitRecord::default();
    let mut closest_so_far = f32::INFINITY;

    for sphere in &scene.spheres {
        if sphere.hit(ray, Interval::new(0.0, closest_so_far), &mut rec) {
            closest_so_far = rec.t;
        }
    }

    if let Some(board) = &scene.checkerboard {
        if board.hit(ray, Interval::new(0.0, closest_so_far), &mut rec) {
            closest_so_far = rec.t;
        }
    }

    (closest_so_far < FAR_CLIP).then_some(rec)
}
