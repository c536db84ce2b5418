//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use glint_core::Sphere;
use glint_math::{Interval, Ray, Vec3};

/// Distance along `ray` to the closest non-negative intersection with the
/// sphere, or `None` if the ray misses or the sphere lies entirely behind it.
///
/// Uses the geometric form: project the center onto the ray, then step back
/// by the half-chord. `ray.direction` must be unit length. There is no epsilon
/// against zero; callers offset secondary origins instead.
pub fn sphere_distance(center: Vec3, radius: f32, ray: &Ray) -> Option<f32> {
    let l = center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    if d2 > radius * radius {
        return None;
    }

    let thc = (radius * radius - d2).sqrt();
    let mut t0 = tca - thc;
    let t1 = tca + thc;

    // Origin inside the sphere
    if t0 < 0.0 {
        t0 = t1;
    }
    if t0 < 0.0 {
        return None;
    }
    Some(t0)
}

impl Hittable for Sphere {
    /// Accepts distances in `[ray_t.min, ray_t.max)`, so of two spheres at the
    /// same distance the one tested first is kept.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let Some(t) = sphere_distance(self.center, self.radius, ray) else {
            return false;
        };
        if t < ray_t.min || t >= ray_t.max {
            return false;
        }

        rec.t = t;
        rec.p = ray.at(t);
        rec.normal = (rec.p - self.center).normalize();
        rec.material = self.material;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Material;

    fn unit_sphere_at(z: f32, radius: f32) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), radius, Material::ivory())
    }

    #[test]
    fn test_on_axis_distance() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        for (d, r) in [(5.0, 1.0), (16.0, 2.0), (3.0, 2.5), (100.0, 0.5)] {
            let t = sphere_distance(Vec3::new(0.0, 0.0, d), r, &ray).unwrap();
            assert!((t - (d - r)).abs() < 1e-5, "d={d} r={r} t={t}");
        }
    }

    #[test]
    fn test_origin_inside_returns_far_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = sphere_distance(Vec3::new(0.0, 0.0, 1.0), 2.0, &ray).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere_distance(Vec3::new(0.0, 0.0, -5.0), 1.0, &ray).is_none());
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere_distance(Vec3::new(0.0, 0.0, 5.0), 1.0, &ray).is_none());

        // Passes beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere_distance(Vec3::new(0.0, 0.0, 5.0), 1.0, &ray).is_none());
    }

    #[test]
    fn test_sphere_hit_record() {
        let sphere = unit_sphere_at(5.0, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, Interval::new(0.0, f32::INFINITY), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert_eq!(rec.material, Material::ivory());
    }

    #[test]
    fn test_sphere_respects_interval() {
        let sphere = unit_sphere_at(5.0, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        // Something closer was already found
        assert!(!sphere.hit(&ray, Interval::new(0.0, 3.0), &mut rec));
        // Equal distance is not strictly closer
        assert!(!sphere.hit(&ray, Interval::new(0.0, 4.0), &mut rec));
        assert_eq!(rec, HitRecord::default());
    }
}
