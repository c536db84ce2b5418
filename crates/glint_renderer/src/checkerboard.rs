//! Ray intersection with the bounded checkerboard floor.

use crate::hittable::{HitRecord, Hittable};
use glint_core::{Checkerboard, Material};
use glint_math::{Interval, Ray, Vec3};

/// Rays flatter than this never hit the board.
const MIN_VERTICAL_DIRECTION: f32 = 1e-3;

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        if ray.direction.y.abs() <= MIN_VERTICAL_DIRECTION {
            return false;
        }

        let d = -(ray.origin.y - self.height) / ray.direction.y;
        if !ray_t.surrounds(d) {
            return false;
        }

        let p = ray.at(d);
        if !self.covers(p) {
            return false;
        }

        rec.t = d;
        rec.p = p;
        rec.normal = Vec3::Y;
        rec.material = Material {
            diffuse_color: self.color_at(p),
            ..Material::default()
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn down_from(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 0.0, z), Vec3::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_hit_from_above() {
        let board = Checkerboard::default();
        let mut rec = HitRecord::default();

        assert!(board.hit(&down_from(0.5, 11.0), Interval::new(0.0, f32::INFINITY), &mut rec));
        assert_eq!(rec.t, 4.0);
        assert_eq!(rec.p, Vec3::new(0.5, -4.0, 11.0));
        assert_eq!(rec.normal, Vec3::Y);
        assert_eq!(rec.material.diffuse_color, Color::splat(0.3));
        assert_eq!(rec.material.albedo, Material::default().albedo);
    }

    #[test]
    fn test_tiles_alternate_along_both_axes() {
        let board = Checkerboard::default();
        let white = Color::splat(0.3);
        let tan = Color::new(1.0, 0.7, 0.3) * 0.3;

        let mut colors = Vec::new();
        for (x, z) in [(0.5, 11.0), (2.5, 11.0), (4.5, 11.0), (0.5, 13.0), (0.5, 15.0)] {
            let mut rec = HitRecord::default();
            assert!(board.hit(&down_from(x, z), Interval::new(0.0, f32::INFINITY), &mut rec));
            colors.push(rec.material.diffuse_color);
        }

        assert_eq!(colors, vec![white, tan, white, tan, white]);
    }

    #[test]
    fn test_outside_bounds() {
        let board = Checkerboard::default();
        let mut rec = HitRecord::default();
        let all = Interval::new(0.0, f32::INFINITY);

        assert!(!board.hit(&down_from(10.5, 20.0), all, &mut rec));
        assert!(!board.hit(&down_from(-10.5, 20.0), all, &mut rec));
        assert!(!board.hit(&down_from(0.0, 9.5), all, &mut rec));
        assert!(!board.hit(&down_from(0.0, 30.5), all, &mut rec));
    }

    #[test]
    fn test_grazing_and_upward_rays() {
        let board = Checkerboard::default();
        let mut rec = HitRecord::default();
        let all = Interval::new(0.0, f32::INFINITY);

        // |Dy| at the threshold is skipped even though it would land on the board
        let grazing = Ray::new(
            Vec3::new(0.0, -3.99, 11.0),
            Vec3::new(0.0, -1e-3, 1.0),
        );
        assert!(!board.hit(&grazing, all, &mut rec));

        // Board is behind the ray
        let up = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::Y);
        assert!(!board.hit(&up, all, &mut rec));
    }

    #[test]
    fn test_farther_than_current_hit() {
        let board = Checkerboard::default();
        let mut rec = HitRecord::default();
        assert!(!board.hit(&down_from(0.5, 11.0), Interval::new(0.0, 3.0), &mut rec));
        assert!(!board.hit(&down_from(0.5, 11.0), Interval::new(0.0, 4.0), &mut rec));
    }
}
