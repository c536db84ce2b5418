//! Scene types for glint.
//!
//! A scene is built once before rendering and only read while rendering,
//! so every type here is plain, immutable data that can be shared freely
//! across worker threads.

use glint_math::{Color, Interval, Vec3};

use crate::material::Material;

/// A sphere with its own copy of a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Bounded, axis-aligned checkerboard floor.
///
/// The board lies in the plane `y = height` and only exists strictly inside
/// `x_extent` and `z_extent`. Its color is procedural (see [`Checkerboard::color_at`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkerboard {
    pub height: f32,
    pub x_extent: Interval,
    pub z_extent: Interval,
    pub light_color: Color,
    pub dark_color: Color,
    /// Applied to both tile colors
    pub color_scale: f32,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_extent: Interval::new(-10.0, 10.0),
            z_extent: Interval::new(10.0, 30.0),
            light_color: Color::new(1.0, 1.0, 1.0),
            dark_color: Color::new(1.0, 0.7, 0.3),
            color_scale: 0.3,
        }
    }
}

impl Checkerboard {
    /// Returns true if `p` lies over the board (ignores `p.y`).
    pub fn covers(&self, p: Vec3) -> bool {
        self.x_extent.surrounds(p.x) && self.z_extent.surrounds(p.z)
    }

    /// Diffuse color of the tile containing `p`.
    ///
    /// Tiles are two units wide. The `+ 1000` keeps the x term positive so the
    /// parity does not flip across `x = 0`.
    pub fn color_at(&self, p: Vec3) -> Color {
        let tile_x = (0.5 * p.x + 1000.0).floor() as i64;
        let tile_z = (0.5 * p.z).floor() as i64;

        let color = if (tile_x + tile_z).rem_euclid(2) == 1 {
            self.light_color
        } else {
            self.dark_color
        };
        color * self.color_scale
    }
}

/// Everything the renderer needs to know about the world.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub checkerboard: Option<Checkerboard>,
}

impl Scene {
    /// Create a new empty scene (no spheres, no lights, no floor).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a point light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Set the checkerboard floor.
    pub fn with_checkerboard(mut self, checkerboard: Checkerboard) -> Self {
        self.checkerboard = Some(checkerboard);
        self
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// The built-in scene: ivory, glass, rubber and mirror spheres above
    /// the checkerboard, lit by three point lights.
    pub fn default_scene() -> Self {
        Self::new()
            .with_sphere(Sphere::new(Vec3::new(-3.0, 0.0, 16.0), 2.0, Material::ivory()))
            .with_sphere(Sphere::new(Vec3::new(-1.0, -1.5, 12.0), 2.0, Material::glass()))
            .with_sphere(Sphere::new(
                Vec3::new(1.5, -0.5, 18.0),
                3.0,
                Material::red_rubber(),
            ))
            .with_sphere(Sphere::new(Vec3::new(7.0, 5.0, 18.0), 4.0, Material::mirror()))
            .with_light(Light::new(Vec3::new(-20.0, 20.0, -20.0), 1.5))
            .with_light(Light::new(Vec3::new(30.0, 50.0, 25.0), 1.8))
            .with_light(Light::new(Vec3::new(30.0, 20.0, -30.0), 1.7))
            .with_checkerboard(Checkerboard::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert_eq!(scene.sphere_count(), 0);
        assert_eq!(scene.light_count(), 0);
        assert!(scene.checkerboard.is_none());
    }

    #[test]
    fn test_default_scene() {
        let scene = Scene::default_scene();
        assert_eq!(scene.sphere_count(), 4);
        assert_eq!(scene.light_count(), 3);
        assert!(scene.checkerboard.is_some());

        let mirror = &scene.spheres[3];
        assert_eq!(mirror.center, Vec3::new(7.0, 5.0, 18.0));
        assert_eq!(mirror.radius, 4.0);
        assert_eq!(mirror.material, Material::mirror());
    }

    #[test]
    fn test_checkerboard_tiles_alternate() {
        let board = Checkerboard::default();
        let white = Color::splat(0.3);
        let tan = Color::new(1.0, 0.7, 0.3) * 0.3;

        // floor(1000.25) + floor(5.5) = 1005 -> odd
        assert_eq!(board.color_at(Vec3::new(0.5, -4.0, 11.0)), white);
        // Step two units in x
        assert_eq!(board.color_at(Vec3::new(2.5, -4.0, 11.0)), tan);
        // Step two units in z
        assert_eq!(board.color_at(Vec3::new(0.5, -4.0, 13.0)), tan);
        // Both steps cancel out
        assert_eq!(board.color_at(Vec3::new(2.5, -4.0, 13.0)), white);
    }

    #[test]
    fn test_checkerboard_negative_x() {
        let board = Checkerboard::default();
        // floor(999.75) + floor(5.5) = 1004 -> even
        assert_eq!(
            board.color_at(Vec3::new(-0.5, -4.0, 11.0)),
            Color::new(1.0, 0.7, 0.3) * 0.3
        );
    }

    #[test]
    fn test_checkerboard_covers() {
        let board = Checkerboard::default();
        assert!(board.covers(Vec3::new(0.0, -4.0, 20.0)));
        assert!(board.covers(Vec3::new(-9.9, -4.0, 29.9)));
        assert!(!board.covers(Vec3::new(10.0, -4.0, 20.0)));
        assert!(!board.covers(Vec3::new(0.0, -4.0, 10.0)));
        assert!(!board.covers(Vec3::new(0.0, -4.0, 31.0)));
    }
}
