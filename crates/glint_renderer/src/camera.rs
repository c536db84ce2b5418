//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Pinhole camera at the world origin looking down +Z with +Y up.
///
/// One ray per pixel through the pixel center; no jitter, no lens.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Horizontal field of view in radians
    fov: f32,

    // Cached computed value (updated by every builder call)
    image_plane_z: f32,
}

impl Camera {
    /// Create a new camera with default settings (3840x2160, 90 degree FOV).
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 3840,
            image_height: 2160,
            fov: FRAC_PI_2,
            image_plane_z: 0.0,
        };
        camera.update_image_plane();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.update_image_plane();
        self
    }

    /// Set the horizontal field of view, in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self.update_image_plane();
        self
    }

    /// Horizontal field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Distance from the pinhole to the image plane, in pixel units.
    pub fn image_plane_z(&self) -> f32 {
        self.image_plane_z
    }

    fn update_image_plane(&mut self) {
        self.image_plane_z = self.image_width as f32 / (2.0 * (self.fov / 2.0).tan());
    }

    /// Generate the primary ray through the center of pixel (i, j).
    ///
    /// `i` counts columns left to right, `j` rows top to bottom.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = (i as f32 + 0.5) - self.image_width as f32 / 2.0;
        let y = -(j as f32 + 0.5) + self.image_height as f32 / 2.0;
        let direction = Vec3::new(x, y, self.image_plane_z).normalize();

        Ray::new(Vec3::ZERO, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
