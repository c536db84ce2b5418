//! Phong-style surface materials.

use glint_math::{Color, Vec4};

/// Surface description used by the shader.
///
/// The four `albedo` weights scale, in order, the diffuse, specular,
/// reflected and refracted contributions. They need not sum to one and a
/// single weight may exceed one (the mirror preset uses a specular weight of
/// 10 for its highlight).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Index of refraction of the material (1.0 = air)
    pub refractive_index: f32,

    /// Weights for (diffuse, specular, reflective, refractive)
    pub albedo: Vec4,

    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Color,

    /// Phong exponent controlling highlight sharpness
    pub specular_exponent: f32,
}

impl Default for Material {
    /// Purely diffuse black material.
    ///
    /// Surfaces that synthesize their color on the fly (the checkerboard)
    /// start from this and only replace `diffuse_color`.
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Matte off-white with a soft highlight.
    pub fn ivory() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.6, 0.3, 0.1, 0.0),
            Color::new(0.4, 0.4, 0.3),
            50.0,
        )
    }

    /// Mostly transparent, mildly reflective glass.
    pub fn glass() -> Self {
        Self::new(
            1.5,
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            Color::new(0.6, 0.7, 0.8),
            125.0,
        )
    }

    pub fn red_rubber() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            Color::new(0.3, 0.1, 0.1),
            10.0,
        )
    }

    pub fn mirror() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.0, 10.0, 0.8, 0.0),
            Color::new(1.0, 1.0, 1.0),
            1425.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let mat = Material::default();
        assert_eq!(mat.refractive_index, 1.0);
        assert_eq!(mat.albedo, Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(mat.specular_exponent, 0.0);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Material::glass().refractive_index, 1.5);
        assert_eq!(Material::mirror().albedo[1], 10.0);
        assert_eq!(Material::red_rubber().diffuse_color, Color::new(0.3, 0.1, 0.1));
        assert_eq!(Material::ivory().specular_exponent, 50.0);
    }
}
