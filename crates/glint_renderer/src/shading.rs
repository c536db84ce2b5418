//! Whitted-style shading: Phong direct lighting with hard shadows plus
//! recursive reflection and refraction.

use crate::hittable::scene_intersect;
use crate::renderer::RenderConfig;
use glint_core::Scene;
use glint_math::{Color, Ray, Vec3};

/// Default recursion cap; the ray at depth `MAX_DEPTH + 1` sees the background.
pub const MAX_DEPTH: u32 = 4;

/// Secondary rays start this far off the surface to avoid hitting it again.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Direction returned by [`refract`] under total internal reflection.
pub const TIR_SENTINEL: Vec3 = Vec3::X;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - 2.0 * i.dot(n) * n
}

/// Refract `i` through a surface with normal `n` using Snell's law.
///
/// `eta_i` is the index on the incoming side of `n`, `eta_t` the index on the
/// other side. A ray leaving the object (`i·n > 0`) is handled by flipping the
/// normal and swapping the indices. Under total internal reflection this
/// returns [`TIR_SENTINEL`] rather than a reflected direction.
pub fn refract(i: Vec3, n: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -i.dot(n).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        return refract(i, -n, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        TIR_SENTINEL
    } else {
        i * eta + n * (eta * cosi - k.sqrt())
    }
}

/// Nudge `p` off the surface to the side `dir` is heading.
#[inline]
pub fn offset_origin(p: Vec3, dir: Vec3, n: Vec3) -> Vec3 {
    if dir.dot(n) < 0.0 {
        p - n * SURFACE_EPSILON
    } else {
        p + n * SURFACE_EPSILON
    }
}

/// Compute the color seen along `ray`.
///
/// Both the reflected and the refracted ray are always traced (there is no
/// Fresnel term) and weighted by the material's albedo; shadow rays only
/// test occlusion. Past `config.max_depth` the background is returned.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let Some(rec) = scene_intersect(scene, ray) else {
        return config.background;
    };

    let dir = ray.direction;
    let p = rec.p;
    let n = rec.normal;
    let material = rec.material;

    let reflect_dir = reflect(dir, n);
    let reflect_ray = Ray::new(offset_origin(p, reflect_dir, n), reflect_dir);
    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1, config);

    let refract_dir = refract(dir, n, material.refractive_index, 1.0).normalize();
    let refract_ray = Ray::new(offset_origin(p, refract_dir, n), refract_dir);
    let refract_color = cast_ray(&refract_ray, scene, depth + 1, config);

    let (diffuse_intensity, specular_intensity) =
        direct_lighting(scene, p, n, dir, material.specular_exponent);

    material.diffuse_color * diffuse_intensity * material.albedo[0]
        + Color::ONE * specular_intensity * material.albedo[1]
        + reflect_color * material.albedo[2]
        + refract_color * material.albedo[3]
}

/// Sum Phong diffuse and specular intensities over all unshadowed lights.
fn direct_lighting(
    scene: &Scene,
    p: Vec3,
    n: Vec3,
    view_dir: Vec3,
    specular_exponent: f32,
) -> (f32, f32) {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        let to_light = light.position - p;
        let light_distance = to_light.length();
        let light_dir = to_light / light_distance;

        let shadow_origin = offset_origin(p, light_dir, n);
        let shadow_ray = Ray::new(shadow_origin, light_dir);
        if let Some(blocker) = scene_intersect(scene, &shadow_ray) {
            if (blocker.p - shadow_origin).length() < light_distance {
                continue;
            }
        }

        diffuse += light_dir.dot(n).max(0.0) * light.intensity;
        specular += reflect(light_dir, n)
            .dot(view_dir)
            .max(0.0)
            .powf(specular_exponent)
            * light.intensity;
    }

    (diffuse, specular)
}
