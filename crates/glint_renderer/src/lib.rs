//! glint renderer - CPU recursive ray tracing.
//!
//! A Whitted-style ray tracer: one primary ray per pixel through a pinhole
//! camera, Phong shading with hard shadows, and recursive mirror reflection
//! and refraction up to a fixed depth.

mod camera;
mod checkerboard;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;

pub use camera::Camera;
pub use hittable::{scene_intersect, HitRecord, Hittable, FAR_CLIP};
pub use output::{color_to_rgb, encode_ppm, save, write_ppm, OutputError, OutputResult};
pub use renderer::{
    render, render_pixel, Framebuffer, RenderConfig, RenderError, RenderResult,
    DEFAULT_BACKGROUND,
};
pub use shading::{
    cast_ray, offset_origin, reflect, refract, MAX_DEPTH, SURFACE_EPSILON, TIR_SENTINEL,
};
pub use sphere::sphere_distance;

/// Re-export the scene model and math types
pub use glint_core::{Checkerboard, Light, Material, Scene, Sphere};
pub use glint_math::{Color, Interval, Ray, Vec3, Vec4};
