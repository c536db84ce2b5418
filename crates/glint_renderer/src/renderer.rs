//! Pixel dispatch and the framebuffer.
//!
//! Shades one primary ray per pixel. Rows are handed to rayon as contiguous
//! mutable chunks, so every worker writes its own disjoint slice of the
//! framebuffer and no locking is needed.

use std::time::Instant;

use crate::camera::Camera;
use crate::output::color_to_rgb;
use crate::shading::{cast_ray, MAX_DEPTH};
use glint_core::Scene;
use glint_math::Color;
use rayon::prelude::*;
use thiserror::Error;

/// Sky color seen by rays that hit nothing.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.4, 0.85, 1.0);

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to allocate a {width}x{height} framebuffer")]
    Allocation { width: u32, height: u32 },

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Deepest recursion level that is still shaded
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            background: DEFAULT_BACKGROUND,
            threads: None,
        }
    }
}

/// Linear RGB pixels in row-major order (`pixels[j * width + i]`).
///
/// Values are unbounded above; clamping happens only when converting to
/// bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    ///
    /// Fails instead of aborting when the pixel storage cannot be allocated.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let alloc_error = || RenderError::Allocation { width, height };

        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(alloc_error)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| alloc_error())?;
        pixels.resize(len, Color::ZERO);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the pixel at (i, j).
    pub fn get(&self, i: u32, j: u32) -> Color {
        self.pixels[self.index(i, j)]
    }

    /// Set the pixel at (i, j).
    pub fn set(&mut self, i: u32, j: u32, color: Color) {
        let index = self.index(i, j);
        self.pixels[index] = color;
    }

    fn index(&self, i: u32, j: u32) -> usize {
        j as usize * self.width as usize + i as usize
    }

    /// Convert to packed 8-bit RGB in scan order (top row first).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Shade a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.get_ray(i, j);
    cast_ray(&ray, scene, 0, config)
}

/// Render the entire scene to a framebuffer.
///
/// Pixels are shaded in parallel with no ordering between them; the call
/// returns only after every row has been written.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<Framebuffer> {
    let mut image = Framebuffer::new(camera.image_width, camera.image_height)?;
    if image.pixels.is_empty() {
        log::warn!(
            "Nothing to render for a {}x{} image",
            camera.image_width,
            camera.image_height
        );
        return Ok(image);
    }

    let start = Instant::now();
    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| shade_rows(&mut image, camera, scene, config));
        }
        None => shade_rows(&mut image, camera, scene, config),
    }

    log::info!(
        "Rendered {}x{} in {:.2?}",
        camera.image_width,
        camera.image_height,
        start.elapsed()
    );

    Ok(image)
}

fn shade_rows(image: &mut Framebuffer, camera: &Camera, scene: &Scene, config: &RenderConfig) {
    log::info!(
        "Rendering {}x{} ({} spheres, {} lights) on {} threads",
        image.width,
        image.height,
        scene.sphere_count(),
        scene.light_count(),
        rayon::current_num_threads()
    );

    let width = image.width as usize;
    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, i as u32, j as u32, config);
            }
        });
}
