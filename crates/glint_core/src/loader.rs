//! JSON scene loading.
//!
//! Scene files name their materials once and let spheres refer to them by
//! name:
//!
//! ```json
//! {
//!   "materials": {
//!     "ivory": { "refractive_index": 1.0, "albedo": [0.6, 0.3, 0.1, 0.0],
//!                "diffuse_color": [0.4, 0.4, 0.3], "specular_exponent": 50.0 }
//!   },
//!   "spheres": [ { "center": [-3.0, 0.0, 16.0], "radius": 2.0, "material": "ivory" } ],
//!   "lights": [ { "position": [-20.0, 20.0, -20.0], "intensity": 1.5 } ],
//!   "checkerboard": true
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use glint_math::{Color, Vec3, Vec4};
use serde::Deserialize;
use thiserror::Error;

use crate::material::Material;
use crate::scene::{Checkerboard, Light, Scene, Sphere};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Invalid material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Invalid light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

fn default_refractive_index() -> f32 {
    1.0
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MaterialDesc {
    #[serde(default = "default_refractive_index")]
    refractive_index: f32,
    albedo: [f32; 4],
    diffuse_color: [f32; 3],
    #[serde(default)]
    specular_exponent: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereDesc {
    center: [f32; 3],
    radius: f32,
    material: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LightDesc {
    position: [f32; 3],
    intensity: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    materials: HashMap<String, MaterialDesc>,
    #[serde(default)]
    spheres: Vec<SphereDesc>,
    #[serde(default)]
    lights: Vec<LightDesc>,
    #[serde(default)]
    checkerboard: bool,
}

/// Load a scene from a JSON file on disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::debug!("Reading scene file {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Load a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let file: SceneFile = serde_json::from_str(text)?;

    let mut materials = HashMap::with_capacity(file.materials.len());
    for (name, desc) in file.materials {
        let material = convert_material(&name, &desc)?;
        materials.insert(name, material);
    }

    let mut used = HashSet::new();
    let mut scene = Scene::new();

    for (index, desc) in file.spheres.iter().enumerate() {
        let material = *materials
            .get(&desc.material)
            .ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: desc.material.clone(),
            })?;
        used.insert(desc.material.as_str());

        let center = Vec3::from_array(desc.center);
        if !center.is_finite() {
            return Err(SceneError::InvalidSphere {
                index,
                reason: "center is not finite".into(),
            });
        }
        if !(desc.radius.is_finite() && desc.radius > 0.0) {
            return Err(SceneError::InvalidSphere {
                index,
                reason: format!("radius must be positive, got {}", desc.radius),
            });
        }
        scene = scene.with_sphere(Sphere::new(center, desc.radius, material));
    }

    for name in materials.keys() {
        if !used.contains(name.as_str()) {
            log::warn!("Material '{}' is never used", name);
        }
    }

    for (index, desc) in file.lights.iter().enumerate() {
        let position = Vec3::from_array(desc.position);
        if !position.is_finite() {
            return Err(SceneError::InvalidLight {
                index,
                reason: "position is not finite".into(),
            });
        }
        if !(desc.intensity.is_finite() && desc.intensity >= 0.0) {
            return Err(SceneError::InvalidLight {
                index,
                reason: format!("intensity must be non-negative, got {}", desc.intensity),
            });
        }
        scene = scene.with_light(Light::new(position, desc.intensity));
    }

    if file.checkerboard {
        scene = scene.with_checkerboard(Checkerboard::default());
    }

    log::debug!(
        "Loaded scene: {} spheres, {} lights, checkerboard: {}",
        scene.sphere_count(),
        scene.light_count(),
        scene.checkerboard.is_some()
    );

    Ok(scene)
}

fn convert_material(name: &str, desc: &MaterialDesc) -> SceneResult<Material> {
    let invalid = |reason: String| SceneError::InvalidMaterial {
        name: name.to_string(),
        reason,
    };

    let albedo = Vec4::from_array(desc.albedo);
    let diffuse_color = Color::from_array(desc.diffuse_color);

    if !(desc.refractive_index.is_finite() && desc.refractive_index >= 1.0) {
        return Err(invalid(format!(
            "refractive index must be at least 1, got {}",
            desc.refractive_index
        )));
    }
    if !albedo.is_finite() || albedo.min_element() < 0.0 {
        return Err(invalid(format!("albedo must be non-negative, got {}", albedo)));
    }
    if !diffuse_color.is_finite() {
        return Err(invalid("diffuse color is not finite".into()));
    }
    if !(desc.specular_exponent.is_finite() && desc.specular_exponent >= 0.0) {
        return Err(invalid(format!(
            "specular exponent must be non-negative, got {}",
            desc.specular_exponent
        )));
    }

    Ok(Material::new(
        desc.refractive_index,
        albedo,
        diffuse_color,
        desc.specular_exponent,
    ))
}
