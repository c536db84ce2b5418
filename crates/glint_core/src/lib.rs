//! glint core - scene model for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Light`, `Checkerboard`, `Scene`
//! - **Default scene**: four spheres over a checkerboard, lit by three lights
//! - **Scene files**: JSON loading with validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{load_scene, Scene};
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use material::Material;
pub use scene::{Checkerboard, Light, Scene, Sphere};
