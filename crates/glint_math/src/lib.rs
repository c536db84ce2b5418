// Re-export glam for convenience
pub use glam::*;

// glint math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Linear RGB color, one `f32` per channel.
pub type Color = Vec3;
