use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, Scene};
use glint_renderer::{render, save, Camera, RenderConfig, MAX_DEPTH};

/// Render the glint scene to an image file.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about)]
struct Args {
    /// Output image; `.png` writes PNG, anything else binary PPM
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 3840, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 2160, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f32,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u64).range(1..))]
    threads: Option<u64>,

    /// Deepest reflection/refraction level that is still shaded
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: u32,

    /// JSON scene file (defaults to the built-in scene)
    #[arg(short, long)]
    scene: Option<PathBuf>,
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if !(args.fov > 0.0 && args.fov < 180.0) {
        anyhow::bail!("--fov must be between 0 and 180 degrees, got {}", args.fov);
    }

    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => Scene::default_scene(),
    };
    log::debug!("Scene: {:#?}", scene);

    let camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_fov(args.fov.to_radians());
    log::info!(
        "Camera: {}x{}, fov {:.1} degrees",
        camera.image_width,
        camera.image_height,
        camera.fov().to_degrees()
    );

    let config = RenderConfig {
        max_depth: args.max_depth,
        threads: args.threads.map(|n| n as usize),
        ..Default::default()
    };

    let image = render(&camera, &scene, &config).context("Render failed")?;
    save(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["glint"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert_eq!(args.width, 3840);
        assert_eq!(args.height, 2160);
        assert_eq!(args.fov, 90.0);
        assert_eq!(args.threads, None);
        assert_eq!(args.max_depth, MAX_DEPTH);
        assert!(args.scene.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "glint", "-o", "frame.png", "--width", "320", "--height", "180", "-j", "2",
            "--scene", "room.json", "--max-depth", "2",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("frame.png"));
        assert_eq!((args.width, args.height), (320, 180));
        assert_eq!(args.threads, Some(2));
        assert_eq!(args.max_depth, 2);
        assert_eq!(args.scene, Some(PathBuf::from("room.json")));
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(Args::try_parse_from(["glint", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["glint", "--height", "0"]).is_err());
        assert!(Args::try_parse_from(["glint", "-j", "0"]).is_err());
    }
}
