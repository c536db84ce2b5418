//! Framebuffer serialization.
//!
//! Binary PPM (`P6`) is written by hand; PNG goes through the `image` crate.
//! Both use the same clamped, quantized bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::renderer::Framebuffer;
use glint_math::Color;
use image::{ImageFormat, RgbImage};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for image output.
pub type OutputResult<T> = Result<T, OutputError>;

/// Convert a linear color to 8-bit RGB.
///
/// A color whose brightest channel exceeds 1 is scaled down so that channel
/// becomes exactly 1, which keeps its hue. No gamma is applied.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let max = color.max_element();
    let color = if max > 1.0 { color * (1.0 / max) } else { color };

    // `as u8` floors non-negative values and saturates the rest
    [
        (255.0 * color.x) as u8,
        (255.0 * color.y) as u8,
        (255.0 * color.z) as u8,
    ]
}

/// Write the framebuffer as binary PPM: `P6\n<W> <H>\n255\n` then RGB
/// triples in scan order.
pub fn write_ppm<W: Write>(image: &Framebuffer, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()
}

/// Encode the framebuffer as binary PPM in memory.
pub fn encode_ppm(image: &Framebuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 3 + 32);
    // Writing into a Vec cannot fail
    let _ = write_ppm(image, &mut bytes);
    bytes
}

/// Save the framebuffer to `path`.
///
/// A `.png` extension (any case) writes PNG; everything else is binary PPM.
pub fn save<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        let buffer = RgbImage::from_raw(image.width, image.height, image.to_rgb8())
            .ok_or_else(|| {
                io_error(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "framebuffer size does not match its dimensions",
                ))
            })?;
        buffer.save_with_format(path, ImageFormat::Png)?;
    } else {
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        write_ppm(image, &mut writer).map_err(io_error)?;
    }

    log::info!("Saved {}", path.display());
    Ok(())
}
