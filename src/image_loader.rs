//! Decoding and scaling of image files, and conversion to Slint images.

use crate::error::{AppError, Result};
use crate::scaling::scaled_size;
use image::imageops::FilterType;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// RGB8 pixel data of an image already scaled for display.
#[derive(Clone, Debug)]
pub struct ScaledImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes the image at `path` and scales it so its longer side equals `max_size`.
pub fn load_scaled_blocking(path: &Path, max_size: u32) -> Result<ScaledImage> {
    let image = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .decode()?;

    let (width, height) = scaled_size(image.width(), image.height(), max_size)
        .ok_or_else(|| AppError::ImageLoad(format!("{}: zero-sized image", path.display())))?;

    // Extreme aspect ratios can truncate one side to zero; keep a single pixel row.
    let scaled = image
        .resize_exact(width.max(1), height.max(1), FilterType::Triangle)
        .to_rgb8();

    Ok(ScaledImage {
        width: scaled.width(),
        height: scaled.height(),
        data: scaled.into_raw(),
    })
}

/// Wraps scaled RGB8 data into a Slint image.
pub fn create_slint_image(scaled: &ScaledImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&scaled.data, scaled.width, scaled.height);
    Image::from_rgb8(buffer)
}
