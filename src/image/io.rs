//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Alpha channels are
//! dropped on load.

use crate::image::{pack_rgb, OwnedImage};
use crate::util::{SignScanError, SignScanResult};
use std::path::Path;

/// Creates an owned image from an 8-bit RGB buffer.
pub fn owned_from_rgb_image(img: &image::RgbImage) -> SignScanResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|px| pack_rgb(px.0[0], px.0[1], px.0[2]))
        .collect();
    OwnedImage::new(data, width, height)
}

/// Creates an owned RGB image from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> SignScanResult<OwnedImage> {
    let rgb = img.to_rgb8();
    owned_from_rgb_image(&rgb)
}

/// Loads an image from disk and converts it to packed RGB.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> SignScanResult<OwnedImage> {
    let img = image::open(path).map_err(|err| SignScanError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
