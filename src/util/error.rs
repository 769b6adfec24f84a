//! Error types for signscan.

use std::fmt;
use thiserror::Error;

/// Result alias for signscan operations.
pub type SignScanResult<T> = std::result::Result<T, SignScanError>;

/// Identifies one of the images taking part in a recognition run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    /// The scanned image that templates are searched in.
    Scan,
    /// The reference image at the given template index.
    Template(usize),
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Scan => f.write_str("scan image"),
            ImageRole::Template(index) => write!(f, "template {index}"),
        }
    }
}

/// Errors that can occur when running signscan algorithms.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SignScanError {
    /// An image has a zero width or height.
    #[error("invalid dimensions for {image}: width={width}, height={height}")]
    InvalidDimensions {
        image: ImageRole,
        width: usize,
        height: usize,
    },
    /// A template does not fit inside the scan image.
    #[error(
        "template {index} ({width}x{height}) exceeds the scan image ({scan_width}x{scan_height})"
    )]
    TemplateTooLarge {
        index: usize,
        width: usize,
        height: usize,
        scan_width: usize,
        scan_height: usize,
    },
    /// Voting produced an owner outside of the template set.
    #[error("window owner {owner} is outside of the {templates} known templates")]
    UnknownOwner { owner: usize, templates: usize },
    /// The provided buffer is smaller than the view requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The stride is shorter than a row.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// A region of interest lies (partly) outside the image.
    #[error(
        "roi out of bounds: x={x}, y={y}, width={width}, height={height} in {img_width}x{img_height}"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Decoding an image from disk failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
