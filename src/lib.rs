//! SignScan locates a small set of template images inside a larger scan.
//!
//! Images are reduced to fixed-length signature vectors by repeatedly folding
//! pixel values through a deterministic `Transform`. The scan is walked with
//! one window cursor per template size, every window is reduced the same way,
//! and templates vote position by position for the window they resemble most.
//! Each template keeps the window with its highest vote count, or reports that
//! it was not recognized.

pub mod image;
pub mod search;
pub mod sign;
pub mod signature;
pub mod template;
mod trace;
pub mod transform;
pub mod util;

#[cfg(feature = "image-io")]
pub use image::io;
pub use image::{pack_rgb, ImageView, OwnedImage};
pub use search::{
    Located, MapLabel, MapSink, MatchConfig, NoopSink, Recognition, Recognizer,
    ReferenceIndexing, TemplateOutcome, WindowCursor, WindowOrigin, WindowSample, WindowSlot,
    DEFAULT_SIGNATURE_LEN,
};
pub use sign::{MapEntry, SignMap, SignValue};
pub use signature::Signature;
pub use template::{Template, TemplateDescriptor};
pub use transform::{NearestSign, Transform};
pub use util::{ImageRole, SignScanError, SignScanResult};
