//! Shared utility helpers.

pub mod error;

pub use error::{ImageRole, SignScanError, SignScanResult};
