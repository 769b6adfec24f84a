//! Bounded signature values and numbered signature maps.
//!
//! A `SignValue` is a 24-bit magnitude, wide enough to hold an RGB pixel with
//! its alpha byte stripped. Distances between values are themselves values, so
//! `SignValue::MAX` doubles as the "unknown / worst" distance.

mod map;

pub use map::{MapEntry, SignMap};

use std::fmt;
use std::ops::Sub;

/// Bounded signature value in `[SignValue::MIN, SignValue::MAX]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignValue(u32);

impl SignValue {
    /// Smallest representable value.
    pub const MIN: SignValue = SignValue(0);
    /// Largest representable value; also the worst possible distance.
    pub const MAX: SignValue = SignValue(0x00FF_FFFF);

    /// Creates a value, clamping anything above `MAX`.
    #[inline]
    pub const fn new(value: u32) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            SignValue(value)
        }
    }

    /// Converts a packed pixel into a value, ignoring the alpha byte.
    #[inline]
    pub const fn from_pixel(pixel: u32) -> Self {
        SignValue(pixel & Self::MAX.0)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Absolute difference between two values; smaller means closer.
    #[inline]
    pub fn distance(self, other: SignValue) -> SignValue {
        SignValue(self.0.abs_diff(other.0))
    }

    /// Adds `rhs`, saturating at `MAX`.
    #[inline]
    pub fn saturating_add(self, rhs: u32) -> SignValue {
        SignValue::new(self.0.saturating_add(rhs))
    }
}

impl Sub for SignValue {
    type Output = SignValue;

    /// Distance operator.
    fn sub(self, rhs: SignValue) -> SignValue {
        self.distance(rhs)
    }
}

impl From<SignValue> for u32 {
    fn from(value: SignValue) -> Self {
        value.0
    }
}

impl fmt::Display for SignValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#08x}", self.0)
    }
}
