//! Reduction primitive applied to signature maps.
//!
//! The matcher only relies on the contract of `Transform`: for identical map
//! contents and drive values it must return identical output. Any pure
//! function of `(map, drive)` qualifies, including plain closures.

use crate::sign::{SignMap, SignValue};

/// Deterministic reduction of a map plus a drive value to one signature value.
pub trait Transform {
    /// Reduces `map` under the given `drive` value.
    fn apply(&self, map: &SignMap, drive: SignValue) -> SignValue;
}

impl<F> Transform for F
where
    F: Fn(&SignMap, SignValue) -> SignValue,
{
    fn apply(&self, map: &SignMap, drive: SignValue) -> SignValue {
        self(map, drive)
    }
}

/// Picks the entry whose sign lies closest to the drive value.
///
/// Ties resolve to the lowest-numbered entry. An empty map yields
/// `SignValue::MAX`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestSign;

impl Transform for NearestSign {
    fn apply(&self, map: &SignMap, drive: SignValue) -> SignValue {
        map.entries()
            .iter()
            .min_by_key(|entry| (entry.sign - drive, entry.number))
            .map_or(SignValue::MAX, |entry| entry.sign)
    }
}
