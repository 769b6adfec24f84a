//! Pairwise reduction of per-pixel signs down to the signature length.

use crate::sign::{SignMap, SignValue};
use crate::transform::Transform;

/// Spacing between consecutive drive values for a signature of `len` entries.
#[inline]
pub fn drive_step(len: usize) -> u32 {
    let len = u32::try_from(len.max(1)).unwrap_or(u32::MAX);
    SignValue::MAX.value() / len
}

/// Halves `signs` until at most `len` remain.
///
/// Each pass folds consecutive pairs through `transform`, dropping a trailing
/// unpaired element. Pass `level` drives the transform with
/// `MIN + level * drive_step(len)`, saturating at `MAX`. Inputs that already
/// fit are returned unchanged.
pub fn reduce_signs<T>(mut signs: Vec<SignValue>, len: usize, transform: &T) -> Vec<SignValue>
where
    T: Transform + ?Sized,
{
    let step = drive_step(len);
    let mut drive = SignValue::MIN;
    while signs.len() > len {
        signs = signs
            .chunks_exact(2)
            .map(|pair| transform.apply(&SignMap::from_signs(pair.iter().copied()), drive))
            .collect();
        drive = drive.saturating_add(step);
    }
    signs
}
