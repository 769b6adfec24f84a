//! Pixel-to-signature pipeline.
//!
//! An image is flattened into per-pixel signs (row-major, alpha stripped),
//! halved pairwise until at most `len` signs remain, numbered into a
//! `SignMap`, and finally driven `len` times to produce a vector of exactly
//! `len` entries. Two images are comparable position by position because both
//! vectors were produced by the same drive sequence.

mod reduce;
mod vector;

pub use reduce::{drive_step, reduce_signs};
pub use vector::{build_vector, build_vectors};

use crate::image::ImageView;
use crate::sign::{SignMap, SignValue};
use crate::transform::Transform;

/// Flattens a view into row-major signs, ignoring the alpha byte.
pub fn signs_from_view(view: ImageView<'_, u32>) -> Vec<SignValue> {
    let mut signs = Vec::with_capacity(view.width() * view.height());
    for row in view.rows() {
        signs.extend(row.iter().map(|&px| SignValue::from_pixel(px)));
    }
    signs
}

/// Flattens, reduces and numbers the signs of `view`.
pub fn reduced_map<T>(view: ImageView<'_, u32>, len: usize, transform: &T) -> SignMap
where
    T: Transform + ?Sized,
{
    SignMap::from_signs(reduce_signs(signs_from_view(view), len, transform))
}

/// Reduced map of an image together with its fixed-length vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    map: SignMap,
    vector: Vec<SignValue>,
}

impl Signature {
    /// Computes the signature of `view` with vectors of `len` entries.
    pub fn from_view<T>(view: ImageView<'_, u32>, len: usize, transform: &T) -> Self
    where
        T: Transform + ?Sized,
    {
        let map = reduced_map(view, len, transform);
        let vector = build_vector(&map, len, transform);
        Self { map, vector }
    }

    /// Returns the reduced, numbered map the vector was driven from.
    pub fn map(&self) -> &SignMap {
        &self.map
    }

    /// Returns the signature vector.
    pub fn vector(&self) -> &[SignValue] {
        &self.vector
    }

    /// Consumes the signature, returning the map and the vector.
    pub fn into_parts(self) -> (SignMap, Vec<SignValue>) {
        (self.map, self.vector)
    }
}
