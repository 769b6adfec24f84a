//! Fixed-length signature vectors driven over a reduced map.

use crate::sign::{SignMap, SignValue};
use crate::signature::reduce::drive_step;
use crate::transform::Transform;

/// Runs the transform `len` times over `map`, driving position `p` with
/// `p * drive_step(len)`.
pub fn build_vector<T>(map: &SignMap, len: usize, transform: &T) -> Vec<SignValue>
where
    T: Transform + ?Sized,
{
    let step = drive_step(len);
    let mut drive = SignValue::MIN;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(transform.apply(map, drive));
        drive = drive.saturating_add(step);
    }
    out
}

/// Builds one vector per map; absent maps produce empty vectors.
pub fn build_vectors<T>(
    maps: &[Option<&SignMap>],
    len: usize,
    transform: &T,
) -> Vec<Vec<SignValue>>
where
    T: Transform + ?Sized,
{
    maps.iter()
        .map(|map| match map {
            Some(map) => build_vector(map, len, transform),
            None => Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_vector, build_vectors};
    use crate::sign::{SignMap, SignValue};
    use crate::signature::reduce::drive_step;
    use crate::transform::NearestSign;

    #[test]
    fn vector_length_is_independent_of_map_size() {
        for size in [1u32, 3, 17] {
            let map = SignMap::from_signs((0..size).map(SignValue::new));
            assert_eq!(build_vector(&map, 12, &NearestSign).len(), 12);
        }
    }

    #[test]
    fn drives_are_spaced_by_step() {
        let echo = |_: &SignMap, drive: SignValue| drive;
        let map = SignMap::from_signs([SignValue::MIN]);
        let out = build_vector(&map, 4, &echo);
        let step = drive_step(4);
        let expected: Vec<_> = (0..4).map(|p| SignValue::new(p * step)).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn absent_maps_yield_empty_vectors() {
        let map = SignMap::from_signs([SignValue::new(9)]);
        let out = build_vectors(&[Some(&map), None, Some(&map)], 5, &NearestSign);
        assert_eq!(out[0], vec![SignValue::new(9); 5]);
        assert!(out[1].is_empty());
        assert_eq!(out[2].len(), 5);
    }
}
