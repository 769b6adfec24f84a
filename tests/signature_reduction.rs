//! Properties of the reduction and vector building stages.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use signscan::signature::{build_vector, reduce_signs, signs_from_view};
use signscan::{ImageView, NearestSign, SignMap, SignValue, Signature};
use std::cell::Cell;

fn random_signs(rng: &mut StdRng, count: usize) -> Vec<SignValue> {
    (0..count)
        .map(|_| SignValue::new(rng.random_range(0..=SignValue::MAX.value())))
        .collect()
}

#[test]
fn reduced_length_never_exceeds_budget() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let len = rng.random_range(1..64);
        let count = rng.random_range(0..2000);
        let signs = random_signs(&mut rng, count);
        let reduced = reduce_signs(signs, len, &NearestSign);
        assert!(reduced.len() <= len, "{} > {len}", reduced.len());
    }
}

#[test]
fn each_pass_halves_the_length() {
    let passes = Cell::new(0usize);
    let last_len = Cell::new(0usize);
    let counting = |map: &SignMap, _drive: SignValue| {
        passes.set(passes.get() + 1);
        last_len.set(map.len());
        map.signs().last().unwrap_or(SignValue::MAX)
    };
    let signs: Vec<_> = (0..1001).map(SignValue::new).collect();
    let reduced = reduce_signs(signs, 100, &counting);
    // 1001 -> 500 -> 250 -> 125 -> 62
    assert_eq!(reduced.len(), 62);
    assert_eq!(passes.get(), 500 + 250 + 125 + 62);
    assert_eq!(last_len.get(), 2);
}

#[test]
fn inputs_within_budget_are_untouched() {
    let mut rng = StdRng::seed_from_u64(3);
    let signs = random_signs(&mut rng, 100);
    assert_eq!(reduce_signs(signs.clone(), 100, &NearestSign), signs);
}

#[test]
fn vector_length_matches_budget_for_any_map() {
    let mut rng = StdRng::seed_from_u64(5);
    for map_len in [1usize, 2, 7, 100, 300] {
        let map = SignMap::from_signs(random_signs(&mut rng, map_len));
        assert_eq!(build_vector(&map, 100, &NearestSign).len(), 100);
        assert_eq!(build_vector(&map, 13, &NearestSign).len(), 13);
    }
}

#[test]
fn signatures_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(17);
    let data: Vec<u32> = (0..48 * 31).map(|_| rng.random::<u32>()).collect();
    let view = ImageView::from_slice(&data, 48, 31).unwrap();

    let first = Signature::from_view(view, 100, &NearestSign);
    let second = Signature::from_view(view, 100, &NearestSign);
    assert_eq!(first, second);
    assert_eq!(first.vector().len(), 100);
}

#[test]
fn alpha_does_not_change_signatures() {
    let opaque = vec![0xFF12_3456u32, 0xFF65_4321, 0xFF00_0001, 0xFFAB_CDEF];
    let clear: Vec<u32> = opaque.iter().map(|px| px & 0x00FF_FFFF).collect();
    let a = ImageView::from_slice(&opaque, 2, 2).unwrap();
    let b = ImageView::from_slice(&clear, 2, 2).unwrap();
    assert_eq!(signs_from_view(a), signs_from_view(b));
    assert_eq!(
        Signature::from_view(a, 8, &NearestSign),
        Signature::from_view(b, 8, &NearestSign)
    );
}
