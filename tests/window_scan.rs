//! Window cursor behaviour over a range of scan and window sizes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use signscan::{WindowCursor, WindowOrigin};

/// Windows per row times the number of one-pixel row shifts that still fit.
fn expected_count(width: usize, height: usize, scan_width: usize, scan_height: usize) -> usize {
    (scan_width / width) * (scan_height - height + 1)
}

#[test]
fn extraction_count_follows_wrap_rule() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let scan_width = rng.random_range(1..40);
        let scan_height = rng.random_range(1..40);
        let width = rng.random_range(1..=scan_width);
        let height = rng.random_range(1..=scan_height);

        let count = WindowCursor::new(width, height, scan_width, scan_height).count();
        assert_eq!(
            count,
            expected_count(width, height, scan_width, scan_height),
            "window {width}x{height} in scan {scan_width}x{scan_height}"
        );
    }
}

#[test]
fn origins_stay_inside_the_scan() {
    let (scan_width, scan_height) = (11, 7);
    for origin in WindowCursor::new(3, 4, scan_width, scan_height) {
        assert!(origin.x + 3 <= scan_width);
        assert!(origin.y + 4 <= scan_height);
        assert_eq!(origin.x % 3, 0);
    }
}

#[test]
fn wrap_moves_down_one_row_not_one_window() {
    let origins: Vec<WindowOrigin> = WindowCursor::new(3, 3, 6, 5).collect();
    let rows: Vec<usize> = origins.iter().map(|o| o.y).collect();
    assert_eq!(rows, vec![0, 0, 1, 1, 2, 2]);
}

#[test]
fn calls_after_exhaustion_keep_returning_none() {
    let mut cursor = WindowCursor::new(2, 2, 3, 3);
    let seen: Vec<_> = cursor.by_ref().collect();
    assert_eq!(seen.len(), 2);
    for _ in 0..5 {
        assert_eq!(cursor.next(), None);
    }
}

#[test]
fn cursors_advance_independently() {
    let mut small = WindowCursor::new(1, 1, 4, 4);
    let mut large = WindowCursor::new(4, 4, 4, 4);
    assert!(large.next().is_some());
    assert!(large.next().is_none());
    assert_eq!(small.by_ref().count(), 16);
    assert!(small.is_exhausted());
}
