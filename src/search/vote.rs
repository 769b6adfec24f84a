//! Position-wise voting between templates.
//!
//! Both decisions below prefer a strict winner and otherwise fall back to the
//! last template, so a full tie at a position, or a tied tally, always goes to
//! the highest template index.

use crate::sign::SignValue;

/// Index of the strictly smallest distance, or the last index on any tie.
///
/// Returns `None` for an empty slice.
pub fn cast_vote(distances: &[SignValue]) -> Option<usize> {
    let last = distances.len().checked_sub(1)?;
    Some(strict_extreme(distances, |a, b| a < b).unwrap_or(last))
}

/// Owner and confidence of a finished tally.
///
/// The owner is the template with strictly the most votes; on any tie it is
/// the last template. Returns `None` for an empty tally.
pub fn pick_owner(votes: &[usize]) -> Option<(usize, usize)> {
    let last = votes.len().checked_sub(1)?;
    let owner = strict_extreme(votes, |a, b| a > b).unwrap_or(last);
    Some((owner, votes[owner]))
}

fn strict_extreme<V, F>(values: &[V], better: F) -> Option<usize>
where
    F: Fn(&V, &V) -> bool,
{
    values.iter().enumerate().find_map(|(idx, candidate)| {
        let beats_all = values
            .iter()
            .enumerate()
            .all(|(other, value)| other == idx || better(candidate, value));
        beats_all.then_some(idx)
    })
}

#[cfg(test)]
mod tests {
    use super::{cast_vote, pick_owner};
    use crate::sign::SignValue;

    fn d(values: [u32; 3]) -> [SignValue; 3] {
        values.map(SignValue::new)
    }

    #[test]
    fn strict_minimum_wins() {
        assert_eq!(cast_vote(&d([1, 5, 9])), Some(0));
        assert_eq!(cast_vote(&d([5, 1, 9])), Some(1));
        assert_eq!(cast_vote(&d([5, 9, 1])), Some(2));
    }

    #[test]
    fn ties_fall_to_last_template() {
        assert_eq!(cast_vote(&d([4, 4, 4])), Some(2));
        assert_eq!(cast_vote(&d([0, 0, 0])), Some(2));
        assert_eq!(cast_vote(&d([0, 0, 9])), Some(2));
        assert_eq!(cast_vote(&[SignValue::MAX; 3]), Some(2));
        assert_eq!(cast_vote(&[]), None);
    }

    #[test]
    fn owner_needs_strict_majority() {
        assert_eq!(pick_owner(&[7, 2, 1]), Some((0, 7)));
        assert_eq!(pick_owner(&[2, 7, 1]), Some((1, 7)));
        assert_eq!(pick_owner(&[5, 5, 0]), Some((2, 0)));
        assert_eq!(pick_owner(&[0, 0, 0]), Some((2, 0)));
        assert_eq!(pick_owner(&[]), None);
    }
}
