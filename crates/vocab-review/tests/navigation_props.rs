//! Property tests for the nearest-acceptable-index search.

use proptest::prelude::*;
use vocab_review::find_closest;

fn brute_force(requested: i64, accepted: &[bool]) -> Option<usize> {
    accepted
        .iter()
        .enumerate()
        .filter(|(_, ok)| **ok)
        .map(|(index, _)| index)
        .min_by_key(|&index| ((index as i128 - i128::from(requested)).abs(), index))
}

proptest! {
    #[test]
    fn closest_index_is_nearest_with_low_tie_break(
        accepted in prop::collection::vec(any::<bool>(), 0..40),
        requested in prop_oneof![-50i64..90, any::<i64>()],
    ) {
        let result = find_closest(requested, accepted.len(), |i| accepted[i]);
        match brute_force(requested, &accepted) {
            Some(expected) => prop_assert_eq!(result, Ok(expected)),
            None => prop_assert!(result.is_err()),
        }
    }

    #[test]
    fn result_is_always_in_range_and_accepted(
        accepted in prop::collection::vec(any::<bool>(), 1..40),
        requested in -50i64..90,
    ) {
        if let Ok(index) = find_closest(requested, accepted.len(), |i| accepted[i]) {
            prop_assert!(index < accepted.len());
            prop_assert!(accepted[index]);
        }
    }
}

#[test]
fn test_documented_tie_example() {
    assert_eq!(find_closest(5, 10, |i| i == 4 || i == 6), Ok(4));
}
