//! Property-based tests for the laws of `Either`.
//!
//! - **Swap involution**: `either.swap().swap() == either`
//! - **Single side**: exactly one of `is_first` / `is_second` holds
//! - **Identity Law**: `either.map(|x| x) == either`
//! - **Result round trip**: `Either::from(result)` converts back to `result`

use options::Either;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::with_first),
        any::<String>().prop_map(Either::with_second),
    ]
}

proptest! {
    #[test]
    fn prop_swap_involution(either in either_strategy()) {
        prop_assert_eq!(either.clone().swap().swap(), either);
    }

    #[test]
    fn prop_swap_exchanges_sides(either in either_strategy()) {
        let swapped = either.clone().swap();
        prop_assert_eq!(swapped.is_first(), either.is_second());
        prop_assert_eq!(swapped.side(), either.side().opposite());
    }

    #[test]
    fn prop_exactly_one_side(either in either_strategy()) {
        prop_assert!(either.is_first() ^ either.is_second());
        prop_assert_eq!(
            either.clone().first_optional().is_present(),
            !either.second_optional().is_present()
        );
    }

    #[test]
    fn prop_identity_law(either in either_strategy()) {
        prop_assert_eq!(either.clone().map(|x| x), either);
    }

    #[test]
    fn prop_composition_law(either in either_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = either.clone().map(function1).map(function2);
        let right = either.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_round_trip(result in any::<Result<i32, String>>()) {
        let either = Either::from(result.clone());
        prop_assert_eq!(Result::from(either), result);
    }

    #[test]
    fn prop_handle_matches_side(either in either_strategy()) {
        let handled = either.clone().handle(|_| "first", |_| "second");
        prop_assert_eq!(handled, either.side().to_string());
    }
}
