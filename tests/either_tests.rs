use options::data::{EitherError, Side, fluent};
use options::{Either, Optional, Unit};
use rstest::rstest;

mod common;

use common::CallCounter;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn with_first_and_with_second() {
    let first: Either<i32, String> = Either::with_first(1);
    let second: Either<i32, String> = Either::with_second("two".to_string());

    assert_eq!(first.side(), Side::First);
    assert_eq!(second.side(), Side::Second);
}

#[rstest]
fn swap_of_first_equals_second_with_reversed_types() {
    let swapped = Either::<i32, String>::with_first(1).swap();
    let expected = Either::<String, i32>::with_second(1);
    assert_eq!(swapped, expected);
}

#[rstest]
#[case(true, Either::with_first(1))]
#[case(false, Either::with_second("second"))]
fn from_condition(#[case] condition: bool, #[case] expected: Either<i32, &str>) {
    let counter = CallCounter::new();
    let either = Either::from_condition(
        condition,
        || {
            counter.record();
            1
        },
        || {
            counter.record();
            "second"
        },
    );
    assert_eq!(either, expected);
    assert_eq!(counter.count(), 1);
}

#[rstest]
fn null_payloads_are_rejected() {
    let rejected: Result<Either<i32, i32>, _> = Either::try_first_from_nullable(None::<i32>);
    let expected = EitherError::NullPayload { side: Side::First };
    assert_eq!(rejected, Err(expected));
    assert_eq!(
        rejected.unwrap_err().to_string(),
        "cannot construct an either whose first value is null"
    );

    let pointer = std::ptr::null::<u8>();
    let rejected: Result<Either<i32, *const u8>, _> = Either::try_second_from_nullable(pointer);
    let expected = EitherError::NullPayload { side: Side::Second };
    assert_eq!(rejected, Err(expected));
}

#[rstest]
fn non_null_payloads_are_accepted() {
    let accepted: Result<Either<&str, i32>, _> =
        Either::try_first_from_nullable(Optional::present("value"));
    assert_eq!(accepted, Ok(Either::with_first("value")));
}

#[rstest]
fn fluent_builders_agree_with_constructors() {
    assert_eq!(
        fluent::with_first(1).with_second_type::<String>(),
        Either::with_first(1)
    );
    assert_eq!(
        fluent::with_second("x").with_first_type::<i32>(),
        Either::with_second("x")
    );
    assert_eq!(
        fluent::with_first_type::<i32>().with_second('c'),
        Either::with_second('c')
    );
    assert_eq!(
        fluent::with_second_type::<char>().with_first(9),
        Either::with_first(9)
    );
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
#[case(Either::with_first(1), Either::with_first(1), true)]
#[case(Either::with_first(1), Either::with_first(2), false)]
#[case(Either::with_first(1), Either::with_second(1), false)]
#[case(Either::with_second(1), Either::with_second(1), true)]
fn equality_needs_same_side_and_payload(
    #[case] left: Either<i32, i32>,
    #[case] right: Either<i32, i32>,
    #[case] expected: bool,
) {
    assert_eq!(left == right, expected);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_or_throw_on_inactive_side() {
    let first: Either<i32, String> = Either::with_first(1);
    let error = first.get_second_or_throw().unwrap_err();

    let expected = EitherError::MissingSide {
        requested: Side::Second,
    };
    assert_eq!(error, expected);
    assert_eq!(
        error.to_string(),
        "tried to get the second value out of an either that does not have one"
    );
}

#[rstest]
fn to_pair_calls_only_the_missing_side_factory() {
    let counter = CallCounter::new();
    let first: Either<i32, &str> = Either::with_first(1);

    let pair = first.to_pair(
        || {
            counter.record();
            0
        },
        || {
            counter.record();
            "filled"
        },
    );

    assert_eq!(pair, (1, "filled"));
    assert_eq!(counter.count(), 1);
}

#[rstest]
fn one_sided_extraction() {
    let second: Either<i32, String> = Either::with_second("seven".to_string());
    assert_eq!(second.clone().first_or_handle(|text| text.len() as i32), 5);
    assert_eq!(second.clone().get_first_or(-1), -1);
    assert_eq!(second.second_or_handle(|value| value.to_string()), "seven");
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_and_bind_leave_second_untouched() {
    let counter = CallCounter::new();
    let second: Either<i32, &str> = Either::with_second("error");

    let mapped = second.map(|x| {
        counter.record();
        x + 1
    });
    let bound = second.bind(|x| {
        counter.record();
        Either::with_first(x + 1)
    });

    assert_eq!(mapped, Either::with_second("error"));
    assert_eq!(bound, Either::with_second("error"));
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn bind_with_combines_original_and_intermediate() {
    let first: Either<i32, &str> = Either::with_first(3);
    let result = first.bind_with(|x| Either::with_first(x * 2), |x, y| (x, y));
    assert_eq!(result, Either::with_first((3, 6)));
}

#[rstest]
fn side_optionals() {
    let second: Either<i32, &str> = Either::with_second("b");
    assert_eq!(second.first_optional(), Optional::absent());
    assert_eq!(second.second_optional(), Optional::present("b"));
}

#[rstest]
fn act_returns_unit() {
    let counter = CallCounter::new();
    let first: Either<i32, &str> = Either::with_first(1);

    let result = first.act(
        |_| {
            counter.record();
        },
        |_| unreachable!(),
    );

    assert_eq!(result, Unit);
    assert_eq!(counter.count(), 1);
}

// =============================================================================
// Result Interop
// =============================================================================

#[rstest]
fn ok_maps_to_first_and_err_to_second() {
    let ok: Either<i32, &str> = Ok(1).into();
    let err: Either<i32, &str> = Err("bad").into();

    assert!(ok.is_first());
    assert!(err.is_second());
    assert_eq!(Result::from(err), Err("bad"));
}
