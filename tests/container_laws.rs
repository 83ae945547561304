//! Property tests for the operator laws, exercised through the public API
//! exactly as a consumer would call it.

use millrace::maybe::{self, operators as maybe_ops, Maybe};
use millrace::outcome::{self, operators as outcome_ops, Outcome};
use millrace::pipe;
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(maybe::some), Just(Maybe::None)]
}

fn any_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(outcome::ok),
        ".{0,8}".prop_map(outcome::error),
    ]
}

proptest! {
    #[test]
    fn curried_and_direct_forms_agree_for_maybe(m in any_maybe()) {
        let f = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(pipe!(m, maybe_ops::map(f)), m.map(f));
        prop_assert_eq!(
            pipe!(m, maybe_ops::and_then(|n| maybe::some(f(n)))),
            m.and_then(|n| maybe::some(f(n)))
        );
        prop_assert_eq!(
            pipe!(m, maybe_ops::or_else(|| maybe::some(0))),
            m.or_else(|| maybe::some(0))
        );
        prop_assert_eq!(
            pipe!(m, maybe_ops::fold(|n| n, || -1)),
            m.fold(|n| n, || -1)
        );
    }

    #[test]
    fn curried_and_direct_forms_agree_for_outcome(o in any_outcome()) {
        let f = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(pipe!(o.clone(), outcome_ops::map(f)), o.clone().map(f));
        prop_assert_eq!(
            pipe!(o.clone(), outcome_ops::map_error(|e: String| e.len())),
            o.clone().map_error(|e| e.len())
        );
        prop_assert_eq!(
            pipe!(o.clone(), outcome_ops::and_then(|n| outcome::ok(f(n)))),
            o.clone().and_then(|n| outcome::ok(f(n)))
        );
        prop_assert_eq!(
            pipe!(o.clone(), outcome_ops::or_else(|_| outcome::ok::<_, String>(0))),
            o.clone().or_else(|_| outcome::ok(0))
        );
        prop_assert_eq!(
            pipe!(o.clone(), outcome_ops::fold(|n| n, |_| -1)),
            o.fold(|n| n, |_| -1)
        );
    }

    #[test]
    fn pipe_matches_nested_application(x: i32) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(pipe!(x, f, g), g(f(x)));
        prop_assert_eq!(pipe!(pipe!(x, f), g), pipe!(x, f, g));
    }

    #[test]
    fn chains_short_circuit_without_reordering(m in any_maybe()) {
        // A pipeline over None must produce None without running any stage.
        let stages_run = std::cell::Cell::new(0);
        let result = pipe!(
            m,
            maybe_ops::map(|n: i32| {
                stages_run.set(stages_run.get() + 1);
                n
            }),
            maybe_ops::and_then(|n| {
                stages_run.set(stages_run.get() + 1);
                maybe::some(n)
            }),
        );

        prop_assert_eq!(result, m);
        let expected_runs = if m.is_some() { 2 } else { 0 };
        prop_assert_eq!(stages_run.get(), expected_runs);
    }

    #[test]
    fn error_payload_is_never_lost_or_upgraded(o in any_outcome()) {
        let chained = o
            .clone()
            .and_then(|n| outcome::ok::<_, String>(n))
            .map(|n| n)
            .map_error(|e| e);

        prop_assert_eq!(chained, o);
    }
}
