//! Curried forms of the `Outcome` operators.
//!
//! The same pattern as [`maybe::operators`](crate::maybe::operators): each
//! function takes only the transformer(s) and returns a unary closure over
//! the container for use with [`pipe!`](crate::pipe). Every curried form
//! delegates to its direct method twin.
//!
//! ```
//! use millrace::outcome::{self, operators};
//! use millrace::pipe;
//!
//! let result = pipe!(
//!     outcome::ok::<_, String>(3),
//!     operators::and_then(|n| if n > 0 { outcome::ok(n + 1) } else { outcome::error("neg".to_string()) }),
//!     operators::map(|n: i32| n * 10),
//! );
//! assert_eq!(result, outcome::ok(40));
//! ```

use super::Outcome;

/// Curried [`Outcome::map`]: returns a closure transforming the success
/// value.
#[inline]
pub fn map<T, E, N, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<N, E>
where
    F: FnOnce(T) -> N,
{
    move |outcome| outcome.map(f)
}

/// Curried [`Outcome::map_error`]: returns a closure transforming the
/// failure payload.
///
/// # Example
///
/// ```
/// use millrace::outcome::{self, operators};
/// use millrace::pipe;
///
/// let result = pipe!(
///     outcome::error::<i32, _>("bad"),
///     operators::map_error(|s: &str| s.len()),
/// );
/// assert_eq!(result, outcome::error(3));
/// ```
#[inline]
pub fn map_error<T, E, F2, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, F2>
where
    F: FnOnce(E) -> F2,
{
    move |outcome| outcome.map_error(f)
}

/// Curried [`Outcome::and_then`]: returns a closure binding the success
/// value.
#[inline]
pub fn and_then<T, E, N, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<N, E>
where
    F: FnOnce(T) -> Outcome<N, E>,
{
    move |outcome| outcome.and_then(f)
}

/// Curried [`Outcome::or_else`]: returns a closure supplying a fallback on
/// failure. The fallback receives the failure payload.
#[inline]
pub fn or_else<T, E, F2, F>(f: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, F2>
where
    F: FnOnce(E) -> Outcome<T, F2>,
{
    move |outcome| outcome.or_else(f)
}

/// Curried [`Outcome::fold`]: returns a closure collapsing both variants.
#[inline]
pub fn fold<T, E, U, K, R>(ok_fn: K, error_fn: R) -> impl FnOnce(Outcome<T, E>) -> U
where
    K: FnOnce(T) -> U,
    R: FnOnce(E) -> U,
{
    move |outcome| outcome.fold(ok_fn, error_fn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{error, ok};
    use crate::pipe;

    #[test]
    fn curried_map_matches_direct_form() {
        let curried = map(|n: i32| n * 2);
        assert_eq!(curried(ok::<_, String>(4)), ok(8));
    }

    #[test]
    fn curried_map_error_passes_ok_through() {
        let curried = map_error(|s: String| s.len());
        assert_eq!(curried(ok(1)), ok(1));
    }

    #[test]
    fn curried_and_then_short_circuits() {
        let mut called = false;
        let curried = and_then(|n: i32| {
            called = true;
            ok(n + 1)
        });
        assert_eq!(curried(error("bad")), error("bad"));
        assert!(!called);
    }

    #[test]
    fn curried_or_else_recovers_with_payload() {
        let curried = or_else(|code: i32| ok::<_, ()>(code * 10));
        assert_eq!(curried(error(7)), ok(70));
    }

    #[test]
    fn curried_fold_selects_one_branch() {
        let on_ok = fold(|v: i32| v + 1, |_: String| 0);
        assert_eq!(on_ok(ok(5)), 6);

        let on_error = fold(|v: i32| v + 1, |_: String| 0);
        assert_eq!(on_error(error("bad".to_string())), 0);
    }

    #[test]
    fn operators_compose_in_pipelines() {
        let result = pipe!(
            ok::<_, &str>(3),
            and_then(|n| if n > 0 { ok(n + 1) } else { error("neg") }),
            map(|n: i32| n * 10),
            map_error(|s: &str| s.len()),
            fold(|n| n, |_| -1),
        );
        assert_eq!(result, 40);
    }
}
