//! Curried forms of the `Maybe` operators.
//!
//! Each function here takes only the transformer(s) and returns a unary
//! closure over the container, so a reusable transformation can be named
//! once and threaded through [`pipe!`](crate::pipe):
//!
//! ```
//! use millrace::maybe::{self, operators};
//! use millrace::pipe;
//!
//! let increment = operators::map(|n: i32| n + 1);
//! assert_eq!(pipe!(maybe::some(1), increment), maybe::some(2));
//! ```
//!
//! The direct (data-first) forms live on [`Maybe`] as methods; each curried
//! form is a thin closure over its direct twin, so the two can never drift
//! apart behaviorally.

use super::Maybe;

/// Curried [`Maybe::map`]: returns a closure transforming the present value.
///
/// # Example
///
/// ```
/// use millrace::maybe::{self, operators};
/// use millrace::pipe;
///
/// let result = pipe!(maybe::some(4), operators::map(|n: i32| n * 2));
/// assert_eq!(result, maybe::some(8));
/// ```
#[inline]
pub fn map<T, N, F>(f: F) -> impl FnOnce(Maybe<T>) -> Maybe<N>
where
    F: FnOnce(T) -> N,
{
    move |maybe| maybe.map(f)
}

/// Curried [`Maybe::and_then`]: returns a closure binding the present value.
///
/// # Example
///
/// ```
/// use millrace::maybe::{self, operators};
/// use millrace::pipe;
///
/// let result = pipe!(
///     maybe::some(2),
///     operators::and_then(|n: i32| if n > 1 { maybe::some(n) } else { maybe::none() }),
/// );
/// assert_eq!(result, maybe::some(2));
/// ```
#[inline]
pub fn and_then<T, N, F>(f: F) -> impl FnOnce(Maybe<T>) -> Maybe<N>
where
    F: FnOnce(T) -> Maybe<N>,
{
    move |maybe| maybe.and_then(f)
}

/// Curried [`Maybe::or_else`]: returns a closure supplying a fallback on
/// absence.
///
/// # Example
///
/// ```
/// use millrace::maybe::{self, operators};
/// use millrace::pipe;
///
/// let result = pipe!(maybe::none(), operators::or_else(|| maybe::some(9)));
/// assert_eq!(result, maybe::some(9));
/// ```
#[inline]
pub fn or_else<T, F>(f: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce() -> Maybe<T>,
{
    move |maybe| maybe.or_else(f)
}

/// Curried [`Maybe::fold`]: returns a closure collapsing both variants.
///
/// # Example
///
/// ```
/// use millrace::maybe::{self, operators};
/// use millrace::pipe;
///
/// let result = pipe!(
///     maybe::some(5),
///     operators::fold(|n: i32| n + 1, || 0),
/// );
/// assert_eq!(result, 6);
/// ```
#[inline]
pub fn fold<T, U, S, N>(some_fn: S, none_fn: N) -> impl FnOnce(Maybe<T>) -> U
where
    S: FnOnce(T) -> U,
    N: FnOnce() -> U,
{
    move |maybe| maybe.fold(some_fn, none_fn)
}
