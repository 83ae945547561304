//! Known-variant forms of `Maybe`.
//!
//! A general [`Maybe<T>`] tells the type system nothing about which variant
//! it holds. When code constructs a value whose variant is knowable at
//! compile time — a parser stage that always produces a value, a stub that
//! never does — these concrete single-variant types keep that knowledge in
//! the signature instead of widening back to the union:
//!
//! - [`Present<T>`] is a value known to be present. Its `map` always applies
//!   the function and returns another `Present`; its `or_else` returns
//!   `self` without ever invoking the fallback.
//! - [`Absent`] is known absence. Its `map`/`and_then` never invoke the
//!   function; its `or_else` always does, returning exactly the fallback's
//!   type.
//!
//! Runtime behavior is identical to the general operators — inspect, branch,
//! pass through — only the static types are narrower. Both widen into the
//! union via [`From`] or [`Present::widen`]/[`Absent::widen`].
//!
//! ```
//! use millrace::maybe::{self, Maybe, Present};
//!
//! // A lookup with a guaranteed default: the signature proves presence.
//! fn port(configured: Maybe<u16>) -> Present<u16> {
//!     Present(configured.unwrap_or(8080))
//! }
//!
//! // No absence branch to handle; and_then returns the callee's type as-is.
//! let doubled = port(maybe::none()).map(|p| p * 2);
//! assert_eq!(doubled, Present(16160));
//! ```

use super::Maybe;

/// A value statically known to be present.
///
/// The narrow twin of [`Maybe::Some`]: every operator's result type reflects
/// that the value is there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Present<T>(
    /// The contained value.
    pub T,
);

impl<T> Present<T> {
    /// Consume and return the contained value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Transform the value. The function is always invoked and the result
    /// is still known-present.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe::Present;
    ///
    /// assert_eq!(Present(4).map(|n| n * 2), Present(8));
    /// ```
    #[inline]
    pub fn map<N, F>(self, f: F) -> Present<N>
    where
        F: FnOnce(T) -> N,
    {
        Present(f(self.0))
    }

    /// Bind the value. The result type is exactly the function's return
    /// type — binding a known-present value to a function that itself
    /// returns `Present` stays narrow, with no detour through the union.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe::{self, Maybe, Present};
    ///
    /// let narrow: Present<i32> = Present(2).and_then(|n| Present(n + 1));
    /// assert_eq!(narrow, Present(3));
    ///
    /// let wide: Maybe<i32> = Present(2).and_then(|n| maybe::some(n + 1));
    /// assert_eq!(wide, maybe::some(3));
    /// ```
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        f(self.0)
    }

    /// The fallback is never invoked on a present value; returns `self`.
    #[inline]
    pub fn or_else<R, F>(self, _f: F) -> Present<T>
    where
        F: FnOnce() -> R,
    {
        self
    }

    /// Collapse with a handler pair. Only the some-handler can run, so the
    /// result type is exactly its return type.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe::Present;
    ///
    /// let n: i32 = Present(5).fold(|n| n + 1, || unreachable!());
    /// assert_eq!(n, 6);
    /// ```
    #[inline]
    pub fn fold<S, N, SF, NF>(self, some_fn: SF, _none_fn: NF) -> S
    where
        SF: FnOnce(T) -> S,
        NF: FnOnce() -> N,
    {
        some_fn(self.0)
    }

    /// Widen into the general union.
    #[inline]
    pub fn widen(self) -> Maybe<T> {
        Maybe::Some(self.0)
    }
}

/// Absence statically known at compile time.
///
/// The narrow twin of [`Maybe::None`]: `map` and `and_then` provably never
/// invoke their function, and `or_else` provably always does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Absent;

impl Absent {
    /// The function is never invoked on known absence; returns `Absent`.
    #[inline]
    pub fn map<T, N, F>(self, _f: F) -> Absent
    where
        F: FnOnce(T) -> N,
    {
        self
    }

    /// The function is never invoked on known absence; returns `Absent`.
    #[inline]
    pub fn and_then<T, R, F>(self, _f: F) -> Absent
    where
        F: FnOnce(T) -> R,
    {
        self
    }

    /// The fallback always runs; the result type is exactly its return
    /// type.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe::{Absent, Present};
    ///
    /// let recovered: Present<i32> = Absent.or_else(|| Present(9));
    /// assert_eq!(recovered, Present(9));
    /// ```
    #[inline]
    pub fn or_else<R, F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        f()
    }

    /// Collapse with a handler pair. Only the none-handler can run.
    #[inline]
    pub fn fold<T, S, N, SF, NF>(self, _some_fn: SF, none_fn: NF) -> N
    where
        SF: FnOnce(T) -> S,
        NF: FnOnce() -> N,
    {
        none_fn()
    }

    /// Widen into the general union.
    #[inline]
    pub fn widen<T>(self) -> Maybe<T> {
        Maybe::None
    }
}

impl<T> From<Present<T>> for Maybe<T> {
    fn from(present: Present<T>) -> Self {
        present.widen()
    }
}

impl<T> From<Absent> for Maybe<T> {
    fn from(absent: Absent) -> Self {
        absent.widen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{none, some};

    #[test]
    fn present_map_stays_present() {
        assert_eq!(Present(4).map(|n| n * 2), Present(8));
    }

    #[test]
    fn present_and_then_returns_callee_type() {
        let narrow = Present(2).and_then(|n| Present(n + 1));
        assert_eq!(narrow, Present(3));

        let wide = Present(2).and_then(|n| some(n + 1));
        assert_eq!(wide, some(3));
    }

    #[test]
    fn present_or_else_never_invokes_fallback() {
        let mut called = false;
        let result = Present(1).or_else(|| {
            called = true;
            Present(9)
        });
        assert_eq!(result, Present(1));
        assert!(!called);
    }

    #[test]
    fn present_fold_narrows_to_some_branch() {
        let n = Present(5).fold(|n| n + 1, || unreachable!());
        assert_eq!(n, 6);
    }

    #[test]
    fn absent_map_and_then_never_invoke() {
        let mut called = false;
        let after_map = Absent.map(|n: i32| {
            called = true;
            n * 2
        });
        let after_bind = after_map.and_then(|n: i32| {
            called = true;
            Present(n)
        });
        assert_eq!(after_bind, Absent);
        assert!(!called);
    }

    #[test]
    fn absent_or_else_always_invokes() {
        let recovered = Absent.or_else(|| Present(9));
        assert_eq!(recovered, Present(9));
    }

    #[test]
    fn absent_fold_narrows_to_none_branch() {
        let label = Absent.fold(|_: i32| "some", || "none");
        assert_eq!(label, "none");
    }

    #[test]
    fn widening_matches_factories() {
        assert_eq!(crate::Maybe::from(Present(3)), some(3));
        assert_eq!(crate::Maybe::<i32>::from(Absent), none());
        assert_eq!(Present("v").widen(), some("v"));
        assert_eq!(Absent.widen::<i32>(), none());
    }
}
