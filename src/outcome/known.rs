//! Known-variant forms of `Outcome`.
//!
//! The counterpart of [`maybe::known`](crate::maybe::known) for the
//! fallible type: [`Succeeded<T>`] is a computation statically known to
//! have succeeded, [`Failed<E>`] one statically known to have failed.
//! Operators on them return exactly what is provable about the result —
//! composing an operation that always succeeds stays `Succeeded` instead of
//! widening back to the general union.
//!
//! Runtime behavior is identical to the general operators; only the static
//! types are narrower.

use super::Outcome;

/// A computation statically known to have succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Succeeded<T>(
    /// The success value.
    pub T,
);

impl<T> Succeeded<T> {
    /// Consume and return the success value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Transform the value. Always applied; the result is still
    /// known-successful.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome::Succeeded;
    ///
    /// assert_eq!(Succeeded(4).map(|n| n * 2), Succeeded(8));
    /// ```
    #[inline]
    pub fn map<N, F>(self, f: F) -> Succeeded<N>
    where
        F: FnOnce(T) -> N,
    {
        Succeeded(f(self.0))
    }

    /// There is no failure payload to transform; returns `self`.
    #[inline]
    pub fn map_error<E, F2, F>(self, _f: F) -> Succeeded<T>
    where
        F: FnOnce(E) -> F2,
    {
        self
    }

    /// Bind the value. The result type is exactly the function's return
    /// type, so a chain of known-successful steps never widens.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome::{self, Outcome, Succeeded};
    ///
    /// let narrow: Succeeded<i32> = Succeeded(2).and_then(|n| Succeeded(n + 1));
    /// assert_eq!(narrow, Succeeded(3));
    ///
    /// let wide: Outcome<i32, String> = Succeeded(2).and_then(|n| outcome::ok(n + 1));
    /// assert_eq!(wide, outcome::ok(3));
    /// ```
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        f(self.0)
    }

    /// The fallback is never invoked on a success; returns `self`.
    #[inline]
    pub fn or_else<E, R, F>(self, _f: F) -> Succeeded<T>
    where
        F: FnOnce(E) -> R,
    {
        self
    }

    /// Collapse with a handler pair. Only the ok-handler can run, so the
    /// result type is exactly its return type.
    #[inline]
    pub fn fold<E, K, R, KF, RF>(self, ok_fn: KF, _error_fn: RF) -> K
    where
        KF: FnOnce(T) -> K,
        RF: FnOnce(E) -> R,
    {
        ok_fn(self.0)
    }

    /// Widen into the general union.
    #[inline]
    pub fn widen<E>(self) -> Outcome<T, E> {
        Outcome::Ok(self.0)
    }
}

/// A computation statically known to have failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Failed<E>(
    /// The failure payload.
    pub E,
);

impl<E> Failed<E> {
    /// Consume and return the failure payload.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }

    /// There is no success value to transform; returns `self`.
    #[inline]
    pub fn map<T, N, F>(self, _f: F) -> Failed<E>
    where
        F: FnOnce(T) -> N,
    {
        self
    }

    /// Transform the failure payload. Always applied.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome::Failed;
    ///
    /// assert_eq!(Failed("bad").map_error(|s: &str| s.len()), Failed(3));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, f: F) -> Failed<F2>
    where
        F: FnOnce(E) -> F2,
    {
        Failed(f(self.0))
    }

    /// The function is never invoked on a known failure; returns `self`.
    #[inline]
    pub fn and_then<T, R, F>(self, _f: F) -> Failed<E>
    where
        F: FnOnce(T) -> R,
    {
        self
    }

    /// The fallback always runs with the failure payload; the result type
    /// is exactly its return type.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome::{Failed, Succeeded};
    ///
    /// let recovered: Succeeded<i32> = Failed("bad").or_else(|_| Succeeded(0));
    /// assert_eq!(recovered, Succeeded(0));
    /// ```
    #[inline]
    pub fn or_else<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
    {
        f(self.0)
    }

    /// Collapse with a handler pair. Only the error-handler can run.
    #[inline]
    pub fn fold<T, K, R, KF, RF>(self, _ok_fn: KF, error_fn: RF) -> R
    where
        KF: FnOnce(T) -> K,
        RF: FnOnce(E) -> R,
    {
        error_fn(self.0)
    }

    /// Widen into the general union.
    #[inline]
    pub fn widen<T>(self) -> Outcome<T, E> {
        Outcome::Error(self.0)
    }
}

impl<T, E> From<Succeeded<T>> for Outcome<T, E> {
    fn from(succeeded: Succeeded<T>) -> Self {
        succeeded.widen()
    }
}

impl<T, E> From<Failed<E>> for Outcome<T, E> {
    fn from(failed: Failed<E>) -> Self {
        failed.widen()
    }
}
