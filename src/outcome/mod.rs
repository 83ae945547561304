//! Fallible values with a typed failure payload: the `Outcome` type
//!
//! `Outcome<T, E>` represents a computation that either produced a value
//! (`Ok`) or failed with diagnostic data (`Error`). The failure payload is
//! plain data, not a thrown fault — it propagates by value, short-circuiting
//! `map`/`and_then` chains until a [`fold`](Outcome::fold) or
//! [`or_else`](Outcome::or_else) handles it. No operator can silently drop
//! the failure or upgrade it to a success.
//!
//! The type is named `Outcome` rather than `Result` so it composes with
//! `std::result::Result` instead of shadowing it; conversions in both
//! directions are provided so `?` stays available at crate boundaries.
//!
//! As with [`Maybe`](crate::maybe), every operator has a direct method form
//! and a curried form in [`operators`] for [`pipe!`](crate::pipe) chains.
//!
//! # Examples
//!
//! ```
//! use millrace::outcome::{self, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum ParseError {
//!     Empty,
//!     NotANumber,
//! }
//!
//! fn parse(input: &str) -> Outcome<i32, ParseError> {
//!     if input.is_empty() {
//!         return outcome::error(ParseError::Empty);
//!     }
//!     match input.parse() {
//!         Ok(n) => outcome::ok(n),
//!         Err(_) => outcome::error(ParseError::NotANumber),
//!     }
//! }
//!
//! let n = parse("41").map(|n| n + 1);
//! assert_eq!(n, outcome::ok(42));
//!
//! let failed = parse("forty-two").map(|n| n + 1);
//! assert_eq!(failed, outcome::error(ParseError::NotANumber));
//! ```

pub mod known;
pub mod operators;

pub use known::{Failed, Succeeded};

/// A value that is either a success (`Ok`) or a typed failure (`Error`).
///
/// Structurally identical to [`Maybe`](crate::Maybe) with one addition: the
/// negative variant carries a payload of its own type parameter `E`, and
/// [`map_error`](Outcome::map_error) transforms that channel the way
/// [`map`](Outcome::map) transforms the success channel.
///
/// `Outcome` is immutable once constructed and closed: exactly two
/// variants, no operator mutates an instance.
///
/// # Example
///
/// ```
/// use millrace::outcome::{self, Outcome};
///
/// let ok: Outcome<i32, String> = outcome::ok(1);
/// let failed: Outcome<i32, String> = outcome::error("boom".to_string());
///
/// assert!(ok.is_ok());
/// assert!(failed.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A successful value
    Ok(T),
    /// A failure with diagnostic data
    Error(E),
}

/// Create a successful `Outcome`. Total: never fails.
///
/// # Example
///
/// ```
/// use millrace::outcome::{self, Outcome};
///
/// let o: Outcome<i32, String> = outcome::ok(42);
/// assert!(o.is_ok());
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Create a failed `Outcome` carrying `value` as its payload. Total.
///
/// # Example
///
/// ```
/// use millrace::outcome::{self, Outcome};
///
/// let o: Outcome<i32, &str> = outcome::error("bad input");
/// assert!(o.is_error());
/// ```
#[inline]
pub fn error<T, E>(value: E) -> Outcome<T, E> {
    Outcome::Error(value)
}

/// Returns `true` if `outcome` is `Ok`.
///
/// The free-function twin of [`Outcome::is_ok`], directly usable in a
/// [`pipe!`](crate::pipe) chain.
#[inline]
pub fn is_ok<T, E>(outcome: Outcome<T, E>) -> bool {
    outcome.is_ok()
}

/// Returns `true` if `outcome` is `Error`.
///
/// The free-function twin of [`Outcome::is_error`].
#[inline]
pub fn is_error<T, E>(outcome: Outcome<T, E>) -> bool {
    outcome.is_error()
}

impl<T, E> Outcome<T, E> {
    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// assert!(outcome::ok::<_, String>(42).is_ok());
    /// ```
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    ///
    /// `is_ok` and `is_error` are mutually exclusive: exactly one of them
    /// holds for any `Outcome`.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// assert!(outcome::error::<i32, _>("bad").is_error());
    /// ```
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    // ========== Transformations ==========

    /// Transform the success value, passing `Error` through unchanged.
    ///
    /// `f` is only ever invoked on a success.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// assert_eq!(outcome::ok::<_, String>(4).map(|n| n * 2), outcome::ok(8));
    /// assert_eq!(outcome::error::<i32, _>("bad").map(|n| n * 2), outcome::error("bad"));
    /// ```
    #[inline]
    pub fn map<N, F>(self, f: F) -> Outcome<N, E>
    where
        F: FnOnce(T) -> N,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Transform the failure payload, passing `Ok` through unchanged.
    ///
    /// The mirror image of [`map`](Outcome::map) on the error channel.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// assert_eq!(
    ///     outcome::error::<i32, _>("bad").map_error(|s: &str| s.len()),
    ///     outcome::error(3)
    /// );
    /// assert_eq!(
    ///     outcome::ok::<_, &str>(1).map_error(|s: &str| s.len()),
    ///     outcome::ok(1)
    /// );
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(err) => Outcome::Error(f(err)),
        }
    }

    /// Chain a computation that may itself fail (monadic bind).
    ///
    /// If this is `Ok(v)`, returns `f(v)`. If this is `Error`, returns it
    /// unchanged and `f` is never called. The chained computation must
    /// share this outcome's error type; align differing error types with
    /// [`map_error`](Outcome::map_error) first.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome::{self, Outcome};
    ///
    /// fn positive(n: i32) -> Outcome<i32, &'static str> {
    ///     if n > 0 {
    ///         outcome::ok(n + 1)
    ///     } else {
    ///         outcome::error("neg")
    ///     }
    /// }
    ///
    /// assert_eq!(outcome::ok(3).and_then(positive), outcome::ok(4));
    /// assert_eq!(outcome::ok(-3).and_then(positive), outcome::error("neg"));
    /// assert_eq!(outcome::error("bad").and_then(positive), outcome::error("bad"));
    /// ```
    #[inline]
    pub fn and_then<N, F>(self, f: F) -> Outcome<N, E>
    where
        F: FnOnce(T) -> Outcome<N, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Supply a fallback outcome when this is a failure.
    ///
    /// If this is `Ok`, returns it unchanged and `f` is never called. If
    /// this is `Error(e)`, returns `f(e)` — the fallback receives the
    /// failure payload and may produce a new error type.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// let recovered = outcome::error::<i32, _>("bad").or_else(|_| outcome::ok::<_, ()>(0));
    /// assert_eq!(recovered, outcome::ok(0));
    ///
    /// let kept = outcome::ok::<_, &str>(1).or_else(|_| outcome::ok::<_, ()>(0));
    /// assert_eq!(kept, outcome::ok(1));
    /// ```
    #[inline]
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(err) => f(err),
        }
    }

    /// Collapse both variants with an exhaustive pair of handlers.
    ///
    /// Exactly one handler is invoked per call: `ok_fn` on success,
    /// `error_fn` on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// let n = outcome::ok::<_, String>(5).fold(|v| v + 1, |_| 0);
    /// assert_eq!(n, 6);
    ///
    /// let n = outcome::error::<i32, _>("bad").fold(|v| v + 1, |_| 0);
    /// assert_eq!(n, 0);
    /// ```
    #[inline]
    pub fn fold<U, K, R>(self, ok_fn: K, error_fn: R) -> U
    where
        K: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Error(err) => error_fn(err),
        }
    }

    // ========== Accessors ==========

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Convert to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Return the success value or a default.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// assert_eq!(outcome::ok::<_, &str>(3).unwrap_or(0), 3);
    /// assert_eq!(outcome::error::<i32, _>("bad").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(_) => default,
        }
    }

    /// Return the success value or compute one from the failure payload.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(err) => f(err),
        }
    }

    // ========== Conversions ==========

    /// Convert to a standard `Result` (`Ok` becomes `Ok`, `Error` becomes
    /// `Err`), re-enabling `?` at crate boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::outcome;
    ///
    /// assert_eq!(outcome::ok::<_, String>(42).into_result(), Ok(42));
    /// assert_eq!(outcome::error::<i32, _>("bad").into_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(err) => Err(err),
        }
    }

    /// Create from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Error(err),
        }
    }

    // ========== Iterator Support ==========

    /// Returns an iterator yielding the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Error(_) => None,
        }
        .into_iter()
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Error(_) => None,
        }
        .into_iter()
    }
}
