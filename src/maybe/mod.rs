//! Optional values without null: the `Maybe` type and its operators
//!
//! `Maybe<T>` represents the declared, expected absence of a value. Unlike a
//! null reference, absence is a first-class variant that every consumer must
//! handle, and unlike an exception it carries no control-flow machinery —
//! `None` simply propagates by value through a chain of operators until a
//! [`fold`](Maybe::fold) or [`or_else`](Maybe::or_else) handles it.
//!
//! Every operator exists in two calling forms:
//!
//! - **direct**: a method taking the container first — `m.map(f)`
//! - **curried**: a free function in [`operators`] taking only the
//!   transformer and returning a unary closure — `operators::map(f)` —
//!   for use with [`pipe!`](crate::pipe)
//!
//! # Examples
//!
//! ```
//! use millrace::maybe::{self, Maybe};
//!
//! fn lookup(key: &str) -> Maybe<i32> {
//!     if key == "answer" {
//!         maybe::some(42)
//!     } else {
//!         maybe::none()
//!     }
//! }
//!
//! let doubled = lookup("answer").map(|n| n * 2);
//! assert_eq!(doubled, maybe::some(84));
//!
//! let missing = lookup("question").map(|n| n * 2);
//! assert_eq!(missing, maybe::none());
//! ```
//!
//! ## Pipelines
//!
//! ```
//! use millrace::maybe::{self, operators};
//! use millrace::pipe;
//!
//! let result = pipe!(
//!     maybe::some(2),
//!     operators::map(|n: i32| n + 1),
//!     operators::and_then(|n| if n > 2 { maybe::some(n) } else { maybe::none() }),
//! );
//! assert_eq!(result, maybe::some(3));
//! ```

pub mod known;
pub mod operators;

pub use known::{Absent, Present};

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Maybe` is a closed sum type: exactly two variants, immutable once
/// constructed. No operator mutates an existing instance — each one returns
/// a new instance or passes the input through unchanged.
///
/// `Maybe` deliberately mirrors `Option`, and converts to and from it via
/// [`From`], but keeps its own operator vocabulary so chains read the same
/// over `Maybe` and [`Outcome`](crate::Outcome).
///
/// # Example
///
/// ```
/// use millrace::maybe::{self, Maybe};
///
/// let present = maybe::some(1);
/// let absent: Maybe<i32> = maybe::none();
///
/// assert!(present.is_some());
/// assert!(absent.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value
    Some(T),
    /// The absence of a value
    None,
}

/// Create a `Maybe` holding `value`. Total: never fails.
///
/// # Example
///
/// ```
/// use millrace::maybe;
///
/// assert!(maybe::some("hello").is_some());
/// ```
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Create an absent `Maybe`. Total: never fails.
///
/// # Example
///
/// ```
/// use millrace::maybe::{self, Maybe};
///
/// let m: Maybe<i32> = maybe::none();
/// assert!(m.is_none());
/// ```
#[inline]
pub fn none<T>() -> Maybe<T> {
    Maybe::None
}

/// Returns `true` if `maybe` is `Some`.
///
/// The free-function twin of [`Maybe::is_some`]; being unary it drops
/// straight into a [`pipe!`](crate::pipe) chain.
#[inline]
pub fn is_some<T>(maybe: Maybe<T>) -> bool {
    maybe.is_some()
}

/// Returns `true` if `maybe` is `None`.
///
/// The free-function twin of [`Maybe::is_none`].
#[inline]
pub fn is_none<T>(maybe: Maybe<T>) -> bool {
    maybe.is_none()
}

impl<T> Maybe<T> {
    // ========== Predicates ==========

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert!(maybe::some(42).is_some());
    /// assert!(!maybe::none::<i32>().is_some());
    /// ```
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// `is_some` and `is_none` are mutually exclusive: exactly one of them
    /// holds for any `Maybe`.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert!(maybe::none::<i32>().is_none());
    /// assert!(!maybe::some(42).is_none());
    /// ```
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    // ========== Transformations ==========

    /// Transform the present value, passing `None` through unchanged.
    ///
    /// `f` is only ever invoked on a present value.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert_eq!(maybe::some(4).map(|n| n * 2), maybe::some(8));
    /// assert_eq!(maybe::none::<i32>().map(|n| n * 2), maybe::none());
    /// ```
    #[inline]
    pub fn map<N, F>(self, f: F) -> Maybe<N>
    where
        F: FnOnce(T) -> N,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself produce absence (monadic bind).
    ///
    /// If this is `Some(v)`, returns `f(v)`. If this is `None`, returns it
    /// unchanged and `f` is never called.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe::{self, Maybe};
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 {
    ///         maybe::some(n / 2)
    ///     } else {
    ///         maybe::none()
    ///     }
    /// }
    ///
    /// assert_eq!(maybe::some(8).and_then(half), maybe::some(4));
    /// assert_eq!(maybe::some(3).and_then(half), maybe::none());
    /// assert_eq!(maybe::none().and_then(half), maybe::none());
    /// ```
    #[inline]
    pub fn and_then<N, F>(self, f: F) -> Maybe<N>
    where
        F: FnOnce(T) -> Maybe<N>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Supply a fallback when the value is absent.
    ///
    /// If this is `Some`, returns it unchanged and `f` is never called. If
    /// this is `None`, returns `f()`.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert_eq!(maybe::some(1).or_else(|| maybe::some(9)), maybe::some(1));
    /// assert_eq!(maybe::none().or_else(|| maybe::some(9)), maybe::some(9));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => f(),
        }
    }

    /// Collapse both variants with an exhaustive pair of handlers.
    ///
    /// Exactly one handler is invoked per call: `some_fn` on a present
    /// value, `none_fn` on absence.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// let described = maybe::some(5).fold(|n| format!("got {}", n), || "nothing".to_string());
    /// assert_eq!(described, "got 5");
    ///
    /// let described = maybe::none::<i32>().fold(|n| format!("got {}", n), || "nothing".to_string());
    /// assert_eq!(described, "nothing");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, some_fn: S, none_fn: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Maybe::Some(value) => some_fn(value),
            Maybe::None => none_fn(),
        }
    }

    // ========== Accessors ==========

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Convert to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Return the present value or a default.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert_eq!(maybe::some(3).unwrap_or(0), 3);
    /// assert_eq!(maybe::none().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Return the present value or compute a default.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => f(),
        }
    }

    /// Extract the present value, panicking if absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert_eq!(maybe::some(7).unwrap(), 7);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Extract the present value with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the value is `None`.
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("{}", msg),
        }
    }

    // ========== Conversions ==========

    /// Convert to a standard `Option`.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert_eq!(maybe::some(1).into_option(), Some(1));
    /// assert_eq!(maybe::none::<i32>().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// Create from a standard `Option`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }

    // ========== Iterator Support ==========

    /// Returns an iterator yielding the present value, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe;
    ///
    /// assert_eq!(maybe::some(2).iter().collect::<Vec<_>>(), vec![&2]);
    /// assert!(maybe::none::<i32>().iter().next().is_none());
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flatten a nested `Maybe`.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::maybe::{self, Maybe};
    ///
    /// let nested: Maybe<Maybe<i32>> = maybe::some(maybe::some(3));
    /// assert_eq!(nested.flatten(), maybe::some(3));
    ///
    /// let inner_none: Maybe<Maybe<i32>> = maybe::some(maybe::none());
    /// assert_eq!(inner_none.flatten(), maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Some(inner) => inner,
            Maybe::None => Maybe::None,
        }
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::None`.
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(some(42).is_some());
        assert!(none::<i32>().is_none());
    }

    #[test]
    fn test_predicates_mutually_exclusive() {
        let present = some(42);
        let absent = none::<i32>();

        assert!(present.is_some());
        assert!(!present.is_none());
        assert!(absent.is_none());
        assert!(!absent.is_some());
    }

    #[test]
    fn test_free_predicates() {
        assert!(is_some(some(1)));
        assert!(!is_some(none::<i32>()));
        assert!(is_none(none::<i32>()));
        assert!(!is_none(some(1)));
    }

    #[test]
    fn test_map_on_some() {
        assert_eq!(some(4).map(|n| n * 2), some(8));
    }

    #[test]
    fn test_map_on_none() {
        assert_eq!(none::<i32>().map(|n| n * 2), none());
    }

    #[test]
    fn test_map_short_circuits() {
        let mut called = false;
        let result = none::<i32>().map(|n| {
            called = true;
            n * 2
        });
        assert_eq!(result, none());
        assert!(!called);
    }

    #[test]
    fn test_and_then_on_some() {
        let result = some(8).and_then(|n| if n % 2 == 0 { some(n / 2) } else { none() });
        assert_eq!(result, some(4));
    }

    #[test]
    fn test_and_then_producing_none() {
        let result = some(3).and_then(|n| if n % 2 == 0 { some(n / 2) } else { none() });
        assert_eq!(result, none());
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let result = none::<i32>().and_then(|n| {
            called = true;
            some(n + 1)
        });
        assert_eq!(result, none());
        assert!(!called);
    }

    #[test]
    fn test_or_else_on_some_never_invokes() {
        let mut called = false;
        let result = some(1).or_else(|| {
            called = true;
            some(9)
        });
        assert_eq!(result, some(1));
        assert!(!called);
    }

    #[test]
    fn test_or_else_on_none() {
        assert_eq!(none().or_else(|| some(9)), some(9));
        assert_eq!(none::<i32>().or_else(none), none());
    }

    #[test]
    fn test_fold_invokes_exactly_one_handler() {
        let mut some_calls = 0;
        let mut none_calls = 0;

        let out = some(5).fold(
            |n| {
                some_calls += 1;
                n + 1
            },
            || {
                none_calls += 1;
                0
            },
        );
        assert_eq!(out, 6);
        assert_eq!((some_calls, none_calls), (1, 0));

        let out = none::<i32>().fold(
            |n| {
                some_calls += 1;
                n + 1
            },
            || {
                none_calls += 1;
                0
            },
        );
        assert_eq!(out, 0);
        assert_eq!((some_calls, none_calls), (1, 1));
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(some(3).unwrap_or(0), 3);
        assert_eq!(none().unwrap_or(0), 0);
    }

    #[test]
    fn test_unwrap_or_else() {
        assert_eq!(some(3).unwrap_or_else(|| 0), 3);
        assert_eq!(none::<i32>().unwrap_or_else(|| 7), 7);
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(some(7).unwrap(), 7);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
    fn test_unwrap_panics_on_none() {
        none::<i32>().unwrap();
    }

    #[test]
    #[should_panic(expected = "value should be present")]
    fn test_expect_panics_with_message() {
        none::<i32>().expect("value should be present");
    }

    #[test]
    fn test_as_ref_and_as_mut() {
        let m = some(String::from("hi"));
        assert_eq!(m.as_ref(), Maybe::Some(&String::from("hi")));

        let mut m = some(1);
        if let Maybe::Some(v) = m.as_mut() {
            *v = 2;
        }
        assert_eq!(m, some(2));
    }

    #[test]
    fn test_option_roundtrip() {
        assert_eq!(some(1).into_option(), Some(1));
        assert_eq!(none::<i32>().into_option(), None);
        assert_eq!(Maybe::from_option(Some(1)), some(1));
        assert_eq!(Maybe::from(None::<i32>), none());

        let back: Option<i32> = some(5).into();
        assert_eq!(back, Some(5));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(some(some(3)).flatten(), some(3));
        assert_eq!(some(none::<i32>()).flatten(), none());
        assert_eq!(none::<Maybe<i32>>().flatten(), none());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Maybe::<i32>::default(), none());
    }

    #[test]
    fn test_iteration() {
        let collected: Vec<_> = some(2).into_iter().collect();
        assert_eq!(collected, vec![2]);

        let collected: Vec<_> = none::<i32>().into_iter().collect();
        assert!(collected.is_empty());

        let m = some(3);
        let collected: Vec<_> = (&m).into_iter().collect();
        assert_eq!(collected, vec![&3]);
    }

    // Law tests on concrete values; the proptests module covers them
    // over generated inputs.
    #[test]
    fn test_functor_identity() {
        assert_eq!(some(42).map(|v| v), some(42));
        assert_eq!(none::<i32>().map(|v| v), none());
    }

    #[test]
    fn test_functor_composition() {
        let f = |v: i32| v + 1;
        let g = |v: i32| v * 2;

        assert_eq!(some(10).map(f).map(g), some(10).map(|v| g(f(v))));
        assert_eq!(none::<i32>().map(f).map(g), none::<i32>().map(|v| g(f(v))));
    }

    #[test]
    fn test_monad_left_identity() {
        let f = |n: i32| if n > 0 { some(n + 1) } else { none() };
        assert_eq!(some(3).and_then(f), f(3));
    }

    #[test]
    fn test_monad_right_identity() {
        assert_eq!(some(3).and_then(some), some(3));
        assert_eq!(none::<i32>().and_then(some), none());
    }

    #[test]
    fn test_monad_associativity() {
        let f = |n: i32| some(n + 1);
        let g = |n: i32| if n > 2 { some(n * 2) } else { none() };

        assert_eq!(
            some(2).and_then(f).and_then(g),
            some(2).and_then(|n| f(n).and_then(g))
        );
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_as_tagged_variant() {
            let json = serde_json::to_string(&some(3)).unwrap();
            assert_eq!(json, r#"{"Some":3}"#);

            let json = serde_json::to_string(&none::<i32>()).unwrap();
            assert_eq!(json, r#""None""#);
        }

        #[test]
        fn deserializes_both_variants() {
            let m: Maybe<i32> = serde_json::from_str(r#"{"Some":3}"#).unwrap();
            assert_eq!(m, some(3));

            let m: Maybe<i32> = serde_json::from_str(r#""None""#).unwrap();
            assert_eq!(m, none());
        }
    }
}
