//! Testing utilities for millrace containers.
//!
//! Assertion macros for the common "this must be the positive/negative
//! variant" checks, and — behind the `proptest` feature — [`Arbitrary`]
//! implementations so `Maybe` and `Outcome` can be generated directly in
//! property tests.
//!
//! # Examples
//!
//! ```
//! use millrace::{assert_some, assert_ok, maybe, outcome};
//!
//! let m = maybe::some(42);
//! assert_some!(m);
//!
//! let o = outcome::ok::<_, String>(42);
//! assert_ok!(o);
//! ```

#[cfg(feature = "proptest")]
use crate::{Maybe, Outcome};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Assert that a [`Maybe`](crate::Maybe) is `Some`, panicking otherwise.
#[macro_export]
macro_rules! assert_some {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Some(_) => {}
            $crate::Maybe::None => {
                panic!("Expected Some, got None");
            }
        }
    };
}

/// Assert that a [`Maybe`](crate::Maybe) is `None`, panicking with the
/// present value otherwise.
#[macro_export]
macro_rules! assert_none {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::None => {}
            $crate::Maybe::Some(v) => {
                panic!("Expected None, got Some: {:?}", v);
            }
        }
    };
}

/// Assert that an [`Outcome`](crate::Outcome) is `Ok`, panicking with the
/// failure payload otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Error(e) => {
                panic!("Expected Ok, got Error: {:?}", e);
            }
        }
    };
}

/// Assert that an [`Outcome`](crate::Outcome) is `Error`, panicking with
/// the success value otherwise.
#[macro_export]
macro_rules! assert_error {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Error(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Error, got Ok: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + Clone + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Maybe::Some),
            Just(Maybe::<T>::None),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::Ok),
            any_with::<E>(e_params).prop_map(Outcome::Error),
        ]
        .boxed()
    }
}
