//! # Millrace
//!
//! > *A millrace channels the stream that drives the wheel*
//!
//! A Rust library for composable optional and fallible values.
//!
//! ## Philosophy
//!
//! **Millrace** expresses "may be absent" and "may fail" as plain data
//! instead of null references or thrown exceptions:
//! - [`Maybe<T>`] — a value that is present or absent
//! - [`Outcome<T, E>`] — a computation that succeeded or failed with a
//!   typed payload
//!
//! Both are closed, immutable sum types, transformed through a small
//! operator set (`map`, `and_then`, `or_else`, `fold`, `map_error`) that
//! short-circuits on the negative variant and never silently loses it.
//! Every operator has a direct method form and a curried form for
//! channeling values through [`pipe!`].
//!
//! ## Quick Example
//!
//! ```rust
//! use millrace::outcome::{self, operators, Outcome};
//! use millrace::pipe;
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     EmailInvalid,
//!     AgeTooYoung,
//! }
//!
//! fn check_email(email: &str) -> Outcome<&str, SignupError> {
//!     if email.contains('@') {
//!         outcome::ok(email)
//!     } else {
//!         outcome::error(SignupError::EmailInvalid)
//!     }
//! }
//!
//! let message = pipe!(
//!     check_email("user@example.com"),
//!     operators::and_then(|email: &str| {
//!         if email.len() < 255 {
//!             outcome::ok(email.to_string())
//!         } else {
//!             outcome::error(SignupError::EmailInvalid)
//!         }
//!     }),
//!     operators::fold(
//!         |email| format!("welcome, {}", email),
//!         |err| format!("rejected: {:?}", err),
//!     ),
//! );
//!
//! assert_eq!(message, "welcome, user@example.com");
//! ```
//!
//! When a stage's variant is knowable at compile time, the known-variant
//! types ([`Present`]/[`Absent`], [`Succeeded`]/[`Failed`]) keep that
//! knowledge in the signature instead of widening back to the union; see
//! [`maybe::known`] and [`outcome::known`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod maybe;
pub mod outcome;
pub mod partial;
pub mod pipe;
pub mod random;
pub mod range;
pub mod testing;

// Re-exports
pub use maybe::{Absent, Maybe, Present};
pub use outcome::{Failed, Outcome, Succeeded};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::maybe::{Absent, Maybe, Present};
    pub use crate::outcome::{Failed, Outcome, Succeeded};
    pub use crate::random::{FnSource, RandomSource};
    pub use crate::{partial, pipe};
}
