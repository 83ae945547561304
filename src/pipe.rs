//! Left-to-right composition: thread a value through a chain of operators.
//!
//! [`pipe!`] applies each operator to the result of the previous one,
//! strictly in the order written. Each operator is any unary callable —
//! typically a curried operator from
//! [`maybe::operators`](crate::maybe::operators) or
//! [`outcome::operators`](crate::outcome::operators), but plain functions
//! and closures work the same way:
//!
//! ```
//! use millrace::pipe;
//!
//! fn double(n: i32) -> i32 {
//!     n * 2
//! }
//!
//! let result = pipe!(3, double, |n| n + 1);
//! assert_eq!(result, 7);
//! ```
//!
//! The macro has no arity cap: being recursive it accepts any number of
//! operators, and `pipe!(value)` alone is the identity. Composition is
//! associative — splitting a chain across nested pipes cannot change the
//! result, since each step is plain function application.

/// Pipe a value through a series of unary operators, left to right.
///
/// `pipe!(value, op1, op2, ..., opN)` evaluates to
/// `opN(...(op2(op1(value))))`. No operator is skipped or reordered, and
/// each runs exactly once.
///
/// # Examples
///
/// ```
/// use millrace::maybe::{self, operators};
/// use millrace::pipe;
///
/// let result = pipe!(
///     maybe::some(2),
///     operators::map(|n: i32| n + 1),
///     operators::and_then(|n| if n > 2 { maybe::some(n) } else { maybe::none() }),
/// );
/// assert_eq!(result, maybe::some(3));
/// ```
///
/// A bare value passes through unchanged:
///
/// ```
/// use millrace::pipe;
///
/// assert_eq!(pipe!(42), 42);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $op:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($op)($value) $(, $rest)*)
    };
}
