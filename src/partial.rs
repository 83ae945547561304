//! Partial application: bind some arguments of a function now, the rest
//! later.
//!
//! [`partial!`] takes a callable and an argument list in which `_` marks a
//! hole. Listed arguments are evaluated immediately and captured by value;
//! the macro expands to a `move` closure over the holes, in order. Binding
//! a prefix leaves trailing holes (left application); binding a suffix
//! after leading holes gives right application — one spelling covers both.
//!
//! ```
//! use millrace::partial;
//!
//! fn clamp(min: i32, max: i32, value: i32) -> i32 {
//!     value.max(min).min(max)
//! }
//!
//! let clamp_percent = partial!(clamp, 0, 100, _);
//! assert_eq!(clamp_percent(150), 100);
//! assert_eq!(clamp_percent(-3), 0);
//! ```
//!
//! A partially applied function is unary once a single hole remains, which
//! makes it a drop-in operator for [`pipe!`](crate::pipe):
//!
//! ```
//! use millrace::{partial, pipe};
//!
//! fn scale(factor: i32, n: i32) -> i32 {
//!     factor * n
//! }
//!
//! assert_eq!(pipe!(7, partial!(scale, 3, _)), 21);
//! ```

/// Partially apply a callable, with `_` marking the arguments left open.
///
/// `partial!(f, a, _, b, _)` evaluates `a` and `b` immediately and expands
/// to `move |x0, x1| f(a, x0, b, x1)`. Up to eight bound arguments and
/// eight holes are supported.
///
/// # Examples
///
/// Left application — bind a prefix:
///
/// ```
/// use millrace::partial;
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let add_one = partial!(add3, 1, _, _);
/// assert_eq!(add_one(2, 3), 6);
/// ```
///
/// Right application — bind a suffix:
///
/// ```
/// use millrace::partial;
///
/// fn divide(dividend: f64, divisor: f64) -> f64 {
///     dividend / divisor
/// }
///
/// let halve = partial!(divide, _, 2.0);
/// assert_eq!(halve(10.0), 5.0);
/// ```
#[macro_export]
macro_rules! partial {
    ($f:expr, $($args:tt)+) => {
        $crate::__partial!(
            $f;
            [];
            [];
            [];
            [__hole0, __hole1, __hole2, __hole3, __hole4, __hole5, __hole6, __hole7,];
            [__bind0, __bind1, __bind2, __bind3, __bind4, __bind5, __bind6, __bind7,];
            $($args)+
        )
    };
}

/// Implementation detail of [`partial!`]: a token muncher walking the
/// argument list once, routing each `_` to a closure parameter and each
/// expression to an eager `let` binding, preserving call order.
#[doc(hidden)]
#[macro_export]
macro_rules! __partial {
    // All arguments consumed: emit the closure.
    (
        $f:expr;
        [$($param:ident,)*];
        [$($bi:ident = $be:expr,)*];
        [$($call:ident,)*];
        [$($hpool:ident,)*];
        [$($bpool:ident,)*];
    ) => {{
        let __partial_fn = $f;
        $(let $bi = $be;)*
        move |$($param),*| __partial_fn($($call),*)
    }};

    // A hole: take the next parameter name from the hole pool.
    (
        $f:expr;
        [$($param:ident,)*];
        [$($lets:tt)*];
        [$($call:ident,)*];
        [$h:ident, $($hpool:ident,)*];
        [$($bpool:ident,)*];
        _ $(, $($rest:tt)*)?
    ) => {
        $crate::__partial!(
            $f;
            [$($param,)* $h,];
            [$($lets)*];
            [$($call,)* $h,];
            [$($hpool,)*];
            [$($bpool,)*];
            $($($rest)*)?
        )
    };

    // A bound argument: take the next binding name from the bind pool.
    (
        $f:expr;
        [$($param:ident,)*];
        [$($bi:ident = $be:expr,)*];
        [$($call:ident,)*];
        [$($hpool:ident,)*];
        [$b:ident, $($bpool:ident,)*];
        $arg:expr $(, $($rest:tt)*)?
    ) => {
        $crate::__partial!(
            $f;
            [$($param,)*];
            [$($bi = $be,)* $b = $arg,];
            [$($call,)* $b,];
            [$($hpool,)*];
            [$($bpool,)*];
            $($($rest)*)?
        )
    };
}
