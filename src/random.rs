//! Random picks over an injected randomness source.
//!
//! Nothing here owns a generator: every function takes a [`RandomSource`],
//! so production code can hand in a real generator (see [`RngSource`] with
//! the `rand` feature) while tests inject a deterministic sequence through
//! [`FnSource`] and assert exact results.
//!
//! ```
//! use millrace::random::{self, FnSource};
//!
//! let mut source = FnSource(|| 0.5);
//! assert_eq!(random::integer(&mut source, 10), 5);
//! assert_eq!(random::integer_between(&mut source, 10, 20), 15);
//! ```

/// A source of randomness: each draw yields an `f64` in `[0, 1)`.
///
/// Implementations are free to be deterministic; the functions in this
/// module are pure with respect to the sequence a source produces.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

/// A [`RandomSource`] backed by a closure.
///
/// The workhorse for tests: wrap any `FnMut() -> f64` to script the exact
/// sequence of draws.
///
/// # Example
///
/// ```
/// use millrace::random::{FnSource, RandomSource};
///
/// let mut source = FnSource(|| 0.25);
/// assert_eq!(source.draw(), 0.25);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnSource<F>(
    /// The wrapped closure.
    pub F,
);

impl<F> RandomSource for FnSource<F>
where
    F: FnMut() -> f64,
{
    #[inline]
    fn draw(&mut self) -> f64 {
        (self.0)()
    }
}

/// A [`RandomSource`] backed by a `rand` generator.
///
/// # Example
///
/// ```ignore
/// use millrace::random::{self, RngSource};
///
/// let mut source = RngSource(rand::rng());
/// let roll = random::integer(&mut source, 6);
/// assert!((0..6).contains(&roll));
/// ```
#[cfg(feature = "rand")]
#[derive(Clone, Debug)]
pub struct RngSource<R>(
    /// The wrapped generator.
    pub R,
);

#[cfg(feature = "rand")]
impl<R> RandomSource for RngSource<R>
where
    R: rand::Rng,
{
    #[inline]
    fn draw(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// A uniform random integer in `[0, max)`.
///
/// # Example
///
/// ```
/// use millrace::random::{self, FnSource};
///
/// let mut source = FnSource(|| 0.999);
/// assert_eq!(random::integer(&mut source, 10), 9);
/// ```
#[inline]
pub fn integer<R: RandomSource>(source: &mut R, max: i64) -> i64 {
    integer_between(source, 0, max)
}

/// A uniform random integer in `[min, max)`.
///
/// Scales a single draw across the width of the interval, so a source
/// yielding `0.0` produces `min` and a source approaching `1.0` produces
/// `max - 1`.
///
/// # Example
///
/// ```
/// use millrace::random::{self, FnSource};
///
/// let mut source = FnSource(|| 0.0);
/// assert_eq!(random::integer_between(&mut source, -5, 5), -5);
/// ```
#[inline]
pub fn integer_between<R: RandomSource>(source: &mut R, min: i64, max: i64) -> i64 {
    (source.draw() * (max - min) as f64).floor() as i64 + min
}

/// Pick an index at random, weighted by the given weights.
///
/// A single draw is scaled by the weight total and walked along the running
/// sum; the first index whose cumulative weight reaches the scaled draw
/// wins. Heavier weights therefore win proportionally more often. If
/// floating-point rounding pushes the scaled draw past the running total,
/// the last index is returned.
///
/// # Panics
///
/// Panics if `weights` is empty — there is no index to return.
///
/// # Example
///
/// ```
/// use millrace::random::{self, FnSource};
///
/// let weights = [1.0, 2.0, 1.0];
///
/// // total = 4; a draw of 0.5 scales to 2.0, landing in the second weight
/// let mut source = FnSource(|| 0.5);
/// assert_eq!(random::weighted(&mut source, &weights), 1);
/// ```
pub fn weighted<R: RandomSource>(source: &mut R, weights: &[f64]) -> usize {
    assert!(!weights.is_empty(), "weighted requires at least one weight");

    let total: f64 = weights.iter().sum();
    let scaled = source.draw() * total;

    let mut running = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        running += weight;
        if scaled <= running {
            return index;
        }
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_spans_the_interval() {
        assert_eq!(integer(&mut FnSource(|| 0.0), 10), 0);
        assert_eq!(integer(&mut FnSource(|| 0.5), 10), 5);
        assert_eq!(integer(&mut FnSource(|| 0.999), 10), 9);
    }

    #[test]
    fn integer_between_offsets_by_min() {
        assert_eq!(integer_between(&mut FnSource(|| 0.0), 10, 20), 10);
        assert_eq!(integer_between(&mut FnSource(|| 0.5), 10, 20), 15);
        assert_eq!(integer_between(&mut FnSource(|| 0.999), 10, 20), 19);
    }

    #[test]
    fn integer_between_handles_negative_bounds() {
        assert_eq!(integer_between(&mut FnSource(|| 0.0), -5, 5), -5);
        assert_eq!(integer_between(&mut FnSource(|| 0.5), -5, 5), 0);
    }

    #[test]
    fn scripted_source_drives_a_sequence() {
        let mut draws = [0.1, 0.9].into_iter();
        let mut source = FnSource(move || draws.next().unwrap());

        assert_eq!(integer(&mut source, 10), 1);
        assert_eq!(integer(&mut source, 10), 9);
    }

    #[test]
    fn weighted_lands_on_cumulative_buckets() {
        let weights = [1.0, 2.0, 1.0];

        // total = 4; cumulative edges at 1, 3, 4
        assert_eq!(weighted(&mut FnSource(|| 0.0), &weights), 0);
        assert_eq!(weighted(&mut FnSource(|| 0.24), &weights), 0);
        assert_eq!(weighted(&mut FnSource(|| 0.26), &weights), 1);
        assert_eq!(weighted(&mut FnSource(|| 0.74), &weights), 1);
        assert_eq!(weighted(&mut FnSource(|| 0.76), &weights), 2);
    }

    #[test]
    fn weighted_skips_zero_weight_heads() {
        let weights = [0.0, 1.0];
        assert_eq!(weighted(&mut FnSource(|| 0.5), &weights), 1);
    }

    #[test]
    fn out_of_range_draw_lands_on_last_index() {
        // A draw of 1.0 is outside the contract; the last index absorbs it.
        let weights = [1.0, 1.0];
        assert_eq!(weighted(&mut FnSource(|| 1.0), &weights), 1);
    }

    #[test]
    #[should_panic(expected = "at least one weight")]
    fn weighted_rejects_empty_weights() {
        weighted(&mut FnSource(|| 0.5), &[]);
    }
}
