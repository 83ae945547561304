//! Numeric range generation.

/// The integers `0, 1, ..., size - 1`.
///
/// # Example
///
/// ```
/// use millrace::range::range;
///
/// assert_eq!(range(4), vec![0, 1, 2, 3]);
/// assert_eq!(range(0), Vec::<i64>::new());
/// ```
#[inline]
pub fn range(size: usize) -> Vec<i64> {
    range_from(size, 0)
}

/// The integers `start_at, start_at + 1, ..., start_at + size - 1`.
///
/// # Example
///
/// ```
/// use millrace::range::range_from;
///
/// assert_eq!(range_from(3, 10), vec![10, 11, 12]);
/// assert_eq!(range_from(3, -1), vec![-1, 0, 1]);
/// ```
#[inline]
pub fn range_from(size: usize, start_at: i64) -> Vec<i64> {
    (0..size as i64).map(|i| i + start_at).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_starts_at_zero() {
        assert_eq!(range(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn range_of_zero_is_empty() {
        assert!(range(0).is_empty());
        assert!(range_from(0, 100).is_empty());
    }

    #[test]
    fn range_from_offsets_every_element() {
        assert_eq!(range_from(3, 10), vec![10, 11, 12]);
        assert_eq!(range_from(3, -1), vec![-1, 0, 1]);
    }

    #[test]
    fn range_length_matches_size() {
        assert_eq!(range(17).len(), 17);
        assert_eq!(range_from(17, -40).len(), 17);
    }
}
