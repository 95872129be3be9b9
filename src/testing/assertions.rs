//! Ordering assertions for chart tables.

use std::fmt::Debug;

/// Assert that `key` is non-increasing across `rows`.
///
/// # Panics
///
/// Panics at the first adjacent pair where the key goes up.
///
/// # Example
///
/// ```
/// use marquee::testing::assert_descending_by;
///
/// assert_descending_by(&[5.0, 3.0, 3.0, 1.0], |v| *v);
/// ```
pub fn assert_descending_by<T: Debug, F: Fn(&T) -> f64>(rows: &[T], key: F) {
    for (i, pair) in rows.windows(2).enumerate() {
        let (a, b) = (key(&pair[0]), key(&pair[1]));
        assert!(
            a >= b,
            "Not descending at index {}:\n  {a} then {b}\n  Rows: {rows:?}",
            i + 1
        );
    }
}

/// Assert that `key` strictly increases across `rows`, i.e. sorted with no
/// duplicates.
///
/// # Panics
///
/// Panics at the first adjacent pair that is equal or out of order.
///
/// # Example
///
/// ```
/// use marquee::testing::assert_strictly_ascending_by;
///
/// assert_strictly_ascending_by(&[1999, 2000, 2003], |y| *y);
/// ```
pub fn assert_strictly_ascending_by<T: Debug, K: PartialOrd + Debug, F: Fn(&T) -> K>(rows: &[T], key: F) {
    for (i, pair) in rows.windows(2).enumerate() {
        let (a, b) = (key(&pair[0]), key(&pair[1]));
        assert!(
            a < b,
            "Not strictly ascending at index {}:\n  {a:?} then {b:?}\n  Rows: {rows:?}",
            i + 1
        );
    }
}
