//! Search and membership.
//!
//! All comparisons are strict equality via `PartialEq`; for [`Value`]
//! sequences that means no coercion between kinds and `NaN` never matches.
//!
//! [`Value`]: crate::Value

use itertools::Itertools;

/// Index of the first element equal to `value`.
///
/// # Examples
///
/// ```
/// use seqkit::index_of;
///
/// assert_eq!(index_of(&[0, 1, 2, 3, 4, 5], &5), Some(5));
/// assert_eq!(index_of(&["Array", "Number", "string"], &"Date"), None);
/// ```
#[inline]
pub fn index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().position(|item| item == value)
}

/// Number of elements equal to `value`.
#[inline]
pub fn count_occurrences<T: PartialEq>(seq: &[T], value: &T) -> usize {
    seq.iter().filter(|&item| item == value).count()
}

/// Indices of odd elements.
///
/// Oddness uses the truncating remainder (`v % 2 == 1`), so negative odd
/// numbers, whose remainder is `-1`, are not reported.
///
/// # Examples
///
/// ```
/// use seqkit::indices_of_odd;
///
/// assert_eq!(indices_of_odd(&[11, 22, 33, 44, 55]), vec![0, 2, 4]);
/// assert!(indices_of_odd(&[-3, -1]).is_empty());
/// ```
pub fn indices_of_odd(seq: &[i64]) -> Vec<usize> {
    seq.iter().positions(|&v| v % 2 == 1).collect()
}

/// Elements of `a` that also occur somewhere in `b`, in the order of `a`.
///
/// Duplicates in `a` each appear in the output when matched; duplicates
/// in `b` do not multiply the result. Either side empty yields empty.
///
/// # Examples
///
/// ```
/// use seqkit::common_elements;
///
/// assert_eq!(common_elements(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// assert_eq!(common_elements(&["a", "a", "b"], &["a"]), vec!["a", "a"]);
/// ```
pub fn common_elements<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(item)).cloned().collect()
}

/// Returns `true` if some element equals its own index.
///
/// # Examples
///
/// ```
/// use seqkit::has_value_equal_to_index;
///
/// assert!(has_value_equal_to_index(&[2, 1, 0, 4, 5]));
/// assert!(!has_value_equal_to_index(&[10, 20, 30, 40, 50]));
/// ```
pub fn has_value_equal_to_index(seq: &[i64]) -> bool {
    seq.iter()
        .enumerate()
        .any(|(i, &v)| usize::try_from(v).map_or(false, |v| v == i))
}
