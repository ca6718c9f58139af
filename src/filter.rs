//! Filtering, deduplication and truthiness.
//!
//! Two notions of "falsy" live here and deliberately disagree:
//!
//! - [`remove_falsy`] drops members of a fixed set:
//!   `false`, `null`, `0`, `undefined`, `NaN` and `""`.
//! - [`falsy_count`] counts elements failing [`Value::is_truthy`].
//!
//! They agree on every member of that fixed set, and also on `-0`, which
//! the set membership test treats as `0`.

use itertools::Itertools;
use std::hash::Hash;

use crate::Value;

/// Values removed by [`remove_falsy`].
const FALSY_SET: [Value; 6] = [
    Value::Bool(false),
    Value::Null,
    Value::Number(0.0),
    Value::Undefined,
    Value::Number(f64::NAN),
    Value::Str(String::new()),
];

/// Drop every element that matches a member of the fixed falsy set.
///
/// Matching uses [`Value::same_value_zero`], so `NaN` is removed even though
/// it is not strictly equal to itself.
///
/// # Examples
///
/// ```
/// use seqkit::{remove_falsy, Value};
///
/// let seq = vec![
///     Value::from(0),
///     Value::from(false),
///     Value::from("cat"),
///     Value::from(f64::NAN),
///     Value::from(true),
///     Value::from(""),
/// ];
/// assert_eq!(remove_falsy(&seq), vec![Value::from("cat"), Value::from(true)]);
/// ```
pub fn remove_falsy(seq: &[Value]) -> Vec<Value> {
    seq.iter()
        .filter(|item| !FALSY_SET.iter().any(|falsy| falsy.same_value_zero(item)))
        .cloned()
        .collect()
}

/// Number of elements that are falsy under truthiness coercion.
///
/// # Examples
///
/// ```
/// use seqkit::{falsy_count, Value};
///
/// let seq = vec![Value::from(-1), Value::from("false"), Value::Null, Value::from(0)];
/// assert_eq!(falsy_count(&seq), 2);
/// ```
pub fn falsy_count(seq: &[Value]) -> usize {
    seq.iter().filter(|item| !item.is_truthy()).count()
}

/// Unique elements in first-occurrence order.
///
/// # Examples
///
/// ```
/// use seqkit::distinct;
///
/// assert_eq!(distinct(&[1, 2, 3, 3, 2, 1]), vec![1, 2, 3]);
/// assert!(distinct::<i32>(&[]).is_empty());
/// ```
pub fn distinct<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().unique().cloned().collect()
}

/// Unique [`Value`]s in first-occurrence order, compared with
/// [`Value::same_value_zero`] so that repeated `NaN`s collapse to one.
///
/// Quadratic in the number of distinct values.
pub fn distinct_values(seq: &[Value]) -> Vec<Value> {
    let mut seen: Vec<Value> = Vec::new();
    for item in seq {
        if !seen.iter().any(|s| s.same_value_zero(item)) {
            seen.push(item.clone());
        }
    }
    seen
}

/// Returns `true` if every string has the same length as the first one.
///
/// Lengths count `char`s (Unicode scalar values, not UTF-16 code units), so
/// `"😀"` and `"a"` have the same length. An empty sequence is trivially
/// uniform.
///
/// # Examples
///
/// ```
/// use seqkit::is_same_length;
///
/// assert!(is_same_length(&["orange", "banana", "cherry"]));
/// assert!(!is_same_length(&["cat", "dog", "elephant"]));
/// ```
pub fn is_same_length<S: AsRef<str>>(seq: &[S]) -> bool {
    seq.iter().map(|s| s.as_ref().chars().count()).all_equal()
}
