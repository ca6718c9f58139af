//! Ordering and index-driven selection.

use std::cmp::Ordering;

use crate::{Nested, Result, SeqKitError};

/// English digit names, indexed by their value.
pub const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The `n` largest elements in descending order.
///
/// The sort is stable, so equal elements keep their input order.
/// Incomparable pairs (such as `NaN` against anything) are treated as equal.
/// `n` larger than the sequence returns every element, sorted.
///
/// # Examples
///
/// ```
/// use seqkit::max_items;
///
/// assert_eq!(max_items(&[10, 2, 7, 5, 3, -5], 3), vec![10, 7, 5]);
/// assert_eq!(max_items(&[2, 3, 1], 5), vec![3, 2, 1]);
/// ```
pub fn max_items<T: PartialOrd + Clone>(seq: &[T], n: usize) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    sorted.truncate(n);
    sorted
}

/// Length of the longest run of *consecutive* strictly increasing elements.
///
/// This is the contiguous-run measure, not the classical longest increasing
/// subsequence: `[50, 3, 10, 7, 40, 80]` yields 3 (`7, 40, 80`) where the
/// classical answer would be 4. Empty input yields 0.
///
/// # Examples
///
/// ```
/// use seqkit::longest_increasing_run;
///
/// assert_eq!(longest_increasing_run(&[10, 22, 9, 33, 21, 50, 41, 60, 80]), 3);
/// assert_eq!(longest_increasing_run(&[3, 10, 2, 1, 20]), 2);
/// ```
pub fn longest_increasing_run<T: PartialOrd>(seq: &[T]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<&T> = None;

    for item in seq {
        run = match prev {
            Some(p) if p < item => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(item);
    }

    longest
}

/// Numeric value of a digit name, e.g. `"seven"` -> `Some(7)`.
#[inline]
pub fn digit_value(name: &str) -> Option<usize> {
    DIGIT_NAMES.iter().position(|&digit| digit == name)
}

/// Stable sort of digit names (`"zero"` to `"nine"`) by numeric value.
///
/// # Errors
///
/// Returns [`SeqKitError::InvalidParameter`] for any word that is not a
/// digit name.
///
/// # Examples
///
/// ```
/// use seqkit::sort_digit_names;
///
/// assert_eq!(
///     sort_digit_names(&["nine", "eight", "nine", "eight"]).unwrap(),
///     vec!["eight", "eight", "nine", "nine"]
/// );
/// ```
pub fn sort_digit_names<S: AsRef<str>>(seq: &[S]) -> Result<Vec<String>> {
    let mut keyed = seq
        .iter()
        .map(|name| {
            let name = name.as_ref();
            digit_value(name)
                .map(|digit| (digit, name.to_owned()))
                .ok_or_else(|| {
                    SeqKitError::InvalidParameter(format!("'{}' is not a digit name", name))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|&(digit, _)| digit);
    Ok(keyed.into_iter().map(|(_, name)| name).collect())
}

/// Repeat each element by its one-based position: one copy of the first,
/// two of the second, and so on.
///
/// # Examples
///
/// ```
/// use seqkit::propagate_by_index;
///
/// assert_eq!(propagate_by_index(&['a', 'b', 'c']), vec!['a', 'b', 'b', 'c', 'c', 'c']);
/// ```
pub fn propagate_by_index<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter()
        .enumerate()
        .flat_map(|(i, item)| std::iter::repeat(item).take(i + 1))
        .cloned()
        .collect()
}

/// Descend into nested lists following `indices`, one level per index.
///
/// # Errors
///
/// - [`SeqKitError::InvalidParameter`] if `indices` is empty.
/// - [`SeqKitError::IndexOutOfBounds`] if an index exceeds its level.
/// - [`SeqKitError::NotASequence`] if the path continues below a leaf.
///
/// # Examples
///
/// ```
/// use seqkit::{get_by_indices, nested, Nested};
///
/// let seq = nested!([[[1, 2, 3]]]);
/// let found = get_by_indices(seq.as_list().unwrap(), &[0, 0, 1]).unwrap();
/// assert_eq!(found, &Nested::Item(2));
/// ```
pub fn get_by_indices<'a, T>(seq: &'a [Nested<T>], indices: &[usize]) -> Result<&'a Nested<T>> {
    let (&first, rest) = indices.split_first().ok_or_else(|| {
        SeqKitError::InvalidParameter("at least one index is required".into())
    })?;

    let mut current = seq.get(first).ok_or(SeqKitError::IndexOutOfBounds {
        index: first,
        length: seq.len(),
    })?;

    for (depth, &index) in rest.iter().enumerate() {
        let children = match current {
            Nested::List(children) => children,
            Nested::Item(_) => return Err(SeqKitError::NotASequence { depth: depth + 1 }),
        };
        current = children.get(index).ok_or(SeqKitError::IndexOutOfBounds {
            index,
            length: children.len(),
        })?;
    }

    Ok(current)
}
