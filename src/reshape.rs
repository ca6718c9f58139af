//! Reshaping: slicing, chunking, flattening, rotation and insertion.
//!
//! Every function here borrows its input and returns a freshly allocated
//! result; nothing is modified in place.

use crate::{Nested, Result, SeqKitError};

/// The first `n` elements, or the whole sequence if it is shorter.
///
/// # Examples
///
/// ```
/// use seqkit::head;
///
/// assert_eq!(head(&[1, 3, 4, 5], 2), vec![1, 3]);
/// assert!(head(&['a', 'b'], 0).is_empty());
/// ```
#[inline]
pub fn head<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[..n.min(seq.len())].to_vec()
}

/// The last `n` elements, or the whole sequence if it is shorter.
///
/// # Examples
///
/// ```
/// use seqkit::tail;
///
/// assert_eq!(tail(&['a', 'b', 'c', 'd'], 3), vec!['b', 'c', 'd']);
/// assert!(tail(&['a', 'b'], 0).is_empty());
/// ```
#[inline]
pub fn tail<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[seq.len() - n.min(seq.len())..].to_vec()
}

/// Split into consecutive groups of `size`; the last group may be shorter.
///
/// # Errors
///
/// Returns [`SeqKitError::InvalidParameter`] if `size == 0`.
///
/// # Examples
///
/// ```
/// use seqkit::chunk;
///
/// assert_eq!(
///     chunk(&[1, 2, 3, 4, 5, 6, 7], 3).unwrap(),
///     vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
/// );
/// ```
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(SeqKitError::InvalidParameter(
            "chunk size must be at least 1".into(),
        ));
    }
    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}

/// Collect every leaf item of arbitrarily nested lists, depth first.
///
/// Walks the structure with an explicit stack, so deep nesting does not
/// grow the call stack.
///
/// # Examples
///
/// ```
/// use seqkit::{flatten, nested};
///
/// let seq = nested!([1, [2, [3, 4], 5], 6]);
/// assert_eq!(flatten(seq.as_list().unwrap()), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len());
    let mut stack = vec![seq.iter()];

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Item(item)) => out.push(item.clone()),
            Some(Nested::List(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }

    out
}

/// Project every element to a sequence and concatenate the results.
///
/// # Examples
///
/// ```
/// use seqkit::select_many;
///
/// let letters = select_many(&["one", "two"], |s| s.chars());
/// assert_eq!(letters, vec!['o', 'n', 'e', 't', 'w', 'o']);
/// ```
pub fn select_many<T, U, I, F>(seq: &[T], mut project: F) -> Vec<U>
where
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = U>,
{
    seq.iter().flat_map(|item| project(item)).collect()
}

/// The sequence followed by a copy of itself.
#[inline]
pub fn double_array<T: Clone>(seq: &[T]) -> Vec<T> {
    [seq, seq].concat()
}

/// Cyclic shift by `n` positions: positive `n` moves elements towards
/// higher indices, negative `n` towards lower ones, wrapping around.
///
/// Element `seq[i]` lands at index `(i + n) mod len`.
///
/// # Examples
///
/// ```
/// use seqkit::shift;
///
/// assert_eq!(shift(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
/// assert_eq!(shift(&['a', 'b', 'c', 'd'], -1), vec!['b', 'c', 'd', 'a']);
/// ```
pub fn shift<T: Clone>(seq: &[T], n: isize) -> Vec<T> {
    let len = seq.len();
    if len == 0 {
        return Vec::new();
    }
    let offset = n.rem_euclid(len as isize) as usize;
    (0..len)
        .map(|i| seq[(i + len - offset) % len].clone())
        .collect()
}

/// Swap the first and last halves of the sequence.
///
/// For odd lengths the middle element stays at index `len / 2` and only
/// the blocks around it trade places.
///
/// # Examples
///
/// ```
/// use seqkit::swap_head_and_tail;
///
/// assert_eq!(swap_head_and_tail(&[1, 2, 3, 4, 5]), vec![4, 5, 3, 1, 2]);
/// assert_eq!(swap_head_and_tail(&[1, 2]), vec![2, 1]);
/// ```
pub fn swap_head_and_tail<T: Clone>(seq: &[T]) -> Vec<T> {
    let len = seq.len();
    let half = len / 2;

    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&seq[len - half..]);
    if len % 2 == 1 {
        out.push(seq[half].clone());
    }
    out.extend_from_slice(&seq[..half]);
    out
}

/// A copy of the sequence with `item` inserted before position `index`.
///
/// `index == seq.len()` appends.
///
/// # Errors
///
/// Returns [`SeqKitError::IndexOutOfBounds`] if `index > seq.len()`.
///
/// # Examples
///
/// ```
/// use seqkit::insert_at;
///
/// assert_eq!(insert_at(&[1, 3, 4, 5], 2, 1).unwrap(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn insert_at<T: Clone>(seq: &[T], item: T, index: usize) -> Result<Vec<T>> {
    if index > seq.len() {
        return Err(SeqKitError::IndexOutOfBounds {
            index,
            length: seq.len(),
        });
    }

    let mut out = Vec::with_capacity(seq.len() + 1);
    out.extend_from_slice(&seq[..index]);
    out.push(item);
    out.extend_from_slice(&seq[index..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_tail_clamp() {
        assert_eq!(head(&[1, 2], 10), vec![1, 2]);
        assert_eq!(tail(&[1, 2], 10), vec![1, 2]);
        assert!(head::<i32>(&[], 3).is_empty());
        assert!(tail::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn test_chunk_zero_size() {
        assert!(matches!(
            chunk(&[1, 2, 3], 0),
            Err(SeqKitError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_flatten_deep() {
        let mut deep = Nested::Item(7);
        for _ in 0..1_000 {
            deep = Nested::List(vec![deep]);
        }
        assert_eq!(deep.depth(), 1_000);
        assert_eq!(deep.flatten(), vec![7]);
    }

    #[test]
    fn test_shift_large_offsets() {
        assert_eq!(shift(&[10, 20, 30, 40, 50], -3), vec![40, 50, 10, 20, 30]);
        assert_eq!(shift(&[1, 2, 3], 7), vec![3, 1, 2]);
        assert_eq!(shift(&[1, 2, 3], isize::MIN), shift(&[1, 2, 3], isize::MIN % 3));
        assert!(shift::<i32>(&[], 4).is_empty());
    }

    #[test]
    fn test_swap_small() {
        assert!(swap_head_and_tail::<i32>(&[]).is_empty());
        assert_eq!(swap_head_and_tail(&[1]), vec![1]);
    }

    #[test]
    fn test_insert_at_bounds() {
        assert_eq!(insert_at(&['b', 'c'], 'x', 0).unwrap(), vec!['x', 'b', 'c']);
        assert_eq!(insert_at(&['b', 'c'], 'x', 2).unwrap(), vec!['b', 'c', 'x']);
        assert!(matches!(
            insert_at(&['b', 'c'], 'x', 3),
            Err(SeqKitError::IndexOutOfBounds {
                index: 3,
                length: 2
            })
        ));
    }
}
