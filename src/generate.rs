//! Range and generation functions.
//!
//! Builders for integer intervals, identity matrices, zero-filled nested
//! arrays and odd-number sequences.

use crate::{Nested, Result, SeqKitError};

/// Inclusive ascending range from `start` to `end` with step 1.
///
/// # Errors
///
/// Returns [`SeqKitError::InvalidParameter`] if `start > end`.
///
/// # Examples
///
/// ```
/// use seqkit::interval;
///
/// assert_eq!(interval(-2, 2).unwrap(), vec![-2, -1, 0, 1, 2]);
/// assert_eq!(interval(3, 3).unwrap(), vec![3]);
/// ```
pub fn interval(start: i64, end: i64) -> Result<Vec<i64>> {
    if start > end {
        return Err(SeqKitError::InvalidParameter(format!(
            "interval start {} exceeds end {}",
            start, end
        )));
    }
    Ok((start..=end).collect())
}

/// Square `n` x `n` identity matrix.
///
/// # Errors
///
/// Returns [`SeqKitError::InvalidParameter`] if `n == 0`.
///
/// # Examples
///
/// ```
/// use seqkit::identity_matrix;
///
/// assert_eq!(identity_matrix(2).unwrap(), vec![vec![1, 0], vec![0, 1]]);
/// ```
pub fn identity_matrix(n: usize) -> Result<Vec<Vec<u8>>> {
    if n == 0 {
        return Err(SeqKitError::InvalidParameter(
            "identity matrix size must be at least 1".into(),
        ));
    }
    Ok((0..n)
        .map(|row| (0..n).map(|col| u8::from(row == col)).collect())
        .collect())
}

/// Zero-filled nested array of depth `n` where every level has `size`
/// entries. `n == 1` gives a flat list of zeros.
///
/// # Errors
///
/// Returns [`SeqKitError::InvalidParameter`] if `n == 0` or `size == 0`.
///
/// # Examples
///
/// ```
/// use seqkit::{n_dimensional_zeros, nested};
///
/// assert_eq!(
///     n_dimensional_zeros(2, 2).unwrap(),
///     nested!([[0, 0], [0, 0]])
/// );
/// ```
pub fn n_dimensional_zeros(n: usize, size: usize) -> Result<Nested<i64>> {
    if n == 0 || size == 0 {
        return Err(SeqKitError::InvalidParameter(format!(
            "dimensions and size must be at least 1 (got n={}, size={})",
            n, size
        )));
    }

    // Built from the innermost level outwards.
    let mut level = Nested::List(vec![Nested::Item(0); size]);
    for _ in 1..n {
        level = Nested::List(vec![level; size]);
    }
    Ok(level)
}

/// The first `len` odd positive integers: `1, 3, 5, ...`.
///
/// # Examples
///
/// ```
/// use seqkit::generate_odds;
///
/// assert_eq!(generate_odds(5), vec![1, 3, 5, 7, 9]);
/// assert!(generate_odds(0).is_empty());
/// ```
pub fn generate_odds(len: usize) -> Vec<u64> {
    (1..=len as u64).map(|k| 2 * k - 1).collect()
}
