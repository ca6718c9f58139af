//! Aggregation over numeric sequences.

use itertools::{EitherOrBoth, Itertools};
use std::ops::{Add, Sub};

/// Element-wise sum of two sequences of possibly different length.
///
/// Positions present in both are added as `a[i] + b[i]`; positions past the
/// end of the shorter sequence carry the longer one's value unchanged.
///
/// # Examples
///
/// ```
/// use seqkit::sum_arrays;
///
/// assert_eq!(sum_arrays(&[1, 2, 3], &[4, 5, 6]), vec![5, 7, 9]);
/// assert_eq!(sum_arrays(&[-1, 0, 1], &[1, 2, 3, 4]), vec![0, 2, 4, 4]);
/// ```
pub fn sum_arrays<T: Copy + Add<Output = T>>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .zip_longest(b)
        .map(|pair| match pair {
            EitherOrBoth::Both(&x, &y) => x + y,
            EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => x,
        })
        .collect()
}

/// Arithmetic mean rounded to two decimal places, `0.0` for empty input.
///
/// Rounding works on the exact decimal value of the mean, so `1.115`
/// (stored just below the midpoint) gives `1.11`. Exact midpoints such as
/// `0.125` round away from zero.
///
/// # Examples
///
/// ```
/// use seqkit::average;
///
/// assert_eq!(average(&[]), 0.0);
/// assert_eq!(average(&[1.0, 10.0, 100.0, 1000.0]), 277.75);
/// assert_eq!(average(&[2.0, 3.0, 3.0]), 2.67);
/// ```
pub fn average(seq: &[f64]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let mean = seq.iter().sum::<f64>() / seq.len() as f64;
    round_cents(mean)
}

/// Round to two decimals from the exact binary value of `x`.
fn round_cents(x: f64) -> f64 {
    let scaled = x * 100.0;
    // Only multiples of 1/8 can sit exactly on a midpoint; `{:.2}` would
    // send those to the even neighbour.
    if (x * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return scaled.round() / 100.0;
    }
    format!("{:.2}", x)
        .parse()
        .unwrap_or_else(|_| scaled.round() / 100.0)
}

/// Sum of `income - expense` over monthly `(income, expense)` records.
///
/// # Examples
///
/// ```
/// use seqkit::calculate_balance;
///
/// assert_eq!(calculate_balance(&[(10, 8), (5, 1)]), 6);
/// assert_eq!(calculate_balance(&[(10, 8), (1, 5)]), -2);
/// assert_eq!(calculate_balance::<i32>(&[]), 0);
/// ```
pub fn calculate_balance<T>(pairs: &[(T, T)]) -> T
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    pairs
        .iter()
        .fold(T::default(), |balance, &(income, expense)| {
            balance + (income - expense)
        })
}
