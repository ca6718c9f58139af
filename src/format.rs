//! String formatting of sequences.

use itertools::Itertools;
use std::fmt::Display;

use crate::{Result, SeqKitError};

/// Largest value accepted by [`hex_rgb`].
pub const MAX_RGB: u32 = 0xFF_FF_FF;

/// Length of each string, counted in `char`s.
///
/// A `char` is a Unicode scalar value, not a UTF-16 code unit: `"😀"` has
/// length 1.
///
/// # Examples
///
/// ```
/// use seqkit::string_lengths;
///
/// assert_eq!(string_lengths(&["", "a", "bc", "def"]), vec![0, 1, 2, 3]);
/// ```
pub fn string_lengths<S: AsRef<str>>(seq: &[S]) -> Vec<usize> {
    seq.iter().map(|s| s.as_ref().chars().count()).collect()
}

/// Comma-separated `Display` forms of the elements.
///
/// With [`Value`](crate::Value) elements, `null` and `undefined` contribute
/// empty strings.
///
/// # Examples
///
/// ```
/// use seqkit::{join, Value};
///
/// assert_eq!(join(&[1, 2, 3, 4, 5]), "1,2,3,4,5");
///
/// let mixed = vec![Value::from(0), Value::from(false), Value::from("cat"), Value::Null];
/// assert_eq!(join(&mixed), "0,false,cat,");
/// ```
pub fn join<T: Display>(seq: &[T]) -> String {
    seq.iter().join(",")
}

/// Format each colour as `#RRGGBB` in upper-case hex.
///
/// # Errors
///
/// Returns [`SeqKitError::InvalidParameter`] for values above [`MAX_RGB`].
///
/// # Examples
///
/// ```
/// use seqkit::hex_rgb;
///
/// assert_eq!(
///     hex_rgb(&[0, 255, 16777215]).unwrap(),
///     vec!["#000000", "#0000FF", "#FFFFFF"]
/// );
/// ```
pub fn hex_rgb(seq: &[u32]) -> Result<Vec<String>> {
    seq.iter()
        .map(|&colour| {
            if colour > MAX_RGB {
                Err(SeqKitError::InvalidParameter(format!(
                    "{} is outside the RGB range 0..={}",
                    colour, MAX_RGB
                )))
            } else {
                Ok(format!("#{:06X}", colour))
            }
        })
        .collect()
}
