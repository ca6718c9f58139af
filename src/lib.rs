//! Seqkit - Pure Array Transformations
//!
//! Seqkit is a flat library of independent sequence transformations:
//! interval generation, element search, filtering, flattening, chunking,
//! matrix construction, run lengths, rotation and head/tail swapping.
//!
//! # Key Characteristics
//!
//! - Every function borrows its input and returns a new value; nothing is
//!   mutated in place
//! - No shared state, so every function is reentrant and thread-safe
//! - Out-of-domain arguments fail fast with [`SeqKitError`] instead of
//!   producing malformed output
//! - Recursive shapes (nested arrays) are walked iteratively
//!
//! # Modules
//!
//! - **generate**: intervals, identity matrices, zero-filled arrays, odd numbers
//! - **search**: index lookup, occurrence counts, odd indices, common elements
//! - **filter**: falsy removal and counting, dedup, uniform string length
//! - **aggregate**: element-wise sums, rounded averages, balances
//! - **reshape**: head/tail, chunks, flatten, select-many, shift, swap, insert
//! - **ordering**: top-n, contiguous increasing runs, digit names, index paths
//! - **format**: string lengths, comma join, `#RRGGBB` colours
//!
//! Mixed-kind data uses [`Value`]; arbitrarily deep arrays use [`Nested`].
//!
//! # Examples
//!
//! ```
//! use seqkit::{chunk, shift, swap_head_and_tail};
//!
//! let seq = [1, 2, 3, 4, 5];
//! assert_eq!(shift(&seq, 2), vec![4, 5, 1, 2, 3]);
//! assert_eq!(swap_head_and_tail(&seq), vec![4, 5, 3, 1, 2]);
//! assert_eq!(chunk(&seq, 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```
//!
//! ```
//! use seqkit::{falsy_count, remove_falsy, Value};
//!
//! let seq = vec![Value::from(0), Value::from("0"), Value::Null, Value::from(true)];
//! assert_eq!(remove_falsy(&seq), vec![Value::from("0"), Value::from(true)]);
//! assert_eq!(falsy_count(&seq), 2);
//! ```

// Module declarations
pub mod error;
pub mod nested;
pub mod value;

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod generate;
pub mod ordering;
pub mod reshape;
pub mod search;

#[cfg(feature = "wasm")]
pub mod wasm_interface;

// Re-exports for convenient access
pub use error::{Result, SeqKitError};
pub use nested::Nested;
pub use value::Value;

pub use aggregate::{average, calculate_balance, sum_arrays};
pub use filter::{distinct, distinct_values, falsy_count, is_same_length, remove_falsy};
pub use format::{hex_rgb, join, string_lengths};
pub use generate::{generate_odds, identity_matrix, interval, n_dimensional_zeros};
pub use ordering::{
    get_by_indices, longest_increasing_run, max_items, propagate_by_index, sort_digit_names,
};
pub use reshape::{
    chunk, double_array, flatten, head, insert_at, select_many, shift, swap_head_and_tail, tail,
};
pub use search::{
    common_elements, count_occurrences, has_value_equal_to_index, index_of, indices_of_odd,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Seqkit";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
