//! Arbitrarily nested sequences.
//!
//! [`Nested<T>`] is either a leaf item or a list of further nested values,
//! so one type covers `[1, [2, [3, 4], 5], 6]`-shaped data of any depth.
//! The [`nested!`](crate::nested!) macro builds such values from literal
//! bracket syntax.

use serde::{Deserialize, Serialize};

/// A leaf item or a list of nested values.
///
/// Serializes untagged: lists become JSON arrays and items serialize as
/// themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A sequence of nested values
    List(Vec<Nested<T>>),
    /// A leaf element
    Item(T),
}

impl<T> Nested<T> {
    /// Build a single-level list from plain items.
    pub fn flat<I: IntoIterator<Item = T>>(items: I) -> Self {
        Nested::List(items.into_iter().map(Nested::Item).collect())
    }

    /// Returns `true` for [`Nested::List`].
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// The leaf value, if this is an item.
    #[inline]
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }

    /// The children, if this is a list.
    #[inline]
    pub fn as_list(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::List(children) => Some(children),
            Nested::Item(_) => None,
        }
    }

    /// Depth of the deepest list; `0` for an item, `1` for a flat list.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            if let Nested::List(children) = node {
                deepest = deepest.max(level + 1);
                stack.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

impl<T: Clone> Nested<T> {
    /// All leaf items in depth-first order.
    pub fn flatten(&self) -> Vec<T> {
        crate::reshape::flatten(std::slice::from_ref(self))
    }
}

impl<T> From<T> for Nested<T> {
    fn from(item: T) -> Self {
        Nested::Item(item)
    }
}

/// Build a [`Nested`] value from bracket syntax.
///
/// Each element is a single token tree: a literal, an identifier, a
/// parenthesized expression or another bracketed list.
///
/// ```
/// use seqkit::{nested, Nested};
///
/// let n: Nested<i32> = nested!([1, [2, [3, 4], 5], (-6)]);
/// assert_eq!(n.depth(), 3);
/// assert_eq!(n.flatten(), vec![1, 2, 3, 4, 5, -6]);
/// ```
#[macro_export]
macro_rules! nested {
    ([$($inner:tt),* $(,)?]) => {
        $crate::Nested::List(vec![$($crate::nested!($inner)),*])
    };
    ($item:expr) => {
        $crate::Nested::Item($item)
    };
}
