//! Ordered collections over the [`Comparable`](crate::comparable::Comparable)
//! contract.
//!
//! - [`SortedSet`]: a unique, ascending collection with set algebra
//!
//! # Examples
//!
//! ```rust
//! use sortkit::collections::SortedSet;
//!
//! let left: SortedSet<&str> = ["bar", "foo"].into_iter().collect();
//! let right: SortedSet<&str> = ["baz", "foo", "qux"].into_iter().collect();
//!
//! let shared: Vec<&str> = left.intersection(&right).into_iter().collect();
//! assert_eq!(shared, vec!["foo"]);
//!
//! let either: Vec<&str> = left.symmetric_difference(&right).into_iter().collect();
//! assert_eq!(either, vec!["bar", "baz", "qux"]);
//! ```

mod sorted_set;

pub use sorted_set::SortedSet;
pub use sorted_set::SortedSetEntries;
pub use sorted_set::SortedSetIntoIterator;
pub use sorted_set::SortedSetIterator;
