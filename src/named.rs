//! Name-based identity and ordering.
//!
//! [`Named`] gives an entity a textual name and derives comparison from it:
//!
//! - [`Named::compare_names`] orders by name, ignoring case and diacritics.
//! - [`Named::names_equal`] treats two entities as the same when their names
//!   match the same way. A blank name never equals anything.
//!
//! Both are provided methods, so a type overrides either one by defining it
//! in its `impl Named` block. The type then opts into [`Comparable`] built
//! on those methods, either with [`impl_comparable_by_name!`] or, with the
//! `derive` feature, `#[derive(Named)]`:
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use sortkit::collections::SortedSet;
//! use sortkit::named::Named;
//!
//! #[derive(Debug, Clone, Named)]
//! struct Team {
//!     name: String,
//! }
//!
//! let mut teams = SortedSet::new();
//! teams.add(Team { name: "Ötztal".to_string() });
//! teams.add(Team { name: "oslo".to_string() });
//! teams.add(Team { name: "Otztal".to_string() });
//!
//! let names: Vec<&str> = teams.iter().map(|team| team.name()).collect();
//! assert_eq!(names, vec!["oslo", "Ötztal"]);
//! # }
//! ```
//!
//! To keep an existing notion of equality while still ordering by name,
//! pass it to the derive: `#[named(equals = path::to::function)]`.

use std::cmp::Ordering;

use crate::comparable::collate::{self, Strength};

#[cfg(feature = "derive")]
pub use sortkit_derive::Named;

/// An entity identified by a textual name.
///
/// # Examples
///
/// ```rust
/// use sortkit::named::Named;
/// use std::cmp::Ordering;
///
/// struct City(String);
///
/// impl Named for City {
///     fn name(&self) -> &str {
///         &self.0
///     }
/// }
///
/// let zurich = City("Zürich".to_string());
/// assert_eq!(zurich.compare_names(&City("zurich".to_string())), Ordering::Equal);
/// assert!(zurich.names_equal(&City("ZURICH".to_string())));
/// assert!(!City(String::new()).names_equal(&City(String::new())));
/// ```
pub trait Named {
    /// Returns the name of the entity.
    fn name(&self) -> &str;

    /// Orders two entities by name, ignoring case and diacritics.
    fn compare_names(&self, other: &Self) -> Ordering {
        collate::compare(self.name(), other.name(), Strength::Primary)
    }

    /// Returns `true` if both entities carry the same name, ignoring case
    /// and diacritics.
    ///
    /// Returns `false` whenever `self`'s name is blank.
    fn names_equal(&self, other: &Self) -> bool {
        let name = self.name();
        !name.trim().is_empty() && collate::equivalent(name, other.name(), Strength::Primary)
    }
}

/// Implements [`Comparable`](crate::comparable::Comparable) for types that
/// implement [`Named`], delegating to [`Named::compare_names`] and
/// [`Named::names_equal`].
///
/// # Examples
///
/// ```rust
/// use sortkit::comparable::Comparable;
/// use sortkit::impl_comparable_by_name;
/// use sortkit::named::Named;
///
/// struct Tag(&'static str);
///
/// impl Named for Tag {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// impl_comparable_by_name!(Tag);
///
/// assert!(Tag("Rust").equals(&Tag("rust")));
/// ```
#[macro_export]
macro_rules! impl_comparable_by_name {
    ($($named:ty),+ $(,)?) => {
        $(
            impl $crate::comparable::Comparable for $named {
                #[inline]
                fn compare_to(&self, other: &Self) -> ::std::cmp::Ordering {
                    $crate::named::Named::compare_names(self, other)
                }

                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    $crate::named::Named::names_equal(self, other)
                }
            }
        )+
    };
}
