//! # sortkit
//!
//! Generic utility primitives built around a comparison contract.
//!
//! ## Overview
//!
//! - **Comparison contract**: [`Comparable`](comparable::Comparable), with
//!   built-in adapters for numbers, characters and locale-aware text
//! - **Sorted set**: [`SortedSet`](collections::SortedSet), an ordered
//!   unique collection with set algebra
//! - **Naming**: [`Named`](named::Named) derives comparison from a name
//! - **Deferred results**: a future settled from the outside through a
//!   [`Completer`](deferred::Completer)
//! - **Utilities**: emptiness-aware fallbacks and nested grouping
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Named)]`
//! - `async`: the `deferred` module
//! - `serde`: serialization of `SortedSet`
//! - `tracing`: debug events from the `deferred` module
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let set: SortedSet<&str> = ["baz", "qux", "foo", "bar"].into_iter().collect();
//! let ordered: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(ordered, vec!["bar", "baz", "foo", "qux"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sortkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::comparable::*;
    pub use crate::named::*;
    pub use crate::utils::*;

    #[cfg(feature = "async")]
    pub use crate::deferred::*;
}

pub mod collections;
pub mod comparable;
pub mod named;
pub mod utils;

#[cfg(feature = "async")]
pub mod deferred;
