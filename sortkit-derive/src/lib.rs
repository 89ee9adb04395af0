//! Derive macro for sortkit's name-based comparison.
//!
//! # Available Derive Macros
//!
//! - [`Named`]: implements `sortkit::named::Named` and
//!   `sortkit::comparable::Comparable` from a name field
//!
//! # Example
//!
//! ```rust,ignore
//! use sortkit::named::Named;
//!
//! #[derive(Named)]
//! struct Country {
//!     name: String,
//!     population: u64,
//! }
//!
//! // Generated:
//! // - Named::name() returns `&self.name`
//! // - Comparable::compare_to() delegates to Named::compare_names()
//! // - Comparable::equals() delegates to Named::names_equal()
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod named;

use proc_macro::TokenStream;

/// Derive macro for name-based identity and ordering.
///
/// Implements `sortkit::named::Named` by reading a name field, and
/// `sortkit::comparable::Comparable` on top of it.
///
/// # Selecting the Name Field
///
/// - A field marked `#[named]` (works for tuple structs too), or
/// - a field called `name`.
///
/// The field's type must implement `AsRef<str>`.
///
/// # Keeping Existing Equality
///
/// `#[named(equals = path)]` on the struct makes `Comparable::equals` call
/// `path(&self, &other) -> bool` instead of `Named::names_equal`. Ordering
/// still follows the name.
///
/// # Example
///
/// ```rust,ignore
/// use sortkit::named::Named;
///
/// #[derive(Named)]
/// #[named(equals = Account::same_number)]
/// struct Account {
///     #[named]
///     holder: String,
///     number: u32,
/// }
///
/// impl Account {
///     fn same_number(&self, other: &Self) -> bool {
///         self.number == other.number
///     }
/// }
/// ```
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::sortkit::named::Named for Account {
///     fn name(&self) -> &str { AsRef::<str>::as_ref(&self.holder) }
/// }
///
/// impl ::sortkit::comparable::Comparable for Account {
///     fn compare_to(&self, other: &Self) -> Ordering { Named::compare_names(self, other) }
///     fn equals(&self, other: &Self) -> bool { Account::same_number(self, other) }
/// }
/// ```
#[proc_macro_derive(Named, attributes(named))]
pub fn derive_named(input: TokenStream) -> TokenStream {
    named::derive_named_impl(input)
}
