//! Small value helpers.
//!
//! - [`if_empty`]: fall back to a substitute when a value is empty
//! - [`NestedMap`]: two-level grouping that accumulates repeated entries

mod emptiness;
mod nested;

pub use emptiness::Emptiness;
pub use emptiness::if_empty;
pub use emptiness::if_empty_with;
pub use nested::Nested;
pub use nested::NestedMap;
