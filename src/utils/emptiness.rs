//! Emptiness-aware fallbacks.
//!
//! A value is considered empty if:
//!
//! - it is a **collection** that contains no items,
//! - it is a **float** with a value of `NaN`,
//! - it is a **string** that is blank or contains only whitespace, or
//! - it is **`None`**.
//!
//! Integers, characters and `bool` are never empty.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::collections::SortedSet;

/// Types whose values can be empty.
///
/// # Examples
///
/// ```rust
/// use sortkit::utils::Emptiness;
///
/// assert!("   ".is_empty_value());
/// assert!(f64::NAN.is_empty_value());
/// assert!(!false.is_empty_value());
/// assert!(Vec::<i32>::new().is_empty_value());
/// ```
pub trait Emptiness {
    /// Returns `true` if the value is empty.
    fn is_empty_value(&self) -> bool;
}

/// Returns `value` if it is not empty, or `substitute` if it is.
///
/// # Examples
///
/// ```rust
/// use sortkit::utils::if_empty;
///
/// assert_eq!(if_empty(Vec::new(), vec!["foo"]), vec!["foo"]);
/// assert_eq!(if_empty(vec!["foo"], Vec::new()), vec!["foo"]);
/// assert_eq!(if_empty("  ", "foo"), "foo");
/// assert_eq!(if_empty(None, Some(1)), Some(1));
/// assert!(!if_empty(false, true));
/// ```
#[inline]
pub fn if_empty<V: Emptiness>(value: V, substitute: V) -> V {
    if value.is_empty_value() {
        substitute
    } else {
        value
    }
}

/// Returns `value` if it is not empty, or the result of `substitute` if it
/// is. The substitute is only computed when needed.
///
/// # Examples
///
/// ```rust
/// use sortkit::utils::if_empty_with;
///
/// let name = if_empty_with(String::from(" "), || String::from("anonymous"));
/// assert_eq!(name, "anonymous");
/// ```
#[inline]
pub fn if_empty_with<V, F>(value: V, substitute: F) -> V
where
    V: Emptiness,
    F: FnOnce() -> V,
{
    if value.is_empty_value() {
        substitute()
    } else {
        value
    }
}

// =============================================================================
// Text
// =============================================================================

impl Emptiness for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiness for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

// =============================================================================
// Scalars
// =============================================================================

macro_rules! impl_never_empty {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Emptiness for $scalar {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_empty!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char
);

impl Emptiness for f32 {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl Emptiness for f64 {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<T: Emptiness + ?Sized> Emptiness for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for Box<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiness::is_empty_value)
    }
}

// =============================================================================
// Collections
// =============================================================================

impl<T> Emptiness for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiness for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> Emptiness for Vec<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for SortedSet<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
