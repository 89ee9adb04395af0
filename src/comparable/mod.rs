//! The comparison contract shared by every ordered structure in this crate.
//!
//! A type takes part in ordered collections by implementing [`Comparable`]:
//! an ordering comparator ([`Comparable::compare_to`]) and an equality
//! predicate ([`Comparable::equals`]). A type may order coarsely while
//! deciding identity more strictly, as [`Named`](crate::named::Named) types
//! do with blank names.
//!
//! Built-in adapters cover the primitive kinds:
//!
//! | Element kind               | `compare_to`                      | `equals`            |
//! |----------------------------|-----------------------------------|---------------------|
//! | integers, `bool`           | numeric / `Ord`                   | `==`                |
//! | `f32`, `f64`               | numeric, NaN last                 | numeric, NaN == NaN |
//! | `str`, `String`, `char`    | locale-aware ([`collate`])        | `==`                |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | delegates to `T`           | delegates to `T`    |
//! | [`Natural<T>`]             | `T: Ord`                          | `T: Eq`             |
//! | [`Reverse<T>`]             | reversed `T`                      | delegates to `T`    |
//!
//! # Examples
//!
//! ```rust
//! use sortkit::comparable::Comparable;
//! use std::cmp::Ordering;
//!
//! assert_eq!(1_i32.compare_to(&2), Ordering::Less);
//! assert_eq!("bar".compare_to(&"baz"), Ordering::Less);
//!
//! // Text is ordered the way people read it, not by code point
//! assert_eq!("apple".compare_to(&"Banana"), Ordering::Less);
//! assert_eq!("é".compare_to(&"f"), Ordering::Less);
//! ```

pub mod collate;

use std::cmp::{Ordering, Reverse};
use std::rc::Rc;
use std::sync::Arc;

pub use collate::Strength;

/// An entity with an identity that can be compared to others.
///
/// # Laws
///
/// For all `a`, `b`, `c` of the implementing type:
///
/// ```text
/// a.compare_to(b) == b.compare_to(a).reverse()
/// a.compare_to(b) == Less && b.compare_to(c) == Less  implies  a.compare_to(c) == Less
/// a.equals(b)  implies  a.compare_to(b) == Equal
/// ```
///
/// The last law is what lets an ordered container locate a value by its
/// position in the ordering before checking it with `equals`.
///
/// # Examples
///
/// ```rust
/// use sortkit::comparable::Comparable;
/// use std::cmp::Ordering;
///
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// impl Comparable for Version {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         self.major
///             .cmp(&other.major)
///             .then(self.minor.cmp(&other.minor))
///     }
/// }
///
/// let old = Version { major: 1, minor: 4 };
/// let new = Version { major: 2, minor: 0 };
/// assert_eq!(old.compare_to(&new), Ordering::Less);
/// assert!(old.equals(&Version { major: 1, minor: 4 }));
/// ```
pub trait Comparable {
    /// Determines which of two entities comes first.
    ///
    /// Returns [`Ordering::Equal`] if the two are equivalent for ordering
    /// purposes, [`Ordering::Less`] if `self` comes before `other`, and
    /// [`Ordering::Greater`] if it goes after.
    fn compare_to(&self, other: &Self) -> Ordering;

    /// Determines whether two entities are the same.
    ///
    /// The default implementation treats entities that compare as
    /// [`Ordering::Equal`] as the same.
    fn equals(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

// =============================================================================
// Numeric Adapters
// =============================================================================

macro_rules! impl_comparable_for_ord {
    ($($element:ty),* $(,)?) => {
        $(
            impl Comparable for $element {
                #[inline]
                fn compare_to(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_comparable_for_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool
);

macro_rules! impl_comparable_for_float {
    ($($element:ty),* $(,)?) => {
        $(
            impl Comparable for $element {
                /// Numeric order, so `-0.0` and `0.0` are equal. NaN sorts
                /// after every number and equals itself.
                #[inline]
                fn compare_to(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| self.is_nan().cmp(&other.is_nan()))
                }
            }
        )*
    };
}

impl_comparable_for_float!(f32, f64);

// =============================================================================
// Text Adapters
// =============================================================================

impl Comparable for str {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        collate::compare_text(self, other)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Comparable for String {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        collate::compare_text(self, other)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Comparable for char {
    fn compare_to(&self, other: &Self) -> Ordering {
        let mut left = [0; 4];
        let mut right = [0; 4];
        collate::compare_text(self.encode_utf8(&mut left), other.encode_utf8(&mut right))
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

// =============================================================================
// Pointer Adapters
// =============================================================================

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        (**self).compare_to(*other)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        (**self).compare_to(other)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Rc<T> {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        (**self).compare_to(other)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Arc<T> {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        (**self).compare_to(other)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(other)
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<T: Comparable> Comparable for Reverse<T> {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        other.0.compare_to(&self.0)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

/// Adapter that orders any [`Ord`] type by its natural ordering.
///
/// Useful for element types that already implement `Ord` but not
/// [`Comparable`], such as tuples or types from other crates.
///
/// # Examples
///
/// ```rust
/// use sortkit::collections::SortedSet;
/// use sortkit::comparable::Natural;
///
/// let set: SortedSet<Natural<(u8, char)>> =
///     [Natural((2, 'a')), Natural((1, 'b')), Natural((1, 'a'))]
///         .into_iter()
///         .collect();
///
/// let first = set.first().map(|natural| natural.0);
/// assert_eq!(first, Some((1, 'a')));
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural<T>(pub T);

impl<T: Ord> Comparable for Natural<T> {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    #[case(-1, 0, Ordering::Less)]
    fn test_integer_compare_to(#[case] left: i64, #[case] right: i64, #[case] expected: Ordering) {
        assert_eq!(left.compare_to(&right), expected);
    }

    #[rstest]
    fn test_float_nan_is_ordered_after_numbers() {
        assert_eq!(1.0_f64.compare_to(&f64::NAN), Ordering::Less);
        assert!(f64::NAN.equals(&f64::NAN));
    }

    #[rstest]
    fn test_float_signed_zeros_are_equal() {
        assert_eq!((-0.0_f64).compare_to(&0.0), Ordering::Equal);
        assert!((-0.0_f64).equals(&0.0));
        assert!(0.0_f32.equals(&-0.0));
    }

    #[rstest]
    #[case(f64::NAN, 1.0, Ordering::Greater)]
    #[case(f64::NEG_INFINITY, f64::NAN, Ordering::Less)]
    #[case(f64::INFINITY, f64::NAN, Ordering::Less)]
    #[case(-f64::NAN, f64::NAN, Ordering::Equal)]
    #[case(1.5, 2.5, Ordering::Less)]
    fn test_float_compare_to(#[case] left: f64, #[case] right: f64, #[case] expected: Ordering) {
        assert_eq!(left.compare_to(&right), expected);
    }

    #[rstest]
    fn test_text_equality_is_exact() {
        assert!("foo".equals(&"foo"));
        assert!(!"foo".equals(&"Foo"));
        assert_ne!("foo".compare_to(&"Foo"), Ordering::Equal);
    }

    #[rstest]
    fn test_string_and_str_agree() {
        let left = String::from("apple");
        let right = String::from("Banana");
        assert_eq!(left.compare_to(&right), "apple".compare_to(&"Banana"));
    }

    #[rstest]
    fn test_char_uses_collation() {
        assert_eq!('b'.compare_to(&'C'), Ordering::Less);
        assert_eq!('é'.compare_to(&'f'), Ordering::Less);
    }

    #[rstest]
    fn test_reverse_flips_ordering() {
        assert_eq!(Reverse(1_i32).compare_to(&Reverse(2)), Ordering::Greater);
        assert!(Reverse(1_i32).equals(&Reverse(1)));
    }

    #[rstest]
    fn test_pointer_adapters_delegate() {
        let boxed: Box<str> = Box::from("bar");
        let other: Box<str> = Box::from("baz");
        assert_eq!(boxed.compare_to(&other), Ordering::Less);

        let shared: Rc<i32> = Rc::new(5);
        assert!(shared.equals(&Rc::new(5)));

        let atomic: Arc<String> = Arc::new("x".to_string());
        assert_eq!(atomic.compare_to(&Arc::new("y".to_string())), Ordering::Less);
    }

    #[rstest]
    fn test_default_equals_follows_compare_to() {
        struct Parity(u8);

        impl Comparable for Parity {
            fn compare_to(&self, other: &Self) -> Ordering {
                (self.0 % 2).cmp(&(other.0 % 2))
            }
        }

        assert!(Parity(2).equals(&Parity(4)));
        assert!(!Parity(2).equals(&Parity(3)));
    }
}
