//! Sorted set backed by a contiguous vector.
//!
//! [`SortedSet`] keeps its elements unique and in ascending order as defined
//! by [`Comparable::compare_to`], deciding uniqueness with
//! [`Comparable::equals`].
//!
//! # Time Complexity
//!
//! | Operation              | Complexity           |
//! |------------------------|----------------------|
//! | `add`                  | O(log n) + O(n) move |
//! | `delete`               | O(n)                 |
//! | `has`                  | O(n)                 |
//! | `size` / `len`         | O(1)                 |
//! | `clear`                | O(n) drop            |
//! | `iter` / `entries`     | O(1) + O(n)          |
//! | `union`                | O(m log (n + m))     |
//! | `difference`           | O(n * m)             |
//! | `intersection`         | O(min(n, m) * max(n, m)) |
//! | `symmetric_difference` | O(n * m)             |
//! | `is_subset_of` etc.    | O(n * m)             |
//!
//! Membership (`has`, `delete`) scans with `equals` rather than searching by
//! ordering, so a type whose `equals` is stricter than its ordering (such as
//! a [`Named`](crate::named::Named) type with a blank name) is still found.
//!
//! # Iteration and Mutation
//!
//! Iterators borrow the set, so the set cannot be changed while an iteration
//! is in progress:
//!
//! ```rust,compile_fail
//! use sortkit::collections::SortedSet;
//!
//! let mut set: SortedSet<i32> = [1, 2, 3].into_iter().collect();
//! for element in set.iter() {
//!     set.add(*element + 10);
//! }
//! ```
//!
//! Iterate over a clone (or collect first) to mutate based on the contents:
//!
//! ```rust
//! use sortkit::collections::SortedSet;
//!
//! let mut set: SortedSet<i32> = [1, 2, 3].into_iter().collect();
//! for element in set.clone().iter() {
//!     set.add(*element + 10);
//! }
//! assert_eq!(set.len(), 6);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::comparable::Comparable;

/// A collection of unique elements kept in ascending order.
///
/// Elements are ordered by [`Comparable::compare_to`] and deduplicated by
/// [`Comparable::equals`]. The construction order of the elements never
/// matters: every element goes through [`SortedSet::add`].
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement [`Comparable`] for every
///   operation that compares elements.
///
/// # Examples
///
/// ```rust
/// use sortkit::collections::SortedSet;
///
/// let mut set = SortedSet::new();
/// set.add("baz").add("qux").add("foo").add("bar");
///
/// let ordered: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(ordered, vec!["bar", "baz", "foo", "qux"]);
///
/// // Adding an existing element leaves the set unchanged
/// set.add("foo");
/// assert_eq!(set.size(), 4);
/// ```
#[derive(Clone)]
pub struct SortedSet<T> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(SortedSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> SortedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set: SortedSet<i32> = [3, 1, 3].into_iter().collect();
    /// assert_eq!(set.size(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the set. Same as [`SortedSet::size`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element from the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let mut set: SortedSet<&str> = ["foo"].into_iter().collect();
    /// set.clear();
    /// assert_eq!(set.size(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator is lazy and can be created any number of times; each
    /// one yields the same sequence as long as the set is not changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set: SortedSet<i32> = [3, 1, 2].into_iter().collect();
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next_back(), Some(&3));
    /// ```
    #[inline]
    pub fn iter(&self) -> SortedSetIterator<'_, T> {
        SortedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns an iterator over the elements in ascending order.
    /// Same as [`SortedSet::iter`].
    #[inline]
    pub fn keys(&self) -> SortedSetIterator<'_, T> {
        self.iter()
    }

    /// Returns an iterator over the elements in ascending order.
    /// Same as [`SortedSet::iter`].
    #[inline]
    pub fn values(&self) -> SortedSetIterator<'_, T> {
        self.iter()
    }

    /// Returns an iterator over `(element, element)` pairs in ascending
    /// order, where each element serves as both key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set: SortedSet<&str> = ["foo"].into_iter().collect();
    /// let entries: Vec<(&&str, &&str)> = set.entries().collect();
    /// assert_eq!(entries, vec![(&"foo", &"foo")]);
    /// ```
    #[inline]
    pub fn entries(&self) -> SortedSetEntries<'_, T> {
        SortedSetEntries {
            inner: self.elements.iter(),
        }
    }

    /// Calls `callback` once per element in ascending order with
    /// `(element, element, set)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set: SortedSet<i32> = [2, 1].into_iter().collect();
    /// let mut seen = Vec::new();
    /// set.for_each(|key, value, owner| {
    ///     assert_eq!(key, value);
    ///     assert_eq!(owner.size(), 2);
    ///     seen.push(*key);
    /// });
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, &T, &Self),
    {
        for element in &self.elements {
            callback(element, element, self);
        }
    }

    /// Returns the elements as a slice in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the element at `index` in ascending order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Consumes the set and returns its elements in ascending order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Comparable> SortedSet<T> {
    /// Adds `value` at its position in ascending order.
    ///
    /// The position is that of the first element comparing greater than or
    /// equal to `value`. If that element `equals` the value, the set is left
    /// unchanged. Returns the set so that calls can be chained.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons to locate the position, O(n) to shift the
    /// following elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.add(42).add(7).add(42);
    /// assert_eq!(set.as_slice(), &[7, 42]);
    /// ```
    pub fn add(&mut self, value: T) -> &mut Self {
        let position = self.successor_position(&value);
        match self.elements.get(position) {
            Some(successor) if successor.equals(&value) => {}
            _ => self.elements.insert(position, value),
        }
        self
    }

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if an element was removed, or `false` (leaving the set
    /// unchanged) if no element equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let mut set: SortedSet<&str> = ["foo"].into_iter().collect();
    /// assert!(!set.delete(&"bar"));
    /// assert!(set.delete(&"foo"));
    /// assert!(set.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(position) = self.elements.iter().position(|element| element.equals(value))
        else {
            return false;
        };
        self.elements.remove(position);
        true
    }

    /// Returns `true` if some element equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set: SortedSet<i32> = [1, 2].into_iter().collect();
    /// assert!(set.has(&1));
    /// assert!(!set.has(&3));
    /// ```
    #[must_use]
    pub fn has(&self, value: &T) -> bool {
        self.elements.iter().any(|element| element.equals(value))
    }

    /// Returns `true` if the two sets have no element in common.
    ///
    /// Iterates over the smaller set and stops at the first shared element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set_a: SortedSet<i32> = [1, 2].into_iter().collect();
    /// let set_b: SortedSet<i32> = [3, 4].into_iter().collect();
    /// let set_c: SortedSet<i32> = [2, 3].into_iter().collect();
    ///
    /// assert!(set_a.is_disjoint_from(&set_b));
    /// assert!(!set_a.is_disjoint_from(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint_from(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() > other.len() {
            (other, self)
        } else {
            (self, other)
        };
        !smaller.iter().any(|element| larger.has(element))
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let subset: SortedSet<i32> = [1, 2].into_iter().collect();
    /// let superset: SortedSet<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(subset.is_subset_of(&superset));
    /// assert!(!superset.is_subset_of(&subset));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.has(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let superset: SortedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let subset: SortedSet<i32> = [1, 2].into_iter().collect();
    ///
    /// assert!(superset.is_superset_of(&subset));
    /// assert!(!subset.is_superset_of(&superset));
    /// ```
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        if self.len() < other.len() {
            return false;
        }
        other.iter().all(|element| self.has(element))
    }

    /// Index of the first element that compares greater than or equal to
    /// `value`, or `len()` if there is none.
    fn successor_position(&self, value: &T) -> usize {
        self.elements
            .partition_point(|element| element.compare_to(value) == Ordering::Less)
    }
}

impl<T: Comparable + Clone> SortedSet<T> {
    /// Returns a new set with the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set_a: SortedSet<&str> = ["bar", "baz", "foo"].into_iter().collect();
    /// let set_b: SortedSet<&str> = ["bar", "baz"].into_iter().collect();
    ///
    /// let difference = set_a.difference(&set_b);
    /// assert_eq!(difference.as_slice(), &["foo"]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.has(element))
            .cloned()
            .collect()
    }

    /// Returns a new set with the elements found in both sets.
    ///
    /// Iterates over the smaller set, testing membership in the larger one,
    /// so elements of the result are taken from the smaller set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set_a: SortedSet<&str> = ["bar", "foo"].into_iter().collect();
    /// let set_b: SortedSet<&str> = ["baz", "foo", "qux"].into_iter().collect();
    ///
    /// assert_eq!(set_a.intersection(&set_b).as_slice(), &["foo"]);
    /// assert_eq!(set_b.intersection(&set_a).as_slice(), &["foo"]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() > other.len() {
            (other, self)
        } else {
            (self, other)
        };
        smaller
            .iter()
            .filter(|element| larger.has(element))
            .cloned()
            .collect()
    }

    /// Returns a new set with the elements found in exactly one of the sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set_a: SortedSet<&str> = ["bar", "foo"].into_iter().collect();
    /// let set_b: SortedSet<&str> = ["foo", "qux"].into_iter().collect();
    ///
    /// let symmetric = set_a.symmetric_difference(&set_b);
    /// assert_eq!(symmetric.as_slice(), &["bar", "qux"]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.extend(
            other
                .iter()
                .filter(|element| !self.has(element))
                .cloned(),
        );
        result
    }

    /// Returns a new set with the elements of both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::collections::SortedSet;
    ///
    /// let set_a: SortedSet<i32> = [1, 3].into_iter().collect();
    /// let set_b: SortedSet<i32> = [2, 3].into_iter().collect();
    ///
    /// assert_eq!(set_a.union(&set_b).as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the elements of a [`SortedSet`] in ascending
/// order.
#[derive(Debug, Clone)]
pub struct SortedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIterator<'_, T> {}

impl<T> FusedIterator for SortedSetIterator<'_, T> {}

/// Iterator over `(element, element)` pairs of a [`SortedSet`] in
/// ascending order.
#[derive(Debug, Clone)]
pub struct SortedSetEntries<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSetEntries<'a, T> {
    type Item = (&'a T, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|element| (element, element))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetEntries<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|element| (element, element))
    }
}

impl<T> ExactSizeIterator for SortedSetEntries<'_, T> {}

impl<T> FusedIterator for SortedSetEntries<'_, T> {}

/// Owning iterator over the elements of a [`SortedSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct SortedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIntoIterator<T> {}

impl<T> FusedIterator for SortedSetIntoIterator<T> {}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = SortedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Comparable> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Comparable> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Comparable> From<Vec<T>> for SortedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Comparable, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Comparable> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.equals(right))
    }
}

impl<T: Comparable> Eq for SortedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "SortedSet=[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Comparable,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Cap preallocation; the hint comes from untrusted input.
        let mut set = SortedSet::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Comparable,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
