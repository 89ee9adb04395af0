//! Two-level grouping of values.
//!
//! [`NestedMap`] groups values under an outer and an inner key. The first
//! value stored at a path is kept as is; storing more values at the same
//! path turns the slot into a list, in insertion order.
//!
//! ```text
//! nest_into("foo", "bar", 123)    {foo: {bar: 123}}
//! nest_into("foo", "baz", 456)    {foo: {bar: 123, baz: 456}}
//! nest_into("foo", "bar", 789)    {foo: {bar: [123, 789], baz: 456}}
//! ```

use std::collections::BTreeMap;

/// A slot of a [`NestedMap`]: one value, or several in insertion order.
///
/// With the `serde` feature a slot is written as the bare value or as a list.
/// Reading prefers a single value; otherwise a list gives `Many`, except that
/// a one-item list gives `One` and an empty list is rejected. For a `V` that
/// accepts any input (such as `serde_json::Value`) every slot reads as `One`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<V> {
    /// A single value.
    One(V),
    /// Two or more values.
    Many(Vec<V>),
}

impl<V> Nested<V> {
    /// Appends a value, turning a single value into a list.
    pub fn push(&mut self, value: V) {
        *self = match std::mem::replace(self, Self::Many(Vec::new())) {
            Self::One(first) => Self::Many(vec![first, value]),
            Self::Many(mut values) => {
                values.push(value);
                Self::Many(values)
            }
        };
    }

    /// Returns the values of the slot in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Returns the number of values in the slot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the slot holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.as_slice().iter()
    }

    /// Consumes the slot and returns its values in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum NestedRepr<V> {
    One(V),
    Many(Vec<V>),
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for Nested<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <NestedRepr<V> as serde::Deserialize>::deserialize(deserializer)? {
            NestedRepr::One(value) => Ok(Self::One(value)),
            NestedRepr::Many(mut values) => match values.len() {
                0 => Err(serde::de::Error::invalid_length(
                    0,
                    &"a value or a non-empty list",
                )),
                1 => values
                    .pop()
                    .map(Self::One)
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &"one value")),
                _ => Ok(Self::Many(values)),
            },
        }
    }
}

/// Values grouped under an outer and an inner key.
///
/// Keys are kept in ascending order.
///
/// # Examples
///
/// ```rust
/// use sortkit::utils::{Nested, NestedMap};
///
/// let mut map = NestedMap::new();
/// map.nest_into("foo", "bar", 123)
///     .nest_into("foo", "baz", 456)
///     .nest_into("foo", "bar", 789);
///
/// assert_eq!(map.get("foo", "bar"), Some(&Nested::Many(vec![123, 789])));
/// assert_eq!(map.get("foo", "baz"), Some(&Nested::One(456)));
/// assert_eq!(map.get("qux", "bar"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NestedMap<V> {
    groups: BTreeMap<String, BTreeMap<String, Nested<V>>>,
}

impl<V> NestedMap<V> {
    /// Creates a new empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Stores `value` under `outer` and `inner`.
    ///
    /// If the path already holds values, `value` is appended after them.
    /// Returns the map so that calls can be chained.
    pub fn nest_into(
        &mut self,
        outer: impl Into<String>,
        inner: impl Into<String>,
        value: V,
    ) -> &mut Self {
        let group = self.groups.entry(outer.into()).or_default();
        match group.entry(inner.into()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(Nested::One(value));
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                slot.get_mut().push(value);
            }
        }
        self
    }

    /// Returns the slot stored under `outer` and `inner`.
    #[must_use]
    pub fn get(&self, outer: &str, inner: &str) -> Option<&Nested<V>> {
        self.groups.get(outer)?.get(inner)
    }

    /// Returns every slot stored under `outer`, keyed by inner key.
    #[must_use]
    pub fn group(&self, outer: &str) -> Option<&BTreeMap<String, Nested<V>>> {
        self.groups.get(outer)
    }

    /// Returns the number of outer groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns an iterator over `(outer, inner, slot)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Nested<V>)> {
        self.groups.iter().flat_map(|(outer, group)| {
            group
                .iter()
                .map(move |(inner, slot)| (outer.as_str(), inner.as_str(), slot))
        })
    }

    /// Consumes the map and returns the underlying groups.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, BTreeMap<String, Nested<V>>> {
        self.groups
    }
}

impl<V> Default for NestedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
