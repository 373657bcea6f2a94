use std::{
    collections::BTreeMap,
    mem,
    ops::{Deref, DerefMut},
};

use super::{drop, Value};

/// An ordered mapping of [`Value`]s with a non-recursive drop impl.
///
/// Entries are kept in ascending key order, which is also the order
/// they are encoded in. Two maps with the same entries therefore
/// serialize identically, regardless of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Map {
    /// The inner key-value pairs of the map.
    pub inner: BTreeMap<Value, Value>,
}

impl Map {
    /// Creates a new, empty map.
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }
}

impl Drop for Map {
    fn drop(&mut self) {
        for (key, child) in mem::take(&mut self.inner) {
            drop::safely(key);
            drop::safely(child);
        }
    }
}

impl Deref for Map {
    type Target = BTreeMap<Value, Value>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Map {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<BTreeMap<Value, Value>> for Map {
    fn from(inner: BTreeMap<Value, Value>) -> Self {
        Self { inner }
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = <BTreeMap<Value, Value> as IntoIterator>::IntoIter;

    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.inner).into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Value, &'a Value);
    type IntoIter = <&'a BTreeMap<Value, Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
