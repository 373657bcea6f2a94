use std::{
    mem,
    ops::{Deref, DerefMut},
};

use super::{drop, Value};

/// A heterogeneous list of values with a non-recursive drop impl.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct List {
    /// The inner [`Value`]s of the list.
    pub inner: Vec<Value>,
}

impl List {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates a new, empty list with space for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }
}

impl Drop for List {
    fn drop(&mut self) {
        self.inner.drain(..).for_each(drop::safely);
    }
}

impl Deref for List {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for List {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<Vec<Value>> for List {
    fn from(inner: Vec<Value>) -> Self {
        Self { inner }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = <Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.inner).into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = <&'a Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut List {
    type Item = &'a mut Value;
    type IntoIter = <&'a mut Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
