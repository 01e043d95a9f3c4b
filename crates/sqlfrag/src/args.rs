//! Ordered argument storage.
//!
//! [`Arguments`] is the container a resolution appends into: positional
//! values in bind order plus named bindings in insertion order. Resolution
//! only ever appends; nothing is removed or reordered, so two containers
//! built from the same fragment walk compare equal.

use crate::value::Value;

/// An ordered collection of bound values, optionally addressable by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Arguments {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from an ordered sequence of values.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }

    /// Build a container from name/value pairs, keeping insertion order.
    pub fn from_named<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Value>,
    {
        Self {
            positional: Vec::new(),
            named: pairs.into_iter().map(|(n, v)| (n.into(), v.into())).collect(),
        }
    }

    /// Append a positional value and return its 1-based bind index.
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.positional.push(value.into());
        self.positional.len()
    }

    /// Append a named binding.
    ///
    /// Binding a name twice keeps both pairs;
    /// [`get_named`](Self::get_named) returns the most recent one.
    pub fn push_named(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.named.push((name.into(), value.into()));
    }

    /// Append every value of `other`, preserving its internal order.
    pub fn extend(&mut self, other: &Arguments) {
        self.positional.extend(other.positional.iter().cloned());
        self.named.extend(other.named.iter().cloned());
    }

    /// Total number of bound values, positional and named.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Check whether the container holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Positional values in bind order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named bindings in insertion order.
    pub fn named(&self) -> &[(String, Value)] {
        &self.named
    }

    /// Positional value at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Most recent binding for `name`, if any.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.named.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}
