//! Core data types for greeting generation.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// How a batch treats a name that appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The greeting for a later occurrence replaces the earlier one.
    #[default]
    Overwrite,
    /// The batch fails at the first repeated name.
    Reject,
}

/// Greetings keyed by the name they were generated for.
///
/// Keys are unique and iterate in sorted order, so the `Debug` output is
/// stable for a given set of greetings:
///
/// ```
/// use greetings_lib::Greeter;
///
/// let mut greeter = Greeter::seeded(7);
/// let greetings = greeter.hellos(["Laura"]).unwrap();
/// assert!(format!("{greetings:?}").starts_with("{\"Laura\": \"Hi Laura, "));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Greetings(BTreeMap<String, String>);

impl Greetings {
    /// Creates an empty set of greetings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a greeting, returning the one it replaced, if any.
    pub(crate) fn insert(&mut self, name: String, greeting: String) -> Option<String> {
        self.0.insert(name, greeting)
    }

    /// Returns the greeting for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the greeted names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(name, greeting)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, greeting)| (name.as_str(), greeting.as_str()))
    }

    /// Consumes the greetings, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Debug for Greetings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl IntoIterator for Greetings {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Greetings> for BTreeMap<String, String> {
    fn from(greetings: Greetings) -> Self {
        greetings.0
    }
}
