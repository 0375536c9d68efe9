//! Hash-set backed universe of valid target identifiers.

use std::collections::HashSet;

/// The set of target ids a run may match against.
///
/// Membership is exact (case-sensitive) string equality. Iteration order is
/// unspecified, which is what the normalized tier's "first found" scan sees.
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    ids: HashSet<String>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Borrow the stored id equal to `id`, if present.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.ids.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TargetSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
