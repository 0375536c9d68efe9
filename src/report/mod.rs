//! Reporting utilities: mapping diffs and formatted terminal output.
//!
//! We keep formatting code in one place so the matching/reconcile code stays
//! free of presentation concerns.

pub mod format;

pub use format::*;

use crate::domain::ReconciliationMap;

/// Differences between two mappings (e.g. a previous export and this run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingDiff {
    /// Slugs mapped now but not before: `(slug, target)`.
    pub added: Vec<(String, String)>,
    /// Slugs mapped before but not now: `(slug, old_target)`.
    pub removed: Vec<(String, String)>,
    /// Slugs whose target changed: `(slug, old_target, new_target)`.
    pub changed: Vec<(String, String, String)>,
}

impl MappingDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare `previous` with `current`. Output vectors are sorted by slug.
pub fn diff_mappings(previous: &ReconciliationMap, current: &ReconciliationMap) -> MappingDiff {
    let mut diff = MappingDiff::default();

    for (slug, target) in current {
        match previous.get(slug) {
            None => diff.added.push((slug.clone(), target.clone())),
            Some(old) if old != target => diff.changed.push((slug.clone(), old.clone(), target.clone())),
            Some(_) => {}
        }
    }
    for (slug, old) in previous {
        if !current.contains_key(slug) {
            diff.removed.push((slug.clone(), old.clone()));
        }
    }

    diff
}
