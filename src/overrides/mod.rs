//! Hand-curated override table.
//!
//! Maps canonical benchmark slugs straight to marketplace ids for cases the
//! normalization rules cannot bridge. The table is configuration: the built-in
//! entries live in `builtin.rs`, and users can merge a JSON object of extra
//! entries on top (`--overrides overrides.json`).
//!
//! An entry whose target is missing from the current target set is not an error;
//! the matcher just falls through to the next tier. Use `stale_overrides` in the
//! reconciler to detect such entries explicitly.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::AppError;
use crate::normalize::canonicalize;

pub mod builtin;

pub use builtin::BUILTIN_OVERRIDES;

static BUILTIN: LazyLock<OverrideTable> =
    LazyLock::new(|| OverrideTable::from_pairs(BUILTIN_OVERRIDES.iter().copied()));

/// One `(canonical source slug -> target id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub source_slug: String,
    pub target_id: String,
}

/// Immutable-by-convention override lookup keyed by canonical slug.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    /// The shared built-in table.
    pub fn builtin() -> &'static OverrideTable {
        &BUILTIN
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from `(slug, target)` pairs. Slugs are canonicalized;
    /// later pairs replace earlier ones with the same canonical slug.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        for (slug, target) in pairs {
            table.insert(slug.as_ref(), target);
        }
        table
    }

    /// Insert an entry, returning the previous target for that canonical slug.
    pub fn insert(&mut self, source_slug: &str, target_id: impl Into<String>) -> Option<String> {
        self.entries.insert(canonicalize(source_slug), target_id.into())
    }

    /// Look up an already-canonical slug.
    pub fn get(&self, canonical_slug: &str) -> Option<&str> {
        self.entries.get(canonical_slug).map(String::as_str)
    }

    /// Canonicalize a raw source slug and look it up.
    pub fn resolve(&self, source_slug: &str) -> Option<&str> {
        self.get(&canonicalize(source_slug))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by source slug.
    pub fn entries(&self) -> Vec<OverrideEntry> {
        let mut out: Vec<OverrideEntry> = self
            .entries
            .iter()
            .map(|(slug, target)| OverrideEntry {
                source_slug: slug.clone(),
                target_id: target.clone(),
            })
            .collect();
        out.sort_by(|a, b| a.source_slug.cmp(&b.source_slug));
        out
    }

    /// Merge `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: OverrideTable) {
        self.entries.extend(other.entries);
    }

    /// Parse a JSON object of `{"source-slug": "creator/model", ...}`.
    ///
    /// Entries with an empty slug or target are skipped with a warning.
    pub fn parse_json(text: &str) -> Result<Self, AppError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(text)
            .map_err(|e| AppError::config(format!("Invalid overrides JSON: {e}")))?;

        let mut table = Self::empty();
        for (slug, target) in raw {
            let target = target.trim();
            if canonicalize(&slug).is_empty() || target.is_empty() {
                tracing::warn!(slug = %slug, target = %target, "skipping empty override entry");
                continue;
            }
            table.insert(&slug, target);
        }
        Ok(table)
    }

    /// Read and parse an overrides file.
    pub fn load_json(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read overrides file '{}': {e}", path.display()))
        })?;
        Self::parse_json(&text)
    }
}
