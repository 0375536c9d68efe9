//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - read from catalog payloads and local files
//! - passed through the matcher/reconciler
//! - exported to JSON/CSV for downstream consumers

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the benchmark (source) catalog.
///
/// Accepts two JSON shapes:
///
/// - flat: `{"slug": "...", "creator_slug": "...", "evaluations": {...}}`
/// - benchmark API: `{"slug": "...", "model_creator": {"slug": "..."}, "evaluations": {...}}`
///
/// `evaluations` is carried through untouched (any JSON values); matching never
/// looks at it. A record without a slug does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSourceRecord")]
pub struct SourceModelRecord {
    pub slug: String,
    pub creator_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub evaluations: Map<String, Value>,
}

impl SourceModelRecord {
    pub fn new(slug: impl Into<String>, creator_slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            creator_slug: creator_slug.into(),
            name: None,
            evaluations: Map::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSourceRecord {
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    creator_slug: Option<String>,
    #[serde(default)]
    model_creator: Option<CreatorRef>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    evaluations: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct CreatorRef {
    #[serde(default)]
    slug: Option<String>,
}

impl TryFrom<RawSourceRecord> for SourceModelRecord {
    type Error = String;

    fn try_from(raw: RawSourceRecord) -> Result<Self, Self::Error> {
        let Some(slug) = raw.slug else {
            return Err("source record has no slug".to_string());
        };
        // An explicit flat creator wins over the nested API form; a record with
        // neither gets an empty namespace and simply matches less.
        let creator_slug = raw
            .creator_slug
            .or_else(|| raw.model_creator.and_then(|c| c.slug))
            .unwrap_or_default();
        Ok(Self {
            slug,
            creator_slug,
            name: raw.name,
            evaluations: raw.evaluations.unwrap_or_default(),
        })
    }
}

/// Matching strategy, in the order the matcher tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Hand-curated override table.
    Override,
    /// Case-folded `creator/slug` set membership.
    Exact,
    /// Canonicalized, version-suffix-stripped composite key comparison.
    Normalized,
}

impl MatchTier {
    /// Evaluation order. The first tier that produces a target wins.
    pub const ALL: [MatchTier; 3] = [MatchTier::Override, MatchTier::Exact, MatchTier::Normalized];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            MatchTier::Override => "override",
            MatchTier::Exact => "exact",
            MatchTier::Normalized => "normalized",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A successful match and the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub target_id: String,
    pub tier: MatchTier,
}

/// Source slug (raw, as read) -> matched target identifier.
///
/// Only matched records appear; absence is the "no match" signal.
pub type ReconciliationMap = BTreeMap<String, String>;

/// Source record that found no target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedRecord {
    pub slug: String,
    pub creator_slug: String,
}

/// Where the target identifier universe comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// A local file (JSON or one id per line).
    File(PathBuf),
    /// The built-in list of well-known marketplace ids.
    WellKnown,
    /// Live marketplace catalog.
    Marketplace,
}

/// Output format for mapping exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Resolved configuration for a `xref reconcile` run.
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Local source catalog; `None` fetches from the benchmark API.
    pub source_file: Option<PathBuf>,
    pub targets: TargetSource,
    /// Extra overrides merged over (or replacing) the built-in table.
    pub overrides_file: Option<PathBuf>,
    pub builtin_overrides: bool,
    pub parallel: bool,
    pub show_unmatched: usize,
    pub export: Option<PathBuf>,
    pub export_format: ExportFormat,
    /// Earlier mapping export to diff this run against.
    pub previous: Option<PathBuf>,
}

/// Serialized mapping written by `xref reconcile --export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub source_count: usize,
    pub target_count: usize,
    pub mappings: ReconciliationMap,
}
