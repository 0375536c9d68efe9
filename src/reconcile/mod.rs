//! Batch reconciliation of a whole source catalog.
//!
//! Every record is matched independently against the same read-only target set
//! and override table, so the parallel path just shards records over the rayon
//! pool. Outcomes are collected in input order before the map is assembled, which
//! keeps "later duplicate slug wins" identical in both modes.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::domain::{MatchOutcome, MatchTier, ReconciliationMap, SourceModelRecord, UnmatchedRecord};
use crate::matching::{Matcher, TargetSet};
use crate::overrides::{OverrideEntry, OverrideTable};

/// Reconciliation knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions {
    /// Shard records across the rayon thread pool.
    pub parallel: bool,
}

/// Per-tier hit counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub overrides: usize,
    pub exact: usize,
    pub normalized: usize,
    pub unmatched: usize,
}

impl TierCounts {
    fn record(&mut self, tier: Option<MatchTier>) {
        match tier {
            Some(MatchTier::Override) => self.overrides += 1,
            Some(MatchTier::Exact) => self.exact += 1,
            Some(MatchTier::Normalized) => self.normalized += 1,
            None => self.unmatched += 1,
        }
    }

    pub fn matched(&self) -> usize {
        self.overrides + self.exact + self.normalized
    }

    pub fn get(&self, tier: MatchTier) -> usize {
        match tier {
            MatchTier::Override => self.overrides,
            MatchTier::Exact => self.exact,
            MatchTier::Normalized => self.normalized,
        }
    }
}

/// Full result of a reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Matched source slug -> outcome (target + tier).
    pub matches: BTreeMap<String, MatchOutcome>,
    /// Records with no match, in input order.
    pub unmatched: Vec<UnmatchedRecord>,
    /// Counts per record processed (duplicates included).
    pub counts: TierCounts,
    pub source_count: usize,
    pub target_count: usize,
}

impl Reconciliation {
    /// The plain slug -> target id mapping.
    pub fn mapping(&self) -> ReconciliationMap {
        self.matches
            .iter()
            .map(|(slug, m)| (slug.clone(), m.target_id.clone()))
            .collect()
    }
}

/// Reconcile `records` against `targets` using `overrides`.
pub fn reconcile(
    records: &[SourceModelRecord],
    targets: &TargetSet,
    overrides: &OverrideTable,
    options: ReconcileOptions,
) -> Reconciliation {
    let matcher = Matcher::new(overrides);
    let match_one = |r: &SourceModelRecord| matcher.find(&r.slug, &r.creator_slug, targets);

    let outcomes: Vec<Option<MatchOutcome>> = if options.parallel {
        records.par_iter().map(match_one).collect()
    } else {
        records.iter().map(match_one).collect()
    };

    let mut out = Reconciliation {
        source_count: records.len(),
        target_count: targets.len(),
        ..Reconciliation::default()
    };

    for (record, outcome) in records.iter().zip(outcomes) {
        out.counts.record(outcome.as_ref().map(|m| m.tier));
        match outcome {
            Some(m) => {
                tracing::debug!(slug = %record.slug, target = %m.target_id, tier = %m.tier, "matched");
                out.matches.insert(record.slug.clone(), m);
            }
            None => {
                tracing::debug!(slug = %record.slug, creator = %record.creator_slug, "unmatched");
                out.unmatched.push(UnmatchedRecord {
                    slug: record.slug.clone(),
                    creator_slug: record.creator_slug.clone(),
                });
            }
        }
    }

    tracing::info!(
        sources = out.source_count,
        targets = out.target_count,
        matched = out.counts.matched(),
        unmatched = out.counts.unmatched,
        parallel = options.parallel,
        "reconciliation finished"
    );

    out
}

/// Build the slug -> target mapping with the built-in override table.
///
/// Target ids are deduplicated into a set once; unmatched records are omitted.
pub fn build_map<I, S>(records: &[SourceModelRecord], target_ids: I) -> ReconciliationMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let targets: TargetSet = target_ids.into_iter().collect();
    reconcile(records, &targets, OverrideTable::builtin(), ReconcileOptions { parallel: false }).mapping()
}

/// `build_map`, with records sharded across the rayon pool.
pub fn build_map_parallel<I, S>(records: &[SourceModelRecord], target_ids: I) -> ReconciliationMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let targets: TargetSet = target_ids.into_iter().collect();
    reconcile(records, &targets, OverrideTable::builtin(), ReconcileOptions { parallel: true }).mapping()
}

/// Override entries whose target is absent from `universe`.
pub fn stale_overrides(table: &OverrideTable, universe: &TargetSet) -> Vec<OverrideEntry> {
    table
        .entries()
        .into_iter()
        .filter(|e| !universe.contains(&e.target_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WELL_KNOWN_TARGET_IDS;

    fn rec(slug: &str, creator: &str) -> SourceModelRecord {
        SourceModelRecord::new(slug, creator)
    }

    fn sample_records() -> Vec<SourceModelRecord> {
        vec![
            rec("claude-3-5-sonnet", "anthropic"),
            rec("gemini 2_5.flash", "google"),
            rec("unlisted-model", "unknown"),
        ]
    }

    const SAMPLE_TARGETS: [&str; 3] = [
        "anthropic/claude-3.5-sonnet",
        "google/gemini-2.5-flash",
        "openai/gpt-4o",
    ];

    const BUILTIN_SLUGS: [&str; 3] = ["claude-35-sonnet", "claude-4-sonnet", "claude-3-5-haiku"];

    #[test]
    fn build_map_omits_unmatched() {
        let map = build_map(&sample_records(), SAMPLE_TARGETS);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("claude-3-5-sonnet").map(String::as_str),
            Some("anthropic/claude-3.5-sonnet")
        );
        assert_eq!(
            map.get("gemini 2_5.flash").map(String::as_str),
            Some("google/gemini-2.5-flash")
        );
        assert!(!map.contains_key("unlisted-model"));
    }

    #[test]
    fn empty_targets_give_empty_map() {
        let records: Vec<SourceModelRecord> = BUILTIN_SLUGS.iter().map(|s| rec(s, "anthropic")).collect();
        assert!(build_map(&records, Vec::<String>::new()).is_empty());
        assert!(build_map_parallel(&records, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn empty_records_give_empty_map() {
        assert!(build_map(&[], SAMPLE_TARGETS).is_empty());
    }

    #[test]
    fn duplicate_targets_are_deduplicated() {
        let result = reconcile(
            &sample_records(),
            &SAMPLE_TARGETS
                .iter()
                .chain(SAMPLE_TARGETS.iter())
                .copied()
                .collect::<TargetSet>(),
            OverrideTable::builtin(),
            ReconcileOptions::default(),
        );
        assert_eq!(result.target_count, 3);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut records = sample_records();
        for (slug, target) in crate::overrides::BUILTIN_OVERRIDES {
            let creator = target.split_once('/').map(|(c, _)| c).unwrap_or("");
            records.push(rec(slug, creator));
        }
        for id in WELL_KNOWN_TARGET_IDS {
            let (creator, model) = id.split_once('/').unwrap_or(("", *id));
            records.push(rec(&model.replace('.', "_"), creator));
        }

        let seq = build_map(&records, WELL_KNOWN_TARGET_IDS.iter().copied());
        let par = build_map_parallel(&records, WELL_KNOWN_TARGET_IDS.iter().copied());
        assert_eq!(seq, par);
        assert!(seq.len() >= crate::overrides::BUILTIN_OVERRIDES.len());
    }

    #[test]
    fn later_duplicate_slug_wins() {
        let records = vec![rec("gpt-4o", "openai"), rec("gpt-4o", "nobody")];
        let seq = build_map(&records, ["openai/gpt-4o"]);
        let par = build_map_parallel(&records, ["openai/gpt-4o"]);
        // The second record is unmatched, so the first record's match stays.
        assert_eq!(seq.get("gpt-4o").map(String::as_str), Some("openai/gpt-4o"));
        assert_eq!(seq, par);

        let records = vec![rec("model", "a"), rec("model", "b")];
        let map = build_map(&records, ["a/model", "b/model"]);
        assert_eq!(map.get("model").map(String::as_str), Some("b/model"));
    }

    #[test]
    fn counts_track_tiers() {
        let records = vec![
            rec("claude-35-sonnet", "anthropic"),
            rec("gpt-4o", "openai"),
            rec("gemini-2-0-flash-001", "google"),
            rec("nothing", "nobody"),
        ];
        let targets: TargetSet = WELL_KNOWN_TARGET_IDS.iter().copied().collect();
        let result = reconcile(&records, &targets, OverrideTable::builtin(), ReconcileOptions::default());

        assert_eq!(
            result.counts,
            TierCounts {
                overrides: 1,
                exact: 1,
                normalized: 1,
                unmatched: 1,
            }
        );
        assert_eq!(result.counts.matched(), 3);
        assert_eq!(result.counts.get(MatchTier::Exact), 1);
        assert_eq!(
            result.unmatched,
            vec![UnmatchedRecord {
                slug: "nothing".to_string(),
                creator_slug: "nobody".to_string(),
            }]
        );
        assert_eq!(result.source_count, 4);
    }

    #[test]
    fn stale_overrides_lists_missing_targets() {
        let table = OverrideTable::from_pairs([("a", "x/a"), ("b", "x/b")]);
        let universe: TargetSet = ["x/a"].into_iter().collect();
        let stale = stale_overrides(&table, &universe);
        assert_eq!(
            stale,
            vec![OverrideEntry {
                source_slug: "b".to_string(),
                target_id: "x/b".to_string(),
            }]
        );
    }

    #[test]
    fn builtin_overrides_are_not_stale_against_well_known() {
        let universe: TargetSet = WELL_KNOWN_TARGET_IDS.iter().copied().collect();
        assert!(stale_overrides(OverrideTable::builtin(), &universe).is_empty());
    }
}
