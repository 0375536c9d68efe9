//! The individual match strategies.
//!
//! Each tier is a pure function of the source query, the target set and (for the
//! override tier) the override table. A tier returns the matched id borrowed from
//! the target set, so a hit is always a member of the set.

use crate::domain::MatchTier;
use crate::matching::TargetSet;
use crate::normalize::{composite_key, normalize_composite_id};
use crate::overrides::OverrideTable;

/// The `(slug, creator)` pair being matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceQuery<'q> {
    pub slug: &'q str,
    pub creator_slug: &'q str,
}

impl MatchTier {
    /// Run this tier against `targets`.
    pub fn attempt<'t>(
        self,
        query: &SourceQuery<'_>,
        targets: &'t TargetSet,
        overrides: &OverrideTable,
    ) -> Option<&'t str> {
        match self {
            MatchTier::Override => override_tier(query, targets, overrides),
            MatchTier::Exact => exact_tier(query, targets),
            MatchTier::Normalized => normalized_tier(query, targets),
        }
    }
}

/// Override lookup on the canonical slug alone. A target missing from the set is
/// a miss, not an error.
pub fn override_tier<'t>(
    query: &SourceQuery<'_>,
    targets: &'t TargetSet,
    overrides: &OverrideTable,
) -> Option<&'t str> {
    overrides.resolve(query.slug).and_then(|id| targets.get(id))
}

/// Case-folded `creator/slug` membership, no other canonicalization.
pub fn exact_tier<'t>(query: &SourceQuery<'_>, targets: &'t TargetSet) -> Option<&'t str> {
    if query.slug.is_empty() {
        return None;
    }
    let key = format!(
        "{}/{}",
        query.creator_slug.to_lowercase(),
        query.slug.to_lowercase()
    );
    targets.get(&key)
}

/// Linear scan for the first candidate whose composite key equals the source's.
///
/// When several candidates share a key the winner depends on set iteration
/// order and is deliberately left unspecified.
pub fn normalized_tier<'t>(query: &SourceQuery<'_>, targets: &'t TargetSet) -> Option<&'t str> {
    let key = composite_key(query.creator_slug, query.slug);
    if !is_matchable_key(&key) {
        return None;
    }
    targets
        .iter()
        .find(|candidate| normalize_composite_id(candidate) == key)
}

/// Keys with no model component never match anything.
fn is_matchable_key(key: &str) -> bool {
    !key.is_empty() && !key.ends_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q<'a>(slug: &'a str, creator_slug: &'a str) -> SourceQuery<'a> {
        SourceQuery { slug, creator_slug }
    }

    #[test]
    fn override_tier_requires_target_in_set() {
        let table = OverrideTable::from_pairs([("grok-3", "x-ai/grok-3")]);
        let with: TargetSet = ["x-ai/grok-3"].into_iter().collect();
        let without: TargetSet = ["xai/grok-3"].into_iter().collect();

        assert_eq!(override_tier(&q("Grok 3", "xai"), &with, &table), Some("x-ai/grok-3"));
        assert_eq!(override_tier(&q("grok-3", "xai"), &without, &table), None);
    }

    #[test]
    fn exact_tier_folds_case_only() {
        let targets: TargetSet = ["openai/gpt-4o", "google/gemini-2.5-flash"].into_iter().collect();
        assert_eq!(exact_tier(&q("GPT-4o", "OpenAI"), &targets), Some("openai/gpt-4o"));
        assert_eq!(exact_tier(&q("gemini-2-5-flash", "google"), &targets), None);
        assert_eq!(exact_tier(&q("", "openai"), &targets), None);
    }

    #[test]
    fn normalized_tier_bridges_separators_and_suffixes() {
        let targets: TargetSet = ["google/gemini-2.0-flash-001"].into_iter().collect();
        assert_eq!(
            normalized_tier(&q("gemini-2-0-flash", "google"), &targets),
            Some("google/gemini-2.0-flash-001")
        );
    }

    #[test]
    fn normalized_tier_refuses_empty_model_keys() {
        let targets: TargetSet = ["acme/", "acme/-001", ""].into_iter().collect();
        assert_eq!(normalized_tier(&q("", "acme"), &targets), None);
        assert_eq!(normalized_tier(&q("", ""), &targets), None);
        assert_eq!(normalized_tier(&q("...", "acme"), &targets), None);
    }

    #[test]
    fn ambiguous_candidates_return_one_of_them() {
        let targets: TargetSet = ["acme/model-1.0", "acme/model_1_0"].into_iter().collect();
        let hit = normalized_tier(&q("model-1-0", "acme"), &targets);
        assert!(matches!(hit, Some("acme/model-1.0") | Some("acme/model_1_0")));
    }

    #[test]
    fn attempt_dispatches_by_tier() {
        let table = OverrideTable::empty();
        let targets: TargetSet = ["openai/gpt-4o"].into_iter().collect();
        let query = q("gpt-4o", "openai");
        assert_eq!(MatchTier::Override.attempt(&query, &targets, &table), None);
        assert_eq!(MatchTier::Exact.attempt(&query, &targets, &table), Some("openai/gpt-4o"));
        assert_eq!(
            MatchTier::Normalized.attempt(&query, &targets, &table),
            Some("openai/gpt-4o")
        );
    }
}
