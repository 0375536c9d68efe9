//! Tiered matching of one source slug against a target set.
//!
//! The tiers run in `MatchTier::ALL` order (override -> exact -> normalized) and
//! the first hit wins. There is no scoring and no error path: an unmatched or
//! malformed input simply yields `None`.

pub mod target_set;
pub mod tiers;

pub use target_set::TargetSet;
pub use tiers::SourceQuery;

use crate::domain::{MatchOutcome, MatchTier};
use crate::overrides::OverrideTable;

/// Strategy chain bound to an override table.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'o> {
    overrides: &'o OverrideTable,
}

impl Matcher<'static> {
    /// Matcher using the built-in override table.
    pub fn builtin() -> Self {
        Self::new(OverrideTable::builtin())
    }
}

impl<'o> Matcher<'o> {
    pub fn new(overrides: &'o OverrideTable) -> Self {
        Self { overrides }
    }

    /// Find the target for `(slug, creator_slug)` and report which tier hit.
    pub fn find(&self, slug: &str, creator_slug: &str, targets: &TargetSet) -> Option<MatchOutcome> {
        let query = SourceQuery { slug, creator_slug };
        MatchTier::ALL.iter().find_map(|&tier| {
            tier.attempt(&query, targets, self.overrides)
                .map(|target_id| MatchOutcome {
                    target_id: target_id.to_string(),
                    tier,
                })
        })
    }

    /// Like `find`, returning only the target id.
    pub fn match_id(&self, slug: &str, creator_slug: &str, targets: &TargetSet) -> Option<String> {
        self.find(slug, creator_slug, targets).map(|m| m.target_id)
    }
}

/// Match with the built-in override table.
pub fn match_model(slug: &str, creator_slug: &str, targets: &TargetSet) -> Option<String> {
    Matcher::builtin().match_id(slug, creator_slug, targets)
}
