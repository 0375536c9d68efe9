//! Formatted terminal output.

use crate::domain::{MatchOutcome, MatchTier, ReconcileConfig, TargetSource};
use crate::normalize::{canonicalize, normalize_composite_id};
use crate::overrides::OverrideEntry;
use crate::reconcile::Reconciliation;
use crate::report::MappingDiff;

/// Run header + per-tier counts.
pub fn format_run_summary(result: &Reconciliation, config: &ReconcileConfig) -> String {
    let mut out = String::new();

    out.push_str("=== xref - model catalog reconciliation ===\n");
    out.push_str(&format!(
        "Source: {}\n",
        config
            .source_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "benchmark API".to_string())
    ));
    out.push_str(&format!("Targets: {}\n", target_source_label(&config.targets)));
    out.push_str(&format!(
        "Records: {} | target ids: {}\n",
        result.source_count, result.target_count
    ));

    out.push_str("\nMatches by tier:\n");
    for tier in MatchTier::ALL {
        out.push_str(&format!(
            "  {:<11}{:>6}\n",
            tier.display_name(),
            result.counts.get(tier)
        ));
    }
    out.push_str(&format!("  {:<11}{:>6}\n", "unmatched", result.counts.unmatched));

    let pct = if result.source_count > 0 {
        100.0 * result.counts.matched() as f64 / result.source_count as f64
    } else {
        0.0
    };
    out.push_str(&format!(
        "\nMapped slugs: {} ({pct:.1}% of records matched)\n",
        result.matches.len()
    ));

    out
}

/// Up to `limit` unmatched records.
pub fn format_unmatched(result: &Reconciliation, limit: usize) -> String {
    let mut out = String::new();
    if limit == 0 || result.unmatched.is_empty() {
        return out;
    }

    out.push_str(&format!("Unmatched ({} total):\n", result.unmatched.len()));
    for u in result.unmatched.iter().take(limit) {
        out.push_str(&format!("  {:<40} creator={}\n", u.slug, u.creator_slug));
    }
    let hidden = result.unmatched.len().saturating_sub(limit);
    if hidden > 0 {
        out.push_str(&format!("  ... {hidden} more\n"));
    }
    out
}

/// Changes relative to a previous mapping export.
pub fn format_diff(diff: &MappingDiff) -> String {
    let mut out = String::new();
    if diff.is_empty() {
        out.push_str("No changes against previous mapping.\n");
        return out;
    }

    out.push_str(&format!(
        "Changes against previous mapping: +{} -{} ~{}\n",
        diff.added.len(),
        diff.removed.len(),
        diff.changed.len()
    ));
    for (slug, target) in &diff.added {
        out.push_str(&format!("  + {slug} -> {target}\n"));
    }
    for (slug, target) in &diff.removed {
        out.push_str(&format!("  - {slug} -> {target}\n"));
    }
    for (slug, old, new) in &diff.changed {
        out.push_str(&format!("  ~ {slug}: {old} -> {new}\n"));
    }
    out
}

/// Single `xref match` result.
pub fn format_match(slug: &str, creator_slug: &str, outcome: Option<&MatchOutcome>) -> String {
    match outcome {
        Some(m) => format!("{creator_slug}/{slug} -> {} (tier: {})", m.target_id, m.tier),
        None => format!("{creator_slug}/{slug} -> no match"),
    }
}

/// Canonical and composite forms of an identifier, tab separated.
pub fn format_normalized(id: &str) -> String {
    format!("{id}\t{}\t{}", canonicalize(id), normalize_composite_id(id))
}

/// Override table listing; `stale` entries are flagged.
pub fn format_overrides(entries: &[OverrideEntry], stale: Option<&[OverrideEntry]>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Overrides ({}):\n", entries.len()));

    let width = entries.iter().map(|e| e.source_slug.len()).max().unwrap_or(0);
    for e in entries {
        let flag = match stale {
            Some(stale) if stale.contains(e) => "  [stale]",
            _ => "",
        };
        out.push_str(&format!(
            "  {:<width$} -> {}{flag}\n",
            e.source_slug, e.target_id
        ));
    }

    if let Some(stale) = stale {
        if stale.is_empty() {
            out.push_str("\nAll override targets present in the target catalog.\n");
        } else {
            out.push_str(&format!("\n{} stale override(s).\n", stale.len()));
        }
    }
    out
}

fn target_source_label(source: &TargetSource) -> String {
    match source {
        TargetSource::File(path) => path.display().to_string(),
        TargetSource::WellKnown => "built-in well-known list".to_string(),
        TargetSource::Marketplace => "marketplace API".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExportFormat, UnmatchedRecord};

    fn config() -> ReconcileConfig {
        ReconcileConfig {
            source_file: None,
            targets: TargetSource::WellKnown,
            overrides_file: None,
            builtin_overrides: true,
            parallel: true,
            show_unmatched: 10,
            export: None,
            export_format: ExportFormat::Json,
            previous: None,
        }
    }

    #[test]
    fn summary_lists_every_tier() {
        let result = Reconciliation::default();
        let text = format_run_summary(&result, &config());
        for tier in MatchTier::ALL {
            assert!(text.contains(tier.display_name()));
        }
        assert!(text.contains("unmatched"));
        assert!(text.contains("0.0%"));
    }

    #[test]
    fn unmatched_listing_truncates() {
        let mut result = Reconciliation::default();
        for i in 0..5 {
            result.unmatched.push(UnmatchedRecord {
                slug: format!("m{i}"),
                creator_slug: "acme".to_string(),
            });
        }
        let text = format_unmatched(&result, 2);
        assert!(text.contains("Unmatched (5 total)"));
        assert!(text.contains("m1"));
        assert!(!text.contains("m2 "));
        assert!(text.contains("... 3 more"));
        assert!(format_unmatched(&result, 0).is_empty());
    }

    #[test]
    fn match_line_mentions_tier() {
        let m = MatchOutcome {
            target_id: "x-ai/grok-3".to_string(),
            tier: MatchTier::Override,
        };
        assert_eq!(format_match("grok-3", "xai", Some(&m)), "xai/grok-3 -> x-ai/grok-3 (tier: override)");
        assert_eq!(format_match("zzz", "acme", None), "acme/zzz -> no match");
    }

    #[test]
    fn normalized_line_has_three_columns() {
        assert_eq!(
            format_normalized("Google/Gemini 2.0 Flash-001"),
            "Google/Gemini 2.0 Flash-001\tgoogle/gemini-2-0-flash-001\tgoogle/gemini-2-0-flash"
        );
    }

    #[test]
    fn overrides_flag_stale_entries() {
        let entries = vec![
            OverrideEntry {
                source_slug: "a".to_string(),
                target_id: "x/a".to_string(),
            },
            OverrideEntry {
                source_slug: "b".to_string(),
                target_id: "x/b".to_string(),
            },
        ];
        let stale = vec![entries[1].clone()];
        let text = format_overrides(&entries, Some(stale.as_slice()));
        assert!(text.contains("b -> x/b  [stale]"));
        assert!(!text.contains("x/a  [stale]"));
        assert!(text.contains("1 stale override(s)."));
    }
}
