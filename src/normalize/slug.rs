//! Slug canonicalization and composite-key normalization.
//!
//! Both functions are total: any input string yields a (possibly empty) output.
//! `canonicalize` is idempotent, which the matcher relies on because it
//! re-derives candidate keys on every lookup instead of indexing them.

/// Reduce a raw slug to its canonical comparison form.
///
/// - lowercase, trim surrounding whitespace
/// - runs of `.`, `_` or whitespace become a single `-`
/// - runs of `-` collapse to one
/// - a leading/trailing `-` is dropped
pub fn canonicalize(slug: &str) -> String {
    let lowered = slug.trim().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        let ch = if is_separator(ch) { '-' } else { ch };
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }

    let trimmed = out.strip_prefix('-').unwrap_or(&out);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Normalize a `"<creator>/<model>"` identifier into a composite lookup key.
///
/// Splits on the first `/` (a missing separator means an empty creator),
/// canonicalizes both halves and strips a trailing version/date suffix from the
/// model half only. An empty creator yields the bare model key.
pub fn normalize_composite_id(id: &str) -> String {
    let (creator, model) = id.split_once('/').unwrap_or(("", id));

    let creator = canonicalize(creator);
    let model = canonicalize(model);
    let model = strip_version_suffix(&model);

    if creator.is_empty() {
        model.to_string()
    } else {
        format!("{creator}/{model}")
    }
}

/// Composite key for a source record, built the same way as target keys.
pub fn composite_key(creator_slug: &str, slug: &str) -> String {
    normalize_composite_id(&format!("{creator_slug}/{slug}"))
}

/// Strip one or more trailing `-NNN` / `-NNNN` digit groups.
///
/// Every stripped group must be exactly 3 or 4 ASCII digits, so
/// `deepseek-v3-0324` -> `deepseek-v3` but `gpt-4o-2024-08-06` is untouched
/// (its last group has two digits).
pub fn strip_version_suffix(slug: &str) -> &str {
    let mut end = slug.len();
    while let Some(dash) = slug[..end].rfind('-') {
        let group = &slug[dash + 1..end];
        if !(3..=4).contains(&group.len()) || !group.bytes().all(|b| b.is_ascii_digit()) {
            break;
        }
        end = dash;
    }
    &slug[..end]
}

fn is_separator(ch: char) -> bool {
    ch == '.' || ch == '_' || ch.is_whitespace()
}
