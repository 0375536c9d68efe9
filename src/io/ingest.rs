//! Local catalog ingest.
//!
//! This module turns saved catalog snapshots into the inputs the reconciler needs:
//!
//! - source records: a JSON array of records, or the benchmark API envelope
//!   `{"data": [...]}`
//! - target ids: `.json` files (array of strings or the marketplace envelope),
//!   anything else as one id per line
//!
//! Bad files are configuration errors (exit code 2). Blank target lines are
//! skipped quietly; a source record that cannot be read (no slug, not an
//! object) is skipped with a warning and the rest of the catalog still loads.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::data::ModelListResponse;
use crate::domain::SourceModelRecord;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TargetPayload {
    Ids(Vec<String>),
    Envelope(ModelListResponse),
}

/// Parse source records from JSON text.
pub fn parse_source_records(text: &str) -> Result<Vec<SourceModelRecord>, AppError> {
    let payload: Value = serde_json::from_str(text)
        .map_err(|e| AppError::config(format!("Invalid source catalog JSON: {e}")))?;
    source_records_from_value(payload).ok_or_else(|| {
        AppError::config("Invalid source catalog: expected an array of records or an object with a `data` array.")
    })
}

/// Extract records from a source payload (bare array or `{"data": [...]}`).
///
/// Returns `None` when the payload has neither shape. Individual records that
/// fail to deserialize are logged and dropped.
pub fn source_records_from_value(payload: Value) -> Option<Vec<SourceModelRecord>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let total = items.len();
    let records: Vec<SourceModelRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable source record");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(skipped = total - records.len(), kept = records.len(), "source catalog had unreadable records");
    }
    Some(records)
}

/// Load source records from a JSON file.
pub fn load_source_records(path: &Path) -> Result<Vec<SourceModelRecord>, AppError> {
    let text = read_file(path, "source catalog")?;
    let records = parse_source_records(&text)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded source catalog");
    Ok(records)
}

/// Parse target ids from JSON text.
pub fn parse_target_ids_json(text: &str) -> Result<Vec<String>, AppError> {
    let payload: TargetPayload = serde_json::from_str(text)
        .map_err(|e| AppError::config(format!("Invalid target catalog JSON: {e}")))?;
    Ok(match payload {
        TargetPayload::Ids(ids) => ids,
        TargetPayload::Envelope(listing) => listing.into_ids(),
    })
}

/// Parse target ids from a plain-text list: one id per line, `#` comments and
/// blank lines ignored, surrounding whitespace trimmed.
pub fn parse_target_ids_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load target ids, picking the parser from the file extension.
pub fn load_target_ids(path: &Path) -> Result<Vec<String>, AppError> {
    let text = read_file(path, "target catalog")?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let ids = if is_json {
        parse_target_ids_json(&text)?
    } else {
        parse_target_ids_lines(&text)
    };

    if ids.is_empty() {
        tracing::warn!(path = %path.display(), "target catalog is empty; nothing can match");
    }
    tracing::info!(path = %path.display(), targets = ids.len(), "loaded target catalog");
    Ok(ids)
}

fn read_file(path: &Path, what: &str) -> Result<String, AppError> {
    fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("Failed to read {what} '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_records_accept_array_and_envelope() {
        let array = r#"[{"slug": "gpt-4o", "creator_slug": "openai"}]"#;
        let envelope = r#"{"status": 200, "data": [
            {"slug": "gpt-4o", "model_creator": {"slug": "openai"}},
            {"slug": "grok-3", "model_creator": {"slug": "xai"}}
        ]}"#;

        let a = parse_source_records(array).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].creator_slug, "openai");

        let b = parse_source_records(envelope).unwrap();
        assert_eq!(b.len(), 2);
        assert_eq!(b[1].creator_slug, "xai");
    }

    #[test]
    fn source_records_reject_garbage() {
        let err = parse_source_records(r#"{"models": 3}"#).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("`data` array"));

        assert!(parse_source_records("[1, 2").is_err());
    }

    #[test]
    fn slugless_record_is_dropped_not_fatal() {
        let envelope = r#"{"data": [
            {"slug": "gpt-4o", "model_creator": {"slug": "openai"}},
            {"slug": null, "model_creator": {"slug": "openai"}},
            {"slug": "grok-3", "model_creator": {"slug": "xai"}}
        ]}"#;
        let records = parse_source_records(envelope).unwrap();
        let slugs: Vec<&str> = records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["gpt-4o", "grok-3"]);

        let array = r#"[{"creator_slug": "acme"}, 7, {"slug": "m", "creator_slug": "acme"}]"#;
        let records = parse_source_records(array).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "m");
    }

    #[test]
    fn non_numeric_evaluations_do_not_fail_the_catalog() {
        let flat = r#"[{"slug": "m", "creator_slug": "acme", "evaluations": {"mmlu": "n/a"}}]"#;
        let envelope = r#"{"data": [
            {"slug": "m", "model_creator": {"slug": "acme"}, "evaluations": {"mmlu": "n/a", "gpqa": 0.5}}
        ]}"#;

        let a = parse_source_records(flat).unwrap();
        assert_eq!(a[0].evaluations["mmlu"], "n/a");

        let b = parse_source_records(envelope).unwrap();
        assert_eq!(b[0].evaluations.len(), 2);
        assert_eq!(b[0].creator_slug, "acme");
    }

    #[test]
    fn target_ids_accept_array_and_envelope() {
        assert_eq!(
            parse_target_ids_json(r#"["openai/gpt-4o", "x-ai/grok-3"]"#).unwrap(),
            vec!["openai/gpt-4o", "x-ai/grok-3"]
        );
        assert_eq!(
            parse_target_ids_json(r#"{"data": [{"id": "openai/gpt-4o", "name": "GPT-4o"}]}"#).unwrap(),
            vec!["openai/gpt-4o"]
        );
    }

    #[test]
    fn target_lines_skip_comments_and_blanks() {
        let text = "# snapshot\nopenai/gpt-4o\n\n  x-ai/grok-3  \n";
        assert_eq!(parse_target_ids_lines(text), vec!["openai/gpt-4o", "x-ai/grok-3"]);
    }

    #[test]
    fn load_target_ids_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("targets.JSON");
        let txt = dir.path().join("targets.txt");
        fs::write(&json, r#"["a/b"]"#).unwrap();
        fs::write(&txt, "a/b\nc/d\n").unwrap();

        assert_eq!(load_target_ids(&json).unwrap(), vec!["a/b"]);
        assert_eq!(load_target_ids(&txt).unwrap(), vec!["a/b", "c/d"]);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source_records(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("source catalog"));
    }
}
