//! Export reconciliation results.
//!
//! - JSON: a `MappingFile` (slug -> target id plus run metadata)
//! - CSV: one `source_slug,target_id,tier` row per match, sorted by slug
//!
//! Both are meant to be easy to consume in downstream joins or spreadsheets.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::domain::{ExportFormat, MappingFile, MatchTier};
use crate::error::AppError;
use crate::reconcile::Reconciliation;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    source_slug: &'a str,
    target_id: &'a str,
    tier: MatchTier,
}

/// Write results in the requested format.
pub fn write_mapping(path: &Path, result: &Reconciliation, format: ExportFormat) -> Result<(), AppError> {
    match format {
        ExportFormat::Json => write_mapping_json(path, result)?,
        ExportFormat::Csv => write_mapping_csv(path, result)?,
    }
    tracing::info!(path = %path.display(), entries = result.matches.len(), ?format, "mapping exported");
    Ok(())
}

pub fn mapping_file(result: &Reconciliation) -> MappingFile {
    MappingFile {
        tool: "xref".to_string(),
        generated_at: Utc::now(),
        source_count: result.source_count,
        target_count: result.target_count,
        mappings: result.mapping(),
    }
}

/// Write the mapping as pretty JSON.
pub fn write_mapping_json(path: &Path, result: &Reconciliation) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create mapping JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &mapping_file(result))
        .map_err(|e| AppError::config(format!("Failed to write mapping JSON: {e}")))?;

    Ok(())
}

/// Write the mapping as CSV with the matching tier per row.
pub fn write_mapping_csv(path: &Path, result: &Reconciliation) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::config(format!("Failed to create mapping CSV '{}': {e}", path.display())))?;

    for (slug, outcome) in &result.matches {
        writer
            .serialize(CsvRow {
                source_slug: slug,
                target_id: &outcome.target_id,
                tier: outcome.tier,
            })
            .map_err(|e| AppError::config(format!("Failed to write mapping CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::config(format!("Failed to flush mapping CSV: {e}")))?;

    Ok(())
}

/// Read a mapping JSON file written by `write_mapping_json`.
pub fn read_mapping_json(path: &Path) -> Result<MappingFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::config(format!("Failed to open mapping JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::config(format!("Invalid mapping JSON: {e}")))
}
