//! Shared reconcile pipeline used by the CLI subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load overrides -> load source records -> load target ids -> reconcile
//!
//! The subcommands can then focus on presentation and exports.

use std::path::Path;

use crate::data::{BenchmarkClient, MarketplaceClient, WELL_KNOWN_TARGET_IDS};
use crate::domain::{ReconcileConfig, SourceModelRecord, TargetSource};
use crate::error::AppError;
use crate::io::ingest::{load_source_records, load_target_ids};
use crate::matching::TargetSet;
use crate::overrides::OverrideTable;
use crate::reconcile::{ReconcileOptions, Reconciliation, reconcile};

/// All computed outputs of a single `xref reconcile` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<SourceModelRecord>,
    pub targets: TargetSet,
    pub result: Reconciliation,
}

/// Execute the full reconcile pipeline and return the computed outputs.
pub fn run_reconcile(config: &ReconcileConfig) -> Result<RunOutput, AppError> {
    // 1) Override table.
    let overrides = load_override_table(config.overrides_file.as_deref(), config.builtin_overrides)?;

    // 2) Source records.
    let records = match &config.source_file {
        Some(path) => load_source_records(path)?,
        None => BenchmarkClient::from_env()?.fetch_models()?,
    };

    // 3) Target universe.
    let targets = load_targets(&config.targets)?;

    Ok(run_reconcile_with(config, records, targets, &overrides))
}

/// Reconcile pre-loaded inputs. Matching itself cannot fail.
pub fn run_reconcile_with(
    config: &ReconcileConfig,
    records: Vec<SourceModelRecord>,
    targets: TargetSet,
    overrides: &OverrideTable,
) -> RunOutput {
    let options = ReconcileOptions {
        parallel: config.parallel,
    };
    let result = reconcile(&records, &targets, overrides, options);

    RunOutput {
        records,
        targets,
        result,
    }
}

/// Build the override table: built-in entries (unless disabled) with the
/// optional user file merged on top.
pub fn load_override_table(path: Option<&Path>, builtin: bool) -> Result<OverrideTable, AppError> {
    let mut table = if builtin {
        OverrideTable::builtin().clone()
    } else {
        OverrideTable::empty()
    };

    if let Some(path) = path {
        let extra = OverrideTable::load_json(path)?;
        tracing::info!(path = %path.display(), entries = extra.len(), "merging user overrides");
        table.merge(extra);
    }

    Ok(table)
}

/// Resolve a target source into a deduplicated target set.
pub fn load_targets(source: &TargetSource) -> Result<TargetSet, AppError> {
    let set: TargetSet = match source {
        TargetSource::File(path) => load_target_ids(path)?.into_iter().collect(),
        TargetSource::WellKnown => WELL_KNOWN_TARGET_IDS.iter().copied().collect(),
        TargetSource::Marketplace => MarketplaceClient::from_env().fetch_model_ids()?.into_iter().collect(),
    };
    tracing::debug!(targets = set.len(), "target set ready");
    Ok(set)
}
