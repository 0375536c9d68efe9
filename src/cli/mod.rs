//! Command-line parsing for the model catalog reconciler.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the normalization/matching code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ExportFormat, TargetSource};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "xref",
    version,
    about = "Reconcile benchmark model slugs with marketplace model ids"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile a whole source catalog against a target catalog.
    Reconcile(ReconcileArgs),
    /// Match a single source slug and show which tier hit.
    Match(MatchArgs),
    /// Print canonical and composite forms of identifiers.
    Normalize(NormalizeArgs),
    /// List the override table, optionally checking for stale targets.
    Overrides(OverridesArgs),
}

/// Where target ids come from. Defaults to the live marketplace catalog.
#[derive(Debug, Args, Clone)]
pub struct TargetArgs {
    /// Target ids file (`.json` array/envelope, or one id per line).
    #[arg(short = 't', long, value_name = "PATH", conflicts_with = "well_known")]
    pub target_file: Option<PathBuf>,

    /// Use the built-in well-known target list instead of fetching.
    #[arg(long)]
    pub well_known: bool,
}

impl TargetArgs {
    pub fn source(&self) -> TargetSource {
        match (&self.target_file, self.well_known) {
            (Some(path), _) => TargetSource::File(path.clone()),
            (None, true) => TargetSource::WellKnown,
            (None, false) => TargetSource::Marketplace,
        }
    }
}

/// Override table selection.
#[derive(Debug, Args, Clone)]
pub struct OverrideArgs {
    /// JSON object of extra `{"source-slug": "creator/model"}` overrides.
    #[arg(long, value_name = "JSON")]
    pub overrides: Option<PathBuf>,

    /// Start from an empty table instead of the built-in overrides.
    #[arg(long)]
    pub no_builtin_overrides: bool,
}

/// Options for `xref reconcile`.
#[derive(Debug, Parser, Clone)]
pub struct ReconcileArgs {
    /// Source catalog JSON; fetched from the benchmark API when omitted.
    #[arg(short = 's', long, value_name = "PATH")]
    pub source_file: Option<PathBuf>,

    #[command(flatten)]
    pub targets: TargetArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Match records on a single thread.
    #[arg(long)]
    pub sequential: bool,

    /// Show up to N unmatched records.
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub show_unmatched: usize,

    /// Write the mapping to a file.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Previous mapping JSON (from `--export`) to diff against.
    #[arg(long, value_name = "JSON")]
    pub previous: Option<PathBuf>,
}

/// Options for `xref match`.
#[derive(Debug, Parser, Clone)]
pub struct MatchArgs {
    /// Source slug, as it appears in the benchmark catalog.
    pub slug: String,

    /// Creator namespace of the source slug.
    #[arg(short = 'c', long)]
    pub creator: String,

    #[command(flatten)]
    pub targets: TargetArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Options for `xref normalize`.
#[derive(Debug, Parser, Clone)]
pub struct NormalizeArgs {
    /// Identifiers (`creator/model` or bare slugs).
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Options for `xref overrides`.
#[derive(Debug, Parser, Clone)]
pub struct OverridesArgs {
    /// Check every override target against the target catalog.
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub targets: TargetArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}
