//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - catalog records (`SourceModelRecord`)
//! - match results (`MatchTier`, `MatchOutcome`, `ReconciliationMap`)
//! - run configuration and export schema (`ReconcileConfig`, `MappingFile`)

pub mod types;

pub use types::*;
