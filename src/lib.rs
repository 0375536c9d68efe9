//! `model-xref` library crate.
//!
//! Reconciles benchmark-catalog model slugs with marketplace model ids.
//!
//! The binary (`xref`) is a thin wrapper around this library so that:
//!
//! - the matching core is testable without spawning processes or hitting the network
//! - downstream code can call `reconcile::build_map` directly
//! - catalog fetching and exports stay at the edges

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod matching;
pub mod normalize;
pub mod overrides;
pub mod reconcile;
pub mod report;
