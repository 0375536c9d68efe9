//! Input/output helpers.
//!
//! - local catalog ingest (`ingest`)
//! - mapping exports (JSON/CSV) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
