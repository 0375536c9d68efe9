//! Catalog sources.
//!
//! - `artificial_analysis`: benchmark (source) catalog client
//! - `openrouter`: marketplace (target) catalog client
//! - `well_known`: built-in target ids used when no catalog is supplied

pub mod artificial_analysis;
pub mod openrouter;
pub mod well_known;

pub use artificial_analysis::BenchmarkClient;
pub use openrouter::{MarketplaceClient, ModelListResponse};
pub use well_known::WELL_KNOWN_TARGET_IDS;
