//! Marketplace catalog (target side): OpenRouter public models endpoint.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::AppError;

const DEFAULT_URL: &str = "https://openrouter.ai/api/v1/models";
const URL_VAR: &str = "XREF_OPENROUTER_URL";

/// `{"data": [{"id": "creator/model", ...}, ...]}` as served by the marketplace.
///
/// Also accepted by the target-file ingest so a saved response can be replayed.
#[derive(Debug, Deserialize)]
pub struct ModelListResponse {
    pub data: Vec<ModelListing>,
}

#[derive(Debug, Deserialize)]
pub struct ModelListing {
    pub id: String,
}

impl ModelListResponse {
    pub fn into_ids(self) -> Vec<String> {
        self.data.into_iter().map(|m| m.id).collect()
    }
}

pub struct MarketplaceClient {
    client: Client,
    url: String,
}

impl MarketplaceClient {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let url = std::env::var(URL_VAR).unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Fetch all marketplace model ids.
    pub fn fetch_model_ids(&self) -> Result<Vec<String>, AppError> {
        tracing::info!(url = %self.url, "fetching marketplace catalog");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| AppError::upstream(format!("Marketplace catalog request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::upstream(format!(
                "Marketplace catalog request failed with status {}.",
                resp.status()
            )));
        }

        let body: ModelListResponse = resp
            .json()
            .map_err(|e| AppError::upstream(format!("Failed to parse marketplace catalog: {e}")))?;

        let ids = body.into_ids();
        tracing::info!(targets = ids.len(), "marketplace catalog fetched");
        Ok(ids)
    }
}
