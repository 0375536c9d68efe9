//! Benchmark catalog (source side): Artificial Analysis LLM models endpoint.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::domain::SourceModelRecord;
use crate::error::AppError;
use crate::io::ingest::source_records_from_value;

const DEFAULT_URL: &str = "https://artificialanalysis.ai/api/v2/data/llms/models";
const API_KEY_VAR: &str = "ARTIFICIAL_ANALYSIS_API_KEY";
const URL_VAR: &str = "XREF_AA_URL";

pub struct BenchmarkClient {
    client: Client,
    api_key: String,
    url: String,
}

impl BenchmarkClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AppError::config(format!("Missing {API_KEY_VAR} in environment (.env).")))?;
        let url = std::env::var(URL_VAR).unwrap_or_else(|_| DEFAULT_URL.to_string());
        Ok(Self {
            client: Client::new(),
            api_key,
            url,
        })
    }

    /// Fetch every model record in the benchmark catalog.
    pub fn fetch_models(&self) -> Result<Vec<SourceModelRecord>, AppError> {
        tracing::info!(url = %self.url, "fetching benchmark catalog");

        let resp = self
            .client
            .get(&self.url)
            .header("x-api-key", &self.api_key)
            .send()
            .map_err(|e| AppError::upstream(format!("Benchmark catalog request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::upstream(format!(
                "Benchmark catalog request failed with status {}.",
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .map_err(|e| AppError::upstream(format!("Failed to parse benchmark catalog: {e}")))?;

        let records = parse_models_payload(body)?;
        tracing::info!(records = records.len(), "benchmark catalog fetched");
        Ok(records)
    }
}

fn parse_models_payload(body: Value) -> Result<Vec<SourceModelRecord>, AppError> {
    let records = source_records_from_value(body)
        .ok_or_else(|| AppError::upstream("Benchmark catalog payload has no `data` array."))?;
    if records.is_empty() {
        return Err(AppError::upstream("Benchmark catalog returned no models."));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_payload_parses() {
        let json = r#"{
            "status": 200,
            "data": [
                {
                    "id": "1",
                    "name": "DeepSeek V3 (Mar '25)",
                    "slug": "deepseek-v3-0324",
                    "model_creator": {"id": "2", "name": "DeepSeek", "slug": "deepseek"},
                    "evaluations": {"artificial_analysis_intelligence_index": 53.0, "mmlu_pro": null}
                }
            ]
        }"#;
        let records = parse_models_payload(serde_json::from_str(json).unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "deepseek-v3-0324");
        assert_eq!(records[0].creator_slug, "deepseek");
        assert_eq!(records[0].evaluations.len(), 2);
    }

    #[test]
    fn one_bad_record_does_not_sink_the_fetch() {
        let json = r#"{"data": [
            {"slug": "grok-3", "model_creator": {"slug": "xai"}, "evaluations": {"mmlu": "n/a"}},
            {"slug": null, "model_creator": {"slug": "xai"}}
        ]}"#;
        let records = parse_models_payload(serde_json::from_str(json).unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "grok-3");
    }

    #[test]
    fn payload_shape_errors_are_upstream() {
        let missing = parse_models_payload(serde_json::json!({"status": 500})).unwrap_err();
        assert_eq!(missing.exit_code(), 4);
        let empty = parse_models_payload(serde_json::json!({"data": []})).unwrap_err();
        assert_eq!(empty.exit_code(), 4);
    }
}
