//! Wire types for the RepoLens analysis service.
//!
//! The service is an external collaborator; these types mirror its JSON
//! contract and decode it tolerantly. Missing, null or mistyped fields never
//! fail a response, they simply come through as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Request body ──

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub org: String,
}

impl AnalyzeRequest {
    pub fn new(org: impl Into<String>) -> Self {
        Self { org: org.into() }
    }
}

// ── Response body ──

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Ideally an array of records. Kept raw so a malformed value degrades to
    /// an empty report instead of failing the whole body.
    #[serde(default)]
    pub report: Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
    /// Human-readable summary the service attaches to successful responses.
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

impl AnalyzeResponse {
    /// Decode an already-parsed JSON body. Bodies that are not objects
    /// decode to an empty response.
    pub fn from_json_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Records carried in `report`, or none when it is missing or not an array.
    pub fn report_records(&self) -> Vec<ApiReportRecord> {
        match &self.report {
            Value::Array(items) => items
                .iter()
                .map(|item| ApiReportRecord::from_json_value(item.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// One analyzed repository as sent by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiReportRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub repo_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ai_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub activity_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub stars: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_push: Option<String>,
}

impl ApiReportRecord {
    /// Non-object values decode to a record with every field absent.
    pub fn from_json_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

// ── Tolerant field decoders ──

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}
