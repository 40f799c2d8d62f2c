//! Ingestion of service records into fully-populated [`ReportRecord`]s.
//!
//! Defaults are applied once here; the view reads fields directly.

use chrono::{DateTime, NaiveDate, Utc};
use rl_api_types::{AnalyzeResponse, ApiReportRecord};
use serde::{Deserialize, Serialize};

pub const UNNAMED_REPOSITORY: &str = "Unnamed Repository";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_AI_SUMMARY: &str = "No AI summary available.";
pub const UNKNOWN: &str = "Unknown";
pub const NO_LANGUAGE: &str = "N/A";
pub const NO_URL: &str = "#";

/// Binary reduction of the service's free-text activity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Active,
    Inactive,
}

impl Activity {
    /// `Active` iff the status contains "active", ignoring case.
    pub fn classify(status: &str) -> Self {
        if status.to_lowercase().contains("active") {
            Activity::Active
        } else {
            Activity::Inactive
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Activity::Active => "active",
            Activity::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Absent names sort as "" but display as [`UNNAMED_REPOSITORY`].
    pub repo_name: Option<String>,
    pub github_url: String,
    pub description: String,
    pub ai_summary: String,
    pub activity_status: String,
    pub activity: Activity,
    pub stars: u64,
    pub language: String,
    pub last_push: Option<DateTime<Utc>>,
}

impl ReportRecord {
    pub fn display_name(&self) -> &str {
        self.repo_name.as_deref().unwrap_or(UNNAMED_REPOSITORY)
    }

    /// Name used for ordering; absent names compare as empty.
    pub fn sort_name(&self) -> &str {
        self.repo_name.as_deref().unwrap_or("")
    }

    pub fn stars_label(&self) -> String {
        format!("{} Stars", self.stars)
    }

    /// Last push as epoch milliseconds; absent pushes count as the epoch.
    pub fn push_millis(&self) -> i64 {
        self.last_push.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}

impl From<ApiReportRecord> for ReportRecord {
    fn from(api: ApiReportRecord) -> Self {
        let activity_status = present(api.activity_status).unwrap_or_else(|| UNKNOWN.into());
        let activity = Activity::classify(&activity_status);
        Self {
            repo_name: present(api.repo_name),
            github_url: present(api.github_url).unwrap_or_else(|| NO_URL.into()),
            description: present(api.description).unwrap_or_else(|| NO_DESCRIPTION.into()),
            ai_summary: present(api.ai_summary).unwrap_or_else(|| NO_AI_SUMMARY.into()),
            activity_status,
            activity,
            stars: api.stars.unwrap_or(0),
            language: present(api.language).unwrap_or_else(|| NO_LANGUAGE.into()),
            last_push: api.last_push.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Empty strings are treated the same as missing ones.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// RFC 3339 first, then a bare calendar date at midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Turn a successful response body into the record set for one run.
pub fn ingest(response: &AnalyzeResponse) -> Vec<ReportRecord> {
    let records: Vec<ReportRecord> = response
        .report_records()
        .into_iter()
        .map(ReportRecord::from)
        .collect();
    if !response.report.is_array() {
        tracing::debug!("response carried no report array; treating as empty");
    }
    tracing::debug!(count = records.len(), "ingested report records");
    records
}
