use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::report::ReportRecord;

/// Orderings offered by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most starred first.
    #[default]
    Stars,
    /// Repository name, A to Z.
    Name,
    /// Most recently pushed first.
    Updated,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Stars, SortKey::Name, SortKey::Updated]
    }

    /// Value carried by the `<option>` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Name => "name",
            SortKey::Updated => "updated",
        }
    }

    /// Parse an `<option>` value; anything unrecognised falls back to stars.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "updated" => SortKey::Updated,
            _ => SortKey::Stars,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Stars => "Stars",
            SortKey::Name => "Name",
            SortKey::Updated => "Last Updated",
        }
    }

    pub fn compare(&self, a: &ReportRecord, b: &ReportRecord) -> Ordering {
        match self {
            SortKey::Stars => b.stars.cmp(&a.stars),
            SortKey::Name => collate(a.sort_name(), b.sort_name()),
            SortKey::Updated => b.push_millis().cmp(&a.push_millis()),
        }
    }
}

/// Stable, in-place sort. Ties keep their existing relative order.
pub fn sort_records(records: &mut [ReportRecord], key: SortKey) {
    records.sort_by(|a, b| key.compare(a, b));
}

/// Case-insensitive comparison with a raw comparison as tie-break, so "apple"
/// lands next to "Apple" rather than after every uppercase name.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
