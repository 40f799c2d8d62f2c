//! State of the results area for the single active analysis.
//!
//! The board is idle or busy. `begin` moves it to busy, `finish` always
//! moves it back, whatever the outcome.

use crate::error::AnalysisError;
use crate::report::ReportRecord;
use crate::sort::{sort_records, SortKey};

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardView {
    /// Nothing yet, or a request is in flight.
    #[default]
    Blank,
    /// The service found no repositories for `org`.
    Empty { org: String },
    /// Cards for the current record set.
    Report,
    /// Inline error text replacing any results.
    Failed { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ResultsBoard {
    records: Vec<ReportRecord>,
    sort_key: SortKey,
    default_sort: SortKey,
    busy: bool,
    view: BoardView,
}

impl ResultsBoard {
    pub fn new(default_sort: SortKey) -> Self {
        Self {
            sort_key: default_sort,
            default_sort,
            ..Self::default()
        }
    }

    /// Validate the raw input and enter the busy state.
    ///
    /// Returns the trimmed organization name to submit. On error the board
    /// is left untouched.
    pub fn begin(&mut self, raw_input: &str) -> Result<String, AnalysisError> {
        let org = raw_input.trim();
        if org.is_empty() {
            return Err(AnalysisError::Validation);
        }
        if self.busy {
            return Err(AnalysisError::InFlight);
        }
        self.records.clear();
        self.view = BoardView::Blank;
        self.busy = true;
        tracing::debug!(org, "analysis started");
        Ok(org.to_string())
    }

    /// Apply the outcome of the request started by [`begin`](Self::begin).
    pub fn finish(&mut self, org: &str, outcome: Result<Vec<ReportRecord>, AnalysisError>) {
        self.busy = false;
        match outcome {
            Ok(records) if records.is_empty() => {
                self.records.clear();
                self.view = BoardView::Empty {
                    org: org.to_string(),
                };
            }
            Ok(records) => {
                self.records = records;
                self.sort_key = self.default_sort;
                sort_records(&mut self.records, self.sort_key);
                self.view = BoardView::Report;
            }
            Err(err) => {
                self.records.clear();
                self.view = BoardView::Failed {
                    message: err.inline_text(),
                };
            }
        }
        tracing::debug!(org, count = self.records.len(), "analysis finished");
    }

    /// Reorder the current record set. Ignored unless a report is shown.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.view != BoardView::Report {
            return;
        }
        self.sort_key = key;
        sort_records(&mut self.records, key);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn header_visible(&self) -> bool {
        matches!(self.view, BoardView::Empty { .. } | BoardView::Report)
    }

    pub fn header_text(&self) -> Option<String> {
        match &self.view {
            BoardView::Empty { org } => Some(format!("No repositories found for \"{org}\"")),
            BoardView::Report => Some(format!("Analysis Report ({} Repos)", self.records.len())),
            _ => None,
        }
    }

    pub fn sort_visible(&self) -> bool {
        self.view == BoardView::Report
    }

    /// Records to draw, in display order.
    pub fn cards(&self) -> &[ReportRecord] {
        match self.view {
            BoardView::Report => &self.records,
            _ => &[],
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match &self.view {
            BoardView::Failed { message } => Some(message),
            _ => None,
        }
    }
}
