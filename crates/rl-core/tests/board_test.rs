use rl_api_types::ApiReportRecord;
use rl_core::board::{BoardView, ResultsBoard};
use rl_core::error::AnalysisError;
use rl_core::report::ReportRecord;
use rl_core::sort::SortKey;
use serde_json::json;

fn records(values: Vec<serde_json::Value>) -> Vec<ReportRecord> {
    values
        .into_iter()
        .map(|v| ReportRecord::from(ApiReportRecord::from_json_value(v)))
        .collect()
}

fn octocat_report() -> Vec<ReportRecord> {
    records(vec![
        json!({ "repo_name": "Hello-World", "stars": 50, "activity_status": "Active" }),
        json!({ "repo_name": "Zed", "stars": 90, "activity_status": "Inactive" }),
    ])
}

#[test]
fn blank_input_is_rejected_without_state_change() {
    for input in ["", "   ", "\t\n"] {
        let mut board = ResultsBoard::default();
        assert_eq!(board.begin(input), Err(AnalysisError::Validation));
        assert!(!board.is_busy());
        assert_eq!(board.view(), &BoardView::Blank);
    }
}

#[test]
fn blank_input_leaves_previous_results_in_place() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));

    assert_eq!(board.begin("  "), Err(AnalysisError::Validation));
    assert_eq!(board.cards().len(), 2);
    assert_eq!(board.view(), &BoardView::Report);
}

#[test]
fn begin_trims_and_enters_busy_state() {
    let mut board = ResultsBoard::default();
    let org = board.begin("  octocat ").expect("begin");
    assert_eq!(org, "octocat");
    assert!(board.is_busy());
    assert!(!board.header_visible());
    assert!(board.cards().is_empty());
}

#[test]
fn second_submission_while_busy_is_refused() {
    let mut board = ResultsBoard::default();
    board.begin("octocat").expect("begin");
    assert_eq!(board.begin("rust-lang"), Err(AnalysisError::InFlight));
    assert!(board.is_busy());
}

#[test]
fn begin_clears_previous_results() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));
    assert_eq!(board.cards().len(), 2);

    board.begin("rust-lang").expect("begin");
    assert!(board.cards().is_empty());
    assert!(board.header_text().is_none());
}

#[test]
fn octocat_scenario() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));

    assert!(!board.is_busy());
    assert!(board.header_visible());
    assert!(board.sort_visible());
    assert_eq!(board.header_text().as_deref(), Some("Analysis Report (2 Repos)"));

    let cards = board.cards();
    assert_eq!(cards[0].display_name(), "Zed");
    assert_eq!(cards[0].stars, 90);
    for card in cards {
        assert_eq!(
            card.activity.css_class(),
            rl_core::Activity::classify(&card.activity_status).css_class()
        );
    }
}

#[test]
fn empty_report_shows_not_found_header_only() {
    let mut board = ResultsBoard::default();
    let org = board.begin("ghost-org").expect("begin");
    board.finish(&org, Ok(Vec::new()));

    assert_eq!(
        board.header_text().as_deref(),
        Some("No repositories found for \"ghost-org\"")
    );
    assert!(board.header_visible());
    assert!(!board.sort_visible());
    assert!(board.cards().is_empty());
    assert!(!board.is_busy());
}

#[test]
fn server_error_is_rendered_inline() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Err(AnalysisError::server(Some("org not found"))));

    assert_eq!(board.error_text(), Some("An error occurred: org not found"));
    assert!(!board.is_busy());
    assert!(!board.header_visible());
    assert!(board.cards().is_empty());
}

#[test]
fn server_error_without_message_uses_fallback() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Err(AnalysisError::server(None)));
    assert_eq!(board.error_text(), Some("An error occurred: Server error occurred"));
}

#[test]
fn transport_error_renders_like_server_error() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Err(AnalysisError::Transport("Failed to fetch".into())));
    assert_eq!(board.error_text(), Some("An error occurred: Failed to fetch"));
    assert!(!board.is_busy());
}

#[test]
fn sort_change_reorders_in_place() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));

    board.set_sort(SortKey::Name);
    assert_eq!(board.sort_key(), SortKey::Name);
    assert_eq!(board.cards()[0].display_name(), "Hello-World");
    assert_eq!(board.header_text().as_deref(), Some("Analysis Report (2 Repos)"));

    board.set_sort(SortKey::Stars);
    assert_eq!(board.cards()[0].display_name(), "Zed");
}

#[test]
fn sort_is_ignored_without_a_report() {
    let mut board = ResultsBoard::default();
    board.set_sort(SortKey::Name);
    assert_eq!(board.sort_key(), SortKey::Stars);
}

#[test]
fn new_results_reset_sort_to_default() {
    let mut board = ResultsBoard::new(SortKey::Stars);
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));
    board.set_sort(SortKey::Name);

    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));
    assert_eq!(board.sort_key(), SortKey::Stars);
    assert_eq!(board.cards()[0].display_name(), "Zed");
}

#[test]
fn rerendering_same_state_is_idempotent() {
    let mut board = ResultsBoard::default();
    let org = board.begin("octocat").expect("begin");
    board.finish(&org, Ok(octocat_report()));

    board.set_sort(SortKey::Updated);
    let first: Vec<ReportRecord> = board.cards().to_vec();
    board.set_sort(SortKey::Updated);
    let second: Vec<ReportRecord> = board.cards().to_vec();
    assert_eq!(first, second);
}

#[test]
fn validation_error_message_is_the_alert_text() {
    assert_eq!(
        AnalysisError::Validation.to_string(),
        "Please enter a GitHub organization name."
    );
}
