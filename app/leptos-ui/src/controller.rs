//! Request lifecycle of one analysis run.

use leptos::prelude::*;
use rl_core::error::AnalysisError;

use crate::api;
use crate::state::AppState;

/// Validate `raw_input` and, if accepted, run the analysis in the background.
///
/// The board stays busy until the request settles; `finish` runs on every
/// outcome so the trigger is always re-enabled.
pub fn start_analysis(state: &AppState, raw_input: &str) {
    let org = match state.set_board.try_update(|board| board.begin(raw_input)) {
        Some(Ok(org)) => org,
        Some(Err(AnalysisError::Validation)) => {
            alert(&AnalysisError::Validation.to_string());
            return;
        }
        Some(Err(e)) => {
            leptos::logging::log!("analysis not started: {}", e);
            return;
        }
        None => return,
    };

    let config = state.config.clone();
    let set_board = state.set_board;
    leptos::task::spawn_local(async move {
        let outcome = api::analyze(&config, &org).await;
        if let Err(e) = &outcome {
            leptos::logging::error!("analysis of '{}' failed: {}", org, e);
        }
        set_board.update(|board| board.finish(&org, outcome));
    });
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
