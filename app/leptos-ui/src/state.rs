use leptos::prelude::*;

use rl_core::board::ResultsBoard;
use rl_core::config::ClientConfig;

const CONFIG_TOML: &str = include_str!("../config/repolens.toml");

/// State shared by the controller and the results view.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub board: ReadSignal<ResultsBoard>,
    pub set_board: WriteSignal<ResultsBoard>,
}

/// Parse the embedded configuration, falling back to defaults if it is invalid.
pub fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(cfg) => cfg,
        Err(e) => {
            leptos::logging::warn!("invalid repolens.toml, using defaults: {}", e);
            ClientConfig::default()
        }
    }
}

pub fn provide_app_state() {
    let config = load_config();
    let board = ResultsBoard::new(config.ui.default_sort);
    provide_app_state_with(config, board);
}

/// Provide state seeded with an existing board.
pub fn provide_app_state_with(config: ClientConfig, board: ResultsBoard) {
    let (board, set_board) = signal(board);
    provide_context(AppState {
        config,
        board,
        set_board,
    });
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
