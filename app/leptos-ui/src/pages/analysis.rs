use leptos::prelude::*;

use rl_core::sort::SortKey;

use crate::components::report_card::ReportCard;
use crate::components::spinner::Spinner;
use crate::controller::start_analysis;
use crate::state::use_app_state;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let state = use_app_state();
    let board = state.board;
    let set_board = state.set_board;

    let (org_input, set_org_input) = signal(String::new());

    // Button click and Enter in the input run the same operation.
    let submit = move || start_analysis(&state, &org_input.get_untracked());
    let submit_on_enter = submit.clone();

    let busy = move || board.with(|b| b.is_busy());

    view! {
        <div class="search-bar">
            <input
                id="orgName"
                type="text"
                placeholder="Enter a GitHub organization (e.g. octocat)"
                prop:value=move || org_input.get()
                on:input=move |ev| set_org_input.set(event_target_value(&ev))
                on:keyup=move |ev| {
                    if ev.key() == "Enter" {
                        submit_on_enter();
                    }
                }
            />
            <button
                id="analyzeButton"
                class="btn btn-primary"
                prop:disabled=busy
                on:click=move |_| submit()
            >
                "Analyze"
            </button>
        </div>

        <Show when=busy>
            <div id="loader-container">
                <Spinner size="lg" label="Analyzing repositories..." />
            </div>
        </Show>

        <Show when=move || board.with(|b| b.header_visible())>
            <div id="results-header-bar" class="results-header-bar">
                <h2 id="results-header">
                    {move || board.with(|b| b.header_text().unwrap_or_default())}
                </h2>
                <Show when=move || board.with(|b| b.sort_visible())>
                    <div id="sort-container" class="sort-container">
                        <label for="sortSelect">"Sort by:"</label>
                        <select
                            id="sortSelect"
                            prop:value=move || board.with(|b| b.sort_key().as_str())
                            on:change=move |ev| {
                                let key = SortKey::from_value(&event_target_value(&ev));
                                set_board.update(|b| b.set_sort(key));
                            }
                        >
                            {SortKey::all()
                                .iter()
                                .copied()
                                .map(|key| view! {
                                    <option
                                        value=key.as_str()
                                        prop:selected=move || board.with(|b| b.sort_key() == key)
                                    >
                                        {key.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </Show>
            </div>
        </Show>

        <div id="results-grid" class="results-grid">
            {move || board.with(|b| match b.error_text() {
                Some(message) => view! { <div class="error">{message.to_string()}</div> }.into_any(),
                None => b
                    .cards()
                    .iter()
                    .cloned()
                    .map(|record| view! { <ReportCard record=record /> })
                    .collect_view()
                    .into_any(),
            })}
        </div>
    }
}
