use leptos::prelude::*;

pub mod api;
pub mod components;
pub mod controller;
pub mod pages;
pub mod state;

use wasm_bindgen::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    state::provide_app_state();

    view! {
        <header class="app-header">
            <h1>"RepoLens"</h1>
            <p class="tagline">"AI-assisted insight into a GitHub organization's repositories"</p>
        </header>
        <main class="content">
            <pages::analysis::AnalysisPage />
        </main>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
