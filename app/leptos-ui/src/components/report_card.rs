use leptos::prelude::*;
use wasm_bindgen::JsValue;

use rl_core::report::{ReportRecord, UNKNOWN};

/// Last push as the browser's locale date string, or "Unknown".
pub fn push_date_label(record: &ReportRecord) -> String {
    match record.last_push {
        Some(ts) => {
            let date = js_sys::Date::new(&JsValue::from_f64(ts.timestamp_millis() as f64));
            String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
        }
        None => UNKNOWN.to_string(),
    }
}

/// One analyzed repository.
#[component]
pub fn ReportCard(record: ReportRecord) -> impl IntoView {
    let name = record.display_name().to_string();
    let badge_class = format!("stat status {}", record.activity.css_class());
    let stars = format!("⭐ {}", record.stars_label());
    let last_push = format!("Last push: {}", push_date_label(&record));
    let ReportRecord {
        github_url,
        description,
        ai_summary,
        activity_status,
        language,
        ..
    } = record;

    view! {
        <div class="repo-card">
            <div class="card-header">
                <h3>
                    <a href=github_url target="_blank" rel="noopener noreferrer">{name}</a>
                </h3>
                <div class=badge_class>
                    <span class="status-dot"></span>
                    {activity_status}
                </div>
            </div>
            <p class="description">{description}</p>
            <div class="ai-summary">
                <strong>"AI Summary:"</strong>
                <p>{ai_summary}</p>
            </div>
            <div class="card-footer">
                <div class="stat">{stars}</div>
                <div class="stat">{language}</div>
                <div class="stat">{last_push}</div>
            </div>
        </div>
    }
}
