use rl_api_types::{AnalyzeRequest, AnalyzeResponse};
use rl_core::config::ClientConfig;
use rl_core::error::AnalysisError;
use rl_core::report::{ingest, ReportRecord};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// ── Fetch helpers ──

/// Text of a rejected promise or thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn transport(err: JsValue) -> AnalysisError {
    AnalysisError::Transport(js_error_message(&err))
}

/// POST `body` as JSON and return the response's success flag and parsed body.
///
/// The body is parsed whatever the status: failures carry their reason in it.
async fn post_json<T: Serialize>(
    url: &str,
    body: &T,
) -> Result<(bool, serde_json::Value), AnalysisError> {
    let body_str =
        serde_json::to_string(body).map_err(|e| AnalysisError::Transport(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body_str));

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(transport)?;

    let window =
        web_sys::window().ok_or_else(|| AnalysisError::Transport("no global window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;

    let resp: Response = resp_value.dyn_into().map_err(transport)?;
    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;

    let value = serde_wasm_bindgen::from_value(json)
        .map_err(|e| AnalysisError::Transport(e.to_string()))?;
    Ok((resp.ok(), value))
}

// ── Analysis service ──

/// Map a parsed response to the record set or a server error.
///
/// A success body without a usable `report` array yields an empty set.
pub fn interpret_response(
    ok: bool,
    body: serde_json::Value,
) -> Result<Vec<ReportRecord>, AnalysisError> {
    let response = AnalyzeResponse::from_json_value(body);
    if !ok {
        return Err(AnalysisError::server(response.error_message()));
    }
    if let Some(message) = response.message.as_deref() {
        leptos::logging::log!("analysis service: {}", message);
    }
    Ok(ingest(&response))
}

/// Submit `org` to the analysis service. The only await point of a run.
pub async fn analyze(config: &ClientConfig, org: &str) -> Result<Vec<ReportRecord>, AnalysisError> {
    let (ok, body) = post_json(&config.analyze_url(), &AnalyzeRequest::new(org)).await?;
    interpret_response(ok, body)
}
