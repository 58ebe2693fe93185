//! Address page handlers
//!
//! GET renders the form, the stored settings and, when an address is
//! saved, the current wind at that address. POST validates the form
//! token, saves the address, and re-renders the page with the outcome.
//!
//! Lookup failures are rendered into the page rather than failing the
//! request: each pipeline stage carries its own message, and a stored
//! address survives a failed lookup untouched.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use application::services::WindReport;
use domain::{Address, SettingsRecord};

use crate::error::ApiError;
use crate::session::{session_cookie, session_id_from_headers};
use crate::state::AppState;

/// Wind conditions prepared for the template
#[derive(Debug, Clone, Serialize)]
pub struct WindView {
    speed_mph: String,
    gusts_mph: String,
    location: String,
    embed_url: String,
    share_url: String,
}

impl WindView {
    fn from_report(report: &WindReport) -> Self {
        Self {
            speed_mph: report.wind.speed.to_string(),
            gusts_mph: report.wind.gusts.to_string(),
            location: report.location.to_string(),
            embed_url: report.map.embed_url.clone(),
            share_url: report.map.share_url.clone(),
        }
    }
}

/// Everything the page template needs
#[derive(Debug, Serialize)]
pub struct PageView {
    csrf_token: String,
    address: String,
    input_value: String,
    messages: Vec<String>,
    success: Option<String>,
    settings_json: String,
    wind: Option<WindView>,
}

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// GET / - render the page
#[instrument(skip(state, headers))]
pub async fn show_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let (token, set_cookie) = ensure_session(&state, &headers);

    let record = state.address_service.current().await;
    let mut view = build_view(token, &record)?;
    attach_lookup(&state, &mut view).await;

    page_response(&state, &view, set_cookie)
}

/// POST / - save a new address and re-render the page
///
/// A missing session or a stale form token is a validation failure like
/// any other: the page re-renders with a message and a fresh token, and
/// nothing is saved.
#[instrument(skip(state, headers, form))]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SubmitForm>,
) -> Result<Response, ApiError> {
    let known_session = session_id_from_headers(&headers)
        .and_then(|sid| state.sessions.token_for(&sid).map(|token| (sid, token)));

    let (token, set_cookie, token_valid) = match known_session {
        Some((session_id, token)) => {
            let valid = state.sessions.verify(&session_id, &form.csrf_token);
            (token, None, valid)
        },
        None => {
            let (session_id, token) = state.sessions.create_session();
            (token, Some(session_cookie(&session_id)), false)
        },
    };

    if !token_valid {
        let record = state.address_service.current().await;
        let mut view = build_view(token, &record)?;
        view.input_value.clone_from(&form.address);
        view.messages
            .push("Invalid form token. Please reload the page and try again.".to_string());
        return page_response(&state, &view, set_cookie);
    }

    match state.address_service.update_address(&form.address).await {
        Ok(record) => {
            let mut view = build_view(token, &record)?;
            view.success = Some("Address saved.".to_string());
            attach_lookup(&state, &mut view).await;
            page_response(&state, &view, None)
        },
        Err(e) if e.is_validation() => {
            let record = state.address_service.current().await;
            let mut view = build_view(token, &record)?;
            view.input_value.clone_from(&form.address);
            view.messages.push(e.to_string());
            page_response(&state, &view, None)
        },
        Err(e) => {
            // The stored file is unchanged when the atomic write fails
            error!(error = %e, "Address save failed");
            let record = state.address_service.current().await;
            let mut view = build_view(token, &record)?;
            view.input_value.clone_from(&form.address);
            view.messages
                .push("Could not save the address. Please try again.".to_string());
            page_response(&state, &view, None)
        },
    }
}

/// Reuse the caller's session if it is known, otherwise start a new one
fn ensure_session(state: &AppState, headers: &HeaderMap) -> (String, Option<String>) {
    if let Some(session_id) = session_id_from_headers(headers) {
        if let Some(token) = state.sessions.token_for(&session_id) {
            return (token, None);
        }
    }
    let (session_id, token) = state.sessions.create_session();
    (token, Some(session_cookie(&session_id)))
}

fn build_view(csrf_token: String, record: &SettingsRecord) -> Result<PageView, ApiError> {
    let settings_json =
        serde_json::to_string_pretty(record).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(PageView {
        csrf_token,
        address: record.address().to_string(),
        input_value: record.address().to_string(),
        messages: Vec::new(),
        success: None,
        settings_json,
        wind: None,
    })
}

/// Run the lookup pipeline for the saved address, rendering any failure
/// as a page message instead of an error response
async fn attach_lookup(state: &AppState, view: &mut PageView) {
    if view.address.is_empty() {
        return;
    }
    match Address::parse(&view.address) {
        Ok(address) => match state.lookup_service.lookup(&address).await {
            Ok(report) => view.wind = Some(WindView::from_report(&report)),
            Err(e) => view.messages.push(e.to_string()),
        },
        // A stored address that no longer validates still renders the page
        Err(e) => view.messages.push(e.to_string()),
    }
}

fn page_response(
    state: &AppState,
    view: &PageView,
    set_cookie: Option<String>,
) -> Result<Response, ApiError> {
    let html = state
        .templates
        .render_page(view)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut response = Html(html).into_response();
    if let Some(cookie) = set_cookie {
        let value =
            HeaderValue::from_str(&cookie).map_err(|e| ApiError::Internal(e.to_string()))?;
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    Ok(response)
}
