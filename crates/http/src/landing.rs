//! Landing page - embedded HTML for Facebook login and quiz hand-off.
//!
//! The template is rendered once at startup; `GET /` serves the cached result.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;

/// Embedded HTML template for the landing page.
pub const LANDING_HTML: &str = include_str!("landing.html");

/// Values substituted into [`LANDING_HTML`].
#[derive(Debug, Clone, Default)]
pub struct LandingSettings {
    pub facebook_app_id: Option<String>,
    pub quiz_url: Option<String>,
}

/// Fill the template placeholders. Missing settings render as empty strings.
#[must_use]
pub fn render_landing_page(settings: &LandingSettings) -> String {
    LANDING_HTML
        .replace(
            "{{FACEBOOK_APP_ID}}",
            &escape_attribute(settings.facebook_app_id.as_deref().unwrap_or_default()),
        )
        .replace("{{QUIZ_URL}}", &escape_attribute(settings.quiz_url.as_deref().unwrap_or_default()))
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serve the landing page
pub async fn serve_landing(State(state): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Html(state.landing_page.clone()),
    )
        .into_response()
}
