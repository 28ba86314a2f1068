//! HTTP route handlers.
//!
//! Every page request builds a fresh page from the shared document, restores
//! the language from the `preferred-language` cookie, applies the requested
//! language and tab, and returns the rendered HTML.

use crate::language::{restore_language, PREFERENCE_KEY};
use crate::models::{ContentDocument, Language, Tab};
use crate::prefs::MemoryStore;
use crate::session::Portfolio;
use crate::templates::{link_lang_switcher, page_skeleton, render_document};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// Cookie Helpers
// ============================================================================

/// Preference store seeded from the request's language cookie.
pub fn store_from_jar(jar: &CookieJar) -> MemoryStore {
    match jar.get(PREFERENCE_KEY) {
        Some(cookie) => MemoryStore::new().with(PREFERENCE_KEY, cookie.value()),
        None => MemoryStore::new(),
    }
}

pub fn preference_cookie(lang: Language) -> Cookie<'static> {
    Cookie::build((PREFERENCE_KEY, lang.code()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

// ============================================================================
// Page Handler
// ============================================================================

#[derive(Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
    pub lang: Option<String>,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    jar: CookieJar,
) -> Response {
    let mut portfolio = Portfolio::init(
        state.document.clone(),
        page_skeleton(),
        store_from_jar(&jar),
    );

    let mut chosen = None;
    if let Some(ref code) = query.lang {
        match code.parse::<Language>() {
            Ok(lang) => {
                portfolio.set_language(lang);
                chosen = Some(lang);
            }
            Err(e) => debug!("Ignoring lang parameter: {}", e),
        }
    }
    if let Some(ref tab) = query.tab {
        portfolio.switch_tab(tab);
    }

    let active = portfolio.session().active_tab;
    link_lang_switcher(portfolio.page_mut(), active);
    let html = render_document(&portfolio);

    match chosen {
        Some(lang) => (jar.add(preference_cookie(lang)), Html(html)).into_response(),
        None => Html(html).into_response(),
    }
}

// ============================================================================
// Language Switch Handler
// ============================================================================

#[derive(Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

/// `/lang/{code}` with `code` one of `en`, `zh` or `toggle`.
pub async fn switch_language(
    Path(code): Path<String>,
    Query(query): Query<TabQuery>,
    jar: CookieJar,
) -> Response {
    let lang = if code == "toggle" {
        restore_language(&store_from_jar(&jar)).toggled()
    } else {
        match code.parse::<Language>() {
            Ok(lang) => lang,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        }
    };

    let target = match query.tab.as_deref().and_then(Tab::from_id) {
        Some(tab) => format!("/?tab={}", tab.id()),
        None => "/".to_string(),
    };

    info!("Language preference set to {}", lang);
    (jar.add(preference_cookie(lang)), Redirect::to(&target)).into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

pub async fn content_api(State(state): State<Arc<AppState>>) -> Json<ContentDocument> {
    Json(state.document.as_ref().clone())
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "origin": state.origin,
        "source": state.source,
        "loaded_at": state.loaded_at.to_rfc3339(),
    }))
}
