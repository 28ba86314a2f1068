//! Portfolio library - a bilingual personal portfolio site.
//!
//! The application is organized into the following modules:
//!
//! - `models`: Content document, bilingual text, languages and tabs
//! - `content`: Content loading with built-in fallback
//! - `dom`: In-memory page tree and bilingual text registry
//! - `render`: Content document to page rendering
//! - `language`: Language switching and preference persistence
//! - `navigation`: Tab switching and keyboard shortcuts
//! - `session`: Session state and the `Portfolio` page controller
//! - `prefs`: Preference stores (memory, file)
//! - `templates`: Page skeleton, HTML wrapper and CSS
//! - `handlers`: HTTP route handlers
//! - `config`: TOML configuration

use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod handlers;
pub mod language;
pub mod models;
pub mod navigation;
pub mod prefs;
pub mod render;
pub mod session;
pub mod templates;

// ============================================================================
// Application State
// ============================================================================

/// Shared, read-only state: the content document loaded at startup.
#[derive(Clone)]
pub struct AppState {
    pub document: Arc<models::ContentDocument>,
    pub origin: content::ContentOrigin,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(loaded: content::LoadedContent, assets_dir: PathBuf) -> Self {
        Self {
            document: Arc::new(loaded.document),
            origin: loaded.origin,
            source: loaded.source,
            loaded_at: loaded.loaded_at,
            assets_dir,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.assets_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/lang/{code}", get(handlers::switch_language))
        .route("/api/content", get(handlers::content_api))
        .route("/health", get(handlers::health))
        .nest_service("/assets", assets)
        .with_state(Arc::new(state))
}

// Re-export commonly used types
pub use config::Config;
pub use content::{default_content, load, load_content, ContentOrigin, ContentSource, LoadedContent};
pub use dom::{html_escape, Element, ElementId, Page};
pub use error::{Error, Result};
pub use language::{set_language, PREFERENCE_KEY};
pub use models::{Bilingual, ContentDocument, Language, Paper, Project, Tab};
pub use navigation::{action_for, switch_tab, Action, KeyPress};
pub use prefs::{FileStore, MemoryStore, PreferenceStore};
pub use render::render;
pub use session::{Portfolio, Session};
