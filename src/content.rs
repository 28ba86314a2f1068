//! Content loading.
//!
//! The content document is read once at startup from a relative file path
//! or an http(s) URL. Any failure to read or decode it is absorbed here: the
//! caller always gets a document, falling back to `default_content()`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{
    Bilingual, Contact, ContactKind, ContentDocument, Header, NavLabels, Personal,
    SectionHeaders, UiStrings,
};

// ============================================================================
// Sources
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Url(String),
}

impl ContentSource {
    /// `http://` and `https://` locations are fetched remotely; anything else
    /// is a filesystem path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ContentSource::Url(trimmed.to_string())
        } else {
            ContentSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    Fetched,
    Fallback,
}

/// A loaded document plus where and when it came from.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub document: ContentDocument,
    pub origin: ContentOrigin,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedContent {
    pub fn new(document: ContentDocument, origin: ContentOrigin, source: &str) -> Self {
        Self {
            document,
            origin,
            source: source.to_string(),
            loaded_at: Utc::now(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Single attempt to read the raw JSON. No retry, no timeout.
pub async fn fetch(source: &ContentSource) -> Result<String> {
    match source {
        ContentSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        ContentSource::Url(url) => {
            let response = reqwest::get(url).await?.error_for_status()?;
            Ok(response.text().await?)
        }
    }
}

pub fn decode(raw: &str) -> Result<ContentDocument> {
    Ok(serde_json::from_str(raw)?)
}

/// Turn a fetch result into a document, substituting the default document
/// on any read or decode error. Logs exactly one event either way.
pub fn resolve(source: &ContentSource, fetched: Result<String>) -> LoadedContent {
    let label = source.to_string();
    match fetched.and_then(|raw| decode(&raw)) {
        Ok(document) => {
            info!(
                "Loaded content from {} ({} projects, {} papers)",
                label,
                document.projects.len(),
                document.papers.len()
            );
            LoadedContent::new(document, ContentOrigin::Fetched, &label)
        }
        Err(e) => {
            warn!("Failed to load content from {}: {}; using default content", label, e);
            LoadedContent::new(default_content(), ContentOrigin::Fallback, &label)
        }
    }
}

pub async fn load_content(source: &ContentSource) -> LoadedContent {
    let fetched = fetch(source).await;
    resolve(source, fetched)
}

/// Load the content document; never fails.
pub async fn load(source: &ContentSource) -> ContentDocument {
    load_content(source).await.document
}

// ============================================================================
// Default Content
// ============================================================================

/// "Coming soon" text used when the document has no placeholder for a section.
pub fn default_placeholder(section: &str) -> Bilingual {
    match section {
        "papers" => Bilingual::pair("More papers coming soon...", "更多论文即将发布..."),
        _ => Bilingual::pair("More projects coming soon...", "更多项目即将到来..."),
    }
}

/// Built-in document used when the content file cannot be loaded.
///
/// Carries only what the page needs to look complete: personal info, UI
/// strings and placeholders. Projects and papers are left empty.
pub fn default_content() -> ContentDocument {
    let mut placeholders = BTreeMap::new();
    placeholders.insert("projects".to_string(), default_placeholder("projects"));
    placeholders.insert("papers".to_string(), default_placeholder("papers"));

    ContentDocument {
        personal: Some(Personal {
            name: "keta1930".to_string(),
            avatar: Some("fas fa-user-astronaut".to_string()),
            tags: vec![
                Bilingual::pair("Developer", "开发者"),
                Bilingual::pair("Researcher", "研究者"),
            ],
            bio: Bilingual::pair(
                "Welcome to my portfolio. Content is temporarily unavailable.",
                "欢迎来到我的主页。内容暂时无法加载。",
            ),
            contact: vec![Contact {
                label: Bilingual::plain("GitHub"),
                url: "https://github.com/keta1930".to_string(),
                icon: "fab fa-github".to_string(),
                kind: ContactKind::Link,
            }],
        }),
        projects: Vec::new(),
        papers: Vec::new(),
        ui: Some(UiStrings {
            nav: Some(NavLabels {
                about: Bilingual::pair("About", "关于"),
                projects: Bilingual::pair("Projects", "项目"),
                papers: Bilingual::pair("Papers", "论文"),
            }),
            headers: Some(SectionHeaders {
                projects: Some(Header {
                    title: Bilingual::pair("Projects", "项目"),
                    subtitle: Some(Bilingual::pair(
                        "Things I have built",
                        "我做过的一些东西",
                    )),
                }),
                papers: Some(Header {
                    title: Bilingual::pair("Papers", "论文"),
                    subtitle: Some(Bilingual::pair(
                        "Publications and preprints",
                        "发表的论文与预印本",
                    )),
                }),
            }),
            footer: Some(Bilingual::pair(
                "© keta1930. Built with Rust.",
                "© keta1930。使用 Rust 构建。",
            )),
        }),
        placeholders: Some(placeholders),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::Language;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts events per level so tests can assert on what was logged.
    #[derive(Clone, Default)]
    struct EventCounter {
        info: Arc<AtomicUsize>,
        warn: Arc<AtomicUsize>,
    }

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let level = *event.metadata().level();
            if level == Level::INFO {
                self.info.fetch_add(1, Ordering::SeqCst);
            } else if level == Level::WARN {
                self.warn.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn resolve_counting(
        source: &ContentSource,
        fetched: Result<String>,
    ) -> (LoadedContent, EventCounter) {
        let counter = EventCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let loaded = tracing::subscriber::with_default(subscriber, || resolve(source, fetched));
        (loaded, counter)
    }

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            ContentSource::parse("https://example.com/data.json"),
            ContentSource::Url("https://example.com/data.json".to_string())
        );
        assert_eq!(
            ContentSource::parse("data/content.json"),
            ContentSource::File(PathBuf::from("data/content.json"))
        );
    }

    #[test]
    fn test_failed_fetch_falls_back_and_warns_once() {
        let source = ContentSource::parse("data/missing.json");
        let err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let (loaded, counter) = resolve_counting(&source, Err(err));

        assert_eq!(loaded.document, default_content());
        assert_eq!(loaded.origin, ContentOrigin::Fallback);
        assert_eq!(counter.warn.load(Ordering::SeqCst), 1);
        assert_eq!(counter.info.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bad_json_falls_back() {
        let source = ContentSource::parse("data/content.json");
        let (loaded, counter) = resolve_counting(&source, Ok("{\"projects\": [".to_string()));

        assert_eq!(loaded.document, default_content());
        assert_eq!(loaded.origin, ContentOrigin::Fallback);
        assert_eq!(counter.warn.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_good_json_is_used() {
        let source = ContentSource::parse("data/content.json");
        let raw = r#"{"personal": {"name": "X", "bio": {"en": "A", "zh": "B"}}}"#;
        let (loaded, counter) = resolve_counting(&source, Ok(raw.to_string()));

        assert_eq!(loaded.origin, ContentOrigin::Fetched);
        let personal = loaded.document.personal.unwrap();
        assert_eq!(personal.name, "X");
        assert_eq!(personal.bio.resolve(Language::Zh), "B");
        assert_eq!(counter.info.load(Ordering::SeqCst), 1);
        assert_eq!(counter.warn.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_one_odd_entry_keeps_the_rest_of_the_document() {
        let source = ContentSource::parse("data/content.json");
        let inputs = [
            r#"{"personal": {"name": "Real"}, "projects": [{"title": "a", "stars": 1.5}]}"#,
            r#"{"personal": {"name": "Real"}, "papers": [{"title": "t", "badges": [{"type": "award", "text": "Best"}]}]}"#,
            r#"{"personal": {"name": "Real"}, "projects": [{"url": "u"}]}"#,
        ];
        for raw in inputs {
            let (loaded, counter) = resolve_counting(&source, Ok(raw.to_string()));
            assert_eq!(loaded.origin, ContentOrigin::Fetched, "input: {}", raw);
            assert_eq!(loaded.document.personal.unwrap().name, "Real");
            assert_eq!(counter.warn.load(Ordering::SeqCst), 0);
            assert_eq!(counter.info.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_load_fixture_file() {
        let source = ContentSource::File(fixture_path("content.json"));
        let loaded = load_content(&source).await;
        assert_eq!(loaded.origin, ContentOrigin::Fetched);
        assert_eq!(loaded.document.projects.len(), 2);
        assert_eq!(loaded.document.papers.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_default() {
        let source = ContentSource::File(fixture_path("does-not-exist.json"));
        let doc = load(&source).await;
        assert_eq!(doc, default_content());
    }

    #[test]
    fn test_default_content_has_both_placeholders() {
        let doc = default_content();
        let placeholders = doc.placeholders.unwrap();
        assert!(placeholders.contains_key("projects"));
        assert!(placeholders.contains_key("papers"));
        assert!(doc.projects.is_empty());
        assert!(doc.papers.is_empty());
    }
}
