//! Data models for the portfolio.
//!
//! This module contains the content document loaded at startup (personal
//! info, projects, papers, UI strings) and the small value types shared by
//! the renderer and the session: `Bilingual`, `Language` and `Tab`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::Error;

// ============================================================================
// Language
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Code stored under the preference key and used in URLs.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Value for the `lang` attribute of the root element.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh-CN",
        }
    }

    /// Short label shown on the language switcher button.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "中文",
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" | "zh-cn" => Ok(Language::Zh),
            other => Err(Error::InvalidInput(format!("unknown language: {}", other))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Tabs
// ============================================================================

/// The closed set of top-level sections. Declaration order is markup order;
/// the first one is active after initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    About,
    Projects,
    Papers,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Projects, Tab::Papers];

    pub fn id(self) -> &'static str {
        match self {
            Tab::About => "about",
            Tab::Projects => "projects",
            Tab::Papers => "papers",
        }
    }

    /// Parse a tab identifier. Unknown ids yield `None`, never an error,
    /// since every caller treats them as a no-op.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Bilingual Text
// ============================================================================

/// A piece of user-facing text in both languages.
///
/// Content files may give a plain string wherever bilingual text is
/// expected; it is then used as-is for either language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bilingual {
    Plain(String),
    Pair {
        #[serde(default)]
        en: String,
        #[serde(default)]
        zh: String,
    },
}

impl Bilingual {
    pub fn pair(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Bilingual::Pair {
            en: en.into(),
            zh: zh.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Bilingual::Plain(text.into())
    }

    /// Text for `lang`. A missing variant resolves to "".
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            Bilingual::Plain(s) => s,
            Bilingual::Pair { en, zh } => match lang {
                Language::En => en,
                Language::Zh => zh,
            },
        }
    }

    /// Text shown for `lang`: the `lang` variant, or the other language's
    /// variant when that one is empty.
    pub fn display(&self, lang: Language) -> &str {
        match self.resolve(lang) {
            "" => self.resolve(lang.toggled()),
            text => text,
        }
    }
}

impl Default for Bilingual {
    fn default() -> Self {
        Bilingual::Plain(String::new())
    }
}

// ============================================================================
// Content Document
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<Personal>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub papers: Vec<Paper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiStrings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<Placeholders>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default)]
    pub name: String,
    /// Icon class (or short glyph) shown in the avatar circle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tags: Vec<Bilingual>,
    #[serde(default)]
    pub bio: Bilingual,
    #[serde(default, deserialize_with = "lenient_list")]
    pub contact: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub label: Bilingual,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "type", default)]
    pub kind: ContactKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    #[default]
    #[serde(other)]
    Link,
}

impl Contact {
    /// Link target, with `mailto:` added for bare email addresses.
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email if !self.url.starts_with("mailto:") => {
                format!("mailto:{}", self.url)
            }
            _ => self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<Stars>,
    #[serde(default)]
    pub description: Bilingual,
    #[serde(default, deserialize_with = "lenient_list")]
    pub links: Vec<Link>,
}

/// Star count: a raw number or a string already formatted for display
/// ("1.2k"). Non-integer numbers are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stars {
    Count(u64),
    Number(f64),
    Label(String),
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stars::Count(n) => write!(f, "{}", n),
            Stars::Number(n) => write!(f, "{}", n),
            Stars::Label(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default)]
    pub icon: String,
    pub label: Bilingual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub title: Bilingual,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub badges: Vec<Badge>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Badge {
    /// Publication venue, shown verbatim in both languages
    Venue { text: String },
    /// Corresponding-author marker
    Corresponding {
        text: Bilingual,
        #[serde(default)]
        icon: String,
    },
    /// Badge type this version does not know; not rendered
    #[serde(other)]
    Unknown,
}

/// Decode a list entry by entry, dropping entries that do not fit the model
/// so one bad item cannot discard the whole document. `null` is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                debug!("Skipping content entry: {}", e);
                None
            }
        })
        .collect())
}

// ============================================================================
// UI Strings
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiStrings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<SectionHeaders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Bilingual>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLabels {
    #[serde(default)]
    pub about: Bilingual,
    #[serde(default)]
    pub projects: Bilingual,
    #[serde(default)]
    pub papers: Bilingual,
}

impl NavLabels {
    pub fn for_tab(&self, tab: Tab) -> &Bilingual {
        match tab {
            Tab::About => &self.about,
            Tab::Projects => &self.projects,
            Tab::Papers => &self.papers,
        }
    }
}

/// Title and subtitle shown at the top of the projects and papers pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub papers: Option<Header>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub title: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<Bilingual>,
}

/// "Coming soon" text keyed by section name (`projects`, `papers`).
pub type Placeholders = BTreeMap<String, Bilingual>;

// ============================================================================
// Tests
// ============================================================================
