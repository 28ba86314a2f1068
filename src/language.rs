//! Language switching and persistence.

use tracing::{info, warn};

use crate::dom::Page;
use crate::models::Language;
use crate::prefs::PreferenceStore;
use crate::session::Session;

/// Preference key holding `"en"` or `"zh"`.
pub const PREFERENCE_KEY: &str = "preferred-language";

/// Read the stored language. Missing, unreadable or unknown values give the
/// default language.
pub fn restore_language<S: PreferenceStore + ?Sized>(store: &S) -> Language {
    match store.get(PREFERENCE_KEY) {
        Ok(Some(code)) => code.parse::<Language>().unwrap_or_else(|e| {
            warn!("Ignoring stored language preference: {}", e);
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            warn!("Could not read language preference: {}", e);
            Language::default()
        }
    }
}

/// Store `lang` under the preference key. Failures are logged, not raised.
pub fn persist_language<S: PreferenceStore + ?Sized>(store: &mut S, lang: Language) {
    if let Err(e) = store.set(PREFERENCE_KEY, lang.code()) {
        warn!("Could not save language preference: {}", e);
    }
}

/// Switch the whole page to `lang` without touching the stored preference.
///
/// Every bound element is re-resolved; unbound elements are left alone.
pub fn show_language(page: &mut Page, session: &mut Session, lang: Language) {
    session.language = lang;
    page.apply_language(lang);
}

/// Switch the whole page to `lang` and remember the choice.
pub fn set_language<S: PreferenceStore + ?Sized>(
    page: &mut Page,
    session: &mut Session,
    store: &mut S,
    lang: Language,
) {
    show_language(page, session, lang);
    persist_language(store, lang);
    info!("Language set to {}", lang);
}

pub fn toggle_language<S: PreferenceStore + ?Sized>(
    page: &mut Page,
    session: &mut Session,
    store: &mut S,
) -> Language {
    let next = session.language.toggled();
    set_language(page, session, store, next);
    next
}
