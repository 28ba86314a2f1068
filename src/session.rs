//! Session state and the page controller.
//!
//! `Session` is the per-visit state: the current language and the active
//! tab. `Portfolio` ties a session to a rendered page, the shared content
//! document and a preference store, and is the single entry point for user
//! actions (tab clicks, language toggles, keyboard shortcuts).

use std::sync::Arc;

use crate::dom::Page;
use crate::language::{restore_language, set_language, show_language, toggle_language};
use crate::models::{ContentDocument, Language, Tab};
use crate::navigation::{action_for, switch_tab, Action, KeyPress};
use crate::prefs::PreferenceStore;
use crate::render::render;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub language: Language,
    pub active_tab: Tab,
}

impl Session {
    /// Fresh session on the first tab, with the stored language preference.
    pub fn restore<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self {
            language: restore_language(store),
            active_tab: Tab::default(),
        }
    }
}

pub struct Portfolio<S: PreferenceStore> {
    doc: Arc<ContentDocument>,
    page: Page,
    session: Session,
    store: S,
}

impl<S: PreferenceStore> Portfolio<S> {
    /// Restore the language, render everything once and activate the first
    /// tab. `page` is normally `templates::page_skeleton()`.
    pub fn init(doc: Arc<ContentDocument>, mut page: Page, store: S) -> Self {
        let mut session = Session::restore(&store);
        render(&mut page, &doc, session.language);
        switch_tab(&mut page, &mut session, Tab::default().id());
        Self {
            doc,
            page,
            session,
            store,
        }
    }

    /// Render again from the document for the current language.
    pub fn rerender(&mut self) {
        render(&mut self.page, &self.doc, self.session.language);
    }

    pub fn set_language(&mut self, lang: Language) {
        set_language(&mut self.page, &mut self.session, &mut self.store, lang);
    }

    /// Show the page in `lang` for this session only; the stored preference
    /// is left as it was.
    pub fn show_language(&mut self, lang: Language) {
        show_language(&mut self.page, &mut self.session, lang);
    }

    pub fn toggle_language(&mut self) -> Language {
        toggle_language(&mut self.page, &mut self.session, &mut self.store)
    }

    pub fn switch_tab(&mut self, tab_id: &str) -> bool {
        switch_tab(&mut self.page, &mut self.session, tab_id)
    }

    /// Apply the shortcut bound to `key`, if any.
    pub fn handle_key(&mut self, key: &KeyPress) -> Option<Action> {
        let action = action_for(key)?;
        match action {
            Action::SwitchTab(tab) => {
                self.switch_tab(tab.id());
            }
            Action::ToggleLanguage => {
                self.toggle_language();
            }
        }
        Some(action)
    }

    pub fn document(&self) -> &ContentDocument {
        &self.doc
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
