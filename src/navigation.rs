//! Tab navigation and keyboard shortcuts.

use tracing::{debug, warn};

use crate::dom::Page;
use crate::models::Tab;
use crate::session::Session;
use crate::templates::layout::ids;

// ============================================================================
// Tab Switching
// ============================================================================

/// Make `tab_id` the single active tab/section pair and scroll to the top.
///
/// Unknown ids, and ids whose tab or section is missing from the page, leave
/// the current tab active. Returns whether the switch happened.
pub fn switch_tab(page: &mut Page, session: &mut Session, tab_id: &str) -> bool {
    let Some(tab) = Tab::from_id(tab_id) else {
        debug!("Ignoring unknown tab id {:?}", tab_id);
        return false;
    };

    let button = page.find_by_attr(ids::NAV_TAB_CLASS, ids::TAB_ATTR, tab.id());
    let section = page.find_by_id(tab.id());
    let (Some(button), Some(section)) = (button, section) else {
        warn!("Tab {} is not on the page, staying on {}", tab, session.active_tab);
        return false;
    };

    for id in page.find_by_class(ids::NAV_TAB_CLASS) {
        page.remove_class(id, ids::ACTIVE_CLASS);
    }
    for id in page.find_by_class(ids::TAB_CONTENT_CLASS) {
        page.remove_class(id, ids::ACTIVE_CLASS);
    }
    page.add_class(button, ids::ACTIVE_CLASS);
    page.add_class(section, ids::ACTIVE_CLASS);

    session.active_tab = tab;
    page.scroll_to_top();
    true
}

/// The tab whose nav button is marked active, if exactly one is.
pub fn active_tab(page: &Page) -> Option<Tab> {
    let active: Vec<Tab> = page
        .find_by_class(ids::NAV_TAB_CLASS)
        .into_iter()
        .filter(|&id| page.has_class(id, ids::ACTIVE_CLASS))
        .filter_map(|id| page.get(id).and_then(|e| e.attr(ids::TAB_ATTR)))
        .filter_map(Tab::from_id)
        .collect();
    match active.as_slice() {
        [tab] => Some(*tab),
        _ => None,
    }
}

// ============================================================================
// Keyboard Shortcuts
// ============================================================================

/// Alt+digit selects a tab.
pub const TAB_SHORTCUTS: [(&str, Tab); 3] =
    [("1", Tab::About), ("2", Tab::Projects), ("3", Tab::Papers)];

/// Ctrl/Cmd+Shift+<key> toggles the language.
pub const LANGUAGE_SHORTCUT: &str = "L";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SwitchTab(Tab),
    ToggleLanguage,
}

pub fn action_for(key: &KeyPress) -> Option<Action> {
    if key.alt {
        if let Some((_, tab)) = TAB_SHORTCUTS.iter().find(|(k, _)| *k == key.key) {
            return Some(Action::SwitchTab(*tab));
        }
    }
    if (key.ctrl || key.meta) && key.shift && key.key.eq_ignore_ascii_case(LANGUAGE_SHORTCUT) {
        return Some(Action::ToggleLanguage);
    }
    None
}
