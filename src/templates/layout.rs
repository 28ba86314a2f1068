//! Page skeleton.
//!
//! Builds the static structure the renderer fills in: navigation tabs, the
//! language switcher, one content section per tab, and the footer. The first
//! declared tab starts out active.

use crate::dom::{Element, ElementId, Page};
use crate::models::Tab;

/// Element ids and classes shared by the skeleton, renderer and navigator.
pub mod ids {
    pub const NAV_TAB_CLASS: &str = "nav-tab";
    pub const TAB_CONTENT_CLASS: &str = "tab-content";
    pub const ACTIVE_CLASS: &str = "active";
    pub const TAB_ATTR: &str = "data-tab";

    pub const LANG_SWITCHER: &str = "lang-switcher";
    pub const CURRENT_LANG: &str = "current-lang";

    pub const AVATAR: &str = "avatar";
    pub const NAME: &str = "name";
    pub const TAGS: &str = "tags";
    pub const BIO: &str = "bio";
    pub const CONTACTS: &str = "contacts";

    pub const PROJECTS_TITLE: &str = "projects-title";
    pub const PROJECTS_SUBTITLE: &str = "projects-subtitle";
    pub const PROJECTS_GRID: &str = "projects-grid";

    pub const PAPERS_TITLE: &str = "papers-title";
    pub const PAPERS_SUBTITLE: &str = "papers-subtitle";
    pub const PAPERS_GRID: &str = "papers-grid";

    pub const FOOTER_TEXT: &str = "footer-text";
}

pub fn page_skeleton() -> Page {
    let mut page = Page::new();
    let root = page.root();

    // Header: tabs + language switcher
    let header = page.append(root, Element::new("header").with_class("site-header"));
    let nav = page.append(header, Element::new("nav").with_class("nav-tabs"));
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let mut el = Element::new("a")
            .with_class(ids::NAV_TAB_CLASS)
            .with_attr(ids::TAB_ATTR, tab.id())
            .with_attr("href", &format!("/?tab={}", tab.id()))
            .with_text(tab.id());
        if i == 0 {
            el = el.with_class(ids::ACTIVE_CLASS);
        }
        page.append(nav, el);
    }
    let switcher = page.append(
        header,
        Element::new("a")
            .with_id(ids::LANG_SWITCHER)
            .with_class("lang-switcher")
            .with_attr("href", "/lang/toggle"),
    );
    page.append(switcher, Element::new("i").with_class("fas fa-globe"));
    page.append(switcher, Element::new("span").with_id(ids::CURRENT_LANG).with_text("EN"));

    // Main: one section per tab
    let main = page.append(root, Element::new("main").with_class("container"));
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let mut el = Element::new("section")
            .with_id(tab.id())
            .with_class(ids::TAB_CONTENT_CLASS);
        if i == 0 {
            el = el.with_class(ids::ACTIVE_CLASS);
        }
        let section = page.append(main, el);
        match tab {
            Tab::About => about_section(&mut page, section),
            Tab::Projects => list_section(
                &mut page,
                section,
                ids::PROJECTS_TITLE,
                ids::PROJECTS_SUBTITLE,
                ids::PROJECTS_GRID,
                "projects-grid",
            ),
            Tab::Papers => list_section(
                &mut page,
                section,
                ids::PAPERS_TITLE,
                ids::PAPERS_SUBTITLE,
                ids::PAPERS_GRID,
                "papers-grid",
            ),
        }
    }

    let footer = page.append(root, Element::new("footer").with_class("site-footer"));
    page.append(footer, Element::new("p").with_id(ids::FOOTER_TEXT));

    page
}

fn about_section(page: &mut Page, section: ElementId) {
    let hero = page.append(section, Element::new("div").with_class("hero-section"));
    page.append(hero, Element::new("div").with_id(ids::AVATAR).with_class("avatar"));
    page.append(hero, Element::new("h1").with_id(ids::NAME).with_class("name"));
    page.append(hero, Element::new("div").with_id(ids::TAGS).with_class("skill-tags"));
    page.append(hero, Element::new("p").with_id(ids::BIO).with_class("bio"));
    page.append(hero, Element::new("div").with_id(ids::CONTACTS).with_class("contact-links"));
}

fn list_section(
    page: &mut Page,
    section: ElementId,
    title_id: &str,
    subtitle_id: &str,
    grid_id: &str,
    grid_class: &str,
) {
    let header = page.append(section, Element::new("div").with_class("section-header"));
    page.append(header, Element::new("h2").with_id(title_id));
    page.append(header, Element::new("p").with_id(subtitle_id).with_class("subtitle"));
    page.append(section, Element::new("div").with_id(grid_id).with_class(grid_class));
}

/// Point the language switcher at the toggle route, keeping `tab` selected.
pub fn link_lang_switcher(page: &mut Page, tab: Tab) {
    if let Some(id) = page.find_by_id(ids::LANG_SWITCHER) {
        if let Some(el) = page.get_mut(id) {
            el.set_attr("href", &format!("/lang/toggle?tab={}", tab.id()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_declares_every_tab() {
        let page = page_skeleton();
        for tab in Tab::ALL {
            assert!(page.find_by_id(tab.id()).is_some(), "missing section {}", tab);
            assert!(page
                .find_by_attr(ids::NAV_TAB_CLASS, ids::TAB_ATTR, tab.id())
                .is_some());
        }
    }

    #[test]
    fn test_skeleton_first_tab_active() {
        let page = page_skeleton();
        let active_tabs: Vec<_> = page
            .find_by_class(ids::NAV_TAB_CLASS)
            .into_iter()
            .filter(|&id| page.has_class(id, ids::ACTIVE_CLASS))
            .collect();
        assert_eq!(active_tabs.len(), 1);
        assert_eq!(
            page.get(active_tabs[0]).unwrap().attr(ids::TAB_ATTR),
            Some("about")
        );
        let about = page.find_by_id("about").unwrap();
        assert!(page.has_class(about, ids::ACTIVE_CLASS));
    }

    #[test]
    fn test_link_lang_switcher() {
        let mut page = page_skeleton();
        link_lang_switcher(&mut page, Tab::Papers);
        let switcher = page.find_by_id(ids::LANG_SWITCHER).unwrap();
        assert_eq!(
            page.get(switcher).unwrap().attr("href"),
            Some("/lang/toggle?tab=papers")
        );
    }
}
