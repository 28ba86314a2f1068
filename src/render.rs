//! Content rendering.
//!
//! Maps a `ContentDocument` onto the page skeleton for one language. Every
//! text written goes through `Page::bind_text`, so a later language switch
//! can re-resolve it from the page alone. Each step looks up its container
//! first and is skipped when the container is absent.
//!
//! Rendering is idempotent: containers are cleared before being refilled.

use tracing::debug;

use crate::content::default_placeholder;
use crate::dom::{Element, ElementId, Page};
use crate::models::{
    Badge, Bilingual, ContentDocument, Header, Language, Link, Paper, Personal, Project,
    Tab, UiStrings,
};
use crate::templates::layout::ids;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Placeholder cards appended after the project list.
pub const PROJECT_PLACEHOLDERS: usize = 1;
/// Placeholder cards appended after the paper list.
pub const PAPER_PLACEHOLDERS: usize = 2;

pub const PLACEHOLDER_CLASS: &str = "placeholder";
pub const PLACEHOLDER_TEXT_CLASS: &str = "placeholder-text";

pub fn render(page: &mut Page, doc: &ContentDocument, lang: Language) {
    match doc.personal {
        Some(ref personal) => render_personal(page, personal, lang),
        None => debug!("No personal section in content, skipping"),
    }
    render_projects(page, doc, lang);
    render_papers(page, doc, lang);
    match doc.ui {
        Some(ref ui) => render_ui(page, ui, lang),
        None => debug!("No ui section in content, skipping"),
    }
    // Switcher label follows the language like any other bound text
    if let Some(id) = page.find_by_id(ids::CURRENT_LANG) {
        page.bind_text(
            id,
            &Bilingual::pair(Language::En.label(), Language::Zh.label()),
            lang,
        );
    }
    page.apply_language(lang);
}

/// Look up a container by id, logging when it is missing.
fn container(page: &Page, html_id: &str) -> Option<ElementId> {
    let found = page.find_by_id(html_id);
    if found.is_none() {
        debug!("Element #{} not on page, skipping", html_id);
    }
    found
}

// ============================================================================
// Personal Info
// ============================================================================

fn render_personal(page: &mut Page, personal: &Personal, lang: Language) {
    if let Some(id) = container(page, ids::NAME) {
        page.bind_text(id, &Bilingual::plain(personal.name.as_str()), lang);
    }

    if let Some(id) = container(page, ids::AVATAR) {
        page.clear_children(id);
        if let Some(ref icon) = personal.avatar {
            page.append(id, Element::new("i").with_class(icon));
        }
    }

    if let Some(id) = container(page, ids::TAGS) {
        page.clear_children(id);
        for tag in &personal.tags {
            let span = page.append(id, Element::new("span").with_class("skill-tag"));
            page.bind_text(span, tag, lang);
        }
    }

    if let Some(id) = container(page, ids::BIO) {
        page.bind_text(id, &personal.bio, lang);
    }

    if let Some(id) = container(page, ids::CONTACTS) {
        page.clear_children(id);
        for contact in &personal.contact {
            let a = page.append(
                id,
                Element::new("a")
                    .with_class("contact-link")
                    .with_attr("href", &contact.href())
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener"),
            );
            if !contact.icon.is_empty() {
                page.append(a, Element::new("i").with_class(&contact.icon));
            }
            let label = page.append(a, Element::new("span"));
            page.bind_text(label, &contact.label, lang);
        }
    }
}

// ============================================================================
// Projects & Papers
// ============================================================================

fn render_projects(page: &mut Page, doc: &ContentDocument, lang: Language) {
    let Some(grid) = container(page, ids::PROJECTS_GRID) else {
        return;
    };
    page.clear_children(grid);
    for project in &doc.projects {
        project_card(page, grid, project, lang);
    }
    let text = placeholder_text(doc, "projects");
    for _ in 0..PROJECT_PLACEHOLDERS {
        placeholder_card(page, grid, "project-card", &text, lang);
    }
}

fn render_papers(page: &mut Page, doc: &ContentDocument, lang: Language) {
    let Some(grid) = container(page, ids::PAPERS_GRID) else {
        return;
    };
    page.clear_children(grid);
    for paper in &doc.papers {
        paper_card(page, grid, paper, lang);
    }
    let text = placeholder_text(doc, "papers");
    for _ in 0..PAPER_PLACEHOLDERS {
        placeholder_card(page, grid, "paper-card", &text, lang);
    }
}

fn placeholder_text(doc: &ContentDocument, section: &str) -> Bilingual {
    doc.placeholders
        .as_ref()
        .and_then(|p| p.get(section))
        .cloned()
        .unwrap_or_else(|| default_placeholder(section))
}

fn project_card(page: &mut Page, grid: ElementId, project: &Project, lang: Language) {
    let card = page.append(grid, Element::new("div").with_class("project-card"));
    let header = page.append(card, Element::new("div").with_class("project-header"));
    let title = page.append(header, Element::new("h3").with_class("project-title"));
    let title_link = page.append(
        title,
        Element::new("a")
            .with_attr("href", &project.url)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener"),
    );
    page.bind_text(title_link, &Bilingual::plain(project.title.as_str()), lang);

    if let Some(ref stars) = project.stars {
        let badge = page.append(header, Element::new("span").with_class("project-stars"));
        page.append(badge, Element::new("i").with_class("fas fa-star"));
        let count = page.append(badge, Element::new("span"));
        page.bind_text(count, &Bilingual::plain(stars.to_string()), lang);
    }

    let desc = page.append(card, Element::new("p").with_class("project-description"));
    page.bind_text(desc, &project.description, lang);

    link_row(page, card, "project-links", &project.links, lang);
}

fn paper_card(page: &mut Page, grid: ElementId, paper: &Paper, lang: Language) {
    let card = page.append(grid, Element::new("div").with_class("paper-card"));
    let title = page.append(card, Element::new("h3").with_class("paper-title"));
    let title_link = page.append(
        title,
        Element::new("a")
            .with_attr("href", &paper.url)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener"),
    );
    page.bind_text(title_link, &paper.title, lang);

    if paper.badges.iter().any(|b| !matches!(b, Badge::Unknown)) {
        let row = page.append(card, Element::new("div").with_class("paper-badges"));
        for badge in &paper.badges {
            match badge {
                Badge::Venue { text } => {
                    let span =
                        page.append(row, Element::new("span").with_class("badge badge-venue"));
                    page.bind_text(span, &Bilingual::plain(text.as_str()), lang);
                }
                Badge::Corresponding { text, icon } => {
                    let span = page.append(
                        row,
                        Element::new("span").with_class("badge badge-corresponding"),
                    );
                    if !icon.is_empty() {
                        page.append(span, Element::new("i").with_class(icon));
                    }
                    let label = page.append(span, Element::new("span"));
                    page.bind_text(label, text, lang);
                }
                Badge::Unknown => {}
            }
        }
    }

    link_row(page, card, "paper-links", &paper.links, lang);
}

fn link_row(page: &mut Page, card: ElementId, class: &str, links: &[Link], lang: Language) {
    if links.is_empty() {
        return;
    }
    let row = page.append(card, Element::new("div").with_class(class));
    for link in links {
        let a = page.append(
            row,
            Element::new("a")
                .with_class("card-link")
                .with_attr("href", &link.url)
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener"),
        );
        if !link.icon.is_empty() {
            page.append(a, Element::new("i").with_class(&link.icon));
        }
        let label = page.append(a, Element::new("span"));
        page.bind_text(label, &link.label, lang);
    }
}

fn placeholder_card(
    page: &mut Page,
    grid: ElementId,
    card_class: &str,
    text: &Bilingual,
    lang: Language,
) {
    let card = page.append(
        grid,
        Element::new("div").with_class(card_class).with_class(PLACEHOLDER_CLASS),
    );
    let inner = page.append(card, Element::new("div").with_class("placeholder-content"));
    page.append(inner, Element::new("i").with_class("fas fa-plus"));
    let p = page.append(inner, Element::new("p").with_class(PLACEHOLDER_TEXT_CLASS));
    page.bind_text(p, text, lang);
}

// ============================================================================
// UI Strings
// ============================================================================

fn render_ui(page: &mut Page, ui: &UiStrings, lang: Language) {
    if let Some(ref nav) = ui.nav {
        for tab in Tab::ALL {
            if let Some(id) = page.find_by_attr(ids::NAV_TAB_CLASS, ids::TAB_ATTR, tab.id()) {
                page.bind_text(id, nav.for_tab(tab), lang);
            }
        }
    }

    if let Some(ref headers) = ui.headers {
        if let Some(ref h) = headers.projects {
            section_header(page, h, ids::PROJECTS_TITLE, ids::PROJECTS_SUBTITLE, lang);
        }
        if let Some(ref h) = headers.papers {
            section_header(page, h, ids::PAPERS_TITLE, ids::PAPERS_SUBTITLE, lang);
        }
    }

    if let Some(ref footer) = ui.footer {
        if let Some(id) = container(page, ids::FOOTER_TEXT) {
            page.bind_text(id, footer, lang);
        }
    }
}

fn section_header(
    page: &mut Page,
    header: &Header,
    title_id: &str,
    subtitle_id: &str,
    lang: Language,
) {
    if let Some(id) = container(page, title_id) {
        page.bind_text(id, &header.title, lang);
    }
    if let Some(ref subtitle) = header.subtitle {
        if let Some(id) = container(page, subtitle_id) {
            page.bind_text(id, subtitle, lang);
        }
    }
}
