//! Tests for page rendering.
//!
//! Most tests render into the standard skeleton; a few strip containers out
//! of it to check that missing elements only skip their own step.

use super::*;
use crate::content::default_content;
use crate::language::set_language;
use crate::models::{Contact, ContactKind, Placeholders, Stars};
use crate::prefs::MemoryStore;
use crate::session::Session;
use crate::templates::layout::page_skeleton;

// ============================================================================
// Helpers
// ============================================================================

/// The document from the bio/placeholder scenario: one person, no projects,
/// no papers, placeholders for both sections.
fn scenario_doc() -> ContentDocument {
    serde_json::from_str(
        r#"{
            "personal": {"name": "X", "tags": [], "bio": {"en": "A", "zh": "B"}, "contact": []},
            "projects": [],
            "papers": [],
            "placeholders": {
                "projects": {"en": "P", "zh": "p"},
                "papers": {"en": "Q", "zh": "q"}
            }
        }"#,
    )
    .unwrap()
}

fn sample_project(title: &str) -> Project {
    Project {
        title: title.to_string(),
        url: format!("https://github.com/keta1930/{}", title),
        stars: Some(Stars::Count(128)),
        description: Bilingual::pair("A tool", "一个工具"),
        links: vec![Link {
            url: format!("https://github.com/keta1930/{}", title),
            icon: "fab fa-github".to_string(),
            label: Bilingual::pair("Code", "代码"),
        }],
    }
}

fn sample_paper() -> Paper {
    Paper {
        title: Bilingual::plain("Attention Is Not All You Need"),
        url: "https://arxiv.org/abs/2401.00001".to_string(),
        badges: vec![
            Badge::Venue {
                text: "ACL 2024".to_string(),
            },
            Badge::Corresponding {
                text: Bilingual::pair("Corresponding", "通讯作者"),
                icon: "fas fa-envelope".to_string(),
            },
        ],
        links: vec![Link {
            url: "https://arxiv.org/pdf/2401.00001".to_string(),
            icon: "fas fa-file-pdf".to_string(),
            label: Bilingual::pair("PDF", "论文"),
        }],
    }
}

fn texts_of_class(page: &Page, class: &str) -> Vec<String> {
    page.find_by_class(class)
        .into_iter()
        .map(|id| page.text(id).unwrap_or_default().to_string())
        .collect()
}

fn grid_cards(page: &Page, grid_id: &str) -> Vec<ElementId> {
    let grid = page.find_by_id(grid_id).unwrap();
    page.children(grid).to_vec()
}

fn placeholders_in(page: &Page, grid_id: &str) -> Vec<ElementId> {
    grid_cards(page, grid_id)
        .into_iter()
        .filter(|&id| page.has_class(id, PLACEHOLDER_CLASS))
        .collect()
}

fn text_by_id(page: &Page, html_id: &str) -> String {
    let id = page.find_by_id(html_id).unwrap();
    page.text(id).unwrap_or_default().to_string()
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_scenario_bio_and_placeholder() {
    let doc = scenario_doc();
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::En);

    assert_eq!(text_by_id(&page, ids::BIO), "A");
    assert_eq!(text_by_id(&page, ids::NAME), "X");

    let project_placeholders = placeholders_in(&page, ids::PROJECTS_GRID);
    assert_eq!(project_placeholders.len(), 1);
    let grid = page.find_by_id(ids::PROJECTS_GRID).unwrap();
    let grid_texts: Vec<String> = page
        .walk()
        .into_iter()
        .filter(|&id| page.has_class(id, PLACEHOLDER_TEXT_CLASS))
        .filter(|&id| is_descendant(&page, id, grid))
        .map(|id| page.text(id).unwrap_or_default().to_string())
        .collect();
    assert_eq!(grid_texts, vec!["P"]);

    let mut session = Session::default();
    let mut store = MemoryStore::new();
    set_language(&mut page, &mut session, &mut store, Language::Zh);
    assert_eq!(text_by_id(&page, ids::BIO), "B");
    assert_eq!(text_by_id(&page, ids::NAME), "X");
}

fn is_descendant(page: &Page, id: ElementId, ancestor: ElementId) -> bool {
    let mut stack = page.children(ancestor).to_vec();
    while let Some(next) = stack.pop() {
        if next == id {
            return true;
        }
        stack.extend_from_slice(page.children(next));
    }
    false
}

// ============================================================================
// Placeholder Cards
// ============================================================================

#[test]
fn test_zero_projects_one_placeholder() {
    let mut page = page_skeleton();
    render(&mut page, &scenario_doc(), Language::En);
    assert_eq!(grid_cards(&page, ids::PROJECTS_GRID).len(), 1);
    assert_eq!(placeholders_in(&page, ids::PROJECTS_GRID).len(), PROJECT_PLACEHOLDERS);
}

#[test]
fn test_zero_papers_two_placeholders() {
    let mut page = page_skeleton();
    render(&mut page, &scenario_doc(), Language::En);
    assert_eq!(grid_cards(&page, ids::PAPERS_GRID).len(), 2);
    assert_eq!(placeholders_in(&page, ids::PAPERS_GRID).len(), PAPER_PLACEHOLDERS);
}

#[test]
fn test_placeholders_follow_real_cards() {
    let mut doc = scenario_doc();
    doc.projects = vec![sample_project("alpha"), sample_project("beta")];
    doc.papers = vec![sample_paper()];
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::En);

    let projects = grid_cards(&page, ids::PROJECTS_GRID);
    assert_eq!(projects.len(), 3);
    assert!(!page.has_class(projects[0], PLACEHOLDER_CLASS));
    assert!(!page.has_class(projects[1], PLACEHOLDER_CLASS));
    assert!(page.has_class(projects[2], PLACEHOLDER_CLASS));

    let papers = grid_cards(&page, ids::PAPERS_GRID);
    assert_eq!(papers.len(), 3);
    assert!(!page.has_class(papers[0], PLACEHOLDER_CLASS));
    assert!(page.has_class(papers[1], PLACEHOLDER_CLASS));
    assert!(page.has_class(papers[2], PLACEHOLDER_CLASS));
}

#[test]
fn test_missing_placeholders_use_default_text() {
    let mut doc = scenario_doc();
    doc.placeholders = Some(Placeholders::new());
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::Zh);

    let texts = texts_of_class(&page, PLACEHOLDER_TEXT_CLASS);
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[0], default_placeholder("projects").resolve(Language::Zh));
    assert_eq!(texts[1], default_placeholder("papers").resolve(Language::Zh));
}

// ============================================================================
// Cards
// ============================================================================

#[test]
fn test_project_card_contents() {
    let mut doc = scenario_doc();
    doc.projects = vec![sample_project("alpha")];
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::En);

    let html = page.to_html();
    assert!(html.contains("href=\"https://github.com/keta1930/alpha\""));
    assert!(html.contains(">alpha</a>"));
    assert!(html.contains("<span>128</span>"));
    assert_eq!(texts_of_class(&page, "project-description"), vec!["A tool"]);
    assert!(html.contains("<span>Code</span>"));
}

#[test]
fn test_paper_card_contents_switch_language() {
    let mut doc = scenario_doc();
    doc.papers = vec![sample_paper()];
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::En);

    let html = page.to_html();
    assert!(html.contains("Attention Is Not All You Need"));
    assert!(html.contains("<span class=\"badge badge-venue\">ACL 2024</span>"));
    assert!(html.contains("<span>Corresponding</span>"));
    assert!(html.contains("<span>PDF</span>"));

    page.apply_language(Language::Zh);
    let html = page.to_html();
    // Plain title and venue stay the same in both languages
    assert!(html.contains("Attention Is Not All You Need"));
    assert!(html.contains("ACL 2024"));
    assert!(html.contains("<span>通讯作者</span>"));
    assert!(html.contains("<span>论文</span>"));
}

#[test]
fn test_personal_tags_and_contacts() {
    let mut doc = scenario_doc();
    if let Some(ref mut personal) = doc.personal {
        personal.avatar = Some("fas fa-cat".to_string());
        personal.tags = vec![Bilingual::pair("Rust", "Rust 语言"), Bilingual::plain("NLP")];
        personal.contact = vec![Contact {
            label: Bilingual::pair("Email", "邮箱"),
            url: "x@example.com".to_string(),
            icon: "fas fa-envelope".to_string(),
            kind: ContactKind::Email,
        }];
    }
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::Zh);

    assert_eq!(texts_of_class(&page, "skill-tag"), vec!["Rust 语言", "NLP"]);
    let html = page.to_html();
    assert!(html.contains("href=\"mailto:x@example.com\""));
    assert!(html.contains("<span>邮箱</span>"));
    assert!(html.contains("<i class=\"fas fa-cat\"></i>"));
}

// ============================================================================
// UI Strings
// ============================================================================

#[test]
fn test_ui_strings_bind_nav_headers_footer() {
    let doc = default_content();
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::Zh);

    assert_eq!(texts_of_class(&page, ids::NAV_TAB_CLASS), vec!["关于", "项目", "论文"]);
    assert_eq!(text_by_id(&page, ids::PROJECTS_TITLE), "项目");
    assert_eq!(text_by_id(&page, ids::PAPERS_SUBTITLE), "发表的论文与预印本");
    assert!(text_by_id(&page, ids::FOOTER_TEXT).contains("Rust"));
    assert_eq!(text_by_id(&page, ids::CURRENT_LANG), "中文");

    page.apply_language(Language::En);
    assert_eq!(texts_of_class(&page, ids::NAV_TAB_CLASS), vec!["About", "Projects", "Papers"]);
    assert_eq!(text_by_id(&page, ids::CURRENT_LANG), "EN");
}

// ============================================================================
// Idempotence & Degradation
// ============================================================================

#[test]
fn test_render_is_idempotent() {
    let mut doc = default_content();
    doc.projects = vec![sample_project("alpha")];
    doc.papers = vec![sample_paper()];
    let mut page = page_skeleton();

    render(&mut page, &doc, Language::En);
    let first = page.to_html();
    let bound = page.bound_elements().len();

    render(&mut page, &doc, Language::En);
    render(&mut page, &doc, Language::En);
    assert_eq!(page.to_html(), first);
    assert_eq!(page.bound_elements().len(), bound);
    assert_eq!(grid_cards(&page, ids::PROJECTS_GRID).len(), 2);
}

#[test]
fn test_missing_container_skips_only_that_step() {
    let mut page = page_skeleton();
    let grid = page.find_by_id(ids::PROJECTS_GRID).unwrap();
    page.get_mut(grid).unwrap().id = None;
    let bio = page.find_by_id(ids::BIO).unwrap();
    page.get_mut(bio).unwrap().id = None;

    render(&mut page, &scenario_doc(), Language::En);

    assert!(page.children(grid).is_empty());
    assert_eq!(page.text(bio), None);
    assert_eq!(text_by_id(&page, ids::NAME), "X");
    assert_eq!(placeholders_in(&page, ids::PAPERS_GRID).len(), 2);
}

#[test]
fn test_empty_document_renders_placeholders_only() {
    let doc = ContentDocument::default();
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::En);

    assert_eq!(text_by_id(&page, ids::NAME), "");
    assert_eq!(placeholders_in(&page, ids::PROJECTS_GRID).len(), 1);
    assert_eq!(placeholders_in(&page, ids::PAPERS_GRID).len(), 2);
    // Nav labels fall back to the skeleton's tab ids
    assert_eq!(texts_of_class(&page, ids::NAV_TAB_CLASS), vec!["about", "projects", "papers"]);
}

#[test]
fn test_plain_text_accepted_for_bilingual_field() {
    let mut doc = scenario_doc();
    if let Some(ref mut personal) = doc.personal {
        personal.bio = Bilingual::plain("Same in both");
    }
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::Zh);
    assert_eq!(text_by_id(&page, ids::BIO), "Same in both");
    page.apply_language(Language::En);
    assert_eq!(text_by_id(&page, ids::BIO), "Same in both");
}

#[test]
fn test_half_translated_text_same_after_switch_or_fresh_render() {
    let doc: ContentDocument = serde_json::from_str(
        r#"{"personal": {"name": "X", "bio": {"en": "A", "zh": ""}}}"#,
    )
    .unwrap();

    let mut switched = page_skeleton();
    render(&mut switched, &doc, Language::En);
    let mut session = Session::default();
    let mut store = MemoryStore::new();
    set_language(&mut switched, &mut session, &mut store, Language::Zh);

    let mut fresh = page_skeleton();
    render(&mut fresh, &doc, Language::Zh);

    assert_eq!(text_by_id(&fresh, ids::BIO), "A");
    assert_eq!(text_by_id(&switched, ids::BIO), text_by_id(&fresh, ids::BIO));
    assert_eq!(switched.to_html(), fresh.to_html());
}

#[test]
fn test_unknown_badge_and_decimal_stars() {
    let doc: ContentDocument = serde_json::from_str(
        r#"{
            "projects": [{"title": "alpha", "stars": 1.5}],
            "papers": [{
                "title": "Only award",
                "badges": [{"type": "award", "text": "Best Paper"}]
            }, {
                "title": "Mixed",
                "badges": [{"type": "award"}, {"type": "venue", "text": "ICLR 2025"}]
            }]
        }"#,
    )
    .unwrap();
    let mut page = page_skeleton();
    render(&mut page, &doc, Language::En);

    let html = page.to_html();
    assert!(html.contains("1.5"));
    assert!(!html.contains("Best Paper"));
    assert_eq!(page.find_by_class("paper-badges").len(), 1);
    assert_eq!(texts_of_class(&page, "badge-venue"), vec!["ICLR 2025"]);
}
