//! In-memory page tree.
//!
//! A `Page` is a small arena of elements standing in for the browser DOM:
//! the renderer fills it, the session toggles classes on it, and the HTTP
//! layer serializes it to HTML. Bilingual text is not stored in element
//! attributes; each rendered text node is bound to its `Bilingual` pair in
//! `Page::texts`, keyed by element identity, so a language switch can
//! re-resolve it without the content document.

use std::collections::HashMap;

use crate::models::{Bilingual, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

// ============================================================================
// Elements
// ============================================================================

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add one or more space-separated classes.
    pub fn with_class(mut self, classes: &str) -> Self {
        for c in classes.split_whitespace() {
            if !self.classes.iter().any(|existing| existing == c) {
                self.classes.push(c.to_string());
            }
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Option<Element>>,
    /// Slots vacated by `clear_children`, reused by `append`
    free: Vec<usize>,
    root: ElementId,
    texts: HashMap<ElementId, Bilingual>,
    lang: Language,
    scroll_y: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Element::new("body"))],
            free: Vec::new(),
            root: ElementId(0),
            texts: HashMap::new(),
            lang: Language::En,
            scroll_y: 0,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(|n| n.as_ref())
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).and_then(|n| n.as_mut())
    }

    /// Allocated arena slots, live or free.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Append `element` as the last child of `parent`.
    pub fn append(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        element.parent = Some(parent);
        element.children.clear();
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(element);
                ElementId(slot)
            }
            None => {
                self.nodes.push(Some(element));
                ElementId(self.nodes.len() - 1)
            }
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        id
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Remove every descendant of `id`, dropping their text bindings.
    pub fn clear_children(&mut self, id: ElementId) {
        let mut stack: Vec<ElementId> = match self.get_mut(id) {
            Some(e) => std::mem::take(&mut e.children),
            None => return,
        };
        while let Some(child) = stack.pop() {
            if let Some(removed) = self.nodes.get_mut(child.0).and_then(|n| n.take()) {
                stack.extend(removed.children);
                self.free.push(child.0);
            }
            self.texts.remove(&child);
        }
    }

    /// Live elements in document order, starting at the root.
    pub fn walk(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(e) = self.get(id) {
                out.push(id);
                stack.extend(e.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn find_by_id(&self, html_id: &str) -> Option<ElementId> {
        self.walk()
            .into_iter()
            .find(|&id| self.get(id).and_then(|e| e.id.as_deref()) == Some(html_id))
    }

    pub fn find_by_class(&self, class: &str) -> Vec<ElementId> {
        self.walk()
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// First element of `class` whose attribute `name` equals `value`.
    pub fn find_by_attr(&self, class: &str, name: &str, value: &str) -> Option<ElementId> {
        self.find_by_class(class)
            .into_iter()
            .find(|&id| self.get(id).and_then(|e| e.attr(name)) == Some(value))
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).and_then(|e| e.text.as_deref())
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(e) = self.get_mut(id) {
            e.text = Some(text.to_string());
        }
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(e) = self.get_mut(id) {
            if !e.has_class(class) {
                e.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(e) = self.get_mut(id) {
            e.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    // ------------------------------------------------------------------------
    // Bilingual bindings
    // ------------------------------------------------------------------------

    /// Write the displayed `lang` text of `text` into `id` and remember the
    /// pair.
    pub fn bind_text(&mut self, id: ElementId, text: &Bilingual, lang: Language) {
        if self.get(id).is_none() {
            return;
        }
        self.set_text(id, text.display(lang));
        self.texts.insert(id, text.clone());
    }

    pub fn binding(&self, id: ElementId) -> Option<&Bilingual> {
        self.texts.get(&id)
    }

    pub fn bound_elements(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self.texts.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Re-resolve every bound element for `lang`, with the same empty-variant
    /// fallback as `bind_text`, so a switch and a fresh render agree.
    /// Elements with no text in either language keep their current text.
    pub fn apply_language(&mut self, lang: Language) {
        let updates: Vec<(ElementId, String)> = self
            .texts
            .iter()
            .map(|(id, text)| (*id, text.display(lang).to_string()))
            .filter(|(_, text)| !text.is_empty())
            .collect();
        for (id, text) in updates {
            self.set_text(id, &text);
        }
        self.lang = lang;
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    // ------------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------------

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn scroll_to(&mut self, y: u32) {
        self.scroll_y = y;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_y = 0;
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    /// Serialize the children of the root element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for &child in self.children(self.root) {
            self.write_element(child, &mut out);
        }
        out
    }

    fn write_element(&self, id: ElementId, out: &mut String) {
        let Some(e) = self.get(id) else {
            return;
        };
        out.push('<');
        out.push_str(&e.tag);
        if let Some(ref html_id) = e.id {
            out.push_str(&format!(" id=\"{}\"", html_escape(html_id)));
        }
        if !e.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", html_escape(&e.classes.join(" "))));
        }
        for (name, value) in &e.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
        }
        out.push('>');
        if VOID_TAGS.contains(&e.tag.as_str()) {
            return;
        }
        if let Some(ref text) = e.text {
            out.push_str(&html_escape(text));
        }
        for &child in &e.children {
            self.write_element(child, out);
        }
        out.push_str(&format!("</{}>", e.tag));
    }
}

const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Tests
// ============================================================================
