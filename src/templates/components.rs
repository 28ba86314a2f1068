//! Document wrapper and the keyboard shortcut script.

use crate::dom::html_escape;
use crate::models::{Language, Tab};
use crate::navigation::{LANGUAGE_SHORTCUT, TAB_SHORTCUTS};
use crate::prefs::PreferenceStore;
use crate::session::Portfolio;

use super::styles::STYLE;

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, lang: Language, body: &str, active_tab: Tab) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{fa}">
    <style>{style}</style>
</head>
<body>
{body}
{script}
</body>
</html>"#,
        lang = lang.html_lang(),
        title = html_escape(title),
        fa = FONT_AWESOME,
        style = STYLE,
        body = body,
        script = shortcut_script(active_tab),
    )
}

/// Full HTML document for the portfolio's current page.
pub fn render_document<S: PreferenceStore>(portfolio: &Portfolio<S>) -> String {
    let name = portfolio
        .document()
        .personal
        .as_ref()
        .map(|p| p.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Portfolio");
    let session = portfolio.session();
    base_html(
        &format!("{} - Portfolio", name),
        session.language,
        &portfolio.page().to_html(),
        session.active_tab,
    )
}

// ============================================================================
// Keyboard Shortcuts
// ============================================================================

/// Script forwarding the shortcut bindings to the server routes.
pub fn shortcut_script(active_tab: Tab) -> String {
    let tab_cases: String = TAB_SHORTCUTS
        .iter()
        .map(|(key, tab)| {
            format!(
                "            case '{}': e.preventDefault(); window.location.href = '/?tab={}'; break;\n",
                key,
                tab.id()
            )
        })
        .collect();

    format!(
        r#"<script>
document.addEventListener('keydown', function(e) {{
    if (e.altKey) {{
        switch (e.key) {{
{tab_cases}        }}
    }}
    if ((e.ctrlKey || e.metaKey) && e.shiftKey && e.key.toUpperCase() === '{lang_key}') {{
        e.preventDefault();
        window.location.href = '/lang/toggle?tab={active}';
    }}
}});
</script>"#,
        tab_cases = tab_cases,
        lang_key = LANGUAGE_SHORTCUT,
        active = active_tab.id(),
    )
}
