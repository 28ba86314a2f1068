//! CSS styles for the portfolio.
//!
//! Contains the main STYLE constant with all CSS for the page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Peach Theme */
:root {
    --peach: #FF6B6B;
    --peach-light: #FF8E8E;
    --peach-soft: #FFE3E3;
    --ink: #2D3436;
    --muted: #636E72;
    --faint: #B2BEC3;
    --bg: #FFF9F5;
    --card: #FFFFFF;
    --border: #FFE0D6;
    --shadow: 0 10px 30px rgba(255, 107, 107, 0.12);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "PingFang SC", "Microsoft YaHei", sans-serif;
    line-height: 1.6;
    color: var(--ink);
    background: var(--bg);
}

a { color: var(--peach); text-decoration: none; }
a:hover { color: var(--peach-light); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 2rem;
    background: rgba(255, 249, 245, 0.9);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border);
}

.nav-tabs { display: flex; gap: 0.5rem; }

.nav-tab {
    padding: 0.45rem 1.1rem;
    border-radius: 999px;
    color: var(--muted);
    font-weight: 500;
    transition: background 0.2s ease, color 0.2s ease, transform 0.2s ease;
}
.nav-tab:hover { color: var(--peach); transform: translateY(-2px); }
.nav-tab.active { background: var(--peach); color: #fff; }

.lang-switcher {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.4rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    color: var(--ink);
    font-size: 0.9rem;
}
.lang-switcher:hover { border-color: var(--peach); }

/* Sections */
.container { max-width: 1000px; margin: 0 auto; padding: 2rem; }

.tab-content { display: none; }
.tab-content.active { display: block; }

.section-header { text-align: center; margin-bottom: 2rem; }
.section-header h2 { font-size: 2rem; color: var(--ink); }
.section-header .subtitle { color: var(--muted); }

/* About */
.hero-section { text-align: center; padding: 3rem 1rem; }

.avatar {
    width: 120px;
    height: 120px;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 3rem;
    color: #fff;
    background: linear-gradient(135deg, var(--peach), var(--peach-light));
    box-shadow: 0 20px 40px rgba(255, 107, 107, 0.2);
    transition: transform 0.3s ease;
}
.avatar:hover { transform: scale(1.05) rotate(5deg); }

.name { font-size: 2.5rem; margin-bottom: 1rem; }

.skill-tags { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin-bottom: 1.5rem; }
.skill-tag {
    padding: 0.3rem 0.9rem;
    border-radius: 999px;
    background: var(--peach-soft);
    color: var(--peach);
    font-size: 0.9rem;
    transition: transform 0.2s ease;
}
.skill-tag:hover { transform: translateY(-2px) scale(1.05); }

.bio { max-width: 640px; margin: 0 auto 1.5rem; color: var(--muted); }

.contact-links { display: flex; justify-content: center; gap: 1rem; }
.contact-link { display: inline-flex; align-items: center; gap: 0.4rem; }

/* Cards */
.projects-grid, .papers-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
}
.papers-grid { grid-template-columns: 1fr; }

.project-card, .paper-card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 16px;
    padding: 1.5rem;
    box-shadow: var(--shadow);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.project-card:not(.placeholder):hover,
.paper-card:not(.placeholder):hover {
    transform: translateY(-8px) scale(1.02);
    box-shadow: 0 20px 40px rgba(255, 107, 107, 0.18);
}

.project-header { display: flex; justify-content: space-between; align-items: baseline; gap: 1rem; }
.project-title, .paper-title { font-size: 1.2rem; margin-bottom: 0.5rem; }
.project-title a, .paper-title a { color: var(--ink); }
.project-title a:hover, .paper-title a:hover { color: var(--peach); }
.project-stars { color: var(--muted); font-size: 0.9rem; white-space: nowrap; }
.project-stars i { color: #FDCB6E; margin-right: 0.25rem; }
.project-description { color: var(--muted); margin-bottom: 1rem; }

.paper-badges { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.badge { padding: 0.2rem 0.7rem; border-radius: 6px; font-size: 0.8rem; }
.badge-venue { background: var(--peach-soft); color: var(--peach); font-weight: 600; }
.badge-corresponding { background: #E8F6F3; color: #16A085; }
.badge i { margin-right: 0.3rem; }

.project-links, .paper-links { display: flex; gap: 1rem; flex-wrap: wrap; }
.card-link { display: inline-flex; align-items: center; gap: 0.35rem; font-size: 0.9rem; }

.placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    border-style: dashed;
    box-shadow: none;
    color: var(--faint);
    min-height: 140px;
}
.placeholder-content { text-align: center; }
.placeholder-content i { font-size: 1.5rem; margin-bottom: 0.5rem; }

/* Footer */
.site-footer { text-align: center; padding: 2rem; color: var(--faint); font-size: 0.9rem; }

@media (max-width: 640px) {
    .site-header { padding: 0.75rem 1rem; }
    .nav-tab { padding: 0.4rem 0.7rem; }
    .container { padding: 1rem; }
    .name { font-size: 2rem; }
}
"#;
