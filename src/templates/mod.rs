//! HTML templates and styling for the portfolio.
//!
//! ## Module Structure
//!
//! - `styles` - CSS for the page
//! - `layout` - Page skeleton the renderer fills in
//! - `components` - Document wrapper and keyboard shortcut script

mod components;
pub mod layout;
mod styles;

pub use components::{base_html, render_document, shortcut_script};
pub use layout::{link_lang_switcher, page_skeleton};
pub use styles::STYLE;
