//! Render Module
//!
//! Placeholder substitution for static HTML templates.

mod html;

pub use html::HtmlRenderer;
