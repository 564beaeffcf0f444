//! Markdown rendering and preview extraction.
//!
//! This module converts a constrained markdown subset (headings, blockquotes,
//! unordered lists, fenced code blocks, bold, italic, inline code, images,
//! links) to HTML, and extracts plain-text previews by stripping the same
//! construct set instead of converting it.

mod preview;
mod renderer;

pub use preview::{preview, preview_default};
pub use renderer::MarkdownRenderer;
