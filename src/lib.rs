//! Static blog generator for markdown posts.

mod assets;
pub mod components;
mod config;
mod escape;
mod generators;
mod markdown;
pub mod pages;
mod route;
mod store;
mod util;

pub use assets::write_assets;
pub use config::Config;
pub use escape::escape_html;
pub use generators::generate_site;
pub use markdown::{MarkdownRenderer, preview, preview_default};
pub use route::{Route, render_route};
pub use store::{Post, PostStore};
pub use util::{current_date, format_date, slugify};
