//! Site generation orchestration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::assets::write_assets;
use crate::route::{Route, render_route};
use crate::store::PostStore;

/// Generates the complete static site into the output directory.
///
/// Writes bundled assets, the list page, and one page per post. Output
/// layout: `index.html`, `post/<slug>.html`, `assets/blog.css`.
///
/// # Arguments
///
/// * `output`: Output directory (created if missing)
/// * `blog_title`: Site title for page headers
/// * `store`: Loaded post store
///
/// # Returns
///
/// Number of HTML pages written
///
/// # Errors
///
/// Returns error if a directory or file cannot be written.
pub fn generate_site(output: &Path, blog_title: &str, store: &PostStore) -> Result<usize> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_assets(&assets_dir)?;

    let post_dir = output.join("post");
    fs::create_dir_all(&post_dir).context("Failed to create post directory")?;

    let index = render_route(&Route::List, blog_title, store.list());
    fs::write(output.join("index.html"), index.into_string())
        .context("Failed to write index.html")?;

    let mut pages = 1;
    for post in store.list() {
        let route = Route::Post(post.slug.clone());
        let markup = render_route(&route, blog_title, store.list());
        let path = output.join(route.output_path());
        fs::write(&path, markup.into_string())
            .with_context(|| format!("Failed to write post page: {}", path.display()))?;
        pages += 1;
    }

    Ok(pages)
}
