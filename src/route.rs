//! View routing.
//!
//! Maps a navigation token to a view and dispatches rendering. The token
//! grammar mirrors a URL fragment: empty means the list view and
//! `post/<slug>` means a single-post view. Anything unrecognized, and any
//! slug with no matching post, falls back to the list view.

use maud::Markup;

use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::store::Post;

/// A resolved view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The post list.
    List,
    /// A single post, by slug.
    Post(String),
}

impl Route {
    /// Parses a navigation token.
    ///
    /// Leading `#` and `/` characters are tolerated, so `""`, `"#"`, and
    /// `"#/post/x"` all parse. Unknown tokens resolve to the list view
    /// rather than failing.
    ///
    /// # Arguments
    ///
    /// * `token`: Navigation token, e.g. `""` or `"post/my-slug"`
    pub fn parse(token: &str) -> Self {
        let token = token.trim_start_matches(['#', '/']);

        match token.strip_prefix("post/") {
            Some(slug) if !slug.is_empty() => Route::Post(slug.to_string()),
            _ => Route::List,
        }
    }

    /// Returns the output file path for this route, relative to the site
    /// root.
    pub fn output_path(&self) -> String {
        match self {
            Route::List => "index.html".to_string(),
            Route::Post(slug) => format!("post/{slug}.html"),
        }
    }
}

/// Renders the page for a route.
///
/// The renderer is invoked once per call on the routed post's content; a
/// `Post` route whose slug matches nothing falls back to the list view.
///
/// # Arguments
///
/// * `route`: Resolved route
/// * `blog_title`: Site title for page headers
/// * `posts`: All posts, in display order
///
/// # Returns
///
/// Complete page markup for the routed view
pub fn render_route(route: &Route, blog_title: &str, posts: &[Post]) -> Markup {
    if let Route::Post(slug) = route
        && let Some(post) = posts.iter().find(|p| p.slug == *slug)
    {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render(&post.content);
        return pages::post::generate(pages::post::PostPageData {
            blog_title,
            post,
            content_html: &html,
        });
    }

    pages::list::generate(pages::list::ListPageData { blog_title, posts })
}
