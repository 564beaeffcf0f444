//! Single-post page generation.

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::store::Post;
use crate::util::format_date;

/// Data container for post page generation.
pub struct PostPageData<'a> {
    pub blog_title: &'a str,
    pub post: &'a Post,
    /// Rendered markdown for the post body, inserted as-is.
    pub content_html: &'a str,
}

/// Generates a single-post page.
///
/// The post title and date are plain text (escaped by maud); the body is
/// pre-rendered HTML from the markdown renderer, inserted unescaped. Post
/// pages live one directory below the site root, so asset and back links
/// carry a `../` prefix.
///
/// # Arguments
///
/// * `data`: Post page data container
///
/// # Returns
///
/// Complete HTML markup for the post page
pub fn generate(data: PostPageData<'_>) -> Markup {
    page_wrapper(
        data.post.title.as_str(),
        "../assets/blog.css",
        html! {
            nav class="post-nav" {
                a href="../index.html" class="back-link" { "\u{2190} " (data.blog_title) }
            }

            main class="post-view" {
                article class="post-content" {
                    h1 class="post-title" { (data.post.title) }
                    div class="post-date" { (format_date(&data.post.date)) }
                    div class="post-body" {
                        (PreEscaped(data.content_html))
                    }
                }
            }
        },
    )
}
