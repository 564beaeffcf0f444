//! Post list page generation.

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::markdown::preview_default;
use crate::store::Post;
use crate::util::format_date;

/// Data container for list page generation.
pub struct ListPageData<'a> {
    pub blog_title: &'a str,
    pub posts: &'a [Post],
}

/// Generates the post list page.
///
/// Each post renders as a card with its title, a plain-text preview of
/// its content, and its display date. An empty store renders an empty
/// state instead of cards. Titles and previews are plain text here; maud
/// escapes them on output.
///
/// # Arguments
///
/// * `data`: List page data container
///
/// # Returns
///
/// Complete HTML markup for the list page
pub fn generate(data: ListPageData<'_>) -> Markup {
    page_wrapper(
        data.blog_title,
        "assets/blog.css",
        html! {
            header class="blog-header" {
                h1 class="blog-title" { (data.blog_title) }
            }

            main class="posts-list" {
                @if data.posts.is_empty() {
                    div class="empty-state" {
                        h3 { "No posts yet" }
                        p { "Nothing to see here yet" }
                    }
                } @else {
                    @for post in data.posts {
                        a href=(format!("post/{}.html", post.slug)) class="post-card" {
                            div class="post-title" { (post.title) }
                            div class="post-preview" { (preview_default(&post.content)) }
                            div class="post-date" { (format_date(&post.date)) }
                        }
                    }
                }
            }
        },
    )
}
