//! Page layout wrapper component.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer::footer;

/// Inline page script: theme toggle persistence and code-block copy
/// buttons with a select-the-text fallback when the clipboard write is
/// rejected.
const PAGE_SCRIPT: &str = include_str!("../../assets/blog.js");

/// Wraps page content with the standard HTML document structure.
///
/// Provides consistent DOCTYPE, head, theme toggle header button, and the
/// shared page script across all page types. The caller provides the
/// page-specific body content and a stylesheet path relative to the page
/// being generated.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheet`: CSS path relative to the generated page
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                div class="container" {
                    button class="theme-toggle" type="button" aria-label="Toggle theme" {
                        span class="theme-icon" { "\u{1F319}" }
                    }
                    (body)
                }
                (footer())
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_structure() {
        // Arrange
        let body = html! { p { "content" } };

        // Act
        let html_string = page_wrapper("Test Page", "assets/blog.css", body).into_string();

        // Assert
        assert!(html_string.starts_with("<!DOCTYPE html>"));
        assert!(html_string.contains("<title>Test Page</title>"));
        assert!(html_string.contains("assets/blog.css"));
        assert!(html_string.contains("<p>content</p>"));
        assert!(html_string.contains("theme-toggle"));
    }

    #[test]
    fn test_page_wrapper_embeds_page_script() {
        // Arrange & Act
        let html_string =
            page_wrapper("T", "assets/blog.css", html! {}).into_string();

        // Assert: script handles theme and copy wiring
        assert!(html_string.contains("<script>"), "{html_string}");
        assert!(html_string.contains("data-theme"), "{html_string}");
        assert!(html_string.contains("copy-btn"), "{html_string}");
    }
}
