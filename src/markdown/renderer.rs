//! Markdown to HTML conversion.

use crate::escape::escape_html;

/// Converts a constrained markdown subset to HTML.
///
/// Supports headings (levels 1-6), blockquote lines, unordered lists,
/// fenced code blocks, bold, italic, inline code, images, and links.
/// Constructs do not nest: each inline rule is a single non-recursive
/// left-to-right pass, and ill-formed nesting produces whatever the fixed
/// rule order produces. Rendering is total over all inputs; malformed
/// markup degrades to literal text rather than failing.
///
/// Fenced code blocks are scanned out first into distinct nodes that no
/// later rule visits, so markers inside sample code are never interpreted
/// as markup. Their interior is the only renderer output that is
/// HTML-escaped; heading text receives no inline processing and inline
/// code content is emitted unescaped, both deliberate gaps preserved from
/// the behavior this renderer models.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

/// Top-level document pieces after fence extraction.
enum Segment {
    /// Prose still subject to block and inline rules.
    Text(String),
    /// Trimmed code-fence interior, exempt from all other rules.
    Code(String),
}

/// Typed block nodes produced by the line scan.
enum Block {
    Heading(usize, String),
    Quote(String),
    List(Vec<String>),
    Paragraph(String),
}

impl MarkdownRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders a markdown document to an HTML fragment.
    ///
    /// Empty and whitespace-only input render to an empty string. Blocks
    /// in the output are separated by single newlines.
    ///
    /// # Arguments
    ///
    /// * `document`: Raw markdown text, any length
    ///
    /// # Returns
    ///
    /// HTML fragment ready for insertion into a container element
    pub fn render(&self, document: &str) -> String {
        let mut out: Vec<String> = Vec::new();

        for segment in split_fences(document) {
            match segment {
                Segment::Code(code) => out.push(code_block_html(&code)),
                Segment::Text(text) => {
                    for block in scan_blocks(&text) {
                        out.push(render_block(&block));
                    }
                }
            }
        }

        out.join("\n")
    }
}

/// Splits a document into prose and code-fence segments.
///
/// Triple-backtick spans are paired strictly left to right. The interior
/// is trimmed of surrounding whitespace; an opening fence with no closing
/// fence stays literal text.
fn split_fences(document: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < document.len() {
        let Some(open) = document[pos..].find("```") else {
            segments.push(Segment::Text(document[pos..].to_string()));
            break;
        };
        let open = pos + open;
        let inner_start = open + 3;

        let Some(close) = document[inner_start..].find("```") else {
            segments.push(Segment::Text(document[pos..].to_string()));
            break;
        };
        let close = inner_start + close;

        if open > pos {
            segments.push(Segment::Text(document[pos..open].to_string()));
        }
        segments.push(Segment::Code(
            document[inner_start..close].trim().to_string(),
        ));
        pos = close + 3;
    }

    segments
}

/// Scans prose lines into typed blocks.
///
/// Blank lines (after trimming) are block boundaries and produce nothing.
/// Consecutive list-item lines merge into a single list; a blank line or
/// any other block kind ends the run. Every remaining non-blank line
/// becomes its own paragraph.
fn scan_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];

        if line.trim().is_empty() {
            idx += 1;
            continue;
        }

        if let Some((level, content)) = heading_marker(line) {
            blocks.push(Block::Heading(level, content.to_string()));
            idx += 1;
            continue;
        }

        if let Some(content) = line.strip_prefix("> ") {
            blocks.push(Block::Quote(content.to_string()));
            idx += 1;
            continue;
        }

        if let Some(first) = line.strip_prefix("- ") {
            let mut items = vec![first.to_string()];
            idx += 1;
            while idx < lines.len() {
                let Some(item) = lines[idx].strip_prefix("- ") else {
                    break;
                };
                items.push(item.to_string());
                idx += 1;
            }
            blocks.push(Block::List(items));
            continue;
        }

        blocks.push(Block::Paragraph(line.to_string()));
        idx += 1;
    }

    blocks
}

/// Detects a heading marker: one to six `#` followed by a single space.
///
/// Returns the heading level and the text after the stripped marker, or
/// None for seven or more `#` or a missing space.
fn heading_marker(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    line[level..].strip_prefix(' ').map(|rest| (level, rest))
}

fn render_block(block: &Block) -> String {
    match block {
        // Heading text is not inline-processed (known limitation)
        Block::Heading(level, text) => format!("<h{level}>{text}</h{level}>"),
        Block::Quote(text) => format!("<blockquote>{}</blockquote>", apply_inline(text)),
        Block::List(items) => {
            let mut html = String::from("<ul>");
            for item in items {
                html.push_str("<li>");
                html.push_str(&apply_inline(item));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
            html
        }
        Block::Paragraph(text) => format!("<p>{}</p>", apply_inline(text)),
    }
}

/// Wraps escaped code content in a block with a copy affordance.
///
/// The interior is HTML-escaped exactly once here and nowhere else; the
/// copy button is wired up by the page script, with a select-the-text
/// fallback when clipboard access is rejected.
fn code_block_html(code: &str) -> String {
    format!(
        "<div class=\"code-block\"><button class=\"copy-btn\" type=\"button\">Copy</button>\
         <pre><code>{}</code></pre></div>",
        escape_html(code)
    )
}

/// Applies the inline rules to a block's text run, in fixed order.
///
/// Bold before italic (so `**` pairs are gone before lone stars are
/// matched), images before links (image syntax is a superset of link
/// syntax with a leading `!`).
fn apply_inline(text: &str) -> String {
    let text = apply_bold(text);
    let text = apply_italic(&text);
    let text = apply_inline_code(&text);
    let text = apply_images(&text);
    apply_links(&text)
}

/// Converts `**...**` spans to `<strong>`, shortest match first.
fn apply_bold(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(open) = text[pos..].find("**") {
        let open = pos + open;
        let inner_start = open + 2;
        let Some(close) = text[inner_start..].find("**") else {
            break;
        };
        let close = inner_start + close;

        result.push_str(&text[pos..open]);
        result.push_str("<strong>");
        result.push_str(&text[inner_start..close]);
        result.push_str("</strong>");
        pos = close + 2;
    }

    result.push_str(&text[pos..]);
    result
}

/// Converts `*...*` spans to `<em>`.
///
/// Delimiters that are part of a `**` run are excluded so leftover bold
/// markers are never matched as italic.
fn apply_italic(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(open) = find_lone_star(text, pos) {
        let Some(close) = find_lone_star(text, open + 1) else {
            break;
        };

        result.push_str(&text[pos..open]);
        result.push_str("<em>");
        result.push_str(&text[open + 1..close]);
        result.push_str("</em>");
        pos = close + 1;
    }

    result.push_str(&text[pos..]);
    result
}

/// Finds the next `*` that is not adjacent to another `*`.
fn find_lone_star(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        let prev_star = i > 0 && bytes[i - 1] == b'*';
        let next_star = i + 1 < bytes.len() && bytes[i + 1] == b'*';
        if !prev_star && !next_star {
            return Some(i);
        }
        // Skip the rest of this star run
        while i < bytes.len() && bytes[i] == b'*' {
            i += 1;
        }
    }

    None
}

/// Converts `` `...` `` spans to `<code>`.
///
/// Content must be non-empty and is emitted without HTML escaping, a
/// deliberate behavioral-parity gap with the reference behavior.
fn apply_inline_code(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    let mut search = 0;

    while let Some(open) = text[search..].find('`') {
        let open = search + open;
        let inner_start = open + 1;
        match text[inner_start..].find('`') {
            // Empty span: the first backtick stays literal
            Some(0) => {
                search = inner_start;
            }
            Some(close) => {
                let close = inner_start + close;
                result.push_str(&text[pos..open]);
                result.push_str("<code>");
                result.push_str(&text[inner_start..close]);
                result.push_str("</code>");
                pos = close + 1;
                search = pos;
            }
            None => break,
        }
    }

    result.push_str(&text[pos..]);
    result
}

fn apply_images(text: &str) -> String {
    rewrite_bracket_spans(text, true)
}

fn apply_links(text: &str) -> String {
    rewrite_bracket_spans(text, false)
}

/// Rewrites `[label](url)` spans, with a leading `!` for images.
///
/// Label and URL must be non-empty; the first `]` closes the label and
/// the first `)` closes the URL, so a literal `)` inside a URL is
/// unsupported. Incomplete spans stay literal.
fn rewrite_bracket_spans(text: &str, image: bool) -> String {
    let marker = if image { "![" } else { "[" };
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    let mut search = 0;

    while let Some(found) = text[search..].find(marker) {
        let start = search + found;
        let label_start = start + marker.len();

        let parsed = text[label_start..].find(']').and_then(|label_len| {
            if label_len == 0 {
                return None;
            }
            let label_end = label_start + label_len;
            let rest = &text[label_end + 1..];
            if !rest.starts_with('(') {
                return None;
            }
            let url_start = label_end + 2;
            let url_len = text[url_start..].find(')')?;
            if url_len == 0 {
                return None;
            }
            Some((label_end, url_start, url_start + url_len))
        });

        let Some((label_end, url_start, url_end)) = parsed else {
            search = start + marker.len();
            continue;
        };

        let label = &text[label_start..label_end];
        let url = &text[url_start..url_end];

        result.push_str(&text[pos..start]);
        if image {
            result.push_str("<img src=\"");
            result.push_str(url);
            result.push_str("\" alt=\"");
            result.push_str(label);
            result.push_str("\">");
        } else {
            result.push_str("<a href=\"");
            result.push_str(url);
            result.push_str("\" target=\"_blank\">");
            result.push_str(label);
            result.push_str("</a>");
        }
        pos = url_end + 1;
        search = pos;
    }

    result.push_str(&text[pos..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty_input() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert
        assert_eq!(renderer.render(""), "");
    }

    #[test]
    fn test_render_whitespace_only_input() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert: all paragraph candidates collapse to nothing
        assert_eq!(renderer.render("   \n\n  \t \n"), "");
    }

    #[test]
    fn test_render_plain_text_single_paragraph() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let input = "just some prose without any markup";

        // Act
        let html = renderer.render(input);

        // Assert: markdown-free text is the text wrapped in one paragraph
        assert_eq!(html, format!("<p>{input}</p>"));
    }

    #[test]
    fn test_render_heading_level_one() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert
        assert_eq!(renderer.render("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_render_heading_all_levels() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert
        for level in 1..=6 {
            let input = format!("{} Deep", "#".repeat(level));
            let expected = format!("<h{level}>Deep</h{level}>");
            assert_eq!(renderer.render(&input), expected);
        }
    }

    #[test]
    fn test_render_seven_hashes_is_not_heading() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("####### Too deep");

        // Assert: degrades to a paragraph, marker stays literal
        assert_eq!(html, "<p>####### Too deep</p>");
    }

    #[test]
    fn test_render_heading_without_space_is_not_heading() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert
        assert_eq!(renderer.render("#nospace"), "<p>#nospace</p>");
    }

    #[test]
    fn test_render_heading_text_is_not_inline_processed() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("## A **bold** claim");

        // Assert: emphasis inside headings stays literal
        assert_eq!(html, "<h2>A **bold** claim</h2>");
    }

    #[test]
    fn test_render_list_merges_consecutive_items() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("- a\n- b");

        // Assert: one list, two items
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_render_blank_line_splits_lists() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("- a\n- b\n\n- c");

        // Assert: blank line ends the run
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>\n<ul><li>c</li></ul>");
    }

    #[test]
    fn test_render_list_items_receive_inline_rules() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("- **Physics**: gravity");

        // Assert
        assert_eq!(html, "<ul><li><strong>Physics</strong>: gravity</li></ul>");
    }

    #[test]
    fn test_render_blockquote_one_element_per_line() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("> first\n> second");

        // Assert: consecutive quote lines are not merged
        assert_eq!(
            html,
            "<blockquote>first</blockquote>\n<blockquote>second</blockquote>"
        );
    }

    #[test]
    fn test_render_bold_and_italic_not_double_matched() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("**bold** and *italic*");

        // Assert
        assert_eq!(
            html,
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_render_bold_shortest_match() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("**a** mid **b**");

        // Assert: first closing pair ends the span
        assert_eq!(html, "<p><strong>a</strong> mid <strong>b</strong></p>");
    }

    #[test]
    fn test_render_unmatched_markers_stay_literal() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert
        assert_eq!(renderer.render("a ** b"), "<p>a ** b</p>");
        assert_eq!(renderer.render("a * b"), "<p>a * b</p>");
        assert_eq!(renderer.render("see [broken link"), "<p>see [broken link</p>");
    }

    #[test]
    fn test_render_inline_code() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("run `cargo build` now");

        // Assert
        assert_eq!(html, "<p>run <code>cargo build</code> now</p>");
    }

    #[test]
    fn test_render_inline_code_content_not_escaped() {
        // Arrange: behavioral-parity gap, content passes through raw
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("type `<br>` here");

        // Assert
        assert_eq!(html, "<p>type <code><br></code> here</p>");
    }

    #[test]
    fn test_render_link_opens_new_context() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("see [docs](https://example.com) here");

        // Assert
        assert_eq!(
            html,
            "<p>see <a href=\"https://example.com\" target=\"_blank\">docs</a> here</p>"
        );
    }

    #[test]
    fn test_render_image_before_link() {
        // Arrange: image syntax must not degrade to a link with a stray !
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("![logo](img.png)");

        // Assert
        assert_eq!(html, "<p><img src=\"img.png\" alt=\"logo\"></p>");
    }

    #[test]
    fn test_render_url_with_closing_paren_unsupported() {
        // Arrange: first ) closes the URL, the rest stays literal
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("[x](http://a/(b))");

        // Assert
        assert_eq!(
            html,
            "<p><a href=\"http://a/(b\" target=\"_blank\">x</a>)</p>"
        );
    }

    #[test]
    fn test_render_code_block_escaped_and_protected() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let input = "```\nif a < b && b > c { **notbold** }\n```";

        // Act
        let html = renderer.render(input);

        // Assert: escaped exactly once, no markdown applied inside
        assert!(
            html.contains("<pre><code>if a &lt; b &amp;&amp; b &gt; c { **notbold** }</code></pre>"),
            "Code interior should be escaped verbatim: {html}"
        );
        assert!(!html.contains("<strong>"), "No emphasis inside code: {html}");
    }

    #[test]
    fn test_render_code_block_carries_copy_affordance() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("```\nlet x = 1;\n```");

        // Assert
        assert!(html.starts_with("<div class=\"code-block\">"), "{html}");
        assert!(html.contains("<button class=\"copy-btn\""), "{html}");
    }

    #[test]
    fn test_render_list_marker_inside_code_block_not_a_list() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let input = "```\n- not a list item\n```";

        // Act
        let html = renderer.render(input);

        // Assert
        assert!(!html.contains("<ul>"), "{html}");
        assert!(html.contains("- not a list item"), "{html}");
    }

    #[test]
    fn test_render_unmatched_fence_stays_literal() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("```\nno closing fence");

        // Assert: degrades to prose, no code block emitted
        assert!(!html.contains("<pre>"), "{html}");
        assert_eq!(html, "<p>```</p>\n<p>no closing fence</p>");
    }

    #[test]
    fn test_render_prose_around_code_block() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let input = "# Example\n\n```\ncode here\n```\n\nAfter.";

        // Act
        let html = renderer.render(input);

        // Assert: block order is preserved across the fence
        let h1 = html.find("<h1>Example</h1>").expect("heading present");
        let code = html.find("<pre><code>code here</code></pre>").expect("code present");
        let after = html.find("<p>After.</p>").expect("trailing paragraph present");
        assert!(h1 < code && code < after, "Blocks out of order: {html}");
    }

    #[test]
    fn test_render_paragraphs_split_on_blank_lines() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("one\n\ntwo");

        // Assert
        assert_eq!(html, "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_render_overlapping_emphasis_follows_rule_order() {
        // Arrange: ill-formed nesting, output is whatever bold-then-italic
        // left-to-right matching produces
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("*a **b* c**");

        // Assert: bold matched first (shortest), then the leftover lone
        // stars pair up as italic across the strong tag
        assert_eq!(html, "<p><em>a <strong>b</em> c</strong></p>");
    }

    #[test]
    fn test_render_is_deterministic() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let input = "# T\n\n- a\n- b\n\n> q\n\n`c` and **b**";

        // Act
        let first = renderer.render(input);
        let second = renderer.render(input);

        // Assert
        assert_eq!(first, second);
    }
}
