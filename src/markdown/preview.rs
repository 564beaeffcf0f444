//! Plain-text preview extraction.
//!
//! Strips markdown syntax rather than converting it: the result is plain
//! text suitable for post cards and never contains HTML.

/// Default preview length in characters.
const DEFAULT_PREVIEW_LENGTH: usize = 120;

/// Extracts a plain-text preview with the default 120 character limit.
pub fn preview_default(document: &str) -> String {
    preview(document, DEFAULT_PREVIEW_LENGTH)
}

/// Extracts a plain-text preview of a markdown document.
///
/// Strips heading markers, bold and italic markers, and link syntax;
/// replaces fenced code blocks with a literal `[code]` token; unwraps
/// inline code to its content; collapses newline runs to single spaces.
/// The result is trimmed and truncated to `max_length` characters with a
/// trailing `...` only when truncation occurred.
///
/// Independent of the renderer and emits no HTML.
///
/// # Arguments
///
/// * `document`: Raw markdown text
/// * `max_length`: Maximum preview length in characters
///
/// # Returns
///
/// Plain-text summary of the document
pub fn preview(document: &str, max_length: usize) -> String {
    let text = strip_heading_markers(document);
    let text = strip_paired(&text, "**");
    let text = strip_paired(&text, "*");
    let text = replace_fences(&text);
    let text = strip_paired(&text, "`");
    let text = unwrap_links(&text);
    let text = collapse_newlines(&text);
    let text = text.trim();

    truncate_chars(text, max_length)
}

/// Removes heading markers: up to six `#` followed by whitespace.
///
/// The marker and the whitespace run after it are both dropped. A run of
/// more than six `#` strips its trailing six (the marker match starts
/// mid-run), keeping the excess hashes literal.
fn strip_heading_markers(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'#' {
            let run_end = bytes[i..]
                .iter()
                .position(|&b| b != b'#')
                .map_or(bytes.len(), |n| i + n);
            let run_len = run_end - i;
            let followed_by_space = run_end < bytes.len() && bytes[run_end].is_ascii_whitespace();

            if followed_by_space {
                if run_len > 6 {
                    result.push_str(&text[i..run_end - 6]);
                }
                i = run_end;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                continue;
            }

            result.push_str(&text[i..run_end]);
            i = run_end;
            continue;
        }
        let ch_len = utf8_len(bytes[i]);
        result.push_str(&text[i..i + ch_len]);
        i += ch_len;
    }

    result
}

/// Drops paired delimiters, keeping the content between them.
///
/// Pairs are matched left to right, shortest match; an unmatched trailing
/// delimiter stays literal. Empty spans are not pairs.
fn strip_paired(text: &str, delim: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    let mut search = 0;

    while let Some(open) = text[search..].find(delim) {
        let open = search + open;
        let inner_start = open + delim.len();
        match text[inner_start..].find(delim) {
            // Empty span: first delimiter stays literal
            Some(0) => {
                search = inner_start;
            }
            Some(close) => {
                let close = inner_start + close;
                result.push_str(&text[pos..open]);
                result.push_str(&text[inner_start..close]);
                pos = close + delim.len();
                search = pos;
            }
            None => break,
        }
    }

    result.push_str(&text[pos..]);
    result
}

/// Replaces fenced code blocks with a literal `[code]` token.
fn replace_fences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(open) = text[pos..].find("```") {
        let open = pos + open;
        let inner_start = open + 3;
        let Some(close) = text[inner_start..].find("```") else {
            break;
        };
        let close = inner_start + close;

        result.push_str(&text[pos..open]);
        result.push_str("[code]");
        pos = close + 3;
    }

    result.push_str(&text[pos..]);
    result
}

/// Unwraps `[text](url)` spans to their link text.
fn unwrap_links(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    let mut search = 0;

    while let Some(found) = text[search..].find('[') {
        let start = search + found;
        let label_start = start + 1;

        let parsed = text[label_start..].find(']').and_then(|label_len| {
            if label_len == 0 {
                return None;
            }
            let label_end = label_start + label_len;
            if !text[label_end + 1..].starts_with('(') {
                return None;
            }
            let url_start = label_end + 2;
            let url_len = text[url_start..].find(')')?;
            if url_len == 0 {
                return None;
            }
            Some((label_end, url_start + url_len))
        });

        let Some((label_end, url_end)) = parsed else {
            search = start + 1;
            continue;
        };

        result.push_str(&text[pos..start]);
        result.push_str(&text[label_start..label_end]);
        pos = url_end + 1;
        search = pos;
    }

    result.push_str(&text[pos..]);
    result
}

/// Collapses runs of newlines into single spaces.
fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_newline_run = false;

    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            if !in_newline_run {
                result.push(' ');
                in_newline_run = true;
            }
        } else {
            result.push(ch);
            in_newline_run = false;
        }
    }

    result
}

/// Truncates to `max_length` characters, appending `...` only if cut.
fn truncate_chars(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_length).collect();
    truncated.push_str("...");
    truncated
}

/// Byte length of the UTF-8 character starting with this byte.
fn utf8_len(first_byte: u8) -> usize {
    match first_byte {
        b if b < 0x80 => 1,
        b if b < 0xE0 => 2,
        b if b < 0xF0 => 3,
        _ => 4,
    }
}
