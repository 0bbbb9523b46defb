//! Formatting of the free-form `enhanced_response` text.
//!
//! Newlines become `<br>` tokens and numbered items (`1. ...`) are wrapped as
//! `<p><strong>1.</strong> ...</p>`. An item runs until the next `<br>N.`
//! marker, a trailing `<br>`, or the end of the text. This is a heuristic, not
//! a markup parser: text that itself contains `<br>3.` splits where it
//! shouldn't.

use once_cell::sync::Lazy;
use regex::Regex;

pub const LINE_BREAK: &str = "<br>";

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.\s").expect("list marker pattern"));

static NEXT_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<br>[0-9]+\.").expect("next item pattern"));

pub fn format_ai_response(text: &str) -> String {
    let with_breaks = text.replace('\n', LINE_BREAK);
    wrap_numbered_items(&with_breaks)
}

fn wrap_numbered_items(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut copied = 0usize;
    let mut pos = 0usize;

    while pos < text.len() {
        if let Some((ordinal, content_start)) = list_marker_at(text, pos) {
            if let Some(content_end) = item_end(text, content_start) {
                out.push_str(&text[copied..pos]);
                out.push_str("<p><strong>");
                out.push_str(ordinal);
                out.push_str(".</strong> ");
                out.push_str(&text[content_start..content_end]);
                out.push_str("</p>");
                copied = content_end;
                pos = content_end;
                continue;
            }
        }
        pos += text[pos..].chars().next().map_or(1, char::len_utf8);
    }

    out.push_str(&text[copied..]);
    out
}

/// Returns the ordinal digits and the offset where the item content starts.
fn list_marker_at(text: &str, pos: usize) -> Option<(&str, usize)> {
    let caps = LIST_MARKER.captures(&text[pos..])?;
    let ordinal = caps.get(1)?.as_str();
    let marker = caps.get(0)?;
    Some((ordinal, pos + marker.end()))
}

/// Shortest item content starting at `start`. Content never spans a line
/// terminator; `None` means the marker at hand doesn't start an item.
fn item_end(text: &str, start: usize) -> Option<usize> {
    let mut rest = &text[start..];
    loop {
        if rest.is_empty() || rest == LINE_BREAK || NEXT_ITEM.is_match(rest) {
            return Some(text.len() - rest.len());
        }
        let c = rest.chars().next()?;
        if is_line_terminator(c) {
            return None;
        }
        rest = &rest[c.len_utf8()..];
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[test]
fn test_item_end_stops_before_next_marker() {
    let text = "first<br>2. second";
    assert_eq!(item_end(text, 0), Some(5));
    assert_eq!(item_end("tail<br>", 0), Some(4));
    assert_eq!(item_end("no end\rhere", 0), None);
}

#[test]
fn test_list_marker_requires_whitespace() {
    assert_eq!(list_marker_at("12. x", 0), Some(("12", 4)));
    assert_eq!(list_marker_at("3.14", 0), None);
    assert_eq!(list_marker_at("a 7. y", 2), Some(("7", 5)));
}
