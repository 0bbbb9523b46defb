use crate::models::ResultItem;

pub const NO_RESULTS_MARKUP: &str = "<p>No results found for your query.</p>";

/// Characters of `text` shown when a result has no highlights.
pub const SNIPPET_CHARS: usize = 200;

const HIGHLIGHT_SEPARATOR: &str = "... ";
const ELLIPSIS: &str = "...";

/// Body of a result block: the server highlights if there are any, otherwise
/// the head of the document text.
pub fn snippet(item: &ResultItem) -> String {
    if !item.highlights.is_empty() {
        return item.highlights.join(HIGHLIGHT_SEPARATOR);
    }
    let mut head: String = item.text.chars().take(SNIPPET_CHARS).collect();
    head.push_str(ELLIPSIS);
    head
}

/// Markup for one entry of the results panel. `doc_id` and highlights are
/// inserted as-is; highlights carry server-side `<b>` markup.
pub fn result_block(item: &ResultItem) -> String {
    format!(
        "<div class=\"result-item\">\
         <div class=\"result-title\">Document: {}</div>\
         <div class=\"result-text\">{}</div>\
         </div>",
        item.doc_id,
        snippet(item)
    )
}

#[test]
fn test_snippet_joins_highlights() {
    let item = ResultItem::new(
        "d1",
        "ignored",
        vec!["one <b>a</b>".to_string(), "two".to_string()],
    );
    assert_eq!(snippet(&item), "one <b>a</b>... two");
}

#[test]
fn test_snippet_short_text_still_gets_ellipsis() {
    let item = ResultItem::new("d2", "short", vec![]);
    assert_eq!(snippet(&item), "short...");
}
