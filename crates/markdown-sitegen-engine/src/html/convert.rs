use crate::{
    error::MarkdownError,
    parsing::inline::{SpanKind, TextSpan},
};

use super::node::HtmlNode;

/// Maps one inline span to one leaf node.
///
/// | kind   | tag    | value | attributes       |
/// |--------|--------|-------|------------------|
/// | Plain  | none   | text  |                  |
/// | Bold   | `b`    | text  |                  |
/// | Italic | `i`    | text  |                  |
/// | Code   | `code` | text  |                  |
/// | Link   | `a`    | text  | `href`           |
/// | Image  | `img`  | empty | `src`, `alt`     |
///
/// # Errors
/// [`MarkdownError::MissingUrl`] for a link or image span without a url.
pub fn span_to_node(span: &TextSpan) -> Result<HtmlNode, MarkdownError> {
    let node = match span.kind {
        SpanKind::Plain => HtmlNode::text(&span.text),
        SpanKind::Bold => HtmlNode::leaf("b", &span.text),
        SpanKind::Italic => HtmlNode::leaf("i", &span.text),
        SpanKind::Code => HtmlNode::leaf("code", &span.text),
        SpanKind::Link => HtmlNode::leaf("a", &span.text).with_attribute("href", url_of(span)?),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url_of(span)?)
            .with_attribute("alt", &span.text),
    };
    Ok(node)
}

/// Converts a run of spans, in order.
pub fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<HtmlNode>, MarkdownError> {
    spans.iter().map(span_to_node).collect()
}

fn url_of(span: &TextSpan) -> Result<&str, MarkdownError> {
    span.url
        .as_deref()
        .ok_or(MarkdownError::MissingUrl { kind: span.kind })
}
