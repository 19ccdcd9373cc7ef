pub mod blocks;
pub mod inline;

use crate::{error::MarkdownError, html::HtmlNode};

use blocks::{block_to_html_node, classify, split_blocks};

/// Converts a Markdown document into an HTML tree rooted at a `div`.
///
/// Each block is classified and built independently; the root collects the
/// resulting nodes in document order.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, MarkdownError> {
    let children = split_blocks(document)
        .iter()
        .map(|block| {
            let block_type = classify(block);
            log::debug!("block {block_type}: {:?}", preview(block, 40));
            block_to_html_node(block, block_type)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::container("div", children))
}

/// Converts a Markdown document straight to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(document)?.render()
}

fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn paragraph_document() {
        let root = markdown_to_html_node("This is a paragraph.").unwrap();
        assert_eq!(root.tag(), Some("div"));
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].tag(), Some("p"));
    }

    #[test]
    fn heading_document() {
        let root = markdown_to_html_node("# Heading").unwrap();
        let heading = &root.children()[0];
        assert_eq!(heading.tag(), Some("h1"));
        assert_eq!(heading.children(), &[HtmlNode::text("Heading")]);
    }

    #[test]
    fn list_documents() {
        let root = markdown_to_html_node("* Item 1\n* Item 2").unwrap();
        assert_eq!(root.children()[0].tag(), Some("ul"));
        assert_eq!(root.children()[0].children().len(), 2);

        let root = markdown_to_html_node("1. Item one\n2. Item Two").unwrap();
        assert_eq!(root.children()[0].tag(), Some("ol"));
        assert_eq!(root.children()[0].children().len(), 2);
    }

    #[test]
    fn code_and_quote_documents() {
        let root = markdown_to_html_node("``` Some code here ```").unwrap();
        assert_eq!(root.children()[0].tag(), Some("pre"));
        assert_eq!(root.children()[0].children()[0].tag(), Some("code"));

        let root = markdown_to_html_node("> Quote Text One\n> Quote Text Two").unwrap();
        assert_eq!(root.children()[0].tag(), Some("blockquote"));
    }

    #[test]
    fn empty_document_has_no_blocks() {
        let root = markdown_to_html_node("\n\n").unwrap();
        assert!(root.children().is_empty());
    }

    #[test]
    fn renders_mixed_document() {
        let md = "# Title\n\nSome **bold** text with a [link](https://boot.dev).\n\n- one\n- two\n";
        assert_snapshot!(
            markdown_to_html(md).unwrap(),
            @r#"<div><h1>Title</h1><p>Some <b>bold</b> text with a <a href="https://boot.dev">link</a>.</p><ul><li>one</li><li>two</li></ul></div>"#
        );
    }

    #[test]
    fn first_error_aborts_conversion() {
        assert!(matches!(
            markdown_to_html_node("fine\n\nnot *fine"),
            Err(MarkdownError::UnclosedDelimiter { delimiter: "*", .. })
        ));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("hi", 10), "hi");
    }
}
