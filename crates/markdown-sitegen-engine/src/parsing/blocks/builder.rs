use crate::{
    error::MarkdownError,
    html::{HtmlNode, spans_to_nodes},
    parsing::inline::tokenize,
};

use super::{
    classify::BlockType,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
};

/// Builds the container node for one classified block.
///
/// Text that does not fit `block_type` is built as a paragraph.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, MarkdownError> {
    match block_type {
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Heading => heading_node(block),
        BlockType::Code => code_node(block),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => unordered_list_node(block),
        BlockType::OrderedList => ordered_list_node(block),
    }
}

/// Tokenizes inline text and converts each span to a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    spans_to_nodes(&tokenize(text)?)
}

fn paragraph_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(HtmlNode::container("p", text_to_children(block)?))
}

fn heading_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let Some((level, text)) = Heading::parse(block) else {
        return paragraph_node(block);
    };
    Ok(HtmlNode::container(
        format!("h{level}"),
        text_to_children(text)?,
    ))
}

fn code_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let Some(content) = CodeFence::strip(block) else {
        return paragraph_node(block);
    };
    // raw zone: the body is a single text leaf, never tokenized
    let body = match content.body {
        "" => vec![],
        body => vec![HtmlNode::text(body)],
    };
    let mut code = HtmlNode::container("code", body);
    if let Some(language) = content.language {
        code = code.with_attribute("class", format!("language-{language}"));
    }
    Ok(HtmlNode::container("pre", vec![code]))
}

fn quote_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(HtmlNode::container(
        "blockquote",
        text_to_children(&BlockQuote::content(block))?,
    ))
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let items = block
        .lines()
        .map(|line| list_item(UnorderedList::strip_marker(line).unwrap_or(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::container("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| list_item(OrderedList::strip_number(line, i + 1).unwrap_or(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::container("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(HtmlNode::container("li", text_to_children(text)?))
}
