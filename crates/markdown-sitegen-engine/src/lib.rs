pub mod error;
pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{ContainerFault, MarkdownError};
pub use html::{Attributes, HtmlNode, span_to_node};
pub use io::*;
pub use parsing::{
    blocks::{BlockType, classify, split_blocks},
    inline::{SpanKind, TextSpan, tokenize},
    markdown_to_html, markdown_to_html_node,
};
