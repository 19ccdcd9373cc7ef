//! # HTML Output
//!
//! The render tree produced by the document assembler.
//!
//! - **`node`**: `HtmlNode` (leaf or container), `Attributes`, and `render()`
//! - **`convert`**: `span_to_node` maps one inline `TextSpan` to one leaf

pub mod convert;
pub mod node;

pub use convert::{span_to_node, spans_to_nodes};
pub use node::{Attributes, EMPTY_CONTAINERS, HtmlNode, VOID_ELEMENTS};
