//! # Block Parsing
//!
//! Three-phase block parsing over blank-line separated blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): The document is cut into blocks at blank lines
//!
//! 2. **Classification** (`classify`): Each block gets exactly one `BlockType`
//!    from an ordered list of rules
//!
//! 3. **Construction** (`builder`): Each classified block becomes one container
//!    `HtmlNode`, with inline text run through the tokenizer
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists)
//! - **`split`**: `split_blocks` partitions a document
//! - **`classify`**: `classify` and `BlockType`
//! - **`builder`**: `block_to_html_node` per-type node construction
//!
//! ## Key Invariants
//!
//! - Blocks are trimmed and never empty
//! - Classification is total and deterministic: rule order resolves overlaps
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;

pub use builder::{block_to_html_node, text_to_children};
pub use classify::{BlockType, classify};
pub use split::split_blocks;
