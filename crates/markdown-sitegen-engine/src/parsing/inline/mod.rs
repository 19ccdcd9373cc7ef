//! # Inline Parsing
//!
//! Delimiter-split inline tokenization.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and operates over the text
//! of one block (a paragraph, a heading, a list item, a quote).
//!
//! The tokenizer starts with a single plain span and refines it in stages.
//! Each stage only splits plain spans, so once text is styled it is never
//! parsed again:
//! 1. `**` bold
//! 2. `*` italic
//! 3. `` ` `` code
//! 4. `![alt](url)` images
//! 5. `[text](url)` links
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters (Bold, Italic, Code, Image, Link)
//! - **`parser`**: `tokenize()` main entry point with one `split_*` helper per stage
//!
//! ## Precedence
//!
//! Bold runs before italic because `**` would otherwise be read as two empty
//! italic spans. Images run before links because every image contains a
//! link-shaped suffix.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{SpanKind, TextSpan};
