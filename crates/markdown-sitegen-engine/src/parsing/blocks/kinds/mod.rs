pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FencedContent};
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
