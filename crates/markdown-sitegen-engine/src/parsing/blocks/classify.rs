use std::fmt;

use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The structural type of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
            BlockType::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a block. Total: every block gets exactly one type.
///
/// Rules are tried in order and the first match wins:
/// 1. heading: 1-6 `#` then a space
/// 2. code: opens and closes with a fence
/// 3. quote: every non-empty line starts with `>`
/// 4. unordered list: every line starts with `* ` or `- `
/// 5. ordered list: line `n` starts with `n. `, counting from 1
/// 6. paragraph
pub fn classify(block: &str) -> BlockType {
    if Heading::parse(block).is_some() {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if is_quote(block) {
        return BlockType::Quote;
    }
    if is_unordered_list(block) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

fn is_quote(block: &str) -> bool {
    let mut lines = block.lines().filter(|line| !line.is_empty()).peekable();
    lines.peek().is_some() && lines.all(BlockQuote::is_quote_line)
}

fn is_unordered_list(block: &str) -> bool {
    !block.is_empty()
        && block
            .lines()
            .all(|line| UnorderedList::strip_marker(line).is_some())
}

fn is_ordered_list(block: &str) -> bool {
    !block.is_empty()
        && block
            .lines()
            .enumerate()
            .all(|(i, line)| OrderedList::strip_number(line, i + 1).is_some())
}
