/// The parts of a fenced code block once its fences are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedContent<'a> {
    /// First word of the info string on the opening fence line, if any.
    pub language: Option<&'a str>,
    pub body: &'a str,
}

/// Fenced code block type with owned fence constant.
///
/// Fenced content is a raw zone: no inline parsing happens inside it.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the block opens and closes with a fence.
    ///
    /// The two fences may not overlap, so a bare "```" is not a code block.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Removes both fences.
    ///
    /// A block spanning several lines treats the rest of the opening fence
    /// line as its info string and keeps the body verbatim. A single-line
    /// block has no info string; its body is trimmed.
    pub fn strip(block: &str) -> Option<FencedContent<'_>> {
        if !Self::is_fenced(block) {
            return None;
        }
        let inner = &block[Self::FENCE.len()..block.len() - Self::FENCE.len()];
        let content = match inner.split_once('\n') {
            Some((info, body)) => FencedContent {
                language: info.split_whitespace().next(),
                body,
            },
            None => FencedContent {
                language: None,
                body: inner.trim(),
            },
        };
        Some(content)
    }
}
