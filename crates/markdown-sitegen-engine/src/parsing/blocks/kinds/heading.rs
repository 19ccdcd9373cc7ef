/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character, repeated once per level.
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses `# Title` into `(level, text)`.
    ///
    /// Returns `None` for more than [`Self::MAX_LEVEL`] markers or when the
    /// markers are not followed by a space. The text is trimmed.
    pub fn parse(block: &str) -> Option<(u8, &str)> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        // MARKER is ASCII, so `level` chars are `level` bytes
        let text = block[level..].strip_prefix(' ')?;
        Some((level as u8, text.trim()))
    }
}
