/// Unordered list block type: every line starts with `* ` or `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Returns the item text after the bullet marker.
    pub fn strip_marker(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(*marker))
    }
}

/// Ordered list block type: line `n` (1-based) starts with `n. `.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Returns the item text after the `number. ` prefix.
    pub fn strip_number(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(number.to_string().as_str())?
            .strip_prefix(Self::SEPARATOR)
    }
}
