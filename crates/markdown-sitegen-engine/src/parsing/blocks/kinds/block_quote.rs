/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the leading `>` and at most one following space.
    ///
    /// Only the start of the line is touched; a `> ` later in the line is
    /// content.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Strips the prefix from every line, keeping lines newline-separated.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), "hello");
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_leading_marker() {
        assert_eq!(BlockQuote::strip_prefix("> a > b"), "a > b");
    }

    #[test]
    fn content_of_multiline_quote() {
        assert_eq!(
            BlockQuote::content("> Quote Text One\n> Quote Text Two"),
            "Quote Text One\nQuote Text Two"
        );
    }
}
