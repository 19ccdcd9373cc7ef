use std::sync::LazyLock;

use regex::Regex;

// The regex crate has no look-behind, so the optional leading `!` is captured
// and image-shaped matches are discarded by the caller.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// Link inline type: `[text](url)`.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: &'static str = "!";

    /// Returns every `(text, url)` pair in `text`, left to right, skipping
    /// matches immediately preceded by `!`.
    pub fn extract(text: &str) -> Vec<(&str, &str)> {
        LINK_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let (_, [bang, label, url]) = caps.extract();
                (bang != Self::IMAGE_BANG).then_some((label, url))
            })
            .collect()
    }

    /// Rebuilds the exact source text of a link with the given parts.
    pub fn markup(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_single_link() {
        let text = "This is text with a link [to boot dev](https://www.boot.dev)";
        assert_eq!(
            Link::extract(text),
            vec![("to boot dev", "https://www.boot.dev")]
        );
    }

    #[test]
    fn extract_multiple_links() {
        let text = "[to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)";
        assert_eq!(
            Link::extract(text),
            vec![
                ("to boot dev", "https://www.boot.dev"),
                ("to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn skips_image_syntax() {
        let text = "a link [to boot dev](https://www.boot.dev) and ![rick roll](https://i.imgur.com/aKaOqIh.gif)";
        assert_eq!(
            Link::extract(text),
            vec![("to boot dev", "https://www.boot.dev")]
        );
    }

    #[test]
    fn no_links_in_plain_text() {
        assert!(Link::extract("This is text with no links or images").is_empty());
    }
}
