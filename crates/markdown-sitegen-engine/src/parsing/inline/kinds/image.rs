use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

/// Image inline type: `![alt text](url)`.
pub struct Image;

impl Image {
    /// Returns every `(alt, url)` pair in `text`, left to right.
    pub fn extract(text: &str) -> Vec<(&str, &str)> {
        IMAGE_RE
            .captures_iter(text)
            .map(|caps| {
                let (_, [alt, url]) = caps.extract();
                (alt, url)
            })
            .collect()
    }

    /// Rebuilds the exact source text of an image with the given parts.
    pub fn markup(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }
}
