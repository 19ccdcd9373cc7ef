use crate::error::MarkdownError;

use super::{
    kinds::{Bold, Code, Delimited, Image, Italic, Link},
    types::{SpanKind, TextSpan},
};

/// Tokenizes inline text into a sequence of [`TextSpan`]s.
///
/// # Precedence
/// Stages run in a fixed order, each over the output of the previous one:
/// bold, italic, code, images, links. Only plain spans are split further;
/// styled spans pass through untouched, so styles never nest.
///
/// # Errors
/// [`MarkdownError::UnclosedDelimiter`] when a delimiter is not paired.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, MarkdownError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter::<Bold>(spans)?;
    let spans = split_delimiter::<Italic>(spans)?;
    let spans = split_delimiter::<Code>(spans)?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Splits every plain span on `D::DELIMITER`.
///
/// Pieces at even positions stay plain, odd positions take `D::KIND`.
/// Empty pieces are dropped.
pub fn split_delimiter<D: Delimited>(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(D::DELIMITER).collect();
        // n delimiters yield n + 1 pieces; paired delimiters leave an odd count
        if pieces.len() % 2 == 0 {
            return Err(MarkdownError::UnclosedDelimiter {
                delimiter: D::DELIMITER,
                text: span.text.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 { SpanKind::Plain } else { D::KIND };
            out.push(TextSpan::new(kind, piece));
        }
    }
    Ok(out)
}

/// Extracts `![alt](url)` images from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, MarkdownError> {
    split_embedded(spans, SpanKind::Image, Image::extract, Image::markup)
}

/// Extracts `[text](url)` links from plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, MarkdownError> {
    split_embedded(spans, SpanKind::Link, Link::extract, Link::markup)
}

/// Splits plain spans around each `(text, url)` construct found by `extract`,
/// left to right, emitting a `kind` span for every match.
fn split_embedded(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    extract: fn(&str) -> Vec<(&str, &str)>,
    markup: fn(&str, &str) -> String,
) -> Result<Vec<TextSpan>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = extract(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        for (text, url) in found {
            let Some((before, after)) = rest.split_once(&markup(text, url)) else {
                return Err(MarkdownError::UnterminatedStructure {
                    kind,
                    text: span.text.clone(),
                });
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan {
                kind,
                text: text.to_string(),
                url: Some(url.to_string()),
            });
            rest = after;
        }

        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    Ok(out)
}
