use crate::parsing::inline::types::SpanKind;

/// An inline style marked by a symmetric delimiter on both sides of the text.
pub trait Delimited {
    const DELIMITER: &'static str;
    const KIND: SpanKind;
}

/// Bold text: `**bold**`.
///
/// Must be split before [`Italic`] because its delimiter is the italic
/// delimiter doubled.
pub struct Bold;

impl Delimited for Bold {
    const DELIMITER: &'static str = "**";
    const KIND: SpanKind = SpanKind::Bold;
}

/// Italic text: `*italic*`.
pub struct Italic;

impl Delimited for Italic {
    const DELIMITER: &'static str = "*";
    const KIND: SpanKind = SpanKind::Italic;
}

/// Inline code: `` `code` ``.
pub struct Code;

impl Delimited for Code {
    const DELIMITER: &'static str = "`";
    const KIND: SpanKind = SpanKind::Code;
}
