use std::fmt;

use crate::parsing::inline::SpanKind;

/// Why a container node could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFault {
    NoTag,
    NoChildren,
}

impl fmt::Display for ContainerFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerFault::NoTag => f.write_str("no tag"),
            ContainerFault::NoChildren => f.write_str("no children"),
        }
    }
}

/// Errors raised while converting Markdown to HTML.
///
/// Conversion is deterministic, so none of these are retryable: the same
/// input always produces the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("unclosed formatting: unpaired `{delimiter}` in {text:?}")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("unterminated {kind}: could not split {text:?} at a matched marker")]
    UnterminatedStructure { kind: SpanKind, text: String },

    #[error("unsupported span kind: {0}")]
    UnsupportedSpanKind(String),

    #[error("{kind} span requires a url")]
    MissingUrl { kind: SpanKind },

    #[error("leaf node <{}> requires a value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },

    #[error("invalid HTML container: {0}")]
    InvalidContainer(ContainerFault),
}
