use crate::types::Style;

/// Errors raised while converting a document.
///
/// Block classification never fails; everything here is either a node
/// construction contract violation or an unterminated inline span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{style} node requires a non-empty url")]
    MissingUrl { style: Style },

    #[error("{style} node cannot carry a url")]
    UnexpectedUrl { style: Style },

    #[error("leaf node requires a non-empty value")]
    EmptyValue,

    #[error("parent node requires a tag")]
    MissingTag,

    #[error("parent node <{tag}> requires at least one child")]
    NoChildren { tag: String },

    #[error("Unclosed formatting: unmatched '{delimiter}' in {text:?}")]
    UnclosedDelimiter { delimiter: String, text: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
