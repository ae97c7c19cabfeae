use thiserror::Error;

use crate::syntax_kind::MarkupKind;

/// Invalid dialect configuration, reported when a configuration is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("delimiter aliases must not be empty")]
    EmptyAlias,

    #[error("delimiter alias {alias:?} is registered more than once")]
    DuplicateAlias { alias: String },

    #[error("delimiter alias {alias:?} cannot introduce {kind} markup")]
    UndelimitedKind { alias: String, kind: MarkupKind },

    #[error("escape character {escape:?} is also a word delimiter")]
    EscapeIsWordDelimiter { escape: char },

    #[error("escape character {escape:?} starts delimiter alias {alias:?}")]
    EscapeStartsAlias { escape: char, alias: String },

    #[error("unknown markup kind {name:?}")]
    UnknownKind { name: String },
}
