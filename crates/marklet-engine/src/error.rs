use marklet_syntax::{DialectError, MarkupKind};
use thiserror::Error;

/// Errors from building a renderer or serializing a tree.
///
/// Malformed markup is never an error; it renders as literal text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no HTML tag configured for {kind} markup")]
    MissingTag { kind: MarkupKind },

    #[error("invalid dialect: {0}")]
    Dialect(#[from] DialectError),
}
