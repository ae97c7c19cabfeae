//! Delimiter matching at a single cursor position.

use super::config::TokenizerConfig;
use crate::syntax_kind::{MarkupKind, TokenBehavior};

/// The longest delimiter found at a position, with its adjacency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterMatch {
    pub kind: MarkupKind,
    /// Length of the matched literal in bytes.
    pub len: usize,
    pub behavior: TokenBehavior,
}

/// Finds the longest delimiter alias starting at byte offset `cursor`.
///
/// A delimiter can open when a non-word-delimiter character immediately
/// follows it and can close when one immediately precedes it; the edges of
/// the input count as neither. Returns `None` when no alias matches or when
/// `cursor` is not on a character boundary.
pub fn match_delimiter(
    input: &str,
    cursor: usize,
    config: &TokenizerConfig,
) -> Option<DelimiterMatch> {
    let rest = input.get(cursor..)?;
    let first = *rest.as_bytes().first()?;
    if !config.may_start_delimiter(first) {
        return None;
    }

    let alias = config
        .aliases()
        .iter()
        .find(|alias| rest.starts_with(alias.literal.as_str()))?;
    let len = alias.literal.len();

    let is_word_char = |c: Option<char>| c.is_some_and(|c| !config.is_word_delimiter(c));
    let can_close = is_word_char(input[..cursor].chars().next_back());
    let can_open = is_word_char(rest[len..].chars().next());

    Some(DelimiterMatch {
        kind: alias.kind,
        len,
        behavior: TokenBehavior::classify(can_open, can_close),
    })
}
