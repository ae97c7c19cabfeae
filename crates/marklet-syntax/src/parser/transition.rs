//! The parser's transition table.
//!
//! Each row pairs a guard over the incoming token and the current node with
//! an [`Action`]. Rows are tried in order and the first matching guard wins;
//! the last row matches everything.

use crate::lexer::Token;
use crate::syntax_kind::{MarkupKind, TokenBehavior};

/// What the parser does with one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open a node of the token's kind.
    Open,
    /// Open a node of the token's kind flagged as mid-word markup.
    OpenInsideWord,
    /// Close the current node as complete, ended by the token.
    Close,
    /// Abandon the empty current node; the token stays literal.
    Abort,
    /// Close everything up to the document, then start a new line.
    BreakLine,
    /// Append the token as a plain-text leaf.
    Append,
    /// Keep the token as literal text without touching the current node.
    Literal,
    /// Close the current node incomplete if the token is closing, then keep
    /// the token as literal text.
    Fallback,
}

/// The parts of the current node a guard may inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub kind: MarkupKind,
    /// No children yet.
    pub is_empty: bool,
}

/// One row of the table.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub name: &'static str,
    pub guard: fn(&Token, Frame) -> bool,
    pub action: Action,
}

pub const TRANSITIONS: &[Transition] = &[
    Transition {
        name: "heading at line start",
        guard: heading_at_line_start,
        action: Action::Open,
    },
    Transition {
        name: "heading mid-line",
        guard: heading,
        action: Action::Literal,
    },
    Transition {
        name: "line break",
        guard: line_break,
        action: Action::BreakLine,
    },
    Transition {
        name: "opening",
        guard: opening,
        action: Action::Open,
    },
    Transition {
        name: "closing empty",
        guard: closing_empty,
        action: Action::Abort,
    },
    Transition {
        name: "closing",
        guard: closing,
        action: Action::Close,
    },
    Transition {
        name: "plain text",
        guard: plain_text,
        action: Action::Append,
    },
    Transition {
        name: "inside-word closing",
        guard: inside_word_closing,
        action: Action::Close,
    },
    Transition {
        name: "inside-word opening",
        guard: inside_word,
        action: Action::OpenInsideWord,
    },
    FALLBACK,
];

const FALLBACK: Transition = Transition {
    name: "fallback",
    guard: always,
    action: Action::Fallback,
};

/// First row whose guard accepts `token` in `frame`.
pub fn select(token: &Token, frame: Frame) -> &'static Transition {
    TRANSITIONS
        .iter()
        .find(|row| (row.guard)(token, frame))
        .unwrap_or(&FALLBACK)
}

fn heading_at_line_start(token: &Token, frame: Frame) -> bool {
    token.kind == MarkupKind::Heading && frame.kind == MarkupKind::Line && frame.is_empty
}

fn heading(token: &Token, _: Frame) -> bool {
    token.kind == MarkupKind::Heading
}

fn line_break(token: &Token, _: Frame) -> bool {
    token.kind == MarkupKind::Line
}

fn opening(token: &Token, frame: Frame) -> bool {
    token.behavior == TokenBehavior::Opening && frame.kind != token.kind
}

fn closing_empty(token: &Token, frame: Frame) -> bool {
    closing(token, frame) && frame.is_empty
}

fn closing(token: &Token, frame: Frame) -> bool {
    token.behavior == TokenBehavior::Closing && frame.kind == token.kind
}

fn plain_text(token: &Token, _: Frame) -> bool {
    token.kind == MarkupKind::PlainText
}

fn inside_word_closing(token: &Token, frame: Frame) -> bool {
    inside_word(token, frame) && frame.kind == token.kind
}

fn inside_word(token: &Token, _: Frame) -> bool {
    token.behavior == TokenBehavior::InsideWord
}

fn always(_: &Token, _: Frame) -> bool {
    true
}
