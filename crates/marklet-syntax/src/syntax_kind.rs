//! Markup kinds shared by tokens, parse-tree nodes and AST nodes.
//!
//! A single enum serves every stage of the pipeline: the tokenizer tags a
//! delimiter with the kind it introduces, the parser opens a node of that
//! kind, and the renderer looks the same kind up in its tag table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialectError;

/// All markup kinds known to the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupKind {
    /// Literal text, emitted verbatim.
    PlainText,
    /// Root of every tree.
    Document,
    /// One line of input; the newline delimiter starts a new one.
    Line,
    /// Single-underscore emphasis.
    Italic,
    /// Double-underscore emphasis.
    Bold,
    /// Line-level `# ` prefix.
    Heading,
}

impl MarkupKind {
    pub const ALL: [MarkupKind; 6] = [
        MarkupKind::PlainText,
        MarkupKind::Document,
        MarkupKind::Line,
        MarkupKind::Italic,
        MarkupKind::Bold,
        MarkupKind::Heading,
    ];

    /// Returns true for the inline emphasis kinds subject to word rules.
    pub fn is_emphasis(self) -> bool {
        matches!(self, Self::Italic | Self::Bold)
    }

    /// Returns true for kinds rendered as literal text rather than tags.
    pub fn is_literal(self) -> bool {
        matches!(self, Self::PlainText | Self::Document | Self::Line)
    }

    /// Returns true if a delimiter alias may introduce this kind.
    pub fn is_delimited(self) -> bool {
        !matches!(self, Self::PlainText | Self::Document)
    }

    /// The snake_case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Document => "document",
            Self::Line => "line",
            Self::Italic => "italic",
            Self::Bold => "bold",
            Self::Heading => "heading",
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkupKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DialectError::UnknownKind {
                name: s.to_string(),
            })
    }
}

/// How a delimiter token may act, decided once from its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenBehavior {
    /// Followed (but not preceded) by a word character.
    Opening,
    /// Preceded (but not followed) by a word character.
    Closing,
    /// Word characters on both sides: mid-word emphasis.
    InsideWord,
    /// Neither side qualifies, or the token is not a delimiter.
    Undefined,
}

impl TokenBehavior {
    /// Classifies a delimiter from whether it can open and close.
    pub fn classify(can_open: bool, can_close: bool) -> Self {
        match (can_open, can_close) {
            (true, true) => Self::InsideWord,
            (true, false) => Self::Opening,
            (false, true) => Self::Closing,
            (false, false) => Self::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn emphasis_kinds() {
        assert!(MarkupKind::Italic.is_emphasis());
        assert!(MarkupKind::Bold.is_emphasis());
        assert!(!MarkupKind::Heading.is_emphasis());
        assert!(!MarkupKind::PlainText.is_emphasis());
    }

    #[test]
    fn literal_kinds() {
        assert!(MarkupKind::PlainText.is_literal());
        assert!(MarkupKind::Document.is_literal());
        assert!(MarkupKind::Line.is_literal());
        assert!(!MarkupKind::Bold.is_literal());
    }

    #[test]
    fn names_parse_back() {
        for kind in MarkupKind::ALL {
            assert_eq!(kind.name().parse::<MarkupKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "underline".parse::<MarkupKind>(),
            Err(DialectError::UnknownKind {
                name: "underline".to_string()
            })
        );
    }

    #[rstest]
    #[case(true, true, TokenBehavior::InsideWord)]
    #[case(true, false, TokenBehavior::Opening)]
    #[case(false, true, TokenBehavior::Closing)]
    #[case(false, false, TokenBehavior::Undefined)]
    fn behavior_classification(
        #[case] can_open: bool,
        #[case] can_close: bool,
        #[case] expected: TokenBehavior,
    ) {
        assert_eq!(TokenBehavior::classify(can_open, can_close), expected);
    }
}
