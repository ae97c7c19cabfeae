//! # Lexer - Tokenizing Marked-Up Text
//!
//! The first stage of the pipeline: one left-to-right scan breaking the
//! source into plain-text runs and classified delimiter tokens.
//!
//! ## Spans, Not Copies
//!
//! Every [`Token`] references the source by [`Span`]; no text is copied.
//! Concatenating the token texts gives back the input minus the escape
//! characters that were consumed:
//!
//! ```
//! use marklet_syntax::lexer::{TokenizerConfig, tokenize};
//!
//! let input = "Hello _world_!";
//! let tokens = tokenize(input, &TokenizerConfig::default());
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text(input)).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Delimiters
//!
//! Delimiter literals come from the [`TokenizerConfig`] alias table, longest
//! match first, so `__` is one Bold delimiter rather than two Italic ones.
//! The newline is an alias like any other and yields a Line token. Each
//! delimiter is classified once, from its neighbours, by the [`matcher`].
//!
//! ## Escapes
//!
//! An escape character directly before a delimiter is dropped and the
//! delimiter becomes part of the surrounding plain text. Before anything
//! else the escape character is ordinary text.
//!
//! ## Public API
//!
//! - [`tokenize`] - Tokenize input, returning `Vec<Token>`
//! - [`Token`] - A token with its kind, behavior and span
//! - [`TokenizerConfig`] - Alias table, escape character, word delimiters

mod config;
mod cursor;
pub mod matcher;

pub use config::{Alias, TokenizerConfig};
pub use matcher::{DelimiterMatch, match_delimiter};

use crate::span::Span;
use crate::syntax_kind::{MarkupKind, TokenBehavior};
use cursor::Cursor;

/// A lexed token: a plain-text run or a classified delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: MarkupKind,
    pub behavior: TokenBehavior,
    pub span: Span,
}

impl Token {
    /// A plain-text run covering `span`.
    pub fn text_run(span: Span) -> Self {
        Self {
            kind: MarkupKind::PlainText,
            behavior: TokenBehavior::Undefined,
            span,
        }
    }

    /// The source text this token covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Tokenize `input` with the given configuration.
///
/// Total over all inputs: anything that is not a delimiter ends up in a
/// plain-text token.
pub fn tokenize(input: &str, config: &TokenizerConfig) -> Vec<Token> {
    let mut cur = Cursor::new(input);
    let mut tokens = Vec::new();
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a PlainText token
    fn flush_text(out: &mut Vec<Token>, start: usize, end: usize) {
        if end > start {
            out.push(Token::text_run(Span { start, end }));
        }
    }

    while let Some(byte) = cur.peek() {
        let pos = cur.pos();

        if let Some(escape) = config.escape()
            && cur.rest().starts_with(escape)
        {
            let after = pos + escape.len_utf8();
            if let Some(escaped) = match_delimiter(input, after, config) {
                // Drop the escape; the delimiter joins the next text run.
                flush_text(&mut tokens, text_start, pos);
                text_start = after;
                cur.bump_n(escape.len_utf8() + escaped.len);
                continue;
            }
        }

        if config.may_start_delimiter(byte)
            && let Some(m) = match_delimiter(input, pos, config)
        {
            flush_text(&mut tokens, text_start, pos);
            tokens.push(Token {
                kind: m.kind,
                behavior: m.behavior,
                span: Span::at(pos, m.len),
            });
            cur.bump_n(m.len);
            text_start = cur.pos();
            continue;
        }

        cur.bump_char();
    }

    flush_text(&mut tokens, text_start, cur.pos());
    log::debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex(input: &str) -> Vec<(MarkupKind, TokenBehavior, &str)> {
        tokenize(input, &TokenizerConfig::default())
            .into_iter()
            .map(|t| (t.kind, t.behavior, t.text(input)))
            .collect()
    }

    use MarkupKind::*;
    use TokenBehavior::*;

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("hello world"), vec![(PlainText, Undefined, "hello world")]);
    }

    #[test]
    fn lex_italic() {
        assert_eq!(
            lex("Hello _world_!"),
            vec![
                (PlainText, Undefined, "Hello "),
                (Italic, Opening, "_"),
                (PlainText, Undefined, "world"),
                (Italic, Closing, "_"),
                (PlainText, Undefined, "!"),
            ]
        );
    }

    #[test]
    fn lex_nested_emphasis() {
        assert_eq!(
            lex("__a _b_ c__"),
            vec![
                (Bold, Opening, "__"),
                (PlainText, Undefined, "a "),
                (Italic, Opening, "_"),
                (PlainText, Undefined, "b"),
                (Italic, Closing, "_"),
                (PlainText, Undefined, " c"),
                (Bold, Closing, "__"),
            ]
        );
    }

    #[test]
    fn lex_heading_and_lines() {
        assert_eq!(
            lex("# Title\nbody"),
            vec![
                (Heading, Opening, "# "),
                (PlainText, Undefined, "Title"),
                (Line, InsideWord, "\n"),
                (PlainText, Undefined, "body"),
            ]
        );
    }

    #[test]
    fn lex_hash_without_space_is_text() {
        assert_eq!(lex("#tag"), vec![(PlainText, Undefined, "#tag")]);
    }

    #[test]
    fn lex_inside_word() {
        assert_eq!(
            lex("mi_ddl_e"),
            vec![
                (PlainText, Undefined, "mi"),
                (Italic, InsideWord, "_"),
                (PlainText, Undefined, "ddl"),
                (Italic, InsideWord, "_"),
                (PlainText, Undefined, "e"),
            ]
        );
    }

    #[test]
    fn lex_four_underscores() {
        assert_eq!(
            lex("a ____ b"),
            vec![
                (PlainText, Undefined, "a "),
                (Bold, Opening, "__"),
                (Bold, Closing, "__"),
                (PlainText, Undefined, " b"),
            ]
        );
    }

    #[test]
    fn lex_escaped_delimiters() {
        assert_eq!(
            lex(r"a \_b\_ c"),
            vec![
                (PlainText, Undefined, "a "),
                (PlainText, Undefined, "_b"),
                (PlainText, Undefined, "_ c"),
            ]
        );
    }

    #[test]
    fn lex_escaped_double_underscore() {
        assert_eq!(lex(r"\__x"), vec![(PlainText, Undefined, "__x")]);
    }

    #[test]
    fn lex_escape_before_ordinary_char() {
        assert_eq!(
            lex(r"keep \this\ one"),
            vec![(PlainText, Undefined, r"keep \this\ one")]
        );
    }

    #[test]
    fn lex_trailing_escape() {
        assert_eq!(lex(r"end\"), vec![(PlainText, Undefined, r"end\")]);
    }

    #[test]
    fn lex_without_escape_character() {
        let config = TokenizerConfig::new(
            TokenizerConfig::DEFAULT_ALIASES,
            None,
            TokenizerConfig::DEFAULT_WORD_DELIMITERS,
        )
        .unwrap();
        let input = r"\_x_";
        let kinds: Vec<MarkupKind> = tokenize(input, &config).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![PlainText, Italic, PlainText, Italic]);
    }

    #[test]
    fn lex_multibyte_text() {
        assert_eq!(
            lex("día _über_ 日本"),
            vec![
                (PlainText, Undefined, "día "),
                (Italic, Opening, "_"),
                (PlainText, Undefined, "über"),
                (Italic, Closing, "_"),
                (PlainText, Undefined, " 日本"),
            ]
        );
    }

    #[test]
    fn lex_pathological_underscores() {
        let input = "_".repeat(101);
        let tokens = tokenize(&input, &TokenizerConfig::default());
        // 50 doubles and one trailing single
        assert_eq!(tokens.len(), 51);
        assert_eq!(tokens[0].behavior, Opening);
        assert_eq!(tokens[50].kind, Italic);
        assert_eq!(tokens[50].behavior, Closing);
    }

    #[test]
    fn all_bytes_preserved() {
        let input = "# _Hello_ __world__!\nmi_ddl_e, Text_12_3 ____ end";
        let tokens = tokenize(input, &TokenizerConfig::default());
        let reconstructed: String = tokens.iter().map(|t| t.text(input)).collect();
        assert_eq!(input, reconstructed);
    }

    #[test]
    fn spans_are_contiguous() {
        let input = "X __Y _Z_ W__ V";
        let tokens = tokenize(input, &TokenizerConfig::default());
        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.span.start, expected_start);
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, input.len());
    }
}
