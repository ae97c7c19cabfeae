//! # marklet-syntax
//!
//! Tokenizing and parsing for the marklet inline markup dialect: `_italic_`,
//! `__bold__` and `# ` headings, one Line per input line.
//!
//! ## Architecture Overview
//!
//! The front half of the rendering pipeline lives here:
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Parse Tree
//!               (alias table)    (transition table)
//! ```
//!
//! The back half (AST, syntax rules, HTML) lives in `marklet-engine`.
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! A single scan producing plain-text runs and delimiter tokens. Each
//! delimiter is classified as opening, closing, inside-word or undefined
//! from the characters around it.
//!
//! ```text
//! "mi_ddl_e" → [Text("mi"), Italic~, Text("ddl"), Italic~, Text("e")]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! A one-pass state machine with a "current node" pointer, driven by an
//! ordered transition table. Malformed markup never fails: it becomes an
//! incomplete node that renders as literal text.
//!
//! ### 3. Trees ([`tree`] module)
//!
//! Both the parse tree and the engine's AST are index arenas walked by the
//! same restartable Enter/Exit iterator, so no stage recurses.
//!
//! ## Module Structure
//!
//! ```text
//! marklet-syntax/
//! ├── lib.rs           # This file - public API and integration tests
//! ├── span.rs          # Byte ranges into the source
//! ├── syntax_kind.rs   # MarkupKind and TokenBehavior
//! ├── error.rs         # DialectError
//! ├── tree.rs          # NodeId, Tree trait, Walk iterator
//! ├── lexer/
//! │   ├── mod.rs       # Token, tokenize()
//! │   ├── config.rs    # TokenizerConfig (aliases, escape, word delimiters)
//! │   ├── cursor.rs    # UTF-8 aware byte cursor
//! │   └── matcher.rs   # Longest-alias match and adjacency classification
//! └── parser/
//!     ├── mod.rs       # Parser, parse()
//!     ├── transition.rs# Ordered guard/action table
//!     └── tree.rs      # ParseTree arena
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use marklet_syntax::{MarkupKind, TokenizerConfig, Tree, parse_source};
//!
//! let tree = parse_source("__Hello__", &TokenizerConfig::default());
//!
//! let line = tree.children(tree.root())[0];
//! let bold = tree.node(tree.children(line)[0]);
//! assert_eq!(bold.kind, MarkupKind::Bold);
//! assert!(bold.complete);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod syntax_kind;
pub mod tree;

pub use error::DialectError;
pub use lexer::{Token, TokenizerConfig, tokenize};
pub use parser::{ParseNode, ParseTree, parse};
pub use span::Span;
pub use syntax_kind::{MarkupKind, TokenBehavior};
pub use tree::{NodeId, Tree, Visit, Walk};

/// Tokenize and parse `source` in one call.
pub fn parse_source(source: &str, config: &TokenizerConfig) -> ParseTree {
    let tokens = tokenize(source, config);
    parse(&tokens)
}
