//! # marklet-engine
//!
//! The back half of the marklet pipeline: AST construction, syntax rules and
//! HTML serialization, on top of the tokenizer and parser in
//! `marklet-syntax`.
//!
//! ```text
//! Parse Tree → AST → Rules → HTML
//!                    (Nesting, Number, CrossWordBoundary)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! assert_eq!(
//!     marklet_engine::render("# _Hello_ __world__!").unwrap(),
//!     "<h1><em>Hello</em> <strong>world</strong>!</h1>"
//! );
//! ```
//!
//! Custom dialects go through [`Dialect`] and [`Renderer::new`]:
//!
//! ```
//! use marklet_engine::{Dialect, Renderer};
//!
//! let renderer = Renderer::new(Dialect::default().with_escape_html(true)).unwrap();
//! assert_eq!(renderer.render("a < _b_").unwrap(), "a &lt; <em>b</em>");
//! ```

use std::sync::LazyLock;

pub mod ast;
pub mod dialect;
pub mod error;
pub mod render;
pub mod rules;

pub use ast::{Ast, AstNode};
pub use dialect::{Dialect, TagTable};
pub use error::RenderError;
pub use render::Renderer;
pub use rules::{RuleContext, SyntaxRule};

static DEFAULT_RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::default);

/// Render `input` with the default dialect.
pub fn render(input: &str) -> Result<String, RenderError> {
    DEFAULT_RENDERER.render(input)
}
