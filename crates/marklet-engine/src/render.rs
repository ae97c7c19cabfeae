use marklet_syntax::{MarkupKind, TokenizerConfig, Tree, Visit, parse, tokenize};

use crate::ast::Ast;
use crate::dialect::{Dialect, TagTable};
use crate::error::RenderError;
use crate::rules::{RuleContext, SyntaxRule};

/// Renders marked-up text to HTML for one dialect.
///
/// Holds only read-only tables, so a single renderer can be shared across
/// threads and reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct Renderer {
    tokenizer: TokenizerConfig,
    tags: TagTable,
    rules: Vec<SyntaxRule>,
    escape_html: bool,
}

impl Renderer {
    /// Validates `dialect` and builds a renderer for it.
    ///
    /// Every kind the alias table can introduce, other than Line, needs a
    /// tag.
    pub fn new(dialect: Dialect) -> Result<Self, RenderError> {
        for kind in dialect.tokenizer.kinds() {
            if kind != MarkupKind::Line && dialect.tags.get(kind).is_none() {
                return Err(RenderError::MissingTag { kind });
            }
        }
        Ok(Self {
            tokenizer: dialect.tokenizer,
            tags: dialect.tags,
            rules: dialect.rules,
            escape_html: dialect.escape_html,
        })
    }

    pub fn tokenizer(&self) -> &TokenizerConfig {
        &self.tokenizer
    }

    pub fn tags(&self) -> &TagTable {
        &self.tags
    }

    pub fn rules(&self) -> &[SyntaxRule] {
        &self.rules
    }

    /// Runs the whole pipeline over `input`.
    pub fn render(&self, input: &str) -> Result<String, RenderError> {
        let ast = self.build_ast(input);
        self.serialize(&ast)
    }

    /// Tokenizes, parses and applies the rules, stopping short of HTML.
    pub fn build_ast<'src>(&self, input: &'src str) -> Ast<'src> {
        let tokens = tokenize(input, &self.tokenizer);
        let tree = parse(&tokens);
        let mut ast = Ast::from_parse_tree(input, &tree);

        let ctx = RuleContext {
            word_delimiters: self.tokenizer.word_delimiters(),
        };
        for rule in &self.rules {
            rule.apply(&mut ast, &ctx);
        }
        ast
    }

    /// Writes `ast` out as HTML.
    pub fn serialize(&self, ast: &Ast) -> Result<String, RenderError> {
        let mut out = String::with_capacity(ast.source().len() + ast.source().len() / 4);

        for visit in ast.walk() {
            let (id, entering) = match visit {
                Visit::Enter(id) => (id, true),
                Visit::Exit(id) => (id, false),
            };
            let node = ast.node(id);
            if node.kind.is_literal() {
                if entering {
                    self.push_text(&mut out, ast.text(id));
                }
                continue;
            }

            let tag = self
                .tags
                .get(node.kind)
                .ok_or(RenderError::MissingTag { kind: node.kind })?;
            out.push('<');
            if !entering {
                out.push('/');
            }
            out.push_str(tag);
            out.push('>');
        }

        log::debug!(
            "rendered {} bytes into {} bytes of HTML",
            ast.source().len(),
            out.len()
        );
        Ok(out)
    }

    fn push_text(&self, out: &mut String, text: &str) {
        if self.escape_html {
            out.push_str(&html_escape::encode_text(text));
        } else {
            out.push_str(text);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        let dialect = Dialect::default();
        Self {
            tokenizer: dialect.tokenizer,
            tags: dialect.tags,
            rules: dialect.rules,
            escape_html: dialect.escape_html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::tests::build;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_tag_is_rejected_up_front() {
        let tags: TagTable = [(MarkupKind::Italic, "em"), (MarkupKind::Heading, "h1")]
            .into_iter()
            .collect();
        let dialect = Dialect::default().with_tags(tags);
        let err = Renderer::new(dialect).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingTag {
                kind: MarkupKind::Bold
            }
        );
    }

    #[test]
    fn line_needs_no_tag() {
        assert!(Renderer::new(Dialect::default()).is_ok());
    }

    #[test]
    fn unused_kind_needs_no_tag() {
        let tokenizer = TokenizerConfig::new([("*", MarkupKind::Italic)], None, [' ']).unwrap();
        let dialect = Dialect {
            tokenizer,
            tags: [(MarkupKind::Italic, "i")].into_iter().collect(),
            ..Dialect::default()
        };
        let renderer = Renderer::new(dialect).unwrap();
        assert_eq!(renderer.render("a *b* c").unwrap(), "a <i>b</i> c");
    }

    #[test]
    fn serialize_reports_untagged_container() {
        let renderer = Renderer::new(Dialect::default()).unwrap();
        let ast = build("_a_");
        let stripped = Renderer {
            tags: TagTable::new(),
            ..renderer
        };
        assert_eq!(
            stripped.serialize(&ast),
            Err(RenderError::MissingTag {
                kind: MarkupKind::Italic
            })
        );
    }

    #[test]
    fn empty_container_gets_both_tags() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render("# ").unwrap(), "<h1></h1>");
    }

    #[test]
    fn escape_html_only_touches_text() {
        let renderer = Renderer::new(Dialect::default().with_escape_html(true)).unwrap();
        assert_eq!(
            renderer.render("a < _b & c_ >").unwrap(),
            "a &lt; <em>b &amp; c</em> &gt;"
        );
    }

    #[test]
    fn html_passes_through_by_default() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render("<b>_x_</b>").unwrap(), "<b><em>x</em></b>");
    }

    #[test]
    fn rules_can_be_disabled() {
        let renderer = Renderer::new(Dialect::default().with_rules([])).unwrap();
        assert_eq!(
            renderer.render("Text_12_3").unwrap(),
            "Text<em>12</em>3"
        );
    }
}
