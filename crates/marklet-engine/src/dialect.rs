//! Construction-time tables describing a markup dialect.

use std::collections::BTreeMap;

use marklet_syntax::{MarkupKind, TokenizerConfig};

use crate::rules::SyntaxRule;

/// Markup kind to HTML tag name, e.g. Italic → `em`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable(BTreeMap<MarkupKind, String>);

impl TagTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, kind: MarkupKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    pub fn insert(&mut self, kind: MarkupKind, tag: impl Into<String>) -> Option<String> {
        self.0.insert(kind, tag.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkupKind, &str)> {
        self.0.iter().map(|(kind, tag)| (*kind, tag.as_str()))
    }
}

impl Default for TagTable {
    fn default() -> Self {
        [
            (MarkupKind::Italic, "em"),
            (MarkupKind::Bold, "strong"),
            (MarkupKind::Heading, "h1"),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>> FromIterator<(MarkupKind, S)> for TagTable {
    fn from_iter<I: IntoIterator<Item = (MarkupKind, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(kind, tag)| (kind, tag.into()))
                .collect(),
        )
    }
}

/// Everything that distinguishes one dialect from another. Pure data;
/// [`crate::Renderer::new`] validates it.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub tokenizer: TokenizerConfig,
    pub tags: TagTable,
    /// Applied in order; later rules see the tree pruned by earlier ones.
    pub rules: Vec<SyntaxRule>,
    /// HTML-escape literal text on output.
    pub escape_html: bool,
}

impl Dialect {
    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = SyntaxRule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    pub fn with_tags(mut self, tags: TagTable) -> Self {
        self.tags = tags;
        self
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            tags: TagTable::default(),
            rules: SyntaxRule::DEFAULT_ORDER.to_vec(),
            escape_html: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags() {
        let tags = TagTable::default();
        assert_eq!(tags.get(MarkupKind::Italic), Some("em"));
        assert_eq!(tags.get(MarkupKind::Bold), Some("strong"));
        assert_eq!(tags.get(MarkupKind::Heading), Some("h1"));
        assert_eq!(tags.get(MarkupKind::Line), None);
    }

    #[test]
    fn insert_replaces_tag() {
        let mut tags = TagTable::default();
        assert_eq!(tags.insert(MarkupKind::Bold, "b"), Some("strong".to_string()));
        assert_eq!(tags.get(MarkupKind::Bold), Some("b"));
    }

    #[test]
    fn default_dialect_runs_every_rule() {
        let dialect = Dialect::default();
        assert_eq!(dialect.rules, SyntaxRule::DEFAULT_ORDER.to_vec());
        assert!(!dialect.escape_html);
    }
}
