use crate::error::DialectError;
use crate::syntax_kind::MarkupKind;

/// A delimiter literal and the markup it introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub literal: String,
    pub kind: MarkupKind,
}

/// Read-only tables driving the tokenizer: delimiter aliases, escape
/// character and word delimiters.
///
/// Built once and shared across any number of tokenize calls.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Longest literal first, so the first hit is the longest match.
    aliases: Vec<Alias>,
    escape: Option<char>,
    word_delimiters: Vec<char>,
    /// First bytes of every alias literal, for a cheap pre-check.
    lead_bytes: [bool; 256],
}

impl TokenizerConfig {
    pub const DEFAULT_ESCAPE: char = '\\';

    pub const DEFAULT_WORD_DELIMITERS: [char; 8] = [' ', '\t', '\r', '\n', ',', '.', '!', '?'];

    pub const DEFAULT_ALIASES: [(&'static str, MarkupKind); 4] = [
        ("_", MarkupKind::Italic),
        ("__", MarkupKind::Bold),
        ("# ", MarkupKind::Heading),
        ("\n", MarkupKind::Line),
    ];

    /// Builds and validates a configuration.
    pub fn new<I, S>(
        aliases: I,
        escape: Option<char>,
        word_delimiters: impl IntoIterator<Item = char>,
    ) -> Result<Self, DialectError>
    where
        I: IntoIterator<Item = (S, MarkupKind)>,
        S: Into<String>,
    {
        let aliases: Vec<Alias> = aliases
            .into_iter()
            .map(|(literal, kind)| Alias {
                literal: literal.into(),
                kind,
            })
            .collect();
        let word_delimiters: Vec<char> = word_delimiters.into_iter().collect();

        for (i, alias) in aliases.iter().enumerate() {
            if alias.literal.is_empty() {
                return Err(DialectError::EmptyAlias);
            }
            if !alias.kind.is_delimited() {
                return Err(DialectError::UndelimitedKind {
                    alias: alias.literal.clone(),
                    kind: alias.kind,
                });
            }
            if aliases[..i].iter().any(|a| a.literal == alias.literal) {
                return Err(DialectError::DuplicateAlias {
                    alias: alias.literal.clone(),
                });
            }
        }

        if let Some(escape) = escape {
            if word_delimiters.contains(&escape) {
                return Err(DialectError::EscapeIsWordDelimiter { escape });
            }
            if let Some(alias) = aliases.iter().find(|a| a.literal.starts_with(escape)) {
                return Err(DialectError::EscapeStartsAlias {
                    escape,
                    alias: alias.literal.clone(),
                });
            }
        }

        Ok(Self::build(aliases, escape, word_delimiters))
    }

    fn build(mut aliases: Vec<Alias>, escape: Option<char>, mut word_delimiters: Vec<char>) -> Self {
        aliases.sort_by(|a, b| {
            b.literal
                .len()
                .cmp(&a.literal.len())
                .then_with(|| a.literal.cmp(&b.literal))
        });
        word_delimiters.sort_unstable();
        word_delimiters.dedup();

        let mut lead_bytes = [false; 256];
        for alias in &aliases {
            if let Some(&b) = alias.literal.as_bytes().first() {
                lead_bytes[b as usize] = true;
            }
        }

        Self {
            aliases,
            escape,
            word_delimiters,
            lead_bytes,
        }
    }

    /// Aliases ordered longest literal first.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn escape(&self) -> Option<char> {
        self.escape
    }

    pub fn word_delimiters(&self) -> &[char] {
        &self.word_delimiters
    }

    pub fn is_word_delimiter(&self, c: char) -> bool {
        self.word_delimiters.contains(&c)
    }

    /// Returns false when no alias literal starts with `byte`.
    pub fn may_start_delimiter(&self, byte: u8) -> bool {
        self.lead_bytes[byte as usize]
    }

    /// Every kind some alias can introduce, without duplicates.
    pub fn kinds(&self) -> Vec<MarkupKind> {
        let mut kinds: Vec<MarkupKind> = self.aliases.iter().map(|a| a.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let aliases = Self::DEFAULT_ALIASES
            .iter()
            .map(|&(literal, kind)| Alias {
                literal: literal.to_string(),
                kind,
            })
            .collect();
        Self::build(
            aliases,
            Some(Self::DEFAULT_ESCAPE),
            Self::DEFAULT_WORD_DELIMITERS.to_vec(),
        )
    }
}
