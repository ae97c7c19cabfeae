use marklet_engine::{Dialect, RenderError, Renderer, SyntaxRule, TagTable};
use marklet_syntax::{MarkupKind, TokenizerConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown markup kind {name:?} in tag table")]
    UnknownKind { name: String },

    #[error("Escape must be a single character or empty, got {escape:?}")]
    InvalidEscape { escape: String },

    #[error("Invalid dialect: {0}")]
    InvalidDialect(#[from] RenderError),
}

/// On-disk dialect description. Every field falls back to the standard
/// dialect when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Escape character; empty disables escaping.
    pub escape: String,
    pub word_delimiters: String,
    pub escape_html: bool,
    pub rules: Vec<SyntaxRule>,
    /// Delimiter literal to markup kind.
    pub aliases: BTreeMap<String, MarkupKind>,
    /// Markup kind name to HTML tag.
    pub tags: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape: TokenizerConfig::DEFAULT_ESCAPE.to_string(),
            word_delimiters: TokenizerConfig::DEFAULT_WORD_DELIMITERS.iter().collect(),
            escape_html: false,
            rules: SyntaxRule::DEFAULT_ORDER.to_vec(),
            aliases: TokenizerConfig::DEFAULT_ALIASES
                .iter()
                .map(|&(literal, kind)| (literal.to_string(), kind))
                .collect(),
            tags: TagTable::default()
                .iter()
                .map(|(kind, tag)| (kind.name().to_string(), tag.to_string()))
                .collect(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marklet");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Converts the file contents into dialect tables, checking the escape
    /// character, alias table and tag names.
    pub fn dialect(&self) -> Result<Dialect, ConfigError> {
        let mut escape_chars = self.escape.chars();
        let escape = match (escape_chars.next(), escape_chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(c),
            _ => {
                return Err(ConfigError::InvalidEscape {
                    escape: self.escape.clone(),
                });
            }
        };

        let tokenizer = TokenizerConfig::new(
            self.aliases
                .iter()
                .map(|(literal, kind)| (literal.as_str(), *kind)),
            escape,
            self.word_delimiters.chars(),
        )
        .map_err(RenderError::from)?;

        let mut tags = TagTable::new();
        for (name, tag) in &self.tags {
            let kind = name
                .parse::<MarkupKind>()
                .map_err(|_| ConfigError::UnknownKind { name: name.clone() })?;
            tags.insert(kind, tag.as_str());
        }

        Ok(Dialect {
            tokenizer,
            tags,
            rules: self.rules.clone(),
            escape_html: self.escape_html,
        })
    }

    /// Builds a validated renderer for this configuration.
    pub fn renderer(&self) -> Result<Renderer, ConfigError> {
        Ok(Renderer::new(self.dialect()?)?)
    }
}
