// src/lexicon.rs
//! Sentiment lexicons: curated positive/negative phrase lists, loaded once at
//! startup and immutable for the process lifetime.
//!
//! The built-in lists are embedded at compile time; an operator can override
//! them with a TOML file (see `HIGHLIGHT_CONFIG_PATH`).

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config/highlight.toml";
pub const ENV_CONFIG_PATH: &str = "HIGHLIGHT_CONFIG_PATH";

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../sentiment_keywords.json");
    serde_json::from_str::<Lexicon>(raw).expect("valid embedded sentiment keywords")
});

/// Two phrase lists tagged by polarity. Order within a list is irrelevant for
/// matching; it is kept stable only so compiled patterns are reproducible.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/* ----------------------------
Config schema (from TOML)
---------------------------- */

#[derive(Debug, Clone, Deserialize)]
struct HighlightRoot {
    lexicon: Lexicon,
}

impl Lexicon {
    /// The curated built-in lists shipped with the binary.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse a lexicon override from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Lexicon> {
        let root: HighlightRoot = toml::from_str(toml_str)?;
        Ok(root.lexicon)
    }

    /// Resolve the lexicon for this process: if `HIGHLIGHT_CONFIG_PATH` is set,
    /// the file it names must exist and parse; otherwise the built-in lists are
    /// used (a missing default-path file is not an error).
    pub fn load() -> anyhow::Result<Lexicon> {
        let (path, explicit) = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) => (PathBuf::from(p), true),
            Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                let lex = Self::from_toml_str(&content).map_err(|e| {
                    anyhow::anyhow!("bad lexicon config at {}: {}", path.display(), e)
                })?;
                info!(
                    target: "lexicon",
                    positive = lex.positive.len(),
                    negative = lex.negative.len(),
                    path = %path.display(),
                    "loaded lexicon override"
                );
                Ok(lex)
            }
            Err(e) if explicit => Err(anyhow::anyhow!(
                "failed to read lexicon config at {}: {}",
                path.display(),
                e
            )),
            Err(_) => Ok(Self::builtin().clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}
