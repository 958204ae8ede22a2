// src/highlight.rs
//! The sentiment highlighter: splits review text into contiguous segments and
//! labels each occurrence of a lexicon phrase with its polarity.
//!
//! Matching is case-insensitive, literal (phrases are escaped before
//! compilation) and substring-based on purpose: the Korean lexicon relies on
//! multi-character phrase fragments matching inside larger tokens, so word
//! boundaries would change results.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Sentiment label carried by a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    None,
}

/// A contiguous, non-empty slice of the input. The ordered segment sequence
/// concatenates back to exactly the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub label: Polarity,
}

impl Segment {
    fn new(text: &str, label: Polarity) -> Self {
        Self {
            text: text.to_string(),
            label,
        }
    }
}

/// Compiled matcher state, built once per lexicon and reused for every
/// highlight call. Read-only after construction, so it is safe to share
/// across concurrent callers without locking.
#[derive(Debug)]
pub struct Highlighter {
    /// Union of both lists; `None` when both are empty.
    union: Option<Regex>,
    positive: Option<Regex>,
    negative: Option<Regex>,
}

static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(|| {
    Highlighter::new(Lexicon::builtin()).expect("built-in lexicon compiles")
});

/// Join non-empty phrases into a case-insensitive literal alternation.
fn alternation(phrases: &[String]) -> Option<String> {
    let parts: Vec<String> = phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("|"))
    }
}

fn compile(alt: Option<String>) -> anyhow::Result<Option<Regex>> {
    match alt {
        Some(a) => Ok(Some(Regex::new(&format!("(?i){}", a))?)),
        None => Ok(None),
    }
}

impl Highlighter {
    /// Compile the union scan pattern and the two membership predicates.
    /// Positive phrases come first in the union so the compiled pattern is
    /// reproducible for a given lexicon; the order has no semantic effect.
    pub fn new(lexicon: &Lexicon) -> anyhow::Result<Self> {
        let pos_alt = alternation(&lexicon.positive);
        let neg_alt = alternation(&lexicon.negative);

        let union_alt = match (&pos_alt, &neg_alt) {
            (Some(p), Some(n)) => Some(format!("{}|{}", p, n)),
            (Some(p), None) => Some(p.clone()),
            (None, Some(n)) => Some(n.clone()),
            (None, None) => None,
        };

        Ok(Self {
            union: compile(union_alt)?,
            positive: compile(pos_alt)?,
            negative: compile(neg_alt)?,
        })
    }

    /// Highlighter over the built-in lexicon, compiled once per process.
    pub fn default_instance() -> &'static Highlighter {
        &DEFAULT_HIGHLIGHTER
    }

    /// Split `text` into labeled segments: leftmost, non-overlapping matches of
    /// any lexicon phrase become `positive`/`negative` segments, everything in
    /// between passes through as `none`. Empty input yields no segments; empty
    /// gap pieces at match boundaries are dropped.
    pub fn highlight(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }
        let Some(union) = &self.union else {
            // No phrases configured: the whole input is one plain segment.
            return vec![Segment::new(text, Polarity::None)];
        };

        let mut out = Vec::new();
        let mut last = 0;
        for m in union.find_iter(text) {
            if m.start() > last {
                out.push(Segment::new(&text[last..m.start()], Polarity::None));
            }
            // The displayed substring is verbatim from the input; only the
            // search was case-insensitive.
            out.push(Segment::new(m.as_str(), self.classify(m.as_str())));
            last = m.end();
        }
        if last < text.len() {
            out.push(Segment::new(&text[last..], Polarity::None));
        }
        out
    }

    /// Null-tolerant variant used at the API boundary: absent text means "no
    /// text" and produces an empty sequence rather than an error.
    pub fn highlight_opt(&self, text: Option<&str>) -> Vec<Segment> {
        match text {
            Some(t) => self.highlight(t),
            None => Vec::new(),
        }
    }

    /// Classify one matched piece. Negative takes precedence over positive
    /// when a piece satisfies both predicates; this bias is a documented
    /// policy, inherited from the consuming logic checking negative first.
    fn classify(&self, piece: &str) -> Polarity {
        if self.negative.as_ref().is_some_and(|re| re.is_match(piece)) {
            return Polarity::Negative;
        }
        if self.positive.as_ref().is_some_and(|re| re.is_match(piece)) {
            return Polarity::Positive;
        }
        Polarity::None
    }
}

/// Highlight with the built-in lexicon.
pub fn highlight(text: &str) -> Vec<Segment> {
    Highlighter::default_instance().highlight(text)
}
