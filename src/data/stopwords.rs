// ============================================================
// Layer 4 — Stopword Removal
// ============================================================
// Produces the "corrupted" side of a training pair by deleting
// function words from a sentence.
//
// The sentence is run through a tokenize → filter → detokenize
// round trip rather than a plain whitespace split, so that
// punctuation glued to a stopword ("(في" / "the,") does not hide
// the stopword, and so the corrupted sentence keeps ordinary
// spacing around punctuation.
//
// Quote handling: the tokenizer rewrites double quotes into the
// Treebank forms `` and ''. Both are turned back into a plain "
// before detokenising, so the corrupted text never contains
// Treebank quote markers.

use anyhow::{Context, Result};
use std::{collections::HashSet, fs, path::Path};

use crate::data::treebank::{TreebankDetokenizer, TreebankTokenizer};

/// A case-insensitive set of words to delete.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// Build a list from any iterator of words.
    /// Entries are trimmed and lower-cased; blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a stopword file: one word per line, UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read stopword list '{}'", path.display()))?;

        let list = Self::from_words(text.lines());
        if list.is_empty() {
            tracing::warn!("Stopword list '{}' is empty; nothing will be removed", path.display());
        } else {
            tracing::info!("Loaded {} stopwords from '{}'", list.len(), path.display());
        }
        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Removes stopwords from sentences using Treebank tokenisation.
pub struct StopwordRemover {
    stopwords:   StopwordList,
    tokenizer:   TreebankTokenizer,
    detokenizer: TreebankDetokenizer,
}

impl StopwordRemover {
    pub fn new(stopwords: StopwordList) -> Self {
        Self {
            stopwords,
            tokenizer:   TreebankTokenizer::new(),
            detokenizer: TreebankDetokenizer::new(),
        }
    }

    /// Return `sentence` with every stopword token removed.
    pub fn remove_stopwords(&self, sentence: &str) -> String {
        let kept: Vec<String> = self
            .tokenizer
            .tokenize(sentence)
            .into_iter()
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        // Collapse Treebank quote markers back into plain double quotes
        let joined = kept.join(" ").replace("''", "\"").replace("``", "\"");

        let tokens: Vec<&str> = joined.split_whitespace().collect();
        self.detokenizer.detokenize(&tokens)
    }
}
