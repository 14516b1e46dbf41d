// ============================================================
// Layer 4 — Synonym Lexicon
// ============================================================
// A plain-text synonym table used by noise injection.
//
// File format (UTF-8):
//   - one synonym group per line
//   - entries separated by commas or tabs
//   - an entry may contain spaces (multi-word synonym)
//   - blank lines and lines starting with '#' are ignored
//
// Example:
//   كبير, ضخم, عظيم
//   big, large, great
//
// Every entry in a group is a synonym of every other entry.
// A word appearing in several groups collects synonyms from all.

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};

use crate::domain::traits::SynonymLookup;

#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    /// word → synonyms, in file order, without the word itself
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// A table with no synonyms — replacement becomes a no-op
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the table from the text of a lexicon file
    pub fn parse(text: &str) -> Self {
        let mut table = Self::empty();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let group: Vec<String> = line
                .split(|c| c == ',' || c == '\t' || c == '،')
                .map(|e| e.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|e| !e.is_empty())
                .collect();

            table.add_group(&group);
        }

        table
    }

    /// Load a lexicon file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read synonym lexicon '{}'", path.display()))?;

        let table = Self::parse(&text);
        if table.is_empty() {
            tracing::warn!("Synonym lexicon '{}' has no usable groups", path.display());
            return Ok(table);
        }
        tracing::info!(
            "Loaded synonyms for {} words from '{}'",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    fn add_group(&mut self, group: &[String]) {
        for word in group {
            let syns = self.entries.entry(word.clone()).or_default();
            for other in group {
                if other != word && !syns.contains(other) {
                    syns.push(other.clone());
                }
            }
        }
    }

    /// Number of words that have at least one synonym
    pub fn len(&self) -> usize {
        self.entries.values().filter(|s| !s.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SynonymLookup for SynonymTable {
    fn synonyms(&self, word: &str) -> Vec<String> {
        self.entries.get(word).cloned().unwrap_or_default()
    }
}
