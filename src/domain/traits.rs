// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline only needs two things from the outside world
// beyond reading and writing files:
//
//   TokenCounter  → how many subword tokens a text costs
//   SynonymLookup → which words may replace a given word
//
// Programming against these traits keeps the use cases
// testable without downloading a pretrained tokenizer.

use anyhow::Result;

// ─── TokenCounter ─────────────────────────────────────────────────────────────
/// Anything that can measure the length of a text in model tokens.
///
/// Implementations:
///   - tokenizers::Tokenizer → pretrained subword tokenizer
pub trait TokenCounter {
    fn count_tokens(&self, text: &str) -> Result<usize>;
}

impl TokenCounter for tokenizers::Tokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        // Special tokens are included, matching what the model is fed
        let enc = self
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;
        Ok(enc.get_ids().len())
    }
}

// ─── SynonymLookup ────────────────────────────────────────────────────────────
/// Any source of synonyms used for noise injection.
///
/// Implementations:
///   - SynonymTable → loaded from a plain-text lexicon
pub trait SynonymLookup {
    /// Synonyms of `word`, never including `word` itself.
    /// An empty Vec means the word cannot be replaced.
    fn synonyms(&self, word: &str) -> Vec<String>;
}
