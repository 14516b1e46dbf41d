// ============================================================
// Layer 4 — Token Length Filter
// ============================================================
// Drops pairs the language model could not fit in one context.
//
// A pair is fed to the model as "corrupted\noriginal", so that
// joined string is encoded with the model's own subword tokenizer
// and the pair is kept only when
//
//     token_count(corrupted + "\n" + original) < max_length
//
// The comparison is strict: a pair of exactly max_length tokens
// leaves no room for the end-of-text token and is dropped.

use anyhow::Result;

use crate::domain::{sentence_pair::SentencePair, traits::TokenCounter};

pub struct LengthFilter<C: TokenCounter> {
    counter:    C,
    max_length: usize,
}

impl<C: TokenCounter> LengthFilter<C> {
    pub fn new(counter: C, max_length: usize) -> Self {
        Self { counter, max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// True when the pair fits inside the token budget
    pub fn fits(&self, pair: &SentencePair) -> Result<bool> {
        let n = self.counter.count_tokens(&pair.joined())?;
        if n >= self.max_length {
            tracing::debug!("Pair too long: {} tokens (limit {})", n, self.max_length);
        }
        Ok(n < self.max_length)
    }
}
