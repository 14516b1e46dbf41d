// ============================================================
// Layer 4 — Sentence Noising
// ============================================================
// Adds extra corruption on top of stopword removal so the model
// learns to reconstruct word choice and word order, not just
// missing function words.
//
// Two noise operations, applied in order:
//
//   1. Synonym replacement
//      n = max(1, floor(word_count * replace_ratio)) distinct words
//      are swapped for a random synonym. Every occurrence of a
//      chosen word is replaced with the same synonym.
//
//   2. Random shuffling
//      With probability shuffle_ratio the whole word order is
//      shuffled (Fisher-Yates via rand::seq::SliceRandom).
//
// The RNG is an explicitly seeded StdRng owned by the Noiser, so a
// given seed reproduces the same noised corpus run after run.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::HashSet;

use crate::data::stopwords::StopwordList;
use crate::domain::traits::SynonymLookup;

/// Noise strengths, each a probability / fraction in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseRatios {
    /// Probability that a sentence gets its word order shuffled
    pub shuffle_ratio: f64,

    /// Fraction of words targeted for synonym replacement
    pub replace_ratio: f64,
}

impl NoiseRatios {
    pub fn new(shuffle_ratio: f64, replace_ratio: f64) -> Self {
        Self { shuffle_ratio, replace_ratio }.sanitized()
    }

    /// Clamp both ratios into [0, 1]; NaN becomes 0
    pub fn sanitized(self) -> Self {
        let clamp = |r: f64| if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            shuffle_ratio: clamp(self.shuffle_ratio),
            replace_ratio: clamp(self.replace_ratio),
        }
    }
}

pub struct Noiser<L: SynonymLookup> {
    ratios:    NoiseRatios,
    synonyms:  L,
    stopwords: StopwordList,
    rng:       StdRng,
}

impl<L: SynonymLookup> Noiser<L> {
    pub fn new(synonyms: L, stopwords: StopwordList, ratios: NoiseRatios, seed: u64) -> Self {
        Self {
            ratios: ratios.sanitized(),
            synonyms,
            stopwords,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Apply synonym replacement and (maybe) shuffling to one sentence
    pub fn noise(&mut self, sentence: &str) -> String {
        let words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return String::new();
        }

        let n_replace = ((words.len() as f64 * self.ratios.replace_ratio) as usize).max(1);
        let mut words = self.synonym_replacement(words, n_replace);

        if self.rng.gen::<f64>() < self.ratios.shuffle_ratio {
            words.shuffle(&mut self.rng);
        }

        words.join(" ")
    }

    fn synonym_replacement(&mut self, words: Vec<String>, n: usize) -> Vec<String> {
        // Distinct non-stopword candidates, in first-occurrence order
        let mut candidates: Vec<String> = {
            let mut seen = HashSet::new();
            words
                .iter()
                .filter(|w| !self.stopwords.contains(w))
                .filter(|w| seen.insert(w.as_str()))
                .cloned()
                .collect()
        };
        candidates.shuffle(&mut self.rng);

        let mut new_words = words;
        let mut replaced  = 0usize;

        for candidate in &candidates {
            let synonyms = self.synonyms.synonyms(candidate);
            if let Some(synonym) = synonyms.choose(&mut self.rng) {
                for w in new_words.iter_mut().filter(|w| w.as_str() == candidate.as_str()) {
                    *w = synonym.clone();
                }
                replaced += 1;
            }
            if replaced >= n {
                break;
            }
        }

        if replaced > 0 {
            tracing::trace!("Replaced {} of {} candidate words", replaced, candidates.len());
        }

        // Multi-word synonyms expand into several words
        new_words
            .join(" ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
