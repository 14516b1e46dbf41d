// ============================================================
// Layer 3 — SentencePair Domain Type
// ============================================================
// One training example for a denoising autoencoder:
//   - `corrupted` is what the model sees as input
//   - `original`  is what the model must reconstruct
//
// Example:
//   original:  "ذهب الولد إلى المدرسة"
//   corrupted: "ذهب الولد المدرسة"     (stopword "إلى" removed)

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    /// Noisy input side
    pub corrupted: String,

    /// Clean target side
    pub original: String,
}

impl SentencePair {
    pub fn new(corrupted: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            corrupted: corrupted.into(),
            original:  original.into(),
        }
    }

    /// The text whose token count decides whether the pair fits the budget.
    /// Both sides are joined by a newline, exactly as the model will see them.
    pub fn joined(&self) -> String {
        format!("{}\n{}", self.corrupted, self.original)
    }

    /// Return a copy of this pair with a different corrupted side
    pub fn with_corrupted(&self, corrupted: impl Into<String>) -> Self {
        Self::new(corrupted, self.original.clone())
    }

    /// Two-column CSV record: `[corrupted, original]`
    pub fn as_record(&self) -> [&str; 2] {
        [&self.corrupted, &self.original]
    }
}
