// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a raw sentence file and the pair CSVs.
//
// The pipeline flows in this order:
//
//   raw .txt file
//       │
//       ▼
//   LineLoader        → streams lines from disk
//       │
//       ▼
//   Preprocessor      → cleans whitespace / invisible characters
//       │
//       ▼
//   StopwordRemover   → treebank tokenize → filter → detokenize
//       │
//       ▼
//   LengthFilter      → drops pairs over the token budget
//       │
//       ▼
//   PairWriter        → corrupted,original CSV
//       │
//       ▼ (optional)
//   Noiser            → synonym replacement + shuffling
//       │
//       ▼
//   PairWriter        → noised CSV
//
// Each module is responsible for exactly one step.

/// Streams input sentences line by line
pub mod loader;

/// Cleans and normalises raw lines
pub mod preprocessor;

/// Penn Treebank tokenizer and detokenizer
pub mod treebank;

/// Stopword list and stopword removal
pub mod stopwords;

/// Synonym lexicon for noise injection
pub mod synonyms;

/// Synonym replacement and word shuffling
pub mod noise;

/// Token-budget filter
pub mod length_filter;

/// Two-column pair CSV reading and writing
pub mod pair_io;
