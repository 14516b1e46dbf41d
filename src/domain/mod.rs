// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the pipeline
// works with: a corrupted/original sentence pair, and the two
// seams the data layer plugs real resources into (a token
// counter and a synonym lexicon).
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizer or CSV crate types in public signatures
//   - Only plain Rust structs, enums, and traits

// A corrupted sentence paired with its original
pub mod sentence_pair;

// Core abstractions (traits) that other layers implement
pub mod traits;
