// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting resources the pipeline depends on but that are
// not part of the text transformation itself:
//
//   tokenizer_store.rs — Pretrained tokenizer loading
//                        Loads a local tokenizer.json or fetches
//                        one from the HuggingFace hub; its token
//                        counts drive the length filter.
//
//   manifest.rs        — Run manifest
//                        Saves the run configuration and counts
//                        as JSON so a corpus can be regenerated.

/// Pretrained tokenizer loading
pub mod tokenizer_store;

/// Run configuration + report persistence
pub mod manifest;
