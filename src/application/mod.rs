// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers to accomplish one
// user-facing task. No text-processing logic lives here, and
// no printing (that's Layer 1) — only workflow coordination.

// Build corrupted/original pairs from raw sentences
pub mod prepare_use_case;

// Re-noise an already prepared pair file
pub mod noise_use_case;
