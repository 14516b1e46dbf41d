// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the pretrained subword tokenizer whose token counts
// decide which pairs fit the model's context window.
//
// A tokenizer source is either:
//   - a path to a local HuggingFace `tokenizer.json`, or
//   - a hub identifier such as "aubmindlab/aragpt2-base",
//     fetched (and cached) through the tokenizers `http` feature.
//
// Local files win: if the source names an existing file it is never
// treated as a hub identifier.

use anyhow::Result;
use std::path::Path;
use tokenizers::Tokenizer;

pub const DEFAULT_TOKENIZER: &str = "aubmindlab/aragpt2-base";

pub struct TokenizerStore {
    source: String,
}

impl TokenizerStore {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    pub fn load(&self) -> Result<Tokenizer> {
        let path = Path::new(&self.source);

        if path.is_file() {
            tracing::info!("Loading tokenizer from '{}'", path.display());
            return Tokenizer::from_file(path).map_err(|e| {
                anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
            });
        }

        // A directory holding a tokenizer.json is accepted too
        let in_dir = path.join("tokenizer.json");
        if in_dir.is_file() {
            tracing::info!("Loading tokenizer from '{}'", in_dir.display());
            return Tokenizer::from_file(&in_dir).map_err(|e| {
                anyhow::anyhow!("Cannot load tokenizer from '{}': {}", in_dir.display(), e)
            });
        }

        tracing::info!("Fetching pretrained tokenizer '{}'", self.source);
        Tokenizer::from_pretrained(&self.source, None).map_err(|e| {
            anyhow::anyhow!("Cannot load pretrained tokenizer '{}': {}", self.source, e)
        })
    }
}

/// Write a minimal word-level `tokenizer.json` into `dir` and return its path.
/// Every whitespace/punctuation-separated word counts as one token.
#[cfg(test)]
pub(crate) fn write_word_level_tokenizer(dir: &Path) -> std::path::PathBuf {
    let json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[UNK]", "single_word": false, "lstrip": false,
             "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": { "[UNK]": 0, "the": 1, "cat": 2, "sat": 3 },
            "unk_token": "[UNK]"
        }
    });

    let path = dir.join("tokenizer.json");
    std::fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::TokenCounter;

    #[test]
    fn test_loads_local_tokenizer_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_word_level_tokenizer(dir.path());

        let tok = TokenizerStore::new(path.to_string_lossy()).load().unwrap();
        assert_eq!(tok.count_tokens("the cat sat").unwrap(), 3);
        // Unknown words still cost one token each
        assert_eq!(tok.count_tokens("the dog\nran").unwrap(), 3);
    }

    #[test]
    fn test_loads_tokenizer_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_word_level_tokenizer(dir.path());

        let tok = TokenizerStore::new(dir.path().to_string_lossy()).load().unwrap();
        assert_eq!(tok.count_tokens("cat").unwrap(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(TokenizerStore::new(path.to_string_lossy()).load().is_err());
    }
}
