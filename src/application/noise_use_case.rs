// ============================================================
// Layer 2 — NoiseUseCase
// ============================================================
// Re-noises an existing pair CSV without re-running stopword
// removal or the (slow) tokenizer length check.
//
// Useful for producing several differently-seeded noised copies
// of one prepared corpus:
//
//   denoise-prep noise --input pairs.csv --output pairs.csv.1 --seed 1
//   denoise-prep noise --input pairs.csv --output pairs.csv.2 --seed 2

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    noise::{NoiseRatios, Noiser},
    pair_io::{PairReader, PairWriter},
    stopwords::StopwordList,
    synonyms::SynonymTable,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub input:         String,
    pub output:        String,
    pub stopwords:     Option<String>,
    pub synonyms:      Option<String>,
    pub shuffle_ratio: f64,
    pub replace_ratio: f64,
    pub seed:          u64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            input:         "data/pairs.csv".to_string(),
            output:        "data/pairs.csv.0".to_string(),
            stopwords:     None,
            synonyms:      None,
            shuffle_ratio: 0.2,
            replace_ratio: 0.2,
            seed:          1234,
        }
    }
}

pub struct NoiseUseCase {
    config: NoiseConfig,
}

impl NoiseUseCase {
    pub fn new(config: NoiseConfig) -> Self {
        Self { config }
    }

    /// Noise the corrupted column of every row; returns rows written
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        let stopwords = match &cfg.stopwords {
            Some(p) => StopwordList::load(p)?,
            None => StopwordList::default(),
        };
        let synonyms = match &cfg.synonyms {
            Some(p) => SynonymTable::load(p)?,
            None => SynonymTable::empty(),
        };

        let ratios     = NoiseRatios::new(cfg.shuffle_ratio, cfg.replace_ratio);
        let mut noiser = Noiser::new(synonyms, stopwords, ratios, cfg.seed);

        let mut reader = PairReader::open(&cfg.input)?;
        let mut writer = PairWriter::create(&cfg.output)?;

        for pair in reader.pairs() {
            let pair = pair?;
            writer.write(&pair.with_corrupted(noiser.noise(&pair.corrupted)))?;
        }

        let written = writer.finish()?;
        tracing::info!("Noised {} pairs into '{}'", written, cfg.output);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_noises_only_the_corrupted_column() {
        let dir = tempfile::tempdir().unwrap();
        let input  = dir.path().join("pairs.csv");
        let output = dir.path().join("noised.csv");
        let syn    = dir.path().join("syn.txt");
        fs::write(&input, "big house,the big house\r\nsmall,a small one\r\n").unwrap();
        fs::write(&syn, "big, large\nsmall, little\n").unwrap();

        let cfg = NoiseConfig {
            input:         input.to_string_lossy().into_owned(),
            output:        output.to_string_lossy().into_owned(),
            synonyms:      Some(syn.to_string_lossy().into_owned()),
            shuffle_ratio: 0.0,
            replace_ratio: 1.0,
            ..NoiseConfig::default()
        };

        assert_eq!(NoiseUseCase::new(cfg).execute().unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "large house,the big house\r\nlittle,a small one\r\n"
        );
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = NoiseConfig {
            input:  dir.path().join("none.csv").to_string_lossy().into_owned(),
            output: dir.path().join("out.csv").to_string_lossy().into_owned(),
            ..NoiseConfig::default()
        };
        assert!(NoiseUseCase::new(cfg).execute().is_err());
    }
}
