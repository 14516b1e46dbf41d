// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full corpus preparation pipeline:
//
//   Step 1: Load the stopword list          (Layer 4 - data)
//   Step 2: Load the pretrained tokenizer   (Layer 6 - infra)
//   Step 3: Open input, outputs and noiser  (Layer 4 - data)
//   Step 4: Stream input lines, for each:
//             trim → clean → remove stopwords → length check → write
//             (and, when enabled, noise → write noised copy)
//   Step 5: Flush outputs, save manifest    (Layer 4 / Layer 6)
//
// Lines are processed one at a time; memory use does not grow
// with the size of the corpus.
//
// The target side of every pair is the input line with only its
// surrounding whitespace trimmed. Cleaning feeds stopword removal
// and never touches the target.
//
// The input is opened before any output file is created, so a bad
// --input leaves earlier results in place.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{ffi::OsStr, path::PathBuf};

use crate::data::{
    length_filter::LengthFilter,
    loader::LineLoader,
    noise::{NoiseRatios, Noiser},
    pair_io::PairWriter,
    preprocessor::Preprocessor,
    stopwords::{StopwordList, StopwordRemover},
    synonyms::SynonymTable,
};
use crate::domain::{sentence_pair::SentencePair, traits::TokenCounter};
use crate::infra::{
    manifest::Manifest,
    tokenizer_store::{TokenizerStore, DEFAULT_TOKENIZER},
};

/// Lines between progress log messages
const PROGRESS_EVERY: usize = 10_000;

pub const DEFAULT_STOPWORDS: &str = "arabic_stopwords.txt";

/// Older data directories ship the stopword list under this name
pub const LEGACY_STOPWORDS: &str = "arabic_synonyms.txt";

// ─── Preparation Configuration ───────────────────────────────────────────────
// Every option of a `prepare` run. Serialisable so the exact
// settings can be stored in the run manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input:              String,
    pub output:             String,
    pub stopwords:          String,
    pub tokenizer:          String,
    pub max_length:         usize,
    pub save_noised_output: bool,
    pub noised_output:      Option<String>,
    pub synonyms:           Option<String>,
    pub shuffle_ratio:      f64,
    pub replace_ratio:      f64,
    pub seed:               u64,
    pub normalize:          bool,
    pub manifest:           Option<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input:              "data/sentences.txt".to_string(),
            output:             "data/pairs.csv".to_string(),
            stopwords:          DEFAULT_STOPWORDS.to_string(),
            tokenizer:          DEFAULT_TOKENIZER.to_string(),
            max_length:         1024,
            save_noised_output: false,
            noised_output:      None,
            synonyms:           None,
            shuffle_ratio:      0.2,
            replace_ratio:      0.2,
            seed:               1234,
            normalize:          true,
            manifest:           None,
        }
    }
}

impl PrepareConfig {
    /// Where the noised copy goes, or None when noising is off.
    /// Defaults to the output path with ".0" appended.
    pub fn noised_output_path(&self) -> Option<PathBuf> {
        if !self.save_noised_output {
            return None;
        }
        let path = self
            .noised_output
            .clone()
            .unwrap_or_else(|| format!("{}.0", self.output));
        Some(PathBuf::from(path))
    }

    /// The stopword file to read. A missing `arabic_stopwords.txt` falls
    /// back to `arabic_synonyms.txt` in the same directory.
    pub fn stopwords_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.stopwords);
        if path.exists() || path.file_name() != Some(OsStr::new(DEFAULT_STOPWORDS)) {
            return path;
        }

        let legacy = path.with_file_name(LEGACY_STOPWORDS);
        if legacy.is_file() {
            tracing::warn!(
                "'{}' not found; using stopwords from '{}'",
                path.display(),
                legacy.display()
            );
            return legacy;
        }
        path
    }
}

// ─── Report ───────────────────────────────────────────────────────────────────
/// Line counts for one run. Invariant: read == blank + kept + skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareReport {
    /// Input lines read
    pub read:    usize,
    /// Lines empty after cleaning
    pub blank:   usize,
    /// Pairs written to the output CSV
    pub kept:    usize,
    /// Pairs dropped for exceeding the token budget
    pub skipped: usize,
    /// Pairs written to the noised CSV
    pub noised:  usize,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline with the pretrained tokenizer named in the config
    pub fn execute(&self) -> Result<PrepareReport> {
        let tokenizer = TokenizerStore::new(&self.config.tokenizer).load()?;
        self.execute_with(tokenizer)
    }

    /// Run the pipeline measuring length with any token counter
    pub fn execute_with<C: TokenCounter>(&self, counter: C) -> Result<PrepareReport> {
        let cfg = &self.config;

        // ── Step 1: Stopwords ─────────────────────────────────────────────────
        let stopwords = StopwordList::load(cfg.stopwords_path())?;
        let remover   = StopwordRemover::new(stopwords.clone());

        // ── Step 2: Length filter ─────────────────────────────────────────────
        let filter = LengthFilter::new(counter, cfg.max_length);

        // ── Step 3: Open every input, then the outputs ───────────────────────
        let loader = LineLoader::new(&cfg.input);
        let lines  = loader.lines()?;

        let noiser = match cfg.noised_output_path() {
            Some(path) => {
                let synonyms = match &cfg.synonyms {
                    Some(p) => SynonymTable::load(p)?,
                    None => {
                        tracing::warn!(
                            "No synonym lexicon given; noised output will only be shuffled"
                        );
                        SynonymTable::empty()
                    }
                };
                let ratios = NoiseRatios::new(cfg.shuffle_ratio, cfg.replace_ratio);
                Some((path, Noiser::new(synonyms, stopwords, ratios, cfg.seed)))
            }
            None => None,
        };

        let mut writer = PairWriter::create(&cfg.output)?;
        let mut noised = match noiser {
            Some((path, noiser)) => {
                tracing::info!("Noised pairs will be written to '{}'", path.display());
                Some((PairWriter::create(&path)?, noiser))
            }
            None => None,
        };

        // ── Step 4: Stream the corpus ─────────────────────────────────────────
        let preprocessor = Preprocessor::new(cfg.normalize);
        let mut report   = PrepareReport::default();

        tracing::info!(
            "Preparing pairs from '{}' (max_length={})",
            loader.path().display(),
            filter.max_length()
        );

        for line in lines {
            let line = line?;
            report.read += 1;

            if report.read % PROGRESS_EVERY == 0 {
                tracing::info!(
                    "Processed {} lines ({} kept, {} skipped)",
                    report.read,
                    report.kept,
                    report.skipped
                );
            }

            // Lines holding nothing but whitespace or invisible characters
            let cleaned = preprocessor.clean_line(&line);
            if cleaned.is_empty() {
                report.blank += 1;
                continue;
            }

            let corrupted = remover.remove_stopwords(&cleaned);
            let pair      = SentencePair::new(corrupted, line.trim());

            if !filter.fits(&pair)? {
                report.skipped += 1;
                continue;
            }

            writer.write(&pair)?;
            report.kept += 1;

            if let Some((noised_writer, noiser)) = noised.as_mut() {
                let noisy = pair.with_corrupted(noiser.noise(&pair.corrupted));
                noised_writer.write(&noisy)?;
                report.noised += 1;
            }
        }

        // ── Step 5: Flush and record ──────────────────────────────────────────
        writer.finish()?;
        if let Some((noised_writer, _)) = noised {
            noised_writer.finish()?;
        }

        tracing::info!(
            "Done: {} read, {} kept, {} skipped, {} blank",
            report.read,
            report.kept,
            report.skipped,
            report.blank
        );

        if let Some(path) = &cfg.manifest {
            Manifest::new(cfg.clone(), report.clone()).save(path)?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::tokenizer_store::write_word_level_tokenizer;
    use std::{fs, path::Path};

    const CORPUS: &str = "the cat sat on the mat.\n   \nthe cat\n";

    /// Write stopwords, corpus and tokenizer into `dir`; return a config using them
    fn fixture(dir: &Path) -> PrepareConfig {
        fs::write(dir.join("stop.txt"), "the\non\n").unwrap();
        fs::write(dir.join("in.txt"), CORPUS).unwrap();
        let tok = write_word_level_tokenizer(dir);

        PrepareConfig {
            input:     dir.join("in.txt").to_string_lossy().into_owned(),
            output:    dir.join("out.csv").to_string_lossy().into_owned(),
            stopwords: dir.join("stop.txt").to_string_lossy().into_owned(),
            tokenizer: tok.to_string_lossy().into_owned(),
            ..PrepareConfig::default()
        }
    }

    #[test]
    fn test_pairs_are_written_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = fixture(dir.path());

        let report = PrepareUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(
            report,
            PrepareReport { read: 3, blank: 1, kept: 2, skipped: 0, noised: 0 }
        );

        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(out, "cat sat mat.,the cat sat on the mat.\r\ncat,the cat\r\n");
        assert!(!Path::new(&format!("{}.0", cfg.output)).exists());
    }

    #[test]
    fn test_long_pairs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        // "cat sat mat.\nthe cat sat on the mat." is 11 tokens, "cat\nthe cat" is 3
        let cfg = PrepareConfig { max_length: 11, ..fixture(dir.path()) };

        let report = PrepareUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(report.kept, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.read, report.blank + report.kept + report.skipped);

        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(out, "cat,the cat\r\n");
    }

    #[test]
    fn test_noised_output_defaults_next_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig {
            save_noised_output: true,
            shuffle_ratio: 0.0,
            ..fixture(dir.path())
        };

        let report = PrepareUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(report.noised, report.kept);

        // No synonyms and no shuffling: the noised copy matches the clean one
        let clean  = fs::read_to_string(&cfg.output).unwrap();
        let noised = fs::read_to_string(format!("{}.0", cfg.output)).unwrap();
        assert_eq!(clean, noised);
    }

    #[test]
    fn test_noising_is_reproducible_for_a_seed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("syn.txt"), "cat, kitten\nsat, rested\n").unwrap();

        let run = |name: &str| {
            let noised = dir.path().join(name).to_string_lossy().into_owned();
            let cfg = PrepareConfig {
                save_noised_output: true,
                noised_output: Some(noised.clone()),
                synonyms: Some(dir.path().join("syn.txt").to_string_lossy().into_owned()),
                shuffle_ratio: 0.5,
                replace_ratio: 1.0,
                seed: 99,
                ..fixture(dir.path())
            };
            PrepareUseCase::new(cfg).execute().unwrap();
            fs::read_to_string(noised).unwrap()
        };

        let first = run("a.csv");
        assert_eq!(first, run("b.csv"));
        // replace_ratio 1.0 replaces every word that has a synonym
        assert!(first.contains("kitten"));
        assert!(!first.lines().any(|l| l.split(',').next().unwrap().contains("cat")));
    }

    #[test]
    fn test_manifest_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("run.json");
        let cfg = PrepareConfig {
            manifest: Some(manifest.to_string_lossy().into_owned()),
            ..fixture(dir.path())
        };

        let report = PrepareUseCase::new(cfg).execute().unwrap();
        let loaded = Manifest::load(&manifest).unwrap();
        assert_eq!(loaded.report, report);
    }

    #[test]
    fn test_missing_stopword_file_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig {
            stopwords: dir.path().join("nope.txt").to_string_lossy().into_owned(),
            ..fixture(dir.path())
        };

        assert!(PrepareUseCase::new(cfg.clone()).execute().is_err());
        assert!(!Path::new(&cfg.output).exists());
    }

    #[test]
    fn test_target_side_is_the_trimmed_input_line() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = fixture(dir.path());
        fs::write(&cfg.input, "  the  cat\tsat on it \n").unwrap();

        let report = PrepareUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(report.kept, 1);

        // Cleaning only shapes the corrupted side
        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(out, "cat sat it,the  cat\tsat on it\r\n");
    }

    #[test]
    fn test_stopword_only_line_is_written_with_empty_corrupted_side() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = fixture(dir.path());
        fs::write(&cfg.input, "the on\nthe cat\n").unwrap();

        let report = PrepareUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(
            report,
            PrepareReport { read: 2, blank: 0, kept: 2, skipped: 0, noised: 0 }
        );

        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(out, ",the on\r\ncat,the cat\r\n");
    }

    #[test]
    fn test_missing_input_leaves_existing_outputs_alone() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig {
            input: dir.path().join("typo.txt").to_string_lossy().into_owned(),
            save_noised_output: true,
            ..fixture(dir.path())
        };
        fs::write(&cfg.output, "keep me\r\n").unwrap();
        fs::write(format!("{}.0", cfg.output), "keep me too\r\n").unwrap();

        assert!(PrepareUseCase::new(cfg.clone()).execute().is_err());
        assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "keep me\r\n");
        assert_eq!(
            fs::read_to_string(format!("{}.0", cfg.output)).unwrap(),
            "keep me too\r\n"
        );
    }

    #[test]
    fn test_missing_synonym_file_leaves_existing_outputs_alone() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig {
            save_noised_output: true,
            synonyms: Some(dir.path().join("nope.txt").to_string_lossy().into_owned()),
            ..fixture(dir.path())
        };
        fs::write(&cfg.output, "keep me\r\n").unwrap();

        assert!(PrepareUseCase::new(cfg.clone()).execute().is_err());
        assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "keep me\r\n");
        assert!(!Path::new(&format!("{}.0", cfg.output)).exists());
    }

    #[test]
    fn test_default_stopword_name_falls_back_to_legacy_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEGACY_STOPWORDS), "the\non\n").unwrap();
        let cfg = PrepareConfig {
            stopwords: dir.path().join(DEFAULT_STOPWORDS).to_string_lossy().into_owned(),
            ..fixture(dir.path())
        };
        assert_eq!(cfg.stopwords_path(), dir.path().join(LEGACY_STOPWORDS));

        PrepareUseCase::new(cfg.clone()).execute().unwrap();
        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(out, "cat sat mat.,the cat sat on the mat.\r\ncat,the cat\r\n");
    }

    #[test]
    fn test_other_stopword_names_do_not_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEGACY_STOPWORDS), "the\n").unwrap();
        let missing = dir.path().join("custom.txt");
        let cfg = PrepareConfig {
            stopwords: missing.to_string_lossy().into_owned(),
            ..PrepareConfig::default()
        };
        assert_eq!(cfg.stopwords_path(), missing);
    }

    #[test]
    fn test_noised_output_path() {
        let mut cfg = PrepareConfig { output: "x.csv".into(), ..PrepareConfig::default() };
        assert_eq!(cfg.noised_output_path(), None);

        cfg.save_noised_output = true;
        assert_eq!(cfg.noised_output_path(), Some(PathBuf::from("x.csv.0")));

        cfg.noised_output = Some("y.csv".into());
        assert_eq!(cfg.noised_output_path(), Some(PathBuf::from("y.csv")));
    }
}
