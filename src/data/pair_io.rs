// ============================================================
// Layer 4 — Pair CSV Reader / Writer
// ============================================================
// Training pairs are stored as two-column CSV without a header:
//
//   corrupted,original
//   ذهب الولد المدرسة.,ذهب الولد إلى المدرسة.
//
// Fields are quoted only when needed (commas, quotes, newlines)
// and records end with CRLF, the same layout Python's csv module
// and most dataset loaders expect.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::{fs::File, path::{Path, PathBuf}};

use crate::domain::sentence_pair::SentencePair;

pub struct PairWriter {
    path:    PathBuf,
    writer:  csv::Writer<File>,
    written: usize,
}

impl PairWriter {
    /// Create (or truncate) the CSV file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_path(&path)
            .with_context(|| format!("Cannot create output file '{}'", path.display()))?;

        Ok(Self { path, writer, written: 0 })
    }

    pub fn write(&mut self, pair: &SentencePair) -> Result<()> {
        self.writer
            .write_record(pair.as_record())
            .with_context(|| format!("Cannot write to '{}'", self.path.display()))?;
        self.written += 1;
        Ok(())
    }

    /// Flush buffered rows and return how many were written
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.path.display()))?;

        tracing::debug!("Wrote {} pairs to '{}'", self.written, self.path.display());
        Ok(self.written)
    }
}

pub struct PairReader {
    path:   PathBuf,
    reader: csv::Reader<File>,
}

impl PairReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Cannot open pair file '{}'", path.display()))?;

        Ok(Self { path, reader })
    }

    /// Iterate over the pairs in file order
    pub fn pairs(&mut self) -> impl Iterator<Item = Result<SentencePair>> + '_ {
        let path = &self.path;
        self.reader.records().enumerate().map(move |(i, record)| {
            let record = record
                .with_context(|| format!("Bad CSV row {} in '{}'", i + 1, path.display()))?;

            match (record.get(0), record.get(1)) {
                (Some(corrupted), Some(original)) => Ok(SentencePair::new(corrupted, original)),
                _ => Err(anyhow::anyhow!(
                    "Row {} in '{}' has {} field(s), expected 2",
                    i + 1,
                    path.display(),
                    record.len()
                )),
            }
        })
    }
}
