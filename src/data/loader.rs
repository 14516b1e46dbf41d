// ============================================================
// Layer 4 — Sentence Loader
// ============================================================
// Streams a UTF-8 text file one line at a time.
//
// The corpus can be large, so lines are never collected into
// memory here; the use case pulls them through the pipeline
// one by one. Each I/O error is tagged with the file path and
// the 1-based line number where it happened.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

pub struct LineLoader {
    path: PathBuf,
}

impl LineLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and return an iterator over its lines
    /// (without trailing newline characters).
    pub fn lines(&self) -> Result<impl Iterator<Item = Result<String>> + '_> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open input file '{}'", self.path.display()))?;

        tracing::debug!("Streaming sentences from '{}'", self.path.display());

        let lines = BufReader::new(file)
            .lines()
            .enumerate()
            .map(move |(i, line)| {
                line.with_context(|| {
                    format!("Cannot read line {} of '{}'", i + 1, self.path.display())
                })
            });

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_streams_every_line() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "first\nsecond\r\n\nlast").unwrap();

        let loader = LineLoader::new(f.path());
        let lines: Vec<String> = loader.lines().unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(lines, vec!["first", "second", "", "last"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = LineLoader::new("/no/such/corpus.txt");
        assert!(loader.lines().is_err());
    }

    #[test]
    fn test_invalid_utf8_reports_line_number() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"ok\n\xff\xfe\n").unwrap();

        let loader = LineLoader::new(f.path());
        let err = loader.lines().unwrap().nth(1).unwrap().unwrap_err();
        assert!(format!("{err}").contains("line 2"));
    }
}
