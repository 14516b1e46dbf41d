// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// Records how a corpus was produced: the full PrepareConfig and
// the resulting counts, written as pretty JSON.
//
// Keeping the manifest next to the CSV makes a dataset
// reproducible: rerunning `prepare` with the same config and
// seed yields byte-identical output.
//
// Example:
//   {
//     "config": { "input": "raw.txt", "max_length": 1024, ... },
//     "report": { "read": 1000, "kept": 987, "skipped": 13, ... }
//   }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::prepare_use_case::{PrepareConfig, PrepareReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub config: PrepareConfig,
    pub report: PrepareReport,
}

impl Manifest {
    pub fn new(config: PrepareConfig, report: PrepareReport) -> Self {
        Self { config, report }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved run manifest to '{}'", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read manifest from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed manifest '{}'", path.display()))
    }
}
