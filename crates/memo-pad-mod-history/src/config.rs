/// Configuration for the history system: defaults, load, and save.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of snapshots kept per history. `0` keeps every snapshot;
/// a non-zero cap drops the oldest ones once exceeded.
const DEFAULT_MAX_DEPTH: usize = 0;

/// What happens to snapshots ahead of the cursor when a new one is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedoPolicy {
    /// Drop everything after the cursor before appending.
    #[default]
    Truncate,
    /// Append without dropping anything. Stale snapshots stay stored and
    /// are walked through again by later undos.
    Retain,
}

/// Configuration for a `History`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Max snapshots kept. `0` means unbounded.
    pub max_depth: usize,
    /// Handling of the forward branch on save after undo.
    pub redo_policy: RedoPolicy,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            redo_policy: RedoPolicy::default(),
        }
    }
}

impl HistoryConfig {
    /// Loads config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history config at {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse history config at {}", path.display()))
    }

    /// Loads config from `path`, falling back to defaults on any error.
    ///
    /// For embedders that treat the config file as optional. The `memo-pad`
    /// binary uses `load` so an explicit `--config` path fails loudly.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e:#}; using default history config");
                Self::default()
            }
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize history config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write history config at {}", path.display()))
    }

    /// Whether `len` snapshots exceeds the configured depth.
    pub fn is_over_depth(&self, len: usize) -> bool {
        self.max_depth != 0 && len > self.max_depth
    }
}
