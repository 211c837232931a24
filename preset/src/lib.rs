//! Saved battle configurations for the porygon damage calculator.
//!
//! A [`PresetStore`] persists whole [`BattleState`] snapshots as named
//! presets in one JSON file. There is no schema logic here beyond
//! (de)serialization; the snapshot types define their own shape, and the
//! store reads and writes them wholesale.
//!
//! # Example
//!
//! ```no_run
//! use porygon_engine::BattleState;
//! use porygon_preset::{BattlePreset, PresetStore};
//!
//! let store = PresetStore::new("presets.json");
//!
//! let preset = BattlePreset::new(store.next_id()?, "rain team vs garchomp", BattleState::new());
//! store.save(&preset)?;
//!
//! for preset in store.list()? {
//!     println!("{}: {}", preset.id, preset.name);
//! }
//! # Ok::<(), porygon_preset::PresetError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use porygon_engine::BattleState;

/// The store keeps at most this many presets; saving past the limit drops
/// the oldest entries.
pub const MAX_PRESETS: usize = 20;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Preset storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preset encoding failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A named, saved battle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlePreset {
    /// Store-assigned identifier
    pub id: u64,

    /// User-chosen display name
    pub name: String,

    /// The saved snapshot
    pub state: BattleState,
}

impl BattlePreset {
    /// Create a preset from a snapshot
    pub fn new(id: u64, name: impl Into<String>, state: BattleState) -> Self {
        Self {
            id,
            name: name.into(),
            state,
        }
    }

    /// Update the name and/or snapshot in place
    pub fn update(&mut self, name: Option<String>, state: Option<BattleState>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(state) = state {
            self.state = state;
        }
    }
}

/// Loads and saves presets in a single JSON file
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    /// Create a store over the given file path
    ///
    /// The file is created on first save; a missing file reads as an empty
    /// preset list.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved presets, oldest first
    pub fn list(&self) -> Result<Vec<BattlePreset>, PresetError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Look up one preset by id
    pub fn get(&self, id: u64) -> Result<Option<BattlePreset>, PresetError> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    /// The next unused id
    pub fn next_id(&self) -> Result<u64, PresetError> {
        let max = self.list()?.iter().map(|p| p.id).max().unwrap_or(0);
        Ok(max + 1)
    }

    /// Insert or update a preset
    ///
    /// Saving past [`MAX_PRESETS`] drops the oldest entries.
    pub fn save(&self, preset: &BattlePreset) -> Result<(), PresetError> {
        let mut presets = self.list()?;

        match presets.iter_mut().find(|p| p.id == preset.id) {
            Some(existing) => *existing = preset.clone(),
            None => presets.push(preset.clone()),
        }

        if presets.len() > MAX_PRESETS {
            let excess = presets.len() - MAX_PRESETS;
            presets.drain(..excess);
        }

        self.write(&presets)
    }

    /// Remove a preset by id (removing an absent id is a no-op)
    pub fn delete(&self, id: u64) -> Result<(), PresetError> {
        let mut presets = self.list()?;
        presets.retain(|p| p.id != id);
        self.write(&presets)
    }

    /// Remove every preset and the backing file
    pub fn delete_all(&self) -> Result<(), PresetError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn write(&self, presets: &[BattlePreset]) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(presets)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
