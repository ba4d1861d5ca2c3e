//! Persisted normalizer state.
//!
//! A fitted normalizer is fully described by its configuration plus the
//! removal vocabulary. Saving both lets an apply-only normalizer be rebuilt
//! in another process with identical behaviour.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::NormalizerConfig;
use super::vocabulary::RemovalVocabulary;
use crate::error::Result;

/// Serializable snapshot of a normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerState {
    /// Stage configuration.
    pub config: NormalizerConfig,

    /// The fitted removal vocabulary, if any.
    pub vocabulary: Option<RemovalVocabulary>,
}

impl NormalizerState {
    /// Create a new state.
    pub fn new(config: NormalizerConfig, vocabulary: Option<RemovalVocabulary>) -> Self {
        Self { config, vocabulary }
    }

    /// Encode as a binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from a binary blob produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.config.validate()?;
        Ok(state)
    }

    /// Write the state as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        debug!("saved normalizer state to {}", path.display());
        Ok(())
    }

    /// Read a state written by [`save_json`](Self::save_json).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let state: Self = serde_json::from_reader(reader)?;
        state.config.validate()?;
        debug!("loaded normalizer state from {}", path.display());
        Ok(state)
    }

    /// Write the state as a binary blob.
    pub fn save_bytes<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Read a state written by [`save_bytes`](Self::save_bytes).
    pub fn load_bytes<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    /// Save as JSON when the extension is `.json`, as a binary blob otherwise.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if is_json(path.as_ref()) {
            self.save_json(path)
        } else {
            self.save_bytes(path)
        }
    }

    /// Load from JSON when the extension is `.json`, from a binary blob otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if is_json(path.as_ref()) {
            Self::load_json(path)
        } else {
            Self::load_bytes(path)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
