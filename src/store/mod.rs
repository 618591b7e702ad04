//! Opaque-id lookup for computed predictions.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::PredictionResult;
use crate::utils::ensure_dir;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A cache keyed by prediction id. Lookup only; no querying, no indexes.
pub trait PredictionStore {
    fn put(&mut self, result: &PredictionResult) -> Result<(), StoreError>;
    fn get(&self, id: Uuid) -> Result<Option<PredictionResult>, StoreError>;
}

/// Process-local store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<Uuid, PredictionResult>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PredictionStore for MemoryStore {
    fn put(&mut self, result: &PredictionResult) -> Result<(), StoreError> {
        self.entries.insert(result.id, result.clone());
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<Option<PredictionResult>, StoreError> {
        Ok(self.entries.get(&id).cloned())
    }
}

/// Envelope persisted per prediction id.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPrediction {
    saved_at: DateTime<Utc>,
    result: PredictionResult,
}

/// One JSON file per prediction id under a store directory, written through
/// a temp file and renamed into place.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(crate::utils::predictions_dir())
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl PredictionStore for JsonFileStore {
    fn put(&mut self, result: &PredictionResult) -> Result<(), StoreError> {
        let envelope = StoredPrediction {
            saved_at: Utc::now(),
            result: result.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        write_atomic(&self.path_for(result.id), &json)
    }

    fn get(&self, id: Uuid) -> Result<Option<PredictionResult>, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        let envelope: StoredPrediction = serde_json::from_str(&data)?;
        Ok(Some(envelope.result))
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}
