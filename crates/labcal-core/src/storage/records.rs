//! JSON file of calibration records supplied by the caller.
//!
//! The file holds a plain array of [`CalibrationRecord`]s. It is the
//! hand-off format between an external inventory system and the engine.

use std::path::{Path, PathBuf};

use crate::calibration::CalibrationRecord;
use crate::error::{CoreError, Result};

/// Calibration records loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
    records: Vec<CalibrationRecord>,
}

impl RecordFile {
    /// Read all records from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// calibration records.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)?;
        let records: Vec<CalibrationRecord> = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            count = records.len(),
            "loaded calibration records"
        );
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[CalibrationRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [CalibrationRecord] {
        &mut self.records
    }

    /// Mutable access to the record with `id`.
    ///
    /// # Errors
    /// [`CoreError::RecordNotFound`] when no record has that id.
    pub fn get_mut(&mut self, id: u64) -> Result<&mut CalibrationRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::RecordNotFound { id })
    }

    /// Write the records back to the file they were read from.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
