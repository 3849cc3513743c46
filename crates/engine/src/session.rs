//! In-memory editing session for one sensor file
//!
//! # Design
//!
//! The session keeps three views of the file:
//! - `original`: records as decoded when the file was opened; used by reset
//! - `current`: records as last committed to disk
//! - `pending`: partial edits keyed by sensor index, not yet written
//!
//! Reads through [`EditSession::record`] show `current` with the pending
//! edit merged on top. [`EditSession::commit`] writes only the pending
//! indices, each merged against the slot freshly read from disk, then
//! re-reads the file.
//!
//! # Example
//!
//! ```ignore
//! let mut session = EditSession::open(path)?;
//! session.stage(3, SensorUpdate::new().with_radius(1.5))?;
//! session.scale_all(ScalarField::DirectionParams, 2.0)?;
//! session.commit()?;
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use deformspec_core::{
    check_index, parse::check_factor, SensorFieldsText, SensorRecord, SensorUpdate, SpecResult,
    NUM_SENSORS,
};
use deformspec_storage::{codec, SensorFile};

use crate::transform::{scale_record, ScalarField};

/// Editing state for one open file
#[derive(Debug, Clone)]
pub struct EditSession {
    file: SensorFile,
    original: Vec<SensorRecord>,
    current: Vec<SensorRecord>,
    pending: BTreeMap<usize, SensorUpdate>,
}

impl EditSession {
    /// Open `path` and decode its sensor block.
    pub fn open(path: impl AsRef<Path>) -> SpecResult<Self> {
        let file = SensorFile::new(path.as_ref());
        let records = file.read_all()?;
        tracing::info!(path = %file.path().display(), "Opened sensor file");
        Ok(Self {
            file,
            original: records.clone(),
            current: records,
            pending: BTreeMap::new(),
        })
    }

    /// Path of the open file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Record `index` with any pending edit applied.
    pub fn record(&self, index: usize) -> SpecResult<SensorRecord> {
        let index = check_index(index)?;
        Ok(self.view(index))
    }

    /// All records with pending edits applied.
    pub fn records(&self) -> Vec<SensorRecord> {
        (0..NUM_SENSORS).map(|i| self.view(i)).collect()
    }

    /// Record `index` as it was when the file was opened.
    pub fn original(&self, index: usize) -> SpecResult<&SensorRecord> {
        let index = check_index(index)?;
        Ok(&self.original[index])
    }

    /// Indices with uncommitted edits, ascending
    pub fn pending_indices(&self) -> Vec<usize> {
        self.pending.keys().copied().collect()
    }

    /// Pending edit for `index`, if any
    pub fn pending(&self, index: usize) -> Option<&SensorUpdate> {
        self.pending.get(&index)
    }

    /// Whether any edit is waiting to be committed
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Layer `update` onto the pending edit for `index`.
    pub fn stage(&mut self, index: usize, update: SensorUpdate) -> SpecResult<()> {
        let index = check_index(index)?;
        if update.is_empty() {
            return Ok(());
        }
        let combined = match self.pending.remove(&index) {
            Some(existing) => existing.overlay(update),
            None => update,
        };
        self.pending.insert(index, combined);
        Ok(())
    }

    /// Validate text input and stage it for `index`.
    ///
    /// Nothing is staged if any field fails to parse.
    pub fn stage_text(&mut self, index: usize, text: &SensorFieldsText) -> SpecResult<()> {
        let update = SensorUpdate::parse(text)?;
        self.stage(index, update)
    }

    /// Stage `field` × `factor` for one sensor.
    pub fn scale_sensor(&mut self, index: usize, field: ScalarField, factor: f32) -> SpecResult<()> {
        let index = check_index(index)?;
        let factor = check_factor(factor)?;
        let mut record = self.view(index);
        scale_record(&mut record, field, factor);
        self.stage(index, field_update(&record, field))
    }

    /// Stage `field` × `factor` for every sensor.
    pub fn scale_all(&mut self, field: ScalarField, factor: f32) -> SpecResult<()> {
        let factor = check_factor(factor)?;
        for index in 0..NUM_SENSORS {
            self.scale_sensor(index, field, factor)?;
        }
        Ok(())
    }

    /// Return sensor `index` to its value at open time.
    ///
    /// Drops the pending edit. If a commit since opening changed the record,
    /// padding included, the original slot is staged so the next commit
    /// restores it.
    pub fn reset(&mut self, index: usize) -> SpecResult<()> {
        let index = check_index(index)?;
        self.pending.remove(&index);
        let original = &self.original[index];
        if self.current[index] != *original {
            self.pending.insert(
                index,
                SensorUpdate::from_record(original).with_padding(original.padding.clone()),
            );
        }
        Ok(())
    }

    /// Reset every sensor.
    pub fn reset_all(&mut self) {
        for index in 0..NUM_SENSORS {
            // In range by construction
            let _ = self.reset(index);
        }
    }

    /// Write pending edits to disk and reload.
    ///
    /// Returns the number of sensors written. On failure the pending edits
    /// are kept; slots written before the failure stay written.
    pub fn commit(&mut self) -> SpecResult<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        let written = self.file.write_updates(&self.pending)?;
        self.current = self.file.read_all()?;
        self.pending.clear();
        tracing::info!(path = %self.path().display(), written, "Committed sensor edits");
        Ok(written)
    }

    /// Discard pending edits and re-read the file.
    pub fn reload(&mut self) -> SpecResult<()> {
        self.current = self.file.read_all()?;
        self.pending.clear();
        Ok(())
    }

    fn view(&self, index: usize) -> SensorRecord {
        match self.pending.get(&index) {
            Some(update) => codec::merge(&self.current[index], update),
            None => self.current[index].clone(),
        }
    }
}

fn field_update(record: &SensorRecord, field: ScalarField) -> SensorUpdate {
    match field {
        ScalarField::DirectionParams => {
            SensorUpdate::new().with_direction_params(record.direction_params)
        }
        ScalarField::Radius => SensorUpdate::new().with_radius(record.radius),
    }
}
