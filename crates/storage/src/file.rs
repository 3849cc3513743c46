//! File accessor for the sensor block
//!
//! Applies the slot codec across the [`NUM_SENSORS`] fixed-stride slots of a
//! file. Every read and write seeks to [`slot_offset`] first, so the header
//! and anything past the sensor block are never touched.
//!
//! # Write modes
//!
//! - [`WriteMode::Merge`]: read the slot, overlay the caller's fields, write
//!   back. On-disk padding survives.
//! - [`WriteMode::Replace`]: encode the caller's record as-is, padding
//!   included, without reading first.
//!
//! Files are never created or extended: a file shorter than
//! [`MIN_FILE_LEN`] is rejected before the first write.
//!
//! # Example
//!
//! ```ignore
//! let file = SensorFile::new("VEH_CAR01/StreamedDeformationSpec/spec.dat");
//! let mut records = file.read_all()?;
//! records[3].radius = 1.5;
//! file.write_all(&records, WriteMode::Merge)?;
//! ```

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use deformspec_core::{
    slot_offset, SensorRecord, SensorUpdate, SpecError, SpecResult, ValidationError,
    MIN_FILE_LEN, NUM_SENSORS, SENSOR_STEP,
};

use crate::codec;

/// How [`SensorFile::write_all`] combines caller records with the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overlay editable fields on the slot read from disk
    Merge,
    /// Write the caller's record verbatim
    Replace,
}

/// Handle on one sensor file
///
/// Holds only the path. Each operation opens the file, processes all slots
/// it needs and closes it again before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorFile {
    path: PathBuf,
}

impl SensorFile {
    /// Create a handle for `path`. The file is not opened.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this handle points at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode all sensor slots.
    ///
    /// Fails on the first I/O or decode error; no partial set is returned.
    pub fn read_all(&self) -> SpecResult<Vec<SensorRecord>> {
        let mut file = File::open(&self.path).map_err(|e| SpecError::io(&self.path, e))?;
        let records = read_records(&mut file, &self.path)?;
        tracing::debug!(path = %self.path.display(), "Read sensor block");
        Ok(records)
    }

    /// Write a full set of records back to their slots.
    pub fn write_all(&self, records: &[SensorRecord], mode: WriteMode) -> SpecResult<()> {
        let mut file = self.open_rw()?;
        write_records(&mut file, &self.path, records, mode)?;
        tracing::debug!(path = %self.path.display(), ?mode, "Wrote sensor block");
        Ok(())
    }

    /// Merge partial updates into the slots they name.
    ///
    /// Slots without an entry are neither read nor written. Returns the
    /// number of slots written.
    pub fn write_updates(&self, updates: &BTreeMap<usize, SensorUpdate>) -> SpecResult<usize> {
        let mut file = self.open_rw()?;
        let written = apply_updates(&mut file, &self.path, updates)?;
        tracing::debug!(path = %self.path.display(), written, "Merged sensor updates");
        Ok(written)
    }

    fn open_rw(&self) -> SpecResult<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| SpecError::io(&self.path, e))
    }
}

/// Read and decode all sensor slots from `path`.
pub fn read_all(path: impl AsRef<Path>) -> SpecResult<Vec<SensorRecord>> {
    SensorFile::new(path.as_ref()).read_all()
}

/// Write all sensor slots of `path`.
pub fn write_all(path: impl AsRef<Path>, records: &[SensorRecord], mode: WriteMode) -> SpecResult<()> {
    SensorFile::new(path.as_ref()).write_all(records, mode)
}

/// Decode all slots from any seekable reader.
///
/// `path` is used only to label errors.
pub fn read_records<R: Read + Seek>(reader: &mut R, path: &Path) -> SpecResult<Vec<SensorRecord>> {
    (0..NUM_SENSORS)
        .map(|index| read_slot(reader, path, index))
        .collect()
}

/// Encode and write a full set of records into any seekable stream.
pub fn write_records<F: Read + Write + Seek>(
    file: &mut F,
    path: &Path,
    records: &[SensorRecord],
    mode: WriteMode,
) -> SpecResult<()> {
    if records.len() != NUM_SENSORS {
        return Err(ValidationError::WrongLength {
            field: "records".to_string(),
            expected: NUM_SENSORS,
            actual: records.len(),
        }
        .into());
    }
    ensure_capacity(file, path)?;

    for (index, record) in records.iter().enumerate() {
        match mode {
            WriteMode::Merge => {
                let on_disk = read_slot(file, path, index)?;
                let merged = codec::merge(&on_disk, &SensorUpdate::from_record(record));
                write_slot(file, path, index, &merged)?;
            }
            WriteMode::Replace => write_slot(file, path, index, record)?,
        }
    }
    file.flush().map_err(|e| SpecError::io(path, e))
}

/// Merge partial updates into their slots of any seekable stream.
pub fn apply_updates<F: Read + Write + Seek>(
    file: &mut F,
    path: &Path,
    updates: &BTreeMap<usize, SensorUpdate>,
) -> SpecResult<usize> {
    if let Some(&index) = updates.keys().find(|i| **i >= NUM_SENSORS) {
        return Err(ValidationError::SensorIndex { index }.into());
    }
    if updates.is_empty() {
        return Ok(0);
    }
    ensure_capacity(file, path)?;

    for (&index, update) in updates {
        let on_disk = read_slot(file, path, index)?;
        write_slot(file, path, index, &codec::merge(&on_disk, update))?;
    }
    file.flush().map_err(|e| SpecError::io(path, e))?;
    Ok(updates.len())
}

fn read_slot<R: Read + Seek>(reader: &mut R, path: &Path, index: usize) -> SpecResult<SensorRecord> {
    reader
        .seek(SeekFrom::Start(slot_offset(index)))
        .map_err(|e| SpecError::io(path, e))?;

    let mut raw = Vec::with_capacity(SENSOR_STEP);
    reader
        .by_ref()
        .take(SENSOR_STEP as u64)
        .read_to_end(&mut raw)
        .map_err(|e| SpecError::io(path, e))?;

    codec::decode(&raw).map_err(|e| SpecError::decode(path, index, e))
}

fn write_slot<W: Write + Seek>(
    writer: &mut W,
    path: &Path,
    index: usize,
    record: &SensorRecord,
) -> SpecResult<()> {
    let offset = slot_offset(index);
    writer
        .seek(SeekFrom::Start(offset))
        .map_err(|e| SpecError::io(path, e))?;
    writer
        .write_all(&codec::encode(record))
        .map_err(|e| SpecError::io(path, e))?;
    tracing::trace!(path = %path.display(), index, offset, "Wrote sensor slot");
    Ok(())
}

fn ensure_capacity<S: Seek>(stream: &mut S, path: &Path) -> SpecResult<()> {
    let len = stream
        .seek(SeekFrom::End(0))
        .map_err(|e| SpecError::io(path, e))?;
    if len < MIN_FILE_LEN {
        return Err(SpecError::TooSmall {
            path: path.to_path_buf(),
            len,
            required: MIN_FILE_LEN,
        });
    }
    Ok(())
}
