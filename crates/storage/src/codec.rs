//! Sensor slot codec
//!
//! # Slot Format
//!
//! ```text
//! +0x00  direction_params  6 x f32 BE
//! +0x18  radius            f32 BE
//! +0x1C  next_sensor       6 x u8
//! +0x22  scene_index       u8
//! +0x23  absorption_level  u8
//! +0x24  next_boundary     2 x u8
//! +0x26  padding           26 bytes, opaque
//! ```
//!
//! Padding is carried as raw bytes and never interpreted.

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use deformspec_core::{
    DecodeError, SensorRecord, SensorUpdate, PADDING_SIZE, SENSOR_FIELDS_SIZE, SENSOR_STEP,
};
use std::io::{Cursor, Read};

/// Encoded size of one slot
pub type SlotBytes = [u8; SENSOR_STEP];

/// Decode one slot.
///
/// Only the first [`SENSOR_STEP`] bytes are used. Fails if fewer are
/// supplied.
pub fn decode(raw: &[u8]) -> Result<SensorRecord, DecodeError> {
    if raw.len() < SENSOR_STEP {
        return Err(DecodeError {
            expected: SENSOR_STEP,
            actual: raw.len(),
        });
    }

    let (fields, padding) = raw[..SENSOR_STEP].split_at(SENSOR_FIELDS_SIZE);
    let mut cursor = Cursor::new(fields);
    let mut record = SensorRecord {
        padding: padding.to_vec(),
        ..SensorRecord::default()
    };

    // Reads from a 38-byte cursor cannot run short
    let short = |_: std::io::Error| DecodeError {
        expected: SENSOR_STEP,
        actual: raw.len(),
    };
    for value in record.direction_params.iter_mut() {
        *value = cursor.read_f32::<BigEndian>().map_err(short)?;
    }
    record.radius = cursor.read_f32::<BigEndian>().map_err(short)?;
    cursor.read_exact(&mut record.next_sensor).map_err(short)?;
    record.scene_index = cursor.read_u8().map_err(short)?;
    record.absorption_level = cursor.read_u8().map_err(short)?;
    cursor
        .read_exact(&mut record.next_boundary_sensor)
        .map_err(short)?;

    Ok(record)
}

/// Encode one slot.
///
/// Padding of the wrong length is replaced with zeros so the slot is always
/// exactly [`SENSOR_STEP`] bytes.
pub fn encode(record: &SensorRecord) -> SlotBytes {
    let mut out = [0u8; SENSOR_STEP];

    for (k, value) in record.direction_params.iter().enumerate() {
        BigEndian::write_f32(&mut out[k * 4..k * 4 + 4], *value);
    }
    BigEndian::write_f32(&mut out[0x18..0x1C], record.radius);
    out[0x1C..0x22].copy_from_slice(&record.next_sensor);
    out[0x22] = record.scene_index;
    out[0x23] = record.absorption_level;
    out[0x24..SENSOR_FIELDS_SIZE].copy_from_slice(&record.next_boundary_sensor);

    if record.padding.len() == PADDING_SIZE {
        out[SENSOR_FIELDS_SIZE..].copy_from_slice(&record.padding);
    }
    out
}

/// Overlay a partial update on a decoded slot.
///
/// Fields absent from `update` (padding included) keep the on-disk value.
pub fn merge(on_disk: &SensorRecord, update: &SensorUpdate) -> SensorRecord {
    SensorRecord {
        direction_params: update.direction_params.unwrap_or(on_disk.direction_params),
        radius: update.radius.unwrap_or(on_disk.radius),
        next_sensor: update.next_sensor.unwrap_or(on_disk.next_sensor),
        scene_index: update.scene_index.unwrap_or(on_disk.scene_index),
        absorption_level: update.absorption_level.unwrap_or(on_disk.absorption_level),
        next_boundary_sensor: update
            .next_boundary_sensor
            .unwrap_or(on_disk.next_boundary_sensor),
        padding: update
            .padding
            .clone()
            .unwrap_or_else(|| on_disk.padding.clone()),
    }
}
