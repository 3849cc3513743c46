//! Fixed layout of the sensor block inside a deformation spec file
//!
//! The file starts with a header that is never touched, followed by
//! [`NUM_SENSORS`] slots of [`SENSOR_STEP`] bytes each.
//!
//! ```text
//! [0x000, 0x120)   header
//! 0x120 + i*0x40   slot i: 38 field bytes, 26 padding bytes
//! ```

use crate::error::ValidationError;

/// Byte offset of the first sensor slot
pub const START_OFFSET: u64 = 0x120;

/// Stride between consecutive sensor slots
pub const SENSOR_STEP: usize = 0x40;

/// Number of sensor slots in every file
pub const NUM_SENSORS: usize = 20;

/// Bytes occupied by the structured fields at the start of each slot
pub const SENSOR_FIELDS_SIZE: usize = 38;

/// Opaque bytes trailing the structured fields in each slot
pub const PADDING_SIZE: usize = SENSOR_STEP - SENSOR_FIELDS_SIZE;

/// Total size of the sensor block
pub const SENSOR_BLOCK_SIZE: usize = NUM_SENSORS * SENSOR_STEP;

/// Smallest file length that holds the full sensor block
pub const MIN_FILE_LEN: u64 = START_OFFSET + SENSOR_BLOCK_SIZE as u64;

/// Human-readable sensor positions, index-aligned with the slot array
pub const SENSOR_POSITIONS: [&str; NUM_SENSORS] = [
    "Roof Upper Left",
    "Roof Upper Right",
    "Roof Lower Right",
    "Roof Lower Left",
    "Front Lower Right",
    "Front Upper Right",
    "Front Lower Middle",
    "Front Upper Middle",
    "Front Lower Left",
    "Front Upper Left",
    "Door Rear Left",
    "Door Front Left",
    "Door Rear Right",
    "Door Front Right",
    "Rear Lower Right",
    "Rear Upper Right",
    "Rear Lower Middle",
    "Rear Upper Middle",
    "Rear Lower Left",
    "Rear Upper Left",
];

/// Absolute file offset of slot `index`.
///
/// Callers are expected to pass an index below [`NUM_SENSORS`].
#[inline]
pub fn slot_offset(index: usize) -> u64 {
    START_OFFSET + (index * SENSOR_STEP) as u64
}

/// Position name for a sensor index, if it is in range.
pub fn sensor_name(index: usize) -> Option<&'static str> {
    SENSOR_POSITIONS.get(index).copied()
}

/// Validate a sensor index.
pub fn check_index(index: usize) -> Result<usize, ValidationError> {
    if index < NUM_SENSORS {
        Ok(index)
    } else {
        Err(ValidationError::SensorIndex { index })
    }
}

/// Next sensor index, wrapping past the last slot.
pub fn next_index(index: usize) -> usize {
    (index + 1) % NUM_SENSORS
}

/// Previous sensor index, wrapping before the first slot.
pub fn prev_index(index: usize) -> usize {
    (index % NUM_SENSORS + NUM_SENSORS - 1) % NUM_SENSORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(PADDING_SIZE, 26);
        assert_eq!(SENSOR_BLOCK_SIZE, 1280);
        assert_eq!(MIN_FILE_LEN, 0x120 + 1280);
    }

    #[test]
    fn test_slot_offsets() {
        assert_eq!(slot_offset(0), 0x120);
        assert_eq!(slot_offset(1), 0x160);
        assert_eq!(slot_offset(19), 0x120 + 19 * 0x40);
        assert_eq!(slot_offset(19) + SENSOR_STEP as u64, MIN_FILE_LEN);
    }

    #[test]
    fn test_sensor_names() {
        assert_eq!(sensor_name(0), Some("Roof Upper Left"));
        assert_eq!(sensor_name(13), Some("Door Front Right"));
        assert_eq!(sensor_name(19), Some("Rear Upper Left"));
        assert_eq!(sensor_name(20), None);
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(7), Ok(7));
        assert_eq!(
            check_index(20),
            Err(ValidationError::SensorIndex { index: 20 })
        );
    }

    #[test]
    fn test_navigation_wraps() {
        assert_eq!(next_index(0), 1);
        assert_eq!(next_index(19), 0);
        assert_eq!(prev_index(0), 19);
        assert_eq!(prev_index(5), 4);
    }
}
