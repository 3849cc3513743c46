//! Core types for deformspec
//!
//! This crate defines the shared vocabulary of the workspace:
//! - Layout: slot offsets, stride and sensor position names
//! - SensorRecord / SensorUpdate: decoded slots and partial edits
//! - Errors: DecodeError, ValidationError, SpecError
//! - Parse: text validation at the input boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod layout;
pub mod parse;
pub mod record;

pub use error::{DecodeError, SpecError, SpecResult, ValidationError};
pub use layout::{
    check_index, next_index, prev_index, sensor_name, slot_offset, MIN_FILE_LEN, NUM_SENSORS,
    PADDING_SIZE, SENSOR_BLOCK_SIZE, SENSOR_FIELDS_SIZE, SENSOR_POSITIONS, SENSOR_STEP,
    START_OFFSET,
};
pub use parse::SensorFieldsText;
pub use record::{SensorRecord, SensorUpdate};
