//! Public types for the deformspec API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Records and edits
// ============================================================================

pub use deformspec_core::{SensorFieldsText, SensorRecord, SensorUpdate};

// ============================================================================
// Errors
// ============================================================================

pub use deformspec_core::{DecodeError, SpecError, SpecResult, ValidationError};

// ============================================================================
// Layout
// ============================================================================

pub use deformspec_core::{
    MIN_FILE_LEN, NUM_SENSORS, PADDING_SIZE, SENSOR_BLOCK_SIZE, SENSOR_FIELDS_SIZE,
    SENSOR_POSITIONS, SENSOR_STEP, START_OFFSET,
};

// ============================================================================
// File access, transforms and sessions
// ============================================================================

pub use deformspec_storage::{SensorFile, WriteMode};
pub use deformspec_engine::{BatchFailure, BatchReport, EditSession, EditorConfig, ScalarField};
