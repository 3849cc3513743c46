//! Error types for deformspec
//!
//! - [`DecodeError`]: a sensor slot could not be decoded (short read)
//! - [`ValidationError`]: caller-supplied text failed to parse before it
//!   reached the codec
//! - [`SpecError`]: crate-wide error carrying the file path it concerns

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the workspace
pub type SpecResult<T> = std::result::Result<T, SpecError>;

/// A sensor slot held fewer bytes than the fixed stride
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("truncated sensor slot: expected {expected} bytes, got {actual}")]
pub struct DecodeError {
    /// Bytes required for one slot
    pub expected: usize,
    /// Bytes actually available
    pub actual: usize,
}

/// Caller-supplied value rejected at the input boundary
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Text is not a floating-point number
    #[error("{field}: '{value}' is not a valid number")]
    InvalidFloat {
        /// Field being parsed
        field: String,
        /// Offending text
        value: String,
    },
    /// Text is not an integer
    #[error("{field}: '{value}' is not a valid integer")]
    InvalidInteger {
        /// Field being parsed
        field: String,
        /// Offending text
        value: String,
    },
    /// Integer does not fit an unsigned byte
    #[error("{field}: {value} is outside 0..=255")]
    OutOfRange {
        /// Field being parsed
        field: String,
        /// Parsed value
        value: i64,
    },
    /// A list field had the wrong number of entries
    #[error("{field}: expected {expected} values, got {actual}")]
    WrongLength {
        /// Field being parsed
        field: String,
        /// Required entry count
        expected: usize,
        /// Supplied entry count
        actual: usize,
    },
    /// Multiplier is NaN or infinite
    #[error("multiplier must be finite, got {value}")]
    NonFinite {
        /// Offending value
        value: f32,
    },
    /// Sensor index outside the slot array
    #[error("sensor index {index} is out of range (0..20)")]
    SensorIndex {
        /// Offending index
        index: usize,
    },
}

/// Crate-wide error
#[derive(Debug, Error)]
pub enum SpecError {
    /// Opening, reading, seeking or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A sensor slot was truncated
    #[error("failed to decode sensor {index} in {}: {source}", .path.display())]
    Decode {
        /// File being decoded
        path: PathBuf,
        /// Slot index
        index: usize,
        /// Underlying decode failure
        #[source]
        source: DecodeError,
    },

    /// File is too short to hold the sensor block; it is never extended
    #[error("{} is {len} bytes, sensor block needs {required}", .path.display())]
    TooSmall {
        /// File checked
        path: PathBuf,
        /// Actual length
        len: u64,
        /// Required length
        required: u64,
    },

    /// Caller input rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Directory traversal failed at the root
    #[error("cannot walk {}: {message}", .path.display())]
    Walk {
        /// Root being walked
        path: PathBuf,
        /// Description of the failure
        message: String,
    },
}

impl SpecError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SpecError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a decode failure with its file and slot.
    pub fn decode(path: impl Into<PathBuf>, index: usize, source: DecodeError) -> Self {
        SpecError::Decode {
            path: path.into(),
            index,
            source,
        }
    }

    /// Whether this is a truncated-slot failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, SpecError::Decode { .. })
    }

    /// Whether this is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self, SpecError::Io { .. })
    }
}
