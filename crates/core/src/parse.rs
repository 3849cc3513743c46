//! Text-to-value validation for editable sensor fields
//!
//! Everything a user types goes through here before it becomes part of a
//! [`SensorUpdate`]. Values that would not survive the fixed binary layout
//! (non-numeric text, bytes above 255, lists of the wrong length) are
//! rejected with a [`ValidationError`].

use crate::error::ValidationError;
use crate::record::SensorUpdate;

/// Parse a single float.
pub fn parse_f32(field: &str, text: &str) -> Result<f32, ValidationError> {
    text.trim()
        .parse::<f32>()
        .map_err(|_| ValidationError::InvalidFloat {
            field: field.to_string(),
            value: text.to_string(),
        })
}

/// Parse a single unsigned byte.
pub fn parse_u8(field: &str, text: &str) -> Result<u8, ValidationError> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger {
            field: field.to_string(),
            value: text.to_string(),
        })?;
    u8::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        value,
    })
}

/// Parse a finite multiplier.
pub fn parse_factor(text: &str) -> Result<f32, ValidationError> {
    let value = parse_f32("multiplier", text)?;
    check_factor(value)
}

/// Reject NaN and infinite multipliers.
pub fn check_factor(value: f32) -> Result<f32, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { value })
    }
}

fn split_list(text: &str) -> Vec<&str> {
    text.split(',').map(str::trim).collect()
}

fn check_len(field: &str, expected: usize, actual: usize) -> Result<(), ValidationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ValidationError::WrongLength {
            field: field.to_string(),
            expected,
            actual,
        })
    }
}

/// Parse exactly `N` comma-separated floats.
pub fn parse_f32_array<const N: usize>(field: &str, text: &str) -> Result<[f32; N], ValidationError> {
    let parts = split_list(text);
    check_len(field, N, parts.len())?;
    let mut out = [0.0f32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_f32(field, part)?;
    }
    Ok(out)
}

/// Parse exactly `N` comma-separated unsigned bytes.
pub fn parse_u8_array<const N: usize>(field: &str, text: &str) -> Result<[u8; N], ValidationError> {
    let parts = split_list(text);
    check_len(field, N, parts.len())?;
    let mut out = [0u8; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_u8(field, part)?;
    }
    Ok(out)
}

/// Raw text for each editable field; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorFieldsText {
    /// Six comma-separated floats
    pub direction_params: Option<String>,
    /// One float
    pub radius: Option<String>,
    /// Six comma-separated bytes
    pub next_sensor: Option<String>,
    /// One byte
    pub scene_index: Option<String>,
    /// One byte
    pub absorption_level: Option<String>,
    /// Two comma-separated bytes
    pub next_boundary_sensor: Option<String>,
}

impl SensorUpdate {
    /// Build a partial update from text input, validating every field.
    ///
    /// The first invalid field aborts the whole parse; nothing is staged.
    pub fn parse(text: &SensorFieldsText) -> Result<SensorUpdate, ValidationError> {
        Ok(SensorUpdate {
            direction_params: text
                .direction_params
                .as_deref()
                .map(|t| parse_f32_array::<6>("direction_params", t))
                .transpose()?,
            radius: text
                .radius
                .as_deref()
                .map(|t| parse_f32("radius", t))
                .transpose()?,
            next_sensor: text
                .next_sensor
                .as_deref()
                .map(|t| parse_u8_array::<6>("next_sensor", t))
                .transpose()?,
            scene_index: text
                .scene_index
                .as_deref()
                .map(|t| parse_u8("scene_index", t))
                .transpose()?,
            absorption_level: text
                .absorption_level
                .as_deref()
                .map(|t| parse_u8("absorption_level", t))
                .transpose()?,
            next_boundary_sensor: text
                .next_boundary_sensor
                .as_deref()
                .map(|t| parse_u8_array::<2>("next_boundary_sensor", t))
                .transpose()?,
            padding: None,
        })
    }
}
