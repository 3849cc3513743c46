//! Scalar field transforms
//!
//! Multiplies one float field of every record by a factor. Used the same way
//! for a single open file and for every file in a batch.

use deformspec_core::{parse::check_factor, SensorRecord, ValidationError};
use serde::{Deserialize, Serialize};

/// Float field a scalar transform applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    /// All six direction parameters
    #[default]
    DirectionParams,
    /// The radius
    Radius,
}

impl ScalarField {
    /// Mutable view of the selected components of `record`.
    pub fn components_mut<'a>(&self, record: &'a mut SensorRecord) -> &'a mut [f32] {
        match self {
            ScalarField::DirectionParams => &mut record.direction_params,
            ScalarField::Radius => std::slice::from_mut(&mut record.radius),
        }
    }

    /// Stable name used in logs and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ScalarField::DirectionParams => "direction_params",
            ScalarField::Radius => "radius",
        }
    }
}

/// Scale `field` of one record in place.
pub fn scale_record(record: &mut SensorRecord, field: ScalarField, factor: f32) {
    for value in field.components_mut(record) {
        *value *= factor;
    }
}

/// Return a copy of `records` with `field` multiplied by `factor`.
///
/// Every other field, padding included, is copied unchanged. The factor must
/// be finite.
pub fn apply_scalar_transform(
    records: &[SensorRecord],
    field: ScalarField,
    factor: f32,
) -> Result<Vec<SensorRecord>, ValidationError> {
    let factor = check_factor(factor)?;
    Ok(records
        .iter()
        .cloned()
        .map(|mut record| {
            scale_record(&mut record, field, factor);
            record
        })
        .collect())
}
