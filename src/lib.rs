//! deformspec: read and edit the sensor block of deformation spec files
//!
//! A deformation spec file carries 20 fixed-stride sensor records starting at
//! byte 0x120. This crate decodes them, lets callers edit them in memory and
//! writes them back without disturbing any other byte of the file.
//!
//! # Example
//!
//! ```no_run
//! use deformspec::{read_all, write_all, apply_scalar_transform, ScalarField, WriteMode};
//!
//! # fn main() -> deformspec::SpecResult<()> {
//! let records = read_all("StreamedDeformationSpec/spec.dat")?;
//! let scaled = apply_scalar_transform(&records, ScalarField::DirectionParams, 1.25)?;
//! write_all("StreamedDeformationSpec/spec.dat", &scaled, WriteMode::Replace)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;

pub use deformspec_core::{check_index, next_index, prev_index, sensor_name, slot_offset};
pub use deformspec_core::parse;
pub use deformspec_engine::{
    apply_scalar_transform, find_spec_files, scale_file, scale_files,
};
pub use deformspec_storage::{decode, encode, merge, read_all, write_all};
