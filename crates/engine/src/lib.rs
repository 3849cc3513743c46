//! Engine layer for deformspec
//!
//! Builds on the storage codec to provide:
//! - Scalar transforms over sensor fields
//! - An editing session with pending edits, reset and commit
//! - Batch scaling over many files with per-file failure reporting
//! - Discovery of spec files below a folder
//! - Editor configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod session;
pub mod transform;
pub mod walk;

pub use batch::{scale_file, scale_files, BatchFailure, BatchReport};
pub use config::EditorConfig;
pub use session::EditSession;
pub use transform::{apply_scalar_transform, scale_record, ScalarField};
pub use walk::find_spec_files;
