//! Batch scaling across many files
//!
//! Each file is read, transformed and rewritten before the next one is
//! opened. A failure aborts only the file it happened in; the run moves on
//! and the failure is recorded in the [`BatchReport`].

use std::path::{Path, PathBuf};

use deformspec_core::{parse::check_factor, SpecError, SpecResult};
use deformspec_storage::{SensorFile, WriteMode};

use crate::transform::{apply_scalar_transform, ScalarField};

/// A file the batch could not process
#[derive(Debug)]
pub struct BatchFailure {
    /// File that failed
    pub path: PathBuf,
    /// Why it failed
    pub error: SpecError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files attempted
    pub processed: usize,
    /// Files rewritten successfully
    pub succeeded: usize,
    /// Files that failed, in processing order
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of failed files
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every file succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Scale `field` by `factor` in every file of `paths`.
///
/// Returns an error only for an invalid factor; per-file failures are
/// collected in the report.
pub fn scale_files<P: AsRef<Path>>(
    paths: &[P],
    field: ScalarField,
    factor: f32,
) -> SpecResult<BatchReport> {
    let factor = check_factor(factor)?;
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        report.processed += 1;
        match scale_file(path, field, factor) {
            Ok(()) => report.succeeded += 1,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    field = field.name(),
                    error = %error,
                    "Batch scaling failed"
                );
                report.failures.push(BatchFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        processed = report.processed,
        succeeded = report.succeeded,
        failed = report.failed(),
        "Batch scaling complete"
    );
    Ok(report)
}

/// Scale `field` by `factor` in one file.
pub fn scale_file(path: &Path, field: ScalarField, factor: f32) -> SpecResult<()> {
    let file = SensorFile::new(path);
    let records = file.read_all()?;
    let scaled = apply_scalar_transform(&records, field, factor)?;
    file.write_all(&scaled, WriteMode::Replace)
}
