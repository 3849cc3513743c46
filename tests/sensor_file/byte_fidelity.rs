//! Byte-level guarantees: idempotence, offsets, padding.

use crate::test_utils::*;
use deformspec::{
    apply_scalar_transform, read_all, slot_offset, write_all, ScalarField, WriteMode,
    MIN_FILE_LEN, PADDING_SIZE, SENSOR_FIELDS_SIZE, SENSOR_STEP,
};
use tempfile::TempDir;

#[test]
fn unmodified_write_back_is_identical() {
    let dir = TempDir::new().unwrap();
    let path = patterned_file(dir.path(), "spec.dat", MIN_FILE_LEN as usize + 300);
    let before = std::fs::read(&path).unwrap();

    let records = read_all(&path).unwrap();
    for mode in [WriteMode::Merge, WriteMode::Replace] {
        write_all(&path, &records, mode).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), before, "{mode:?}");
    }
}

#[test]
fn padding_survives_scaling() {
    let dir = TempDir::new().unwrap();
    let path = patterned_file(dir.path(), "spec.bin", MIN_FILE_LEN as usize);
    let before = std::fs::read(&path).unwrap();

    let records = read_all(&path).unwrap();
    let scaled = apply_scalar_transform(&records, ScalarField::Radius, 1.0).unwrap();
    write_all(&path, &scaled, WriteMode::Replace).unwrap();
    let after = std::fs::read(&path).unwrap();

    for index in 0..records.len() {
        let start = slot_offset(index) as usize + SENSOR_FIELDS_SIZE;
        let end = start + PADDING_SIZE;
        assert_eq!(after[start..end], before[start..end], "padding of {index}");
        assert_eq!(end - slot_offset(index) as usize, SENSOR_STEP);
    }
}

#[test]
fn writes_stay_inside_sensor_block() {
    let dir = TempDir::new().unwrap();
    let path = framed_zero_file(dir.path(), "spec.dat");

    let records = read_all(&path).unwrap();
    let scaled: Vec<_> = records
        .into_iter()
        .map(|mut r| {
            r.direction_params = [7.0; 6];
            r.radius = 7.0;
            r.next_sensor = [0xFF; 6];
            r.padding = vec![0xEE; PADDING_SIZE];
            r
        })
        .collect();
    write_all(&path, &scaled, WriteMode::Replace).unwrap();
    assert_frame(&std::fs::read(&path).unwrap());
}
