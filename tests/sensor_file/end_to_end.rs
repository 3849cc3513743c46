//! Write a record, read it back, check nothing else moved.

use crate::test_utils::*;
use deformspec::{
    read_all, write_all, EditSession, SensorRecord, SensorUpdate, SpecError, WriteMode,
    MIN_FILE_LEN, NUM_SENSORS, START_OFFSET,
};
use tempfile::TempDir;

#[test]
fn record_three_written_and_read_back() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "spec.dat", &vec![0u8; MIN_FILE_LEN as usize]);

    let mut records = read_all(&path).unwrap();
    records[3].radius = 1.5;
    records[3].direction_params = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    write_all(&path, &records, WriteMode::Merge).unwrap();

    let back = read_all(&path).unwrap();
    assert_eq!(back.len(), NUM_SENSORS);
    assert_eq!(back[3].radius, 1.5);
    assert_eq!(back[3].direction_params, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    for (index, record) in back.iter().enumerate() {
        if index != 3 {
            assert_eq!(*record, SensorRecord::default(), "sensor {index}");
        }
    }
    assert_eq!(std::fs::metadata(&path).unwrap().len(), MIN_FILE_LEN);
}

#[test]
fn session_round_trip_keeps_frame() {
    let dir = TempDir::new().unwrap();
    let path = framed_zero_file(dir.path(), "spec.bin");

    let mut session = EditSession::open(&path).unwrap();
    session
        .stage(19, SensorUpdate::new().with_next_sensor([18, 17, 16, 15, 14, 13]))
        .unwrap();
    session
        .stage(0, SensorUpdate::new().with_absorption_level(255))
        .unwrap();
    assert_eq!(session.commit().unwrap(), 2);

    assert_frame(&std::fs::read(&path).unwrap());
    let back = read_all(&path).unwrap();
    assert_eq!(back[19].next_sensor, [18, 17, 16, 15, 14, 13]);
    assert_eq!(back[0].absorption_level, 255);
}

#[test]
fn truncated_file_returns_no_records() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "short.dat",
        &vec![0u8; START_OFFSET as usize + 10 * 64 + 5],
    );
    match read_all(&path) {
        Err(SpecError::Decode { index, .. }) => assert_eq!(index, 10),
        other => panic!("expected decode failure, got {other:?}"),
    }
}
