//! Uses only what an external caller sees through `deformspec`.

use deformspec::{
    find_spec_files, read_all, scale_files, EditSession, EditorConfig, ScalarField,
    SensorFieldsText, SpecError, ValidationError, MIN_FILE_LEN, NUM_SENSORS, SENSOR_POSITIONS,
};
use tempfile::TempDir;

fn spec_file(dir: &std::path::Path, rel: &str) -> std::path::PathBuf {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, vec![0u8; MIN_FILE_LEN as usize]).unwrap();
    path
}

#[test]
fn positions_are_index_aligned() {
    assert_eq!(SENSOR_POSITIONS.len(), NUM_SENSORS);
    assert_eq!(SENSOR_POSITIONS[0], "Roof Upper Left");
    assert_eq!(SENSOR_POSITIONS[NUM_SENSORS - 1], "Rear Upper Left");
}

#[test]
fn text_edit_through_session() {
    let dir = TempDir::new().unwrap();
    let path = spec_file(dir.path(), "spec.dat");

    let mut session = EditSession::open(&path).unwrap();
    let text = SensorFieldsText {
        direction_params: Some("1, 2, 3, 4, 5, 6".to_string()),
        radius: Some("1.5".to_string()),
        ..Default::default()
    };
    session.stage_text(3, &text).unwrap();
    session.commit().unwrap();

    let records = read_all(&path).unwrap();
    assert_eq!(records[3].direction_params, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(records[3].radius, 1.5);
}

#[test]
fn invalid_text_never_reaches_file() {
    let dir = TempDir::new().unwrap();
    let path = spec_file(dir.path(), "spec.dat");
    let before = std::fs::read(&path).unwrap();

    let mut session = EditSession::open(&path).unwrap();
    let text = SensorFieldsText {
        next_sensor: Some("1,2,3".to_string()),
        ..Default::default()
    };
    let err = session.stage_text(0, &text).unwrap_err();
    assert!(matches!(
        err,
        SpecError::Validation(ValidationError::WrongLength { expected: 6, actual: 3, .. })
    ));
    session.commit().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn folder_batch() {
    let dir = TempDir::new().unwrap();
    spec_file(dir.path(), "VEH_A/StreamedDeformationSpec/a.dat");
    spec_file(dir.path(), "VEH_B/StreamedDeformationSpec/b.bin");

    let files = find_spec_files(dir.path(), &EditorConfig::default()).unwrap();
    let report = scale_files(&files, ScalarField::DirectionParams, 2.0).unwrap();
    assert_eq!(report.processed, 2);
    assert!(report.is_clean());
}
