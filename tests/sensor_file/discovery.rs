//! Folder walk plus batch scaling through the facade.

use crate::test_utils::*;
use deformspec::{find_spec_files, read_all, scale_files, EditorConfig, ScalarField};
use tempfile::TempDir;

#[test]
fn walk_finds_exactly_spec_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    framed_zero_file(root, "one/StreamedDeformationSpec/a.dat");
    framed_zero_file(root, "one/StreamedDeformationSpec/a.bin");
    framed_zero_file(root, "two/x/StreamedDeformationSpec/b.Dat");
    framed_zero_file(root, "two/x/StreamedDeformationSpec/b.BIN");
    write(root, "two/x/StreamedDeformationSpec/notes.txt", b"hello");
    framed_zero_file(root, "elsewhere/c.dat");

    let found = find_spec_files(root, &EditorConfig::default()).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(found.len(), 4);
    for expected in ["a.dat", "a.bin", "b.Dat", "b.BIN"] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }

    let report = scale_files(&found, ScalarField::DirectionParams, 3.0).unwrap();
    assert_eq!(report.succeeded, 4);
    for path in &found {
        assert_frame(&std::fs::read(path).unwrap());
        assert!(read_all(path).unwrap().iter().all(|r| r.fields_are_zero()));
    }
}
