//! Shared fixtures for the sensor file suite.

use deformspec::{MIN_FILE_LEN, START_OFFSET};
use std::path::{Path, PathBuf};

/// Byte that fills the header and the bytes after the sensor block
pub const FRAME: u8 = 0x5E;

/// Extra bytes after the sensor block
pub const TRAILER: usize = 48;

/// Zeroed sensor block framed by `FRAME` bytes.
pub fn framed_zero_file(dir: &Path, name: &str) -> PathBuf {
    let mut bytes = vec![FRAME; START_OFFSET as usize];
    bytes.resize(MIN_FILE_LEN as usize, 0);
    bytes.resize(MIN_FILE_LEN as usize + TRAILER, FRAME);
    write(dir, name, &bytes)
}

/// File of `len` bytes following a fixed pseudo-random pattern.
pub fn patterned_file(dir: &Path, name: &str, len: usize) -> PathBuf {
    let mut state: u32 = 0x1234_5678;
    let bytes: Vec<u8> = (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    write(dir, name, &bytes)
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Assert header and trailer bytes are still `FRAME`.
pub fn assert_frame(bytes: &[u8]) {
    assert_eq!(bytes.len(), MIN_FILE_LEN as usize + TRAILER);
    assert!(bytes[..START_OFFSET as usize].iter().all(|b| *b == FRAME));
    assert!(bytes[MIN_FILE_LEN as usize..].iter().all(|b| *b == FRAME));
}
