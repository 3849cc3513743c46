//! Discovery of deformation spec files below a root folder
//!
//! Every directory named exactly [`EditorConfig::spec_dir_name`] below the
//! root contributes the regular files directly inside it whose extension is
//! accepted by the config. Entries that cannot be read are logged and
//! skipped.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use deformspec_core::{SpecError, SpecResult};
use walkdir::WalkDir;

use crate::config::EditorConfig;

/// Find spec files below `root`, sorted, as absolute paths.
pub fn find_spec_files(root: impl AsRef<Path>, config: &EditorConfig) -> SpecResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let root = root.canonicalize().map_err(|e| SpecError::io(root, e))?;
    if !root.is_dir() {
        return Err(SpecError::Walk {
            path: root,
            message: "not a directory".to_string(),
        });
    }

    let dir_name = OsStr::new(&config.spec_dir_name);
    let mut found = Vec::new();
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .follow_links(config.follow_links)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        // A symlinked spec directory counts even when recursion does not follow links
        if entry.file_name() == dir_name && entry.path().is_dir() {
            collect_spec_dir(entry.path(), config, &mut found);
        }
    }

    found.sort();
    found.dedup();
    tracing::debug!(root = %root.display(), count = found.len(), "Found spec files");
    Ok(found)
}

fn collect_spec_dir(dir: &Path, config: &EditorConfig, found: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Skipping unreadable spec directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let accepted = path
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| config.accepts_extension(ext))
            .unwrap_or(false);
        if accepted && path.is_file() {
            found.push(path);
        }
    }
}
