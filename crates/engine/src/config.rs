//! Editor configuration
//!
//! Loaded from a TOML file. Every key is optional; missing keys fall back to
//! the defaults below.
//!
//! ```toml
//! spec_dir_name = "StreamedDeformationSpec"
//! extensions = ["dat", "bin"]
//! follow_links = false
//! precision = 4
//! ```

use std::path::Path;

use deformspec_core::{SpecError, SpecResult};
use serde::{Deserialize, Serialize};

/// Directory name holding deformation spec files
pub const DEFAULT_SPEC_DIR: &str = "StreamedDeformationSpec";

/// File extensions picked up by the directory walk
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["dat", "bin"];

/// Decimal places shown for float fields
pub const DEFAULT_PRECISION: usize = 4;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Exact directory name searched for during a folder walk
    pub spec_dir_name: String,
    /// Accepted file extensions, compared case-insensitively
    pub extensions: Vec<String>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Decimal places for float display
    pub precision: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            spec_dir_name: DEFAULT_SPEC_DIR.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_links: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EditorConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> SpecResult<Self> {
        let config: EditorConfig =
            toml::from_str(text).map_err(|e| SpecError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SpecError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "Loaded editor config");
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> SpecResult<String> {
        toml::to_string_pretty(self).map_err(|e| SpecError::Config(e.to_string()))
    }

    /// Whether `ext` (without the dot) is one of the accepted extensions.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    fn validate(&self) -> SpecResult<()> {
        if self.spec_dir_name.is_empty() {
            return Err(SpecError::Config(
                "spec_dir_name must not be empty".to_string(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(SpecError::Config(
                "extensions must list at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.spec_dir_name, "StreamedDeformationSpec");
        assert_eq!(config.extensions, vec!["dat", "bin"]);
        assert!(!config.follow_links);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            EditorConfig::from_toml_str("").unwrap(),
            EditorConfig::default()
        );
    }

    #[test]
    fn test_partial_toml() {
        let config = EditorConfig::from_toml_str("precision = 2\nextensions = [\"DAT\"]").unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.spec_dir_name, DEFAULT_SPEC_DIR);
        assert!(config.accepts_extension("dat"));
        assert!(!config.accepts_extension("bin"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EditorConfig::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, SpecError::Config(_)));
    }

    #[test]
    fn test_empty_extensions_rejected() {
        assert!(EditorConfig::from_toml_str("extensions = []").is_err());
    }

    #[test]
    fn test_accepts_extension_case_insensitive() {
        let config = EditorConfig::default();
        assert!(config.accepts_extension("BIN"));
        assert!(config.accepts_extension("Dat"));
        assert!(!config.accepts_extension("txt"));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deformspec.toml");
        let config = EditorConfig {
            precision: 6,
            follow_links: true,
            ..EditorConfig::default()
        };
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
        assert_eq!(EditorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(EditorConfig::load(dir.path().join("missing.toml"))
            .unwrap_err()
            .is_io());
    }
}
