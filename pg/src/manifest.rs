//! Playground manifest stored at `.playground/manifest`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PlaygroundError, Result};

/// Reserved metadata directory inside every playground
pub const MANIFEST_DIR: &str = ".playground";

/// Manifest file name inside [`MANIFEST_DIR`]
pub const MANIFEST_FILE: &str = "manifest";

/// Record of how and when a playground was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub template: String,
    pub created: DateTime<Utc>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, template: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            created,
        }
    }

    /// Path of the manifest file for the playground at `directory`
    pub fn path(directory: &Path) -> PathBuf {
        directory.join(MANIFEST_DIR).join(MANIFEST_FILE)
    }

    /// Write the manifest into `directory`, creating the metadata directory
    pub fn write(&self, directory: &Path) -> Result<()> {
        let path = Self::path(directory);
        debug!(?path, "Manifest::write: called");
        fs::create_dir_all(directory.join(MANIFEST_DIR))?;

        let content = serde_yaml::to_string(self).map_err(|source| PlaygroundError::Manifest {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Read the manifest from `directory`.
    ///
    /// Returns `Ok(None)` when no manifest file exists; a file that exists
    /// but cannot be parsed is an error.
    pub fn read(directory: &Path) -> Result<Option<Self>> {
        let path = Self::path(directory);
        debug!(?path, "Manifest::read: called");

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let manifest = serde_yaml::from_str(&content).map_err(|source| PlaygroundError::Manifest { path, source })?;
        Ok(Some(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let created = Utc::now();
        let manifest = Manifest::new("demo", "rust", created);

        manifest.write(temp.path()).unwrap();
        assert!(temp.path().join(".playground/manifest").is_file());

        let loaded = Manifest::read(temp.path()).unwrap().unwrap();
        assert_eq!(loaded, manifest);
        assert_eq!(loaded.created, created);
    }

    #[test]
    fn test_strings_are_verbatim() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::new("yes", "123: {odd} 'quoted'", Utc::now());

        manifest.write(temp.path()).unwrap();

        let loaded = Manifest::read(temp.path()).unwrap().unwrap();
        assert_eq!(loaded.name, "yes");
        assert_eq!(loaded.template, "123: {odd} 'quoted'");
    }

    #[test]
    fn test_missing_manifest_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(Manifest::read(temp.path()).unwrap().is_none());

        fs::create_dir(temp.path().join(MANIFEST_DIR)).unwrap();
        assert!(Manifest::read(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_manifest_is_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(MANIFEST_DIR)).unwrap();
        fs::write(Manifest::path(temp.path()), "name: [unclosed").unwrap();

        let err = Manifest::read(temp.path()).unwrap_err();
        assert!(matches!(err, PlaygroundError::Manifest { .. }));
    }
}
