//! Error types for playground and template operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while managing playgrounds and templates
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("Invalid name: {name:?}")]
    InvalidName { name: String },

    #[error("Playground {name} already exists")]
    PlaygroundExists { name: String },

    #[error("Template {name} already exists")]
    TemplateExists { name: String },

    #[error("Playground {name} does not exist")]
    PlaygroundNotFound { name: String },

    #[error("Template {name} not found")]
    TemplateNotFound { name: String },

    #[error("Failed to parse manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl PlaygroundError {
    /// Check if this error means the target playground or template is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlaygroundError::PlaygroundNotFound { .. } | PlaygroundError::TemplateNotFound { .. }
        )
    }

    /// Check if this error means the creation target is already present
    pub fn is_exists(&self) -> bool {
        matches!(
            self,
            PlaygroundError::PlaygroundExists { .. } | PlaygroundError::TemplateExists { .. }
        )
    }
}

/// Result alias for playground operations
pub type Result<T, E = PlaygroundError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds() {
        assert!(PlaygroundError::PlaygroundNotFound { name: "demo".into() }.is_not_found());
        assert!(PlaygroundError::TemplateNotFound { name: "base".into() }.is_not_found());
        assert!(!PlaygroundError::PlaygroundExists { name: "demo".into() }.is_not_found());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!PlaygroundError::from(io).is_not_found());
    }

    #[test]
    fn test_exists_kinds() {
        assert!(PlaygroundError::PlaygroundExists { name: "demo".into() }.is_exists());
        assert!(PlaygroundError::TemplateExists { name: "base".into() }.is_exists());
        assert!(!PlaygroundError::InvalidName { name: ".x".into() }.is_exists());
    }

    #[test]
    fn test_messages_name_the_target() {
        let msg = PlaygroundError::TemplateNotFound { name: "rust".into() }.to_string();
        assert!(msg.contains("rust"));

        let msg = PlaygroundError::InvalidName { name: "a/b".into() }.to_string();
        assert!(msg.contains("a/b"));
    }
}
