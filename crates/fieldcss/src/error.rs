//! Error types for loading field sets and generator configuration.
//!
//! Resolution and serialization never fail: malformed rules degrade to "no CSS
//! emitted for that rule". Only reading and parsing documents can go wrong,
//! and those failures are reported through [`LoadError`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned when a field set or configuration document cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for the expected shape.
    #[error("invalid YAML{}: {source}", location(.path.as_deref()))]
    Yaml {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document is not valid JSON for the expected shape.
    #[error("invalid JSON{}: {source}", location(.path.as_deref()))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the source file path, if the error came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::Io { path, .. } => Some(path),
            LoadError::Yaml { path, .. } | LoadError::Json { path, .. } => path.as_deref(),
        }
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
