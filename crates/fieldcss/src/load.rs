//! Shared document loading for field sets and configuration.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Document syntax, chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` selects JSON; everything else (`.yaml`, `.yml`, none) is YAML.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

pub(crate) fn from_yaml<T: DeserializeOwned>(content: &str) -> Result<T, LoadError> {
    serde_yaml::from_str(content).map_err(|source| LoadError::Yaml { path: None, source })
}

pub(crate) fn from_json<T: DeserializeOwned>(content: &str) -> Result<T, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Json { path: None, source })
}

pub(crate) fn from_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match Format::from_path(path) {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
            path: Some(path.to_path_buf()),
            source,
        }),
        Format::Json => serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: Some(path.to_path_buf()),
            source,
        }),
    }
}
