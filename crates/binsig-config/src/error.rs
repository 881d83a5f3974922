//! Errors raised while reading, writing, or resolving binsig settings.

use binsig_core::SignalError;
use std::path::PathBuf;
use thiserror::Error;

/// Settings and pattern failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("cannot read settings '{path}': {source}")]
    ReadFile {
        /// Settings file path.
        path: PathBuf,
        /// I/O failure reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("cannot write settings '{path}': {source}")]
    WriteFile {
        /// Settings file path.
        path: PathBuf,
        /// I/O failure reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Pattern not found
    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    /// Two user patterns share a name
    #[error("duplicate pattern name: {0}")]
    DuplicatePattern(String),

    /// Pattern bits are not a valid signal
    #[error("invalid pattern '{name}': {source}")]
    InvalidPattern {
        /// Name of the offending pattern.
        name: String,
        /// Why the bits were rejected.
        #[source]
        source: SignalError,
    },

    /// The settings directory could not be created.
    #[error("cannot create settings directory '{path}': {source}")]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// I/O failure reported by the filesystem.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Wrap the core rejection of a pattern's bits.
    pub fn invalid_pattern(name: impl Into<String>, source: SignalError) -> Self {
        Self::InvalidPattern {
            name: name.into(),
            source,
        }
    }
}
