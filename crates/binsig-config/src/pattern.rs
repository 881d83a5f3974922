//! Named bit-string patterns.

use binsig_core::Signal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named signal stored as a bit string.
///
/// # TOML Format
///
/// ```toml
/// [[patterns]]
/// name = "handshake"
/// bits = "1100110011"
/// description = "Two-phase request/ack"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternConfig {
    /// Name used to refer to the pattern (`@name` on the command line).
    pub name: String,

    /// The signal as a `0`/`1` string.
    pub bits: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PatternConfig {
    /// Create a pattern without a description.
    pub fn new(name: impl Into<String>, bits: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bits: bits.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse the bits into a [`Signal`].
    pub fn to_signal(&self) -> Result<Signal, ConfigError> {
        Signal::from_bits(&self.bits).map_err(|e| ConfigError::invalid_pattern(&self.name, e))
    }

    /// Whether the pattern's name matches `name`, ignoring ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
