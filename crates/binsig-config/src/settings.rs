//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_patterns::{get_factory_pattern, is_factory_pattern};
use crate::pattern::PatternConfig;

/// How signal arguments are written on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// A `0`/`1` string, e.g. `10011100`.
    #[default]
    Bits,
    /// A single `"<level> <duration>"` pair, e.g. `1 5`.
    Number,
    /// Integer levels separated by commas or whitespace (non-zero = high).
    Levels,
}

/// How signals are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The canonical bit string.
    Bits,
    /// The waveform chart.
    Chart,
    /// One `"<level> <duration>"` line per interval.
    Intervals,
}

impl OutputFormat {
    /// Lowercase name as used in the settings file and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Bits => "bits",
            OutputFormat::Chart => "chart",
            OutputFormat::Intervals => "intervals",
        }
    }
}

/// User settings for the binsig CLI.
///
/// # TOML Format
///
/// ```toml
/// input = "bits"
/// output = ["bits", "chart"]
///
/// [[patterns]]
/// name = "handshake"
/// bits = "1100110011"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Default input format for signal arguments.
    #[serde(default)]
    pub input: InputFormat,

    /// Default output formats, printed in order.
    #[serde(default = "default_output")]
    pub output: Vec<OutputFormat>,

    /// User-defined named patterns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<PatternConfig>,
}

fn default_output() -> Vec<OutputFormat> {
    vec![OutputFormat::Bits, OutputFormat::Chart]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputFormat::default(),
            output: default_output(),
            patterns: Vec::new(),
        }
    }
}

impl Settings {
    /// Add a user pattern.
    pub fn with_pattern(mut self, pattern: PatternConfig) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Find a pattern by name: factory patterns first, then user patterns.
    pub fn find_pattern(&self, name: &str) -> Result<PatternConfig, ConfigError> {
        get_factory_pattern(name)
            .or_else(|| self.patterns.iter().find(|p| p.matches(name)).cloned())
            .ok_or_else(|| ConfigError::PatternNotFound(name.to_string()))
    }

    /// Check user patterns for empty or clashing names and invalid bits.
    ///
    /// A user pattern named like a factory pattern counts as a clash, since
    /// factory patterns win lookups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for pattern in &self.patterns {
            if pattern.name.trim().is_empty() {
                return Err(ConfigError::invalid_pattern(
                    pattern.name.clone(),
                    binsig_core::SignalError::EmptyInput,
                ));
            }
            if is_factory_pattern(&pattern.name) || !seen.insert(pattern.name.to_lowercase()) {
                return Err(ConfigError::DuplicatePattern(pattern.name.clone()));
            }
            pattern.to_signal()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input, InputFormat::Bits);
        assert_eq!(settings.output, vec![OutputFormat::Bits, OutputFormat::Chart]);
        assert!(settings.patterns.is_empty());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn parses_full_toml() {
        let settings = Settings::from_toml(
            r#"
input = "levels"
output = ["intervals"]

[[patterns]]
name = "handshake"
bits = "1100110011"
description = "req/ack"
"#,
        )
        .unwrap();
        assert_eq!(settings.input, InputFormat::Levels);
        assert_eq!(settings.output, vec![OutputFormat::Intervals]);
        assert_eq!(settings.patterns.len(), 1);
        assert_eq!(settings.patterns[0].description.as_deref(), Some("req/ack"));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Settings::from_toml(r#"input = "hex""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let settings = Settings::default().with_pattern(PatternConfig::new("p", "0110"));
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn find_pattern_prefers_factory() {
        let settings = Settings::default()
            .with_pattern(PatternConfig::new("clock", "1"))
            .with_pattern(PatternConfig::new("mine", "0011"));
        assert_eq!(settings.find_pattern("clock").unwrap().bits, "10101010");
        assert_eq!(settings.find_pattern("MINE").unwrap().bits, "0011");
        assert!(matches!(
            settings.find_pattern("nope"),
            Err(ConfigError::PatternNotFound(_))
        ));
    }

    #[test]
    fn validate_accepts_good_patterns() {
        let settings = Settings::default()
            .with_pattern(PatternConfig::new("a", "01"))
            .with_pattern(PatternConfig::new("b", "10"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicates_and_factory_clash() {
        let dup = Settings::default()
            .with_pattern(PatternConfig::new("a", "01"))
            .with_pattern(PatternConfig::new("A", "10"));
        assert!(matches!(dup.validate(), Err(ConfigError::DuplicatePattern(_))));

        let clash = Settings::default().with_pattern(PatternConfig::new("strobe", "1"));
        assert!(matches!(clash.validate(), Err(ConfigError::DuplicatePattern(_))));
    }

    #[test]
    fn validate_rejects_bad_bits_and_empty_name() {
        let bad = Settings::default().with_pattern(PatternConfig::new("bad", "012"));
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidPattern { .. })));

        let unnamed = Settings::default().with_pattern(PatternConfig::new(" ", "01"));
        assert!(matches!(unnamed.validate(), Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn output_format_names() {
        assert_eq!(OutputFormat::Bits.name(), "bits");
        assert_eq!(OutputFormat::Chart.name(), "chart");
        assert_eq!(OutputFormat::Intervals.name(), "intervals");
    }
}
