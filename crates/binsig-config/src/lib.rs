//! Configuration and named patterns for binsig.
//!
//! This crate provides the settings layer used by the `binsig` CLI: default
//! input and output formats, user-defined named patterns, built-in factory
//! patterns, and the platform path of the settings file.
//!
//! # Example
//!
//! ```rust,no_run
//! use binsig_config::{PatternConfig, Settings, settings_path};
//!
//! let mut settings = Settings::load_or_default(settings_path()).unwrap();
//! settings.patterns.push(PatternConfig::new("handshake", "1100110011"));
//! settings.validate().unwrap();
//! settings.save(settings_path()).unwrap();
//!
//! let clock = settings.find_pattern("clock").unwrap().to_signal().unwrap();
//! println!("{}", clock.render_chart());
//! ```

mod error;
mod pattern;
mod settings;

/// Platform-specific paths for the settings file.
pub mod paths;

/// Factory patterns bundled with the library.
pub mod factory_patterns;

pub use error::ConfigError;
pub use factory_patterns::{
    FACTORY_PATTERN_NAMES, factory_patterns, get_factory_pattern, is_factory_pattern,
};
pub use paths::{ensure_user_config_dir, settings_path, user_config_dir};
pub use pattern::PatternConfig;
pub use settings::{InputFormat, OutputFormat, Settings};
