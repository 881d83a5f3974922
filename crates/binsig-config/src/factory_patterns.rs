//! Factory patterns bundled with the binsig library.
//!
//! These named signals are always available without a settings file and
//! take precedence over user patterns of the same name.

use crate::PatternConfig;

/// Array of factory pattern names for external access.
pub static FACTORY_PATTERN_NAMES: &[&str] = &[
    "clock",
    "clock_slow",
    "strobe",
    "preamble",
    "sync",
    "burst",
    "idle_high",
    "idle_low",
];

/// Name, bits, and description of each factory pattern.
static FACTORY_PATTERNS: &[(&str, &str, &str)] = &[
    ("clock", "10101010", "Square wave, period 2"),
    ("clock_slow", "1100110011001100", "Square wave, period 4"),
    ("strobe", "10000000", "One-unit pulse every 8 units"),
    (
        "preamble",
        "10101010101010101010101010101011",
        "Alternating preamble ending in a double-high start marker",
    ),
    ("sync", "111100001111", "Long high, long low, long high"),
    ("burst", "0000101010100000", "Four pulses framed by idle low"),
    ("idle_high", "11111111", "Line held high"),
    ("idle_low", "00000000", "Line held low"),
];

/// Get all factory patterns.
pub fn factory_patterns() -> Vec<PatternConfig> {
    FACTORY_PATTERNS
        .iter()
        .map(|(name, bits, description)| {
            PatternConfig::new(*name, *bits).with_description(*description)
        })
        .collect()
}

/// Get a factory pattern by name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use binsig_config::get_factory_pattern;
///
/// let clock = get_factory_pattern("Clock").unwrap();
/// assert_eq!(clock.bits, "10101010");
/// ```
pub fn get_factory_pattern(name: &str) -> Option<PatternConfig> {
    factory_patterns().into_iter().find(|p| p.matches(name))
}

/// Check if a name refers to a factory pattern (case-insensitive).
pub fn is_factory_pattern(name: &str) -> bool {
    FACTORY_PATTERN_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name))
}
