//! Shared CLI helpers used across multiple commands.

use anyhow::Context as _;
use binsig_config::{InputFormat, OutputFormat, Settings};
use binsig_core::{Interval, Signal};
use std::io::Read;
use std::path::PathBuf;

/// Effective settings for one invocation: file values with flag overrides applied.
pub struct Context {
    /// Loaded settings (defaults when the file is absent).
    pub settings: Settings,
    /// Where the settings were (or would be) loaded from.
    pub settings_path: PathBuf,
    /// Format of SIGNAL arguments.
    pub input: InputFormat,
    /// Formats to print results in.
    pub output: Vec<OutputFormat>,
}

impl Context {
    /// Load settings from `settings_path` and apply overrides.
    pub fn new(
        settings_path: PathBuf,
        input: Option<InputFormat>,
        output: Vec<OutputFormat>,
    ) -> anyhow::Result<Self> {
        let settings = Settings::load_or_default(&settings_path)
            .with_context(|| format!("loading settings from {}", settings_path.display()))?;
        tracing::debug!(path = %settings_path.display(), patterns = settings.patterns.len(), "settings loaded");

        let input = input.unwrap_or(settings.input);
        let output = if output.is_empty() {
            settings.output.clone()
        } else {
            output
        };
        Ok(Self {
            settings,
            settings_path,
            input,
            output,
        })
    }

    /// Resolve a SIGNAL argument.
    ///
    /// - `@name` looks up a factory or user pattern
    /// - `-` reads the signal text from stdin
    /// - anything else is parsed in the input format
    pub fn load_signal(&self, arg: &str) -> anyhow::Result<Signal> {
        if let Some(name) = arg.strip_prefix('@') {
            let pattern = self.settings.find_pattern(name)?;
            return Ok(pattern.to_signal()?);
        }
        if arg == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading signal from stdin")?;
            return parse_signal(&text, self.input);
        }
        parse_signal(arg, self.input)
    }

    /// Print `signal` in every selected output format.
    pub fn emit(&self, signal: &Signal) {
        print!("{}", render(signal, &self.output));
    }
}

/// Parse signal text in the given input format.
pub fn parse_signal(text: &str, format: InputFormat) -> anyhow::Result<Signal> {
    let text = text.trim();
    let signal = match format {
        InputFormat::Bits => Signal::from_bits(text)?,
        InputFormat::Number => {
            let run: Interval = text.replace(':', " ").parse()?;
            Signal::from(run)
        }
        InputFormat::Levels => {
            let levels = text
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<i64>()
                        .with_context(|| format!("invalid level value '{s}'"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Signal::from_levels(&levels)?
        }
    };
    Ok(signal)
}

/// Render `signal` in each format, one block per format.
///
/// A single format prints bare; several are prefixed with the format name.
pub fn render(signal: &Signal, formats: &[OutputFormat]) -> String {
    let labelled = formats.len() > 1;
    let mut out = String::new();
    for &format in formats {
        match format {
            OutputFormat::Bits | OutputFormat::Chart => {
                let body = if format == OutputFormat::Bits {
                    signal.to_bit_string()
                } else {
                    signal.render_chart()
                };
                if labelled {
                    out.push_str(&format!("{}: {body}\n", format.name()));
                } else {
                    out.push_str(&format!("{body}\n"));
                }
            }
            OutputFormat::Intervals => {
                if labelled {
                    out.push_str("intervals:\n");
                }
                let indent = if labelled { "  " } else { "" };
                for run in signal.intervals() {
                    out.push_str(&format!("{indent}{run}\n"));
                }
            }
        }
    }
    out
}
