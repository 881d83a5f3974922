//! Settings file management command.

use super::common::Context;
use anyhow::Context as _;
use binsig_config::{Settings, ensure_user_config_dir, settings_path};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective settings as TOML
    Show,

    /// Print the settings file path
    Path,

    /// Check user patterns for errors
    Check,
}

/// Run a config subcommand.
///
/// `init` and `path` only need `path`; `show` and `check` parse the file
/// through `load`.
pub fn run(
    path: &Path,
    load: impl FnOnce() -> anyhow::Result<Context>,
    args: ConfigArgs,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            if path == settings_path() {
                ensure_user_config_dir()?;
            }
            Settings::default()
                .save(path)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "settings written");
            println!("Wrote {}", path.display());
        }

        ConfigCommand::Show => {
            let ctx = load()?;
            let mut effective = ctx.settings;
            effective.input = ctx.input;
            effective.output = ctx.output;
            print!("{}", effective.to_toml()?);
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
        }

        ConfigCommand::Check => {
            let ctx = load()?;
            ctx.settings.validate()?;
            println!(
                "{}: {} user pattern(s) OK",
                ctx.settings_path.display(),
                ctx.settings.patterns.len()
            );
        }
    }
    Ok(())
}
