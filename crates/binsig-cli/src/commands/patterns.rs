//! Pattern listing and information command.

use super::common::{Context, render};
use binsig_config::{OutputFormat, factory_patterns};
use clap::Args;

#[derive(Args)]
pub struct PatternsArgs {
    /// Show details for a specific pattern
    #[arg(value_name = "NAME")]
    name: Option<String>,
}

pub fn run(ctx: &Context, args: PatternsArgs) -> anyhow::Result<()> {
    if let Some(name) = &args.name {
        let pattern = ctx.settings.find_pattern(name)?;
        let signal = pattern.to_signal()?;

        println!("{}", pattern.name);
        println!("{}", "=".repeat(pattern.name.len()));
        println!();
        if let Some(description) = &pattern.description {
            println!("{description}");
            println!();
        }
        println!("Duration:  {}", signal.total_duration());
        println!("Intervals: {}", signal.interval_count());
        println!();
        print!(
            "{}",
            render(&signal, &[OutputFormat::Bits, OutputFormat::Chart])
        );
        return Ok(());
    }

    println!("Factory Patterns");
    println!("================");
    println!();
    for pattern in factory_patterns() {
        println!(
            "  {:12} {:34} {}",
            pattern.name,
            pattern.bits,
            pattern.description.as_deref().unwrap_or("")
        );
    }

    if !ctx.settings.patterns.is_empty() {
        println!();
        println!("User Patterns");
        println!("=============");
        println!();
        for pattern in &ctx.settings.patterns {
            println!(
                "  {:12} {:34} {}",
                pattern.name,
                pattern.bits,
                pattern.description.as_deref().unwrap_or("")
            );
        }
    }

    println!();
    println!("Use 'binsig patterns <name>' for details, '@<name>' to use one as a SIGNAL.");
    Ok(())
}
