//! Point query command.

use super::common::Context;
use anyhow::Context as _;
use clap::Args;

#[derive(Args)]
pub struct LevelArgs {
    /// Signal to query
    #[arg(value_name = "SIGNAL")]
    signal: String,

    /// Zero-based time offset
    #[arg(value_name = "TIME")]
    time: u64,
}

pub fn run(ctx: &Context, args: LevelArgs) -> anyhow::Result<()> {
    let signal = ctx.load_signal(&args.signal)?;
    let level = signal
        .level_at(args.time)
        .with_context(|| format!("querying level at {}", args.time))?;
    println!("{}", u8::from(level));
    Ok(())
}
