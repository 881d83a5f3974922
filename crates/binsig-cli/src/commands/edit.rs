//! Signal editing commands.
//!
//! Each command loads its SIGNAL arguments, applies one core operation, and
//! prints the result in the selected output formats.

use super::common::Context;
use anyhow::Context as _;
use clap::Args;
use std::num::NonZeroU64;

#[derive(Args)]
pub struct ShowArgs {
    /// Signal to print (literal, @pattern, or - for stdin)
    #[arg(value_name = "SIGNAL")]
    signal: String,
}

#[derive(Args)]
pub struct RepeatArgs {
    /// Signal to repeat
    #[arg(value_name = "SIGNAL")]
    signal: String,

    /// Number of repetitions (at least 1)
    #[arg(value_name = "N")]
    count: NonZeroU64,
}

#[derive(Args)]
pub struct AppendArgs {
    /// First signal
    #[arg(value_name = "SIGNAL")]
    signal: String,

    /// Signals appended in order
    #[arg(value_name = "OTHER", required = true)]
    others: Vec<String>,
}

#[derive(Args)]
pub struct InsertArgs {
    /// Signal to insert into
    #[arg(value_name = "SIGNAL")]
    signal: String,

    /// Signal to insert
    #[arg(value_name = "OTHER")]
    other: String,

    /// Time offset of the insertion point
    #[arg(long, value_name = "T")]
    at: u64,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Signal to cut
    #[arg(value_name = "SIGNAL")]
    signal: String,

    /// Start of the removed window
    #[arg(long, value_name = "T")]
    at: u64,

    /// Length of the removed window
    #[arg(long, value_name = "D")]
    duration: u64,
}

#[derive(Args)]
pub struct InvertArgs {
    /// Signal to invert
    #[arg(value_name = "SIGNAL")]
    signal: String,
}

pub fn show(ctx: &Context, args: ShowArgs) -> anyhow::Result<()> {
    let signal = ctx.load_signal(&args.signal)?;
    ctx.emit(&signal);
    Ok(())
}

pub fn repeat(ctx: &Context, args: RepeatArgs) -> anyhow::Result<()> {
    let mut signal = ctx.load_signal(&args.signal)?;
    signal
        .repeat(args.count.get())
        .with_context(|| format!("repeating {} times", args.count))?;
    ctx.emit(&signal);
    Ok(())
}

pub fn append(ctx: &Context, args: AppendArgs) -> anyhow::Result<()> {
    let mut signal = ctx.load_signal(&args.signal)?;
    for other in &args.others {
        signal
            .append_signal(&ctx.load_signal(other)?)
            .with_context(|| format!("appending {other}"))?;
    }
    ctx.emit(&signal);
    Ok(())
}

pub fn insert(ctx: &Context, args: InsertArgs) -> anyhow::Result<()> {
    let mut signal = ctx.load_signal(&args.signal)?;
    let other = ctx.load_signal(&args.other)?;
    signal
        .insert_signal(&other, args.at)
        .with_context(|| format!("inserting at {}", args.at))?;
    ctx.emit(&signal);
    Ok(())
}

pub fn remove(ctx: &Context, args: RemoveArgs) -> anyhow::Result<()> {
    let mut signal = ctx.load_signal(&args.signal)?;
    signal
        .remove_signal(args.at, args.duration)
        .with_context(|| format!("removing window ({}, {})", args.at, args.duration))?;
    ctx.emit(&signal);
    Ok(())
}

pub fn invert(ctx: &Context, args: InvertArgs) -> anyhow::Result<()> {
    let mut signal = ctx.load_signal(&args.signal)?;
    signal.invert();
    ctx.emit(&signal);
    Ok(())
}
