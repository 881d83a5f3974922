//! binsig Core - run-length encoded binary signals
//!
//! A binary signal is a waveform that is either high or low at every time
//! unit. This crate stores it as a sequence of level runs and provides the
//! editing, query, and serialization operations on top of that model.
//!
//! # Core Abstractions
//!
//! - [`Interval`] - One level held for a positive number of time units
//! - [`Signal`] - Ordered sequence of intervals; owns every edit and query
//! - [`SignalError`] - Invalid-argument failures, one variant per precondition
//!
//! ## Edits
//!
//! - [`Signal::repeat`] / `signal *= n` - Repeat the whole sequence
//! - [`Signal::append_signal`] / `signal += &other` - Concatenate
//! - [`Signal::insert_signal`] - Splice another signal in at an offset
//! - [`Signal::remove_signal`] - Cut a time window out
//! - [`Signal::invert`] / `!signal` - Flip every level
//!
//! ## Formats
//!
//! - Bit string: `"10011100"`, lossless, via [`Signal::to_bit_string`] and
//!   [`Signal::from_bits`] (also `Display` / `FromStr`)
//! - Chart: `'\../'''\..`, output only, via [`Signal::render_chart`]
//!   (see [`chart`] for the glyphs)
//! - Interval pair: `"1 5"`, via `Display` / `FromStr` on [`Interval`]
//!
//! # Example
//!
//! ```rust
//! use binsig_core::{Interval, Signal};
//!
//! let mut signal = Signal::from_bits("1001")?;
//! signal += Interval::new(1, 2)?;
//! signal.repeat(2)?;
//! assert_eq!(signal.to_bit_string(), "100111100111");
//! assert!(signal.level_at(3)?);
//! # Ok::<(), binsig_core::SignalError>(())
//! ```
//!
//! # Features
//!
//! - `tracing` - Emit `tracing::debug!` events from the structural edits

pub mod chart;
pub mod error;
pub mod interval;
pub mod signal;

pub use error::{Result, SignalError};
pub use interval::Interval;
pub use signal::Signal;
