//! Run-length encoded binary signal.
//!
//! [`Signal`] is an ordered sequence of [`Interval`]s; index 0 plays first.
//! Neighboring intervals are never merged, so the interval boundaries a
//! caller builds (by concatenation, repetition, or insertion) are preserved.
//!
//! # Edits and failure
//!
//! Every fallible edit validates its arguments and assembles the new interval
//! sequence before replacing the old one. An `Err` therefore always leaves the
//! signal exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use binsig_core::Signal;
//!
//! let mut signal: Signal = "000000".parse()?;
//! signal.insert_signal(&Signal::from_bits("111")?, 2)?;
//! assert_eq!(signal.to_bit_string(), "001110000");
//!
//! signal.remove_signal(2, 3)?;
//! assert_eq!(signal.to_bit_string(), "000000");
//! assert!(!signal.level_at(5)?);
//! # Ok::<(), binsig_core::SignalError>(())
//! ```

use core::fmt;
use core::num::NonZeroU64;
use core::ops::{AddAssign, Index, Mul, MulAssign, Not};
use core::str::FromStr;

use crate::chart::mark_edges;
use crate::error::{Result, SignalError, validate_bits};
use crate::interval::Interval;

/// A binary waveform stored as a sequence of level runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signal {
    intervals: Vec<Interval>,
}

impl Signal {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-interval signal from a raw level code (0 or 1) and a positive duration.
    pub fn from_level_duration(level: i64, time: u64) -> Result<Self> {
        Ok(Self {
            intervals: vec![Interval::new(level, time)?],
        })
    }

    /// Parse a bit string, one interval per maximal run of equal characters.
    ///
    /// The empty string yields the empty signal.
    pub fn from_bits(text: &str) -> Result<Self> {
        validate_bits(text)?;
        Ok(text
            .as_bytes()
            .chunk_by(|a, b| a == b)
            .map(|run| Interval {
                level: run[0] == b'1',
                duration: run.len() as u64,
            })
            .collect())
    }

    /// Build from an integer level sequence (non-zero = high), one interval per run.
    pub fn from_levels(values: &[i64]) -> Result<Self> {
        let mut signal = Self::new();
        let mut rest = values;
        while !rest.is_empty() {
            let run = Interval::from_uniform_sequence(rest)?;
            rest = &rest[run.duration() as usize..];
            signal.append_interval(run)?;
        }
        Ok(signal)
    }

    /// Intervals in temporal order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of stored intervals.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the signal holds no intervals at all.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Empty, or holding only the zero-duration placeholder.
    ///
    /// Both appends replace a vacant receiver instead of extending it.
    pub fn is_vacant(&self) -> bool {
        match self.intervals.as_slice() {
            [] => true,
            [only] => only.is_placeholder(),
            _ => false,
        }
    }

    /// Sum of all interval durations.
    pub fn total_duration(&self) -> u64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    fn visible(&self) -> impl Iterator<Item = Interval> + '_ {
        self.intervals.iter().copied().filter(|r| !r.is_placeholder())
    }

    /// Repeat the interval sequence `n` times in place.
    ///
    /// Runs are not merged across the seam, so `"10" * 3` holds six intervals.
    pub fn repeat(&mut self, n: u64) -> Result<&mut Self> {
        if n == 0 {
            return Err(SignalError::NonPositiveRepeat);
        }
        if self.is_vacant() || n == 1 {
            return Ok(self);
        }
        self.total_duration()
            .checked_mul(n)
            .ok_or(SignalError::DurationOverflow)?;
        let copies = usize::try_from(n).map_err(|_| SignalError::DurationOverflow)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(intervals = self.intervals.len(), n, "signal_repeat");

        self.intervals = self.intervals.repeat(copies);
        Ok(self)
    }

    /// Copy of this signal repeated `n` times.
    pub fn repeated(&self, n: u64) -> Result<Self> {
        let mut result = self.clone();
        result.repeat(n)?;
        Ok(result)
    }

    /// Concatenate `other` after this signal.
    ///
    /// A vacant receiver becomes a copy of `other`. Otherwise `other`'s
    /// intervals are appended verbatim; a placeholder in `other` carries no
    /// time and is skipped.
    pub fn append_signal(&mut self, other: &Signal) -> Result<&mut Self> {
        self.total_duration()
            .checked_add(other.total_duration())
            .ok_or(SignalError::DurationOverflow)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            receiver = self.intervals.len(),
            other = other.intervals.len(),
            "signal_append"
        );

        if self.is_vacant() {
            self.intervals.clone_from(&other.intervals);
        } else {
            self.intervals.extend(other.visible());
        }
        Ok(self)
    }

    /// Append a single interval.
    ///
    /// A vacant receiver is replaced by `[run]`, even when `run` is the
    /// placeholder. Appending a placeholder to a populated signal does nothing.
    pub fn append_interval(&mut self, run: Interval) -> Result<&mut Self> {
        self.total_duration()
            .checked_add(run.duration())
            .ok_or(SignalError::DurationOverflow)?;
        if self.is_vacant() {
            self.intervals.clear();
            self.intervals.push(run);
        } else if !run.is_placeholder() {
            self.intervals.push(run);
        }
        Ok(self)
    }

    /// Level at zero-based offset `time`.
    pub fn level_at(&self, time: u64) -> Result<bool> {
        let mut end = 0u64;
        for run in &self.intervals {
            end += run.duration();
            if end > time {
                return Ok(run.level());
            }
        }
        Err(SignalError::TimeOutOfRange { time, total: end })
    }

    /// Flip every interval's level in place.
    pub fn invert(&mut self) -> &mut Self {
        self.intervals.iter_mut().for_each(Interval::invert);
        self
    }

    /// Copy with every level flipped.
    pub fn inverted(&self) -> Self {
        let mut result = self.clone();
        result.invert();
        result
    }

    /// Canonical `0`/`1` serialization.
    pub fn to_bit_string(&self) -> String {
        let mut out = String::with_capacity(self.total_duration() as usize);
        for run in &self.intervals {
            out.extend(core::iter::repeat_n(run.bit(), run.duration() as usize));
        }
        out
    }

    /// Waveform chart: `'`/`.` runs with `/` and `\` on the edges.
    ///
    /// ```rust
    /// use binsig_core::Signal;
    ///
    /// let signal = Signal::from_bits("10011100")?;
    /// assert_eq!(signal.render_chart(), "'\\../'''\\..");
    /// # Ok::<(), binsig_core::SignalError>(())
    /// ```
    pub fn render_chart(&self) -> String {
        let glyphs: String = self.intervals.iter().map(Interval::render_chart).collect();
        mark_edges(&glyphs)
    }

    /// Splice `other` in at offset `time`, shifting the tail later.
    ///
    /// `time == 0` prepends and `time == total_duration()` appends. An
    /// interval straddling `time` is split in two around `other`.
    pub fn insert_signal(&mut self, other: &Signal, time: u64) -> Result<&mut Self> {
        let total = self.total_duration();
        if time > total {
            return Err(SignalError::TimeOutOfRange { time, total });
        }
        total
            .checked_add(other.total_duration())
            .ok_or(SignalError::DurationOverflow)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(time, total, inserted = other.total_duration(), "signal_insert");

        if time == total {
            return self.append_signal(other);
        }
        if time == 0 {
            let mut result = other.clone();
            result.append_signal(self)?;
            *self = result;
            return Ok(self);
        }

        let mut intervals = Vec::with_capacity(self.intervals.len() + other.intervals.len() + 1);
        let mut start = 0u64;
        for run in self.visible() {
            let end = start + run.duration();
            if end <= time {
                intervals.push(run);
                if end == time {
                    intervals.extend(other.visible());
                }
            } else if start < time {
                intervals.push(Interval {
                    level: run.level(),
                    duration: time - start,
                });
                intervals.extend(other.visible());
                intervals.push(Interval {
                    level: run.level(),
                    duration: end - time,
                });
            } else {
                intervals.push(run);
            }
            start = end;
        }
        self.intervals = intervals;
        Ok(self)
    }

    /// Delete the window `[time, time + duration)` and close the gap.
    ///
    /// Intervals inside the window are dropped; intervals that overlap an
    /// edge keep their surviving part.
    pub fn remove_signal(&mut self, time: u64, duration: u64) -> Result<&mut Self> {
        let total = self.total_duration();
        let window_end = time
            .checked_add(duration)
            .filter(|&end| end <= total)
            .ok_or(SignalError::TimeOutOfRange {
                time: time.saturating_add(duration),
                total,
            })?;
        if duration == 0 {
            return Ok(self);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(time, duration, total, "signal_remove");

        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        let mut start = 0u64;
        for run in self.visible() {
            let end = start + run.duration();
            if end <= time || start >= window_end {
                intervals.push(run);
            } else {
                if start < time {
                    intervals.push(Interval {
                        level: run.level(),
                        duration: time - start,
                    });
                }
                if end > window_end {
                    intervals.push(Interval {
                        level: run.level(),
                        duration: end - window_end,
                    });
                }
            }
            start = end;
        }
        self.intervals = intervals;
        Ok(self)
    }
}

impl From<Interval> for Signal {
    fn from(run: Interval) -> Self {
        Self {
            intervals: vec![run],
        }
    }
}

/// Collects through [`Signal::append_interval`]; panics if the total
/// duration overflows `u64`.
impl FromIterator<Interval> for Signal {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut signal = Signal::new();
        for run in iter {
            signal += run;
        }
        signal
    }
}

/// Formats as the bit string.
impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl FromStr for Signal {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bits(s)
    }
}

/// Concatenation; panics only if the combined duration overflows `u64`.
impl AddAssign<&Signal> for Signal {
    fn add_assign(&mut self, other: &Signal) {
        if let Err(err) = self.append_signal(other) {
            panic!("{err}");
        }
    }
}

impl AddAssign<Interval> for Signal {
    fn add_assign(&mut self, run: Interval) {
        if let Err(err) = self.append_interval(run) {
            panic!("{err}");
        }
    }
}

/// Point query; panics when `time` is past the end, like slice indexing.
/// Use [`Signal::level_at`] for the fallible form.
impl Index<u64> for Signal {
    type Output = bool;

    fn index(&self, time: u64) -> &bool {
        match self.level_at(time) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{err}"),
        }
    }
}

/// In-place repetition; panics only if the repeated duration overflows `u64`.
impl MulAssign<NonZeroU64> for Signal {
    fn mul_assign(&mut self, n: NonZeroU64) {
        if let Err(err) = self.repeat(n.get()) {
            panic!("{err}");
        }
    }
}

impl Mul<NonZeroU64> for &Signal {
    type Output = Signal;

    fn mul(self, n: NonZeroU64) -> Signal {
        let mut result = self.clone();
        result *= n;
        result
    }
}

impl Mul<NonZeroU64> for Signal {
    type Output = Signal;

    fn mul(mut self, n: NonZeroU64) -> Signal {
        self *= n;
        self
    }
}

impl Not for &Signal {
    type Output = Signal;

    fn not(self) -> Signal {
        self.inverted()
    }
}

impl Not for Signal {
    type Output = Signal;

    fn not(mut self) -> Signal {
        self.invert();
        self
    }
}
