//! A single run of one signal level.
//!
//! [`Interval`] is the leaf value of the run-length model: a level plus the
//! number of time units it is held. Intervals are plain `Copy` values; a
//! [`Signal`](crate::Signal) owns them by value.
//!
//! A zero-duration interval is the *placeholder*. It is what
//! [`Interval::default()`] produces and is never created by the validating
//! constructors.

use core::fmt;
use core::ops::Not;
use core::str::FromStr;

use crate::chart::{HIGH_MARK, LOW_MARK, PLACEHOLDER_MARK};
use crate::error::{Result, SignalError, validate_bits};

/// One level held for a number of time units.
///
/// # Example
///
/// ```rust
/// use binsig_core::Interval;
///
/// let mut run = Interval::new(1, 3)?;
/// run.grow(2)?;
/// assert_eq!(run.duration(), 5);
/// assert_eq!(run.render_chart(), "'''''");
/// assert_eq!(run.to_string(), "1 5");
/// # Ok::<(), binsig_core::SignalError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    pub(crate) level: bool,
    pub(crate) duration: u64,
}

impl Interval {
    /// Create an interval from a raw level code (0 or 1) and a positive duration.
    pub fn new(level: i64, duration: u64) -> Result<Self> {
        let level = match level {
            0 => false,
            1 => true,
            other => return Err(SignalError::InvalidLevel(other)),
        };
        Self::with_level(level, duration)
    }

    /// Create an interval from a typed level and a positive duration.
    pub fn with_level(level: bool, duration: u64) -> Result<Self> {
        if duration == 0 {
            return Err(SignalError::NonPositiveDuration);
        }
        Ok(Self { level, duration })
    }

    /// Build an interval from the leading run of a bit string.
    ///
    /// The whole string must be over `{'0', '1'}`, but only the run of the
    /// first character is measured: `"11110010"` yields a high interval of
    /// duration 4 and the rest is ignored.
    ///
    /// An empty string is rejected with [`SignalError::EmptyInput`] rather
    /// than producing a zero-duration placeholder; use
    /// [`Interval::default()`] when a placeholder is wanted.
    pub fn from_uniform_prefix(text: &str) -> Result<Self> {
        validate_bits(text)?;
        let first = text.as_bytes().first().ok_or(SignalError::EmptyInput)?;
        let duration = text.bytes().take_while(|b| b == first).count();
        Ok(Self {
            level: *first == b'1',
            duration: duration as u64,
        })
    }

    /// Build an interval from the leading run of an integer level sequence.
    ///
    /// Non-zero values are high. Like [`from_uniform_prefix`](Self::from_uniform_prefix),
    /// only the run of the first value's level is measured.
    pub fn from_uniform_sequence(values: &[i64]) -> Result<Self> {
        let first = values.first().ok_or(SignalError::EmptyInput)?;
        let level = *first != 0;
        let duration = values.iter().take_while(|&&v| (v != 0) == level).count();
        Ok(Self {
            level,
            duration: duration as u64,
        })
    }

    /// Level of this run (`true` = high).
    #[inline]
    pub fn level(&self) -> bool {
        self.level
    }

    /// Number of time units the level is held.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Whether this is the zero-duration placeholder.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.duration == 0
    }

    /// Flip the level in place.
    pub fn invert(&mut self) {
        self.level = !self.level;
    }

    /// Copy with the level flipped.
    pub fn inverted(&self) -> Self {
        Self {
            level: !self.level,
            duration: self.duration,
        }
    }

    /// Lengthen the run by `amount` units.
    pub fn grow(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Err(SignalError::NonPositiveAmount);
        }
        self.duration = self
            .duration
            .checked_add(amount)
            .ok_or(SignalError::DurationOverflow)?;
        Ok(())
    }

    /// Shorten the run by `amount` units.
    ///
    /// Shrinking by the full duration is allowed and leaves a placeholder.
    pub fn shrink(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Err(SignalError::NonPositiveAmount);
        }
        if amount > self.duration {
            return Err(SignalError::ShrinkTooLarge {
                amount,
                duration: self.duration,
            });
        }
        self.duration -= amount;
        Ok(())
    }

    /// Chart glyph for this run's level.
    pub(crate) fn mark(&self) -> char {
        if self.level { HIGH_MARK } else { LOW_MARK }
    }

    /// Bit character for this run's level.
    pub(crate) fn bit(&self) -> char {
        if self.level { '1' } else { '0' }
    }

    /// Render as `duration` copies of `'` (high) or `.` (low); `x` for a placeholder.
    pub fn render_chart(&self) -> String {
        if self.is_placeholder() {
            return PLACEHOLDER_MARK.to_string();
        }
        core::iter::repeat_n(self.mark(), self.duration as usize).collect()
    }
}

impl Not for Interval {
    type Output = Interval;

    fn not(self) -> Interval {
        self.inverted()
    }
}

/// Formats as `"<level> <duration>"`, e.g. `"1 5"`.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", u8::from(self.level), self.duration)
    }
}

/// Parses `"<level> <duration>"` with any whitespace between the two fields.
impl FromStr for Interval {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || SignalError::MalformedInterval(s.to_string());
        let mut fields = s.split_whitespace();
        let (Some(level), Some(duration), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        let level: i64 = level.parse().map_err(|_| malformed())?;
        let duration: i64 = duration.parse().map_err(|_| malformed())?;
        let duration = u64::try_from(duration).map_err(|_| SignalError::NonPositiveDuration)?;
        Self::new(level, duration)
    }
}
