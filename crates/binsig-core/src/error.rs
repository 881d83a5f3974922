//! Error type for interval and signal operations.
//!
//! Every failure in this crate is an invalid-argument rejection: the call is
//! refused before any state is touched, so a caller holding a
//! [`Signal`](crate::Signal) after an `Err` still holds exactly what it had before.

use thiserror::Error;

/// Result alias used throughout `binsig-core`.
pub type Result<T> = core::result::Result<T, SignalError>;

/// Reasons an interval or signal operation rejected its arguments.
///
/// All variants belong to a single conceptual kind (invalid argument); the
/// variant names which precondition failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SignalError {
    /// Level was not 0 or 1.
    #[error("invalid argument: level must be 0 or 1, got {0}")]
    InvalidLevel(i64),

    /// A duration that must be positive was zero.
    #[error("invalid argument: duration must be positive")]
    NonPositiveDuration,

    /// A grow/shrink amount was zero.
    #[error("invalid argument: amount must be positive")]
    NonPositiveAmount,

    /// Shrinking by more than the interval holds.
    #[error("invalid argument: cannot shrink duration {duration} by {amount}")]
    ShrinkTooLarge {
        /// Requested reduction.
        amount: u64,
        /// Duration of the interval being shrunk.
        duration: u64,
    },

    /// A time offset or window fell outside the signal.
    #[error("invalid argument: time {time} is out of range for total duration {total}")]
    TimeOutOfRange {
        /// Offending offset (or window end).
        time: u64,
        /// Total duration of the signal at the time of the call.
        total: u64,
    },

    /// A bit string contained something other than '0' or '1'.
    #[error("invalid argument: invalid character {ch:?} at index {index}, expected '0' or '1'")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Byte index of the character in the input.
        index: usize,
    },

    /// Repeat factor was zero.
    #[error("invalid argument: repeat count must be positive")]
    NonPositiveRepeat,

    /// Input that must be non-empty was empty.
    #[error("invalid argument: empty input")]
    EmptyInput,

    /// Text did not have the `"<level> <duration>"` shape.
    #[error("invalid argument: malformed interval {0:?}, expected \"<level> <duration>\"")]
    MalformedInterval(String),

    /// A duration sum exceeded `u64::MAX`.
    #[error("invalid argument: duration overflow")]
    DurationOverflow,
}

/// Check that `text` is a bit string, reporting the first offending character.
pub(crate) fn validate_bits(text: &str) -> Result<()> {
    match text.char_indices().find(|&(_, c)| c != '0' && c != '1') {
        Some((index, ch)) => Err(SignalError::InvalidCharacter { ch, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_invalid_argument_prefix() {
        let errors = [
            SignalError::InvalidLevel(3),
            SignalError::NonPositiveDuration,
            SignalError::NonPositiveAmount,
            SignalError::ShrinkTooLarge {
                amount: 8,
                duration: 5,
            },
            SignalError::TimeOutOfRange { time: 6, total: 6 },
            SignalError::InvalidCharacter { ch: '2', index: 3 },
            SignalError::NonPositiveRepeat,
            SignalError::EmptyInput,
            SignalError::MalformedInterval("x".to_string()),
            SignalError::DurationOverflow,
        ];
        for err in errors {
            let msg = err.to_string();
            assert!(msg.starts_with("invalid argument:"), "got: {msg}");
        }
    }

    #[test]
    fn time_out_of_range_display() {
        let err = SignalError::TimeOutOfRange { time: 6, total: 6 };
        assert_eq!(
            err.to_string(),
            "invalid argument: time 6 is out of range for total duration 6"
        );
    }

    #[test]
    fn validate_bits_reports_first_bad_char() {
        assert_eq!(validate_bits("0101"), Ok(()));
        assert_eq!(validate_bits(""), Ok(()));
        assert_eq!(
            validate_bits("10201"),
            Err(SignalError::InvalidCharacter { ch: '2', index: 2 })
        );
    }
}
