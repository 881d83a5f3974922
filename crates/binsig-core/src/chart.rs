//! Waveform chart rendering.
//!
//! A chart is one character per time unit (`'` high, `.` low, `x` for a
//! placeholder run) with an edge marker between neighbors that differ:
//!
//! ```text
//! 10011100  ->  '\../'''\..
//! ```
//!
//! Markers are chosen by comparing the two glyphs' character codes, not
//! their levels: `\` when the left glyph sorts lower, `/` when it sorts
//! higher. With `'` < `.` < `x` this gives `/` on rising edges and `\` on
//! falling edges, and also puts a marker on either side of a placeholder.

/// Glyph for one unit of high level.
pub const HIGH_MARK: char = '\'';

/// Glyph for one unit of low level.
pub const LOW_MARK: char = '.';

/// Glyph for a zero-duration placeholder run.
pub const PLACEHOLDER_MARK: char = 'x';

/// Marker for a rising edge.
pub const RISING_EDGE: char = '/';

/// Marker for a falling edge.
pub const FALLING_EDGE: char = '\\';

/// Insert edge markers between adjacent glyphs of `glyphs`.
pub fn mark_edges(glyphs: &str) -> String {
    let mut out = String::with_capacity(glyphs.len() * 2);
    let mut prev: Option<char> = None;
    for c in glyphs.chars() {
        if let Some(p) = prev {
            if p < c {
                out.push(FALLING_EDGE);
            } else if p > c {
                out.push(RISING_EDGE);
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
