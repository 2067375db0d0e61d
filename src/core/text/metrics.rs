//! Text measurement used to size a dialog before anything is drawn.
//!
//! Line length is a character count: tabs, carriage returns and wide characters each count as one.
//! ANSI escape sequences are styling, not text, and are left out of the count.
//!
//! [`estimated_line_count`] divides each line's length by the wrap width; it does not simulate
//! word-boundary wrapping, so a renderer that breaks on words may need a row more or less.

use super::ansi::strip_ansi;

/// Characters in `line`, not counting ANSI escape sequences.
pub fn line_length(line: &str) -> usize {
    if line.contains('\x1b') {
        strip_ansi(line).chars().count()
    } else {
        line.chars().count()
    }
}

/// Length of the longest `\n`-separated line. A trailing line without a terminator counts.
pub fn max_line_length(text: &str) -> usize {
    text.split('\n').map(line_length).max().unwrap_or(0)
}

/// Rows needed to show `text` when each line wraps at `wrap_width` characters.
///
/// The text is trimmed first. Every line takes at least one row, so an all-whitespace input still
/// yields 1. A zero wrap width yields 0.
pub fn estimated_line_count(text: &str, wrap_width: usize) -> usize {
    if wrap_width == 0 {
        return 0;
    }

    text.trim()
        .split('\n')
        .map(|line| line_length(line).div_ceil(wrap_width).max(1))
        .sum()
}
