//! Fit captured clause values into a shared width budget.

use crate::escape::add_slashes;
use crate::pattern::Capture;

/// Characters reserved per value for its keyword and separators.
const KEYWORD_OVERHEAD: usize = 5;

/// Per-value character budget for `count` values within `max_char_width`.
///
/// Never below one character.
pub(crate) fn value_budget(max_char_width: usize, count: usize) -> usize {
    if count == 0 {
        return max_char_width.max(1);
    }
    (max_char_width.saturating_sub(KEYWORD_OVERHEAD * count) / count).max(1)
}

/// Join captures as `KEYWORD value` pairs, shortening long values.
///
/// A value longer than the budget is cut to the first line of its word-wrapped
/// form and suffixed with `marker`. Captured values are always text, so they
/// get the backslash escaping of a bound string without its quotes.
///
/// Keywords and separators are not counted against the budget, so the result
/// may exceed `max_char_width` by up to the keyword text plus marker length.
pub fn shrink(captures: &[Capture<'_>], max_char_width: usize, marker: &str) -> String {
    let budget = value_budget(max_char_width, captures.len());

    let mut parts = Vec::with_capacity(captures.len());
    for capture in captures {
        let (value, truncated) = if capture.value.chars().count() > budget {
            (first_wrapped_line(capture.value, budget), true)
        } else {
            (capture.value, false)
        };

        let mut rendered = add_slashes(value);
        if truncated {
            rendered.push_str(marker);
        }

        if rendered.is_empty() {
            parts.push(capture.keyword.to_string());
        } else {
            parts.push(format!("{} {}", capture.keyword, rendered));
        }
    }

    parts.join(" ").trim().to_string()
}

/// First line of `text` word-wrapped at `width` characters.
///
/// Lines break at the last space that keeps them within `width`; a word
/// longer than `width` is cut. An existing newline also ends the line.
pub(crate) fn first_wrapped_line(text: &str, width: usize) -> &str {
    let mut last_space: Option<usize> = None;

    for (i, (byte, ch)) in text.char_indices().enumerate() {
        if ch == '\n' {
            return &text[..byte];
        }
        if ch == ' ' {
            if i >= width {
                return &text[..byte];
            }
            last_space = Some(byte);
        } else if i >= width {
            return match last_space {
                Some(space) => &text[..space],
                None => &text[..byte],
            };
        }
    }
    text
}
