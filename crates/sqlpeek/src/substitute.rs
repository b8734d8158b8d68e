//! Inline bound parameters into their placeholders.

use crate::escape::escape;
use crate::params::{ParamKey, Params};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `?`, or a run of colons followed by a word. Only a single colon makes a
/// named placeholder; longer runs are casts such as `::text`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\?|:+[A-Za-z0-9_]+").expect("placeholder regex is valid")
});

/// Scan state for one substitution pass.
///
/// The cursor is shared by positional and named placeholders: every
/// substituted placeholder advances it by one, unresolved ones leave it as is.
#[derive(Debug)]
pub struct PlaceholderScanner<'p> {
    params: &'p Params,
    cursor: usize,
}

impl<'p> PlaceholderScanner<'p> {
    pub fn new(params: &'p Params) -> Self {
        Self {
            params,
            cursor: params.first_index(),
        }
    }

    /// Current positional cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Literal replacement for one placeholder token, or `None` to keep it.
    ///
    /// `:name` looks up `name` first and falls back to the cursor position;
    /// `?` looks up the cursor position only.
    pub fn resolve(&mut self, token: &str) -> Option<String> {
        let value = if token == "?" {
            self.params.get_index(self.cursor)
        } else {
            let name = token.strip_prefix(':')?;
            if name.starts_with(':') {
                return None;
            }
            self.params
                .get(&ParamKey::from_name(name))
                .or_else(|| self.params.get_index(self.cursor))
        };

        let Some(value) = value else {
            tracing::debug!(
                target: "sqlpeek.params",
                placeholder = token,
                cursor = self.cursor,
                "no bound value; leaving placeholder"
            );
            return None;
        };

        self.cursor += 1;
        Some(escape(value))
    }
}

/// Replace `?` and `:name` placeholders in `query` with escaped values.
///
/// If the collection has key `1` but no key `0`, positional lookup starts at 1.
/// Placeholders without a bound value are left untouched.
///
/// # Example
/// ```
/// use sqlpeek::{Params, substitute_parameters};
///
/// let params = Params::positional([1, 2]);
/// assert_eq!(
///     substitute_parameters("a=? OR (1)::string OR b=?", &params),
///     "a=1 OR (1)::string OR b=2"
/// );
///
/// let params = Params::new().bind("name", "O'Reilly");
/// assert_eq!(
///     substitute_parameters("name = :name", &params),
///     r"name = 'O\'Reilly'"
/// );
/// ```
pub fn substitute_parameters(query: &str, params: &Params) -> String {
    let mut scanner = PlaceholderScanner::new(params);
    PLACEHOLDER
        .replace_all(query, |caps: &Captures<'_>| {
            let token = &caps[0];
            scanner.resolve(token).unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}
