//! One-line statement summaries.
//!
//! The minifier recognizes the shape of a statement (select, delete, update
//! or insert), finds the richest sequence of clause keywords it contains and
//! prints each clause with its text shortened to fit one display line:
//!
//! ```
//! use sqlpeek::minify;
//!
//! assert_eq!(
//!     minify("select id, name from users where id = 1 limit 1"),
//!     "SELECT id, name FROM users WHERE id = 1 LIMIT 1"
//! );
//! assert_eq!(minify("SHOW TABLES"), "SHOW TABLES");
//! ```
//!
//! It is a heuristic over the raw text, not a parser. Statements it cannot
//! match are cut to `max_char_width` characters instead.

use crate::classify::StatementFamily;
use crate::config::MinifyConfig;
use crate::error::PeekResult;
use crate::pattern::FamilyPatterns;
use crate::shrink::shrink;
use std::sync::OnceLock;

/// Builds width-bounded summaries of SQL statements.
///
/// Keyword patterns are compiled once per process and shared by every
/// minifier, so instances are cheap to create.
#[derive(Debug, Clone, Default)]
pub struct QueryMinifier {
    config: MinifyConfig,
}

impl QueryMinifier {
    /// Create a minifier with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a minifier from a validated configuration.
    pub fn with_config(config: MinifyConfig) -> PeekResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinifyConfig {
        &self.config
    }

    /// Summarize `query` on one line.
    pub fn minify(&self, query: &str) -> String {
        let Some(family) = StatementFamily::detect(query) else {
            tracing::trace!(target: "sqlpeek.minify", "unclassified statement; truncating");
            return self.truncate(query);
        };

        let Some((pattern, captures)) = FamilyPatterns::for_family(family).first_match(query) else {
            tracing::trace!(
                target: "sqlpeek.minify",
                family = ?family,
                "no keyword pattern matched; truncating"
            );
            return self.truncate(query);
        };

        tracing::trace!(
            target: "sqlpeek.minify",
            family = ?family,
            keywords = ?pattern.keywords(),
            "keyword pattern matched"
        );
        shrink(
            &captures,
            self.config.max_char_width,
            &self.config.truncation_marker,
        )
    }

    /// The first `max_char_width` characters of `query`.
    pub fn truncate(&self, query: &str) -> String {
        truncate_chars(query, self.config.max_char_width).to_string()
    }
}

pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Summarize `query` with the default configuration.
///
/// Uses a process-wide [`QueryMinifier`].
pub fn minify(query: &str) -> String {
    static DEFAULT: OnceLock<QueryMinifier> = OnceLock::new();
    DEFAULT.get_or_init(QueryMinifier::default).minify(query)
}
