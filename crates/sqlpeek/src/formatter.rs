use crate::classify::StatementFamily;
use crate::config::MinifyConfig;
use crate::error::PeekResult;
use crate::markup::{MarkupClasses, SqlFormatHighlighter, SqlHighlighter, format_query};
use crate::minify::QueryMinifier;
use crate::params::Params;
use crate::substitute::substitute_parameters;
use serde::Serialize;

/// Everything a profiler row shows for one executed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDisplay {
    /// One-line summary of the statement.
    pub summary: String,
    /// The statement with its parameters inlined.
    pub runnable: String,
    /// Detected statement family, if any.
    pub family: Option<StatementFamily>,
    /// Number of bound parameters.
    pub param_count: usize,
}

/// Minification, parameter inlining and markup behind one handle.
///
/// # Example
///
/// ```
/// use sqlpeek::{Params, QueryFormatter};
///
/// let formatter = QueryFormatter::new();
/// let row = formatter.describe(
///     "SELECT * FROM users WHERE id = ?",
///     &Params::positional([7]),
/// );
///
/// assert_eq!(row.summary, "SELECT * FROM users WHERE id = ?");
/// assert_eq!(row.runnable, "SELECT * FROM users WHERE id = 7");
/// ```
#[derive(Debug)]
pub struct QueryFormatter<H = SqlFormatHighlighter> {
    minifier: QueryMinifier,
    highlighter: H,
    classes: MarkupClasses,
}

impl Default for QueryFormatter {
    fn default() -> Self {
        Self {
            minifier: QueryMinifier::default(),
            highlighter: SqlFormatHighlighter::default(),
            classes: MarkupClasses::default(),
        }
    }
}

impl QueryFormatter {
    /// Create a formatter with default settings and the `sqlformat` markup backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: SqlHighlighter> QueryFormatter<H> {
    /// Swap the markup backend.
    pub fn with_highlighter<B: SqlHighlighter>(self, highlighter: B) -> QueryFormatter<B> {
        QueryFormatter {
            minifier: self.minifier,
            highlighter,
            classes: self.classes,
        }
    }

    /// Replace the minifier configuration.
    pub fn with_minify_config(mut self, config: MinifyConfig) -> PeekResult<Self> {
        self.minifier = QueryMinifier::with_config(config)?;
        Ok(self)
    }

    /// Replace the CSS classes handed to the backend.
    pub fn with_classes(mut self, classes: MarkupClasses) -> Self {
        self.classes = classes;
        self
    }

    pub fn minifier(&self) -> &QueryMinifier {
        &self.minifier
    }

    pub fn minify(&self, query: &str) -> String {
        self.minifier.minify(query)
    }

    pub fn substitute(&self, query: &str, params: &Params) -> String {
        substitute_parameters(query, params)
    }

    /// Highlight (`highlight_only`) or pretty-print `sql` as HTML.
    pub fn format_query(&self, sql: &str, highlight_only: bool) -> String {
        format_query(&self.highlighter, &self.classes, sql, highlight_only)
    }

    /// Build the profiler row for `query` bound with `params`.
    pub fn describe(&self, query: &str, params: &Params) -> QueryDisplay {
        QueryDisplay {
            summary: self.minify(query),
            runnable: self.substitute(query, params),
            family: StatementFamily::detect(query),
            param_count: params.len(),
        }
    }
}
