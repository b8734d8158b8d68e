//! Profiler rows as `tracing` events.
//!
//! A [`QueryDisplay`] already carries a width-bounded summary, so the event
//! always includes it. The inlined statement can be long; [`RunnableSql`]
//! decides how much of it goes into the event.

use crate::classify::StatementFamily;
use crate::formatter::{QueryDisplay, QueryFormatter};
use crate::markup::SqlHighlighter;
use crate::minify::truncate_chars;
use crate::params::Params;
use tracing::Level;

/// How the parameter-inlined statement is attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnableSql {
    /// Leave the `sql` field out; the summary is enough.
    Omit,
    /// Attach the whole statement.
    Full,
    /// Attach at most this many characters, followed by `...` when cut.
    Clipped(usize),
}

impl RunnableSql {
    fn render(self, sql: &str) -> Option<String> {
        match self {
            RunnableSql::Omit => None,
            RunnableSql::Full => Some(sql.to_string()),
            RunnableSql::Clipped(max) if sql.chars().count() > max => {
                Some(format!("{}...", truncate_chars(sql, max)))
            }
            RunnableSql::Clipped(_) => Some(sql.to_string()),
        }
    }
}

/// Emits profiler rows on the `sqlpeek.sql` target.
///
/// Fields: `family` (statement keyword, absent when unclassified),
/// `param_count`, `summary` and, unless omitted, `sql`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingQueryLog {
    level: Level,
    runnable: RunnableSql,
}

impl Default for TracingQueryLog {
    fn default() -> Self {
        Self::at(Level::DEBUG)
    }
}

impl TracingQueryLog {
    /// Log at `level`, clipping the inlined statement to 1000 characters.
    pub fn at(level: Level) -> Self {
        Self {
            level,
            runnable: RunnableSql::Clipped(1000),
        }
    }

    pub fn with_runnable(self, runnable: RunnableSql) -> Self {
        Self { runnable, ..self }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The `sql` field value for `row`, if any.
    pub fn sql_field(&self, row: &QueryDisplay) -> Option<String> {
        self.runnable.render(&row.runnable)
    }

    /// Describe `query` with `formatter`, emit the row and return it.
    pub fn log<H: SqlHighlighter>(
        &self,
        formatter: &QueryFormatter<H>,
        query: &str,
        params: &Params,
    ) -> QueryDisplay {
        let row = formatter.describe(query, params);
        self.emit(&row);
        row
    }

    /// Emit an already built row.
    pub fn emit(&self, row: &QueryDisplay) {
        let family = row.family.map(StatementFamily::keyword);
        let sql = self.sql_field(row);
        let level = self.level;

        // `tracing` needs the level at each call site, so every level gets its own.
        macro_rules! row_event {
            ($($name:ident),+) => {
                match level {
                    $(Level::$name => tracing::event!(
                        target: "sqlpeek.sql",
                        Level::$name,
                        family,
                        param_count = row.param_count,
                        summary = row.summary.as_str(),
                        sql = sql.as_deref(),
                    ),)+
                }
            };
        }

        row_event!(ERROR, WARN, INFO, DEBUG, TRACE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(runnable: &str) -> QueryDisplay {
        QueryDisplay {
            summary: "SELECT * FROM users".to_string(),
            runnable: runnable.to_string(),
            family: Some(StatementFamily::Select),
            param_count: 0,
        }
    }

    #[test]
    fn runnable_sql_is_clipped_by_default() {
        let log = TracingQueryLog::default().with_runnable(RunnableSql::Clipped(10));
        assert_eq!(
            log.sql_field(&row("SELECT * FROM users")).as_deref(),
            Some("SELECT * F...")
        );
        assert_eq!(log.sql_field(&row("SELECT 1")).as_deref(), Some("SELECT 1"));
        assert_eq!(TracingQueryLog::default().level(), Level::DEBUG);
    }

    #[test]
    fn runnable_sql_can_be_kept_whole_or_left_out() {
        let long = "x".repeat(2000);
        let full = TracingQueryLog::default().with_runnable(RunnableSql::Full);
        assert_eq!(full.sql_field(&row(&long)), Some(long.clone()));

        let omit = TracingQueryLog::default().with_runnable(RunnableSql::Omit);
        assert_eq!(omit.sql_field(&row(&long)), None);
    }

    #[test]
    fn clipping_counts_characters() {
        let log = TracingQueryLog::default().with_runnable(RunnableSql::Clipped(3));
        assert_eq!(log.sql_field(&row("éééé")).as_deref(), Some("ééé..."));
    }

    #[test]
    fn log_returns_the_emitted_row() {
        let formatter = QueryFormatter::new();
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            let row = TracingQueryLog::at(level).log(
                &formatter,
                "DELETE FROM users WHERE id = ?",
                &Params::positional([9]),
            );
            assert_eq!(row.summary, "DELETE FROM users WHERE id = ?");
            assert_eq!(row.runnable, "DELETE FROM users WHERE id = 9");
            assert_eq!(row.family, Some(StatementFamily::Delete));
        }
    }
}
