//! # sqlpeek
//!
//! Compact SQL rendering for profiler and debug views.
//!
//! ## Features
//!
//! - **One-line summaries**: `minify()` recognizes select/delete/update/insert
//!   statements and prints their clauses shortened to a display width
//! - **Parameter inlining**: `substitute_parameters()` replaces `?` and `:name`
//!   placeholders with escaped literals, leaving `::type` casts alone
//! - **Literal escaping**: `escape()` renders any bound [`Value`] as SQL text
//! - **Markup**: `format_query()` highlights or pretty-prints a statement as
//!   HTML through a pluggable [`SqlHighlighter`] backend (`sqlformat` by default)
//! - **Logging**: [`TracingQueryLog`] emits profiler rows as `tracing` events
//!
//! None of this parses SQL. Everything works on the raw statement text and is
//! best effort: unknown shapes are truncated, unbound placeholders are kept.
//!
//! ```
//! use sqlpeek::{Params, Value, minify, substitute_parameters};
//!
//! let sql = "SELECT id, email FROM users WHERE status = ? ORDER BY id LIMIT ?";
//!
//! assert_eq!(
//!     minify(sql),
//!     "SELECT id, email FROM users WHERE status = ? ORDER BY id LIMIT ?"
//! );
//! assert_eq!(
//!     substitute_parameters(sql, &Params::positional([Value::from("active"), Value::from(10)])),
//!     "SELECT id, email FROM users WHERE status = 'active' ORDER BY id LIMIT 10"
//! );
//! ```

pub mod classify;
pub mod combination;
pub mod config;
pub mod error;
pub mod escape;
pub mod formatter;
pub mod log;
pub mod markup;
pub mod minify;
pub mod params;
pub mod pattern;
pub mod shrink;
pub mod substitute;
pub mod value;

pub use classify::{StatementFamily, Vocabulary};
pub use combination::{Combinations, combinations};
pub use config::MinifyConfig;
pub use error::{PeekError, PeekResult};
pub use escape::{add_slashes, escape};
pub use formatter::{QueryDisplay, QueryFormatter};
pub use log::{RunnableSql, TracingQueryLog};
pub use markup::{
    MarkupClasses, PlainHighlighter, SqlFormatHighlighter, SqlHighlighter, format_query,
};
pub use minify::{QueryMinifier, minify};
pub use params::{ParamKey, Params};
pub use pattern::{Capture, FamilyPatterns, KeywordPattern};
pub use shrink::shrink;
pub use substitute::{PlaceholderScanner, substitute_parameters};
pub use value::Value;
