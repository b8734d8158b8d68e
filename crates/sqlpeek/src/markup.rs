//! HTML highlighting and pretty-printing of full statements.
//!
//! Tokenizing and layout belong to a [`SqlHighlighter`] backend. [`format_query`]
//! hands it the CSS classes to use and adapts the `<pre>` block it returns for
//! embedding in a profiler panel. [`SqlFormatHighlighter`] is the default
//! backend; [`PlainHighlighter`] only escapes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlformat::{FormatOptions, Indent, QueryParams};
use std::sync::LazyLock;

/// CSS classes a backend should put on each token kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupClasses {
    pub pre: String,
    pub quote: String,
    pub backtick_quote: String,
    pub reserved: String,
    pub boundary: String,
    pub number: String,
    pub word: String,
    pub error: String,
    pub comment: String,
    pub variable: String,
}

impl Default for MarkupClasses {
    fn default() -> Self {
        Self {
            pre: "highlight highlight-sql".to_string(),
            quote: "string".to_string(),
            backtick_quote: "string".to_string(),
            reserved: "keyword".to_string(),
            boundary: "symbol".to_string(),
            number: "number".to_string(),
            word: "word".to_string(),
            error: "error".to_string(),
            comment: "comment".to_string(),
            variable: "variable".to_string(),
        }
    }
}

/// A highlighting/formatting backend.
///
/// Both methods return a complete `<pre class="{classes.pre}">...</pre>` block.
pub trait SqlHighlighter: Send + Sync {
    /// Annotate `sql` without changing its layout.
    fn highlight(&self, sql: &str, classes: &MarkupClasses) -> String;

    /// Annotate and re-indent `sql`.
    fn format(&self, sql: &str, classes: &MarkupClasses) -> String;
}

/// Backend that escapes the SQL and wraps it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl SqlHighlighter for PlainHighlighter {
    fn highlight(&self, sql: &str, classes: &MarkupClasses) -> String {
        format!(
            "<pre class=\"{}\">{}</pre>",
            escape_html(&classes.pre),
            escape_html(sql)
        )
    }

    fn format(&self, sql: &str, classes: &MarkupClasses) -> String {
        self.highlight(sql.trim(), classes)
    }
}

/// Backend that wraps each token in a `<span>` and re-indents with `sqlformat`.
///
/// Highlighting keeps the statement text byte for byte. Formatting upper-cases
/// reserved words and breaks clauses onto indented lines before highlighting.
/// Text the scanner does not recognize gets the `error` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlFormatHighlighter {
    indent: u8,
}

impl Default for SqlFormatHighlighter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl SqlFormatHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent formatted clauses by `spaces`.
    pub fn with_indent(mut self, spaces: u8) -> Self {
        self.indent = spaces;
        self
    }

    /// Re-indent `sql` without markup.
    pub fn pretty(&self, sql: &str) -> String {
        let options = FormatOptions {
            indent: Indent::Spaces(self.indent),
            uppercase: Some(true),
            lines_between_queries: 1,
            ..Default::default()
        };
        sqlformat::format(sql, &QueryParams::None, &options)
    }
}

impl SqlHighlighter for SqlFormatHighlighter {
    fn highlight(&self, sql: &str, classes: &MarkupClasses) -> String {
        format!(
            "<pre class=\"{}\">{}</pre>",
            escape_html(&classes.pre),
            highlight_tokens(sql, classes)
        )
    }

    fn format(&self, sql: &str, classes: &MarkupClasses) -> String {
        self.highlight(&self.pretty(sql), classes)
    }
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<comment>--[^\n]*|#[^\n]*|/\*(?s:.*?)(?:\*/|\z))",
        r#"|(?P<quote>'(?:[^'\\]|(?s:\\.)|'')*(?:'|\z)|"(?:[^"\\]|(?s:\\.)|"")*(?:"|\z))"#,
        r"|(?P<backtick>`(?:[^`]|``)*(?:`|\z))",
        r"|(?P<variable>\?|:[\p{L}_][\p{L}\p{N}_]*|@[\p{L}\p{N}_.$]+|\$\d+)",
        r"|(?P<number>0[xX][0-9A-Fa-f]+\b|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b|\.\d+\b)",
        r"|(?P<word>[\p{L}_][\p{L}\p{N}_$]*)",
        r"|(?P<boundary>::|[(),;.=<>!+\-*/%|&^~\[\]{}:])",
        r"|(?P<space>\s+)",
    ))
    .expect("token regex is valid")
});

const RESERVED: &[&str] = &[
    "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CREATE", "CROSS", "DELETE",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FALSE", "FOR", "FROM", "FULL", "GROUP",
    "HAVING", "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "LEFT", "LIKE", "LIMIT",
    "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "RETURNING", "RIGHT", "SELECT", "SET",
    "TABLE", "THEN", "TRUE", "UNION", "UPDATE", "USING", "VALUE", "VALUES", "WHEN", "WHERE",
    "WITH",
];

fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|k| k.eq_ignore_ascii_case(word))
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(&escape_html(class));
    out.push_str("\">");
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

/// Escape `sql` and wrap each token in a span of its class.
fn highlight_tokens(sql: &str, classes: &MarkupClasses) -> String {
    let mut out = String::with_capacity(sql.len() * 2);
    let mut last = 0;

    for caps in TOKEN.captures_iter(sql) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            push_span(&mut out, &classes.error, &sql[last..whole.start()]);
        }
        last = whole.end();

        let text = whole.as_str();
        let class = if caps.name("space").is_some() {
            out.push_str(text);
            continue;
        } else if caps.name("comment").is_some() {
            &classes.comment
        } else if caps.name("quote").is_some() {
            &classes.quote
        } else if caps.name("backtick").is_some() {
            &classes.backtick_quote
        } else if caps.name("variable").is_some() {
            &classes.variable
        } else if caps.name("number").is_some() {
            &classes.number
        } else if caps.name("word").is_some() {
            if is_reserved(text) { &classes.reserved } else { &classes.word }
        } else {
            &classes.boundary
        };
        push_span(&mut out, class, text);
    }

    if last < sql.len() {
        push_span(&mut out, &classes.error, &sql[last..]);
    }
    out
}

static PRE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\A\s*<pre class="([^"]*)">(.*)</pre>\s*\z"#).expect("pre block regex is valid")
});

/// Run `sql` through `backend` and adapt its `<pre>` block.
///
/// With `highlight_only`, the wrapper is dropped so the markup can sit inline.
/// Otherwise the block becomes `<div class="..."><pre>...</pre></div>`.
/// Output that is not a single `<pre>` block is returned as is.
pub fn format_query<H: SqlHighlighter + ?Sized>(
    backend: &H,
    classes: &MarkupClasses,
    sql: &str,
    highlight_only: bool,
) -> String {
    if highlight_only {
        let html = backend.highlight(sql, classes);
        match PRE_BLOCK.captures(&html) {
            Some(caps) => caps[2].to_string(),
            None => html,
        }
    } else {
        let html = backend.format(sql, classes);
        match PRE_BLOCK.captures(&html) {
            Some(caps) => format!("<div class=\"{}\"><pre>{}</pre></div>", &caps[1], &caps[2]),
            None => html,
        }
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeywordSpans;

    impl SqlHighlighter for KeywordSpans {
        fn highlight(&self, sql: &str, classes: &MarkupClasses) -> String {
            let body = sql.replace(
                "SELECT",
                &format!("<span class=\"{}\">SELECT</span>", classes.reserved),
            );
            format!("<pre class=\"{}\">{}</pre>", classes.pre, body)
        }

        fn format(&self, sql: &str, classes: &MarkupClasses) -> String {
            self.highlight(&sql.replace(" FROM", "\nFROM"), classes)
        }
    }

    #[test]
    fn highlight_only_drops_the_wrapper() {
        let html = format_query(&KeywordSpans, &MarkupClasses::default(), "SELECT 1", true);
        assert_eq!(html, "<span class=\"keyword\">SELECT</span> 1");
    }

    #[test]
    fn format_rewraps_in_a_div() {
        let html = format_query(
            &KeywordSpans,
            &MarkupClasses::default(),
            "SELECT a FROM t",
            false,
        );
        assert_eq!(
            html,
            "<div class=\"highlight highlight-sql\"><pre><span class=\"keyword\">SELECT</span> a\nFROM t</pre></div>"
        );
    }

    #[test]
    fn plain_backend_escapes_html() {
        let html = format_query(
            &PlainHighlighter,
            &MarkupClasses::default(),
            "SELECT '<b>'",
            true,
        );
        assert_eq!(html, "SELECT '&lt;b&gt;'");
    }

    fn span(class: &str, text: &str) -> String {
        format!("<span class=\"{class}\">{text}</span>")
    }

    #[test]
    fn sqlformat_backend_highlights_tokens_in_place() {
        let html = format_query(
            &SqlFormatHighlighter::default(),
            &MarkupClasses::default(),
            "SELECT a FROM t WHERE x = 'y'",
            true,
        );
        let expected = [
            span("keyword", "SELECT"),
            span("word", "a"),
            span("keyword", "FROM"),
            span("word", "t"),
            span("keyword", "WHERE"),
            span("word", "x"),
            span("symbol", "="),
            span("string", "'y'"),
        ]
        .join(" ");
        assert_eq!(html, expected);
    }

    #[test]
    fn sqlformat_backend_classifies_every_token_kind() {
        let classes = MarkupClasses::default();
        let html = highlight_tokens("-- note\nSELECT `id`, :name, ?, 1.5 FROM t", &classes);
        let expected = format!(
            "{}\n{} {}{} {}{} {}{} {} {} {}",
            span("comment", "-- note"),
            span("keyword", "SELECT"),
            span("string", "`id`"),
            span("symbol", ","),
            span("variable", ":name"),
            span("symbol", ","),
            span("variable", "?"),
            span("symbol", ","),
            span("number", "1.5"),
            span("keyword", "FROM"),
            span("word", "t"),
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn casts_are_symbols_not_variables() {
        let html = highlight_tokens("1::int", &MarkupClasses::default());
        assert_eq!(
            html,
            format!("{}{}{}", span("number", "1"), span("symbol", "::"), span("word", "int"))
        );
    }

    #[test]
    fn unknown_text_is_marked_as_error_and_escaped() {
        let html = highlight_tokens("a < '&' ¤", &MarkupClasses::default());
        assert_eq!(
            html,
            format!(
                "{} {} {} {}",
                span("word", "a"),
                span("symbol", "&lt;"),
                span("string", "'&amp;'"),
                span("error", "¤"),
            )
        );
    }

    #[test]
    fn sqlformat_backend_reindents_when_formatting() {
        let html = format_query(
            &SqlFormatHighlighter::default(),
            &MarkupClasses::default(),
            "select a, b from t where x = 1 order by a",
            false,
        );

        assert!(html.starts_with(
            "<div class=\"highlight highlight-sql\"><pre><span class=\"keyword\">SELECT</span>"
        ));
        assert!(html.ends_with("</pre></div>"));
        assert!(html.contains('\n'));
        assert!(html.contains("<span class=\"keyword\">FROM</span>"));
        assert!(html.contains(
            "<span class=\"keyword\">ORDER</span> <span class=\"keyword\">BY</span>"
        ));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn pretty_breaks_clauses_onto_lines() {
        let pretty = SqlFormatHighlighter::new()
            .with_indent(4)
            .pretty("select a from t where x = 1");
        let lines: Vec<&str> = pretty.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines.iter().any(|l| l.trim() == "FROM"));
        assert!(lines.iter().any(|l| l.starts_with("    ")));
    }

    #[test]
    fn foreign_output_is_passed_through() {
        struct Raw;
        impl SqlHighlighter for Raw {
            fn highlight(&self, sql: &str, _: &MarkupClasses) -> String {
                sql.to_string()
            }
            fn format(&self, sql: &str, _: &MarkupClasses) -> String {
                sql.to_string()
            }
        }
        assert_eq!(
            format_query(&Raw, &MarkupClasses::default(), "SELECT 1", false),
            "SELECT 1"
        );
    }
}
