//! End-to-end behavior of statement summaries.

use sqlpeek::{MinifyConfig, QueryMinifier, minify};
use std::sync::Arc;

fn minifier_with_width(width: usize) -> QueryMinifier {
    QueryMinifier::with_config(MinifyConfig::new().with_max_char_width(width)).unwrap()
}

// ── Statement families ──────────────────────────────────────────────────────

#[test]
fn select_keeps_every_present_clause() {
    assert_eq!(
        minify("SELECT id, name FROM users WHERE id = 1 ORDER BY name LIMIT 10"),
        "SELECT id, name FROM users WHERE id = 1 ORDER BY name LIMIT 10"
    );
}

#[test]
fn keywords_are_normalized_to_upper_case() {
    assert_eq!(
        minify("select * from users where id = 1"),
        "SELECT * FROM users WHERE id = 1"
    );
}

#[test]
fn multiline_statements_collapse_to_one_line() {
    assert_eq!(
        minify("SELECT id\n  FROM users\n WHERE id = 1\n"),
        "SELECT id FROM users WHERE id = 1"
    );
}

#[test]
fn subqueries_stay_inside_their_clause() {
    assert_eq!(
        minify("SELECT a FROM t WHERE b IN (SELECT c) LIMIT 5"),
        "SELECT a FROM t WHERE b IN (SELECT c) LIMIT 5"
    );
    // Four values share a budget of (100 - 4 * 5) / 4 = 20 chars, and the
    // 22-char WHERE value is cut at its last fitting space.
    assert_eq!(
        minify("SELECT a FROM t WHERE b IN (SELECT c FROM d) LIMIT 5"),
        "SELECT a FROM t WHERE b IN (SELECT c FROM [...] LIMIT 5"
    );
}

#[test]
fn delete_summary() {
    assert_eq!(
        minify("DELETE FROM users WHERE id = 1"),
        "DELETE FROM users WHERE id = 1"
    );
}

#[test]
fn update_summary_escapes_quotes() {
    assert_eq!(
        minify("UPDATE users SET name = 'x' WHERE id = 1"),
        r"UPDATE users SET name = \'x\' WHERE id = 1"
    );
}

#[test]
fn insert_prefers_values_over_value() {
    assert_eq!(
        minify("INSERT INTO users (id, name) VALUES (1, 'bob')"),
        r"INSERT INTO users (id, name) VALUES (1, \'bob\')"
    );
    assert_eq!(minify("INSERT INTO t VALUE (1)"), "INSERT INTO t VALUE (1)");
}

// ── Truncation ──────────────────────────────────────────────────────────────

#[test]
fn long_clause_is_cut_at_a_word_boundary() {
    let columns: Vec<String> = (1..=20).map(|i| format!("col_{i:02}")).collect();
    let query = format!("SELECT {} FROM t", columns.join(", "));

    assert_eq!(
        minify(&query),
        "SELECT col_01, col_02, col_03, col_04, col_05, [...] FROM t"
    );
}

#[test]
fn width_and_marker_are_configurable() {
    let minifier = QueryMinifier::with_config(
        MinifyConfig::new()
            .with_max_char_width(40)
            .with_truncation_marker(" …"),
    )
    .unwrap();

    // budget = (40 - 3 * 5) / 3 = 8
    assert_eq!(
        minifier.minify("SELECT a, b, c FROM some_table WHERE x = 1"),
        "SELECT a, b, c FROM some_tab … WHERE x = 1"
    );
}

#[test]
fn unclassified_statement_is_cut_to_exact_width() {
    let query = format!("SHOW {}", "x".repeat(200));
    let summary = minify(&query);
    assert_eq!(summary.chars().count(), 100);
    assert_eq!(summary, query[..100]);

    assert_eq!(minify("SHOW TABLES"), "SHOW TABLES");
}

#[test]
fn unmatched_statement_is_cut_to_exact_width() {
    let minifier = minifier_with_width(20);
    // Contains SELECT but no FROM.
    assert_eq!(
        minifier.minify("SELECT now(), current_user, version()"),
        "SELECT now(), curren"
    );
    // Classified as select, but does not start with it.
    assert_eq!(
        minifier.minify("INSERT INTO archive SELECT * FROM users"),
        "INSERT INTO archive "
    );
}

#[test]
fn width_bound_excludes_keyword_overhead() {
    let segment = "abcd ".repeat(30);
    let segment = segment.trim();
    let query = format!(
        "SELECT {segment} FROM {segment} WHERE {segment} HAVING {segment} ORDER BY {segment} LIMIT {segment}"
    );

    // budget = (100 - 6 * 5) / 6 = 11, so each value becomes "abcd abcd [...]".
    let summary = minify(&query);
    assert_eq!(
        summary,
        "SELECT abcd abcd [...] FROM abcd abcd [...] WHERE abcd abcd [...] \
         HAVING abcd abcd [...] ORDER BY abcd abcd [...] LIMIT abcd abcd [...]"
    );
    assert_eq!(summary.chars().count(), 135);
}

// ── Concurrency ─────────────────────────────────────────────────────────────

#[test]
fn shared_minifier_is_usable_across_threads() {
    let minifier = Arc::new(QueryMinifier::new());
    let queries = [
        ("SELECT * FROM a WHERE x = 1", "SELECT * FROM a WHERE x = 1"),
        ("DELETE FROM b LIMIT 3", "DELETE FROM b LIMIT 3"),
        ("UPDATE c SET y = 2", "UPDATE c SET y = 2"),
        ("INSERT INTO d VALUES (1)", "INSERT INTO d VALUES (1)"),
    ];

    std::thread::scope(|s| {
        for (query, expected) in queries {
            let minifier = Arc::clone(&minifier);
            s.spawn(move || {
                for _ in 0..50 {
                    assert_eq!(minifier.minify(query), expected);
                }
            });
        }
    });
}
