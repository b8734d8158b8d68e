//! Parameter inlining and literal escaping through the public API.

use sqlpeek::{Params, QueryFormatter, Value, escape, substitute_parameters};

#[test]
fn zero_based_positional() {
    let params = Params::positional([1, 2]);
    assert_eq!(substitute_parameters("a=? OR b=?", &params), "a=1 OR b=2");
}

#[test]
fn one_based_positional() {
    let params: Params = [(1_usize, 1), (2_usize, 2)].into_iter().collect();
    assert_eq!(substitute_parameters("a=? OR b=?", &params), "a=1 OR b=2");
}

#[test]
fn named_placeholders_resolve_by_name() {
    let params = Params::named([("b", 2), ("a", 1)]);
    assert_eq!(substitute_parameters("a=:a OR b=:b", &params), "a=1 OR b=2");
}

#[test]
fn postgres_casts_are_not_placeholders() {
    let params = Params::positional([1, 2]);
    assert_eq!(
        substitute_parameters("a=? OR (1)::string OR b=?", &params),
        "a=1 OR (1)::string OR b=2"
    );
}

#[test]
fn every_value_kind_renders_as_a_literal() {
    let params = Params::positional([
        Value::Null,
        Value::Bool(true),
        Value::from("it's"),
        Value::Bytes(vec![0xff, 0x00]),
        Value::list(["a", "b"]),
        Value::bound(5),
        Value::object("NOW()"),
        Value::Float(2.5),
    ]);
    assert_eq!(
        substitute_parameters("VALUES (?, ?, ?, ?, ?, ?, ?, ?)", &params),
        r"VALUES (NULL, 1, 'it\'s', 0xFF00, 'a', 'b', '5', NOW(), 2.5)"
    );
}

#[test]
fn json_parameters_from_a_log_line() {
    let params = Params::from_json_str(r#"{"1": "active", "2": 10}"#).unwrap();
    assert_eq!(
        substitute_parameters("SELECT * FROM users WHERE status = ? LIMIT ?", &params),
        "SELECT * FROM users WHERE status = 'active' LIMIT 10"
    );
}

#[test]
fn missing_values_leave_placeholders_verbatim() {
    let params = Params::named([("a", 1)]);
    assert_eq!(
        substitute_parameters("a = :a AND b = :b AND c = ?", &params),
        "a = 1 AND b = :b AND c = ?"
    );
}

#[test]
fn escape_examples() {
    assert_eq!(escape(&Value::Null), "NULL");
    assert_eq!(escape(&Value::Bool(true)), "1");
    assert_eq!(escape(&Value::from("test string")), "'test string'");
    assert_eq!(
        escape(&Value::List(vec![
            Value::Int(1),
            Value::Null,
            Value::from("test"),
            Value::object("foo"),
        ])),
        "1, NULL, 'test', foo"
    );
    assert_eq!(escape(&Value::object("bar")), "bar");
}

#[test]
fn formatter_describes_a_profiler_row() {
    let formatter = QueryFormatter::new();
    let row = formatter.describe(
        "SELECT * FROM users WHERE email = :email",
        &Params::named([("email", "a@b.c")]),
    );
    assert_eq!(row.summary, "SELECT * FROM users WHERE email = :email");
    assert_eq!(row.runnable, "SELECT * FROM users WHERE email = 'a@b.c'");
    assert_eq!(row.param_count, 1);

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["family"], "select");
}
