//! Declaration and reference behaviour over whole inputs
//!
//! The configurations below mirror the kind of files the tool is used for:
//! web server, database, and application settings.

use constyaml_parser::{ParseError, ParseErrorKind, Parser, Value};
use rstest::rstest;

fn strings(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|s| Value::from(*s)).collect())
}

#[test]
fn web_server_config() {
    let mut parser = Parser::new();
    parser
        .parse([
            r#"const server_name = "my_server";"#,
            "const port = 8080;",
            r#"const allowed_ips = ("192.168.1.1", "192.168.1.2");"#,
        ])
        .unwrap();

    assert_eq!(parser.get("server_name"), Some(&Value::from("my_server")));
    assert_eq!(parser.get("port"), Some(&Value::from(8080)));
    assert_eq!(
        parser.get("allowed_ips"),
        Some(&strings(&["192.168.1.1", "192.168.1.2"]))
    );
}

#[test]
fn database_config() {
    let mut parser = Parser::new();
    parser
        .parse([
            r#"const db_name = "my_database";"#,
            r#"const db_user = "admin";"#,
            r#"const db_password = "secret";"#,
            r#"const db_hosts = ("localhost", "192.168.1.10");"#,
        ])
        .unwrap();

    assert_eq!(parser.get("db_name"), Some(&Value::from("my_database")));
    assert_eq!(parser.get("db_user"), Some(&Value::from("admin")));
    assert_eq!(parser.get("db_password"), Some(&Value::from("secret")));
    assert_eq!(
        parser.get("db_hosts"),
        Some(&strings(&["localhost", "192.168.1.10"]))
    );
}

#[test]
fn application_config() {
    let mut parser = Parser::new();
    parser
        .parse([
            r#"const app_name = "MyApp";"#,
            r#"const version = "1.0.0";"#,
            r#"const features = ("feature1", "feature2", "feature3");"#,
        ])
        .unwrap();

    assert_eq!(parser.get("app_name"), Some(&Value::from("MyApp")));
    assert_eq!(parser.get("version"), Some(&Value::from("1.0.0")));
    assert_eq!(
        parser.get("features"),
        Some(&strings(&["feature1", "feature2", "feature3"]))
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let mut parser = Parser::new();
    parser
        .parse(["\t const port = 8080;\n", "   .(port).   "])
        .unwrap();
    assert_eq!(parser.get("port"), Some(&Value::from(8080)));
}

#[test]
fn lone_quote_declares_empty_string() {
    let mut parser = Parser::new();
    parser
        .parse([r#"const x = ";"#, r#"const list = (");"#])
        .unwrap();

    assert_eq!(parser.get("x"), Some(&Value::from("")));
    assert_eq!(parser.get("list"), Some(&strings(&[""])));
}

#[test]
fn syntax_error_carries_line_as_given() {
    let mut parser = Parser::new();
    let err = parser.parse(["   what is this  "]).unwrap_err();

    match err {
        ParseError::Syntax { line, .. } => assert_eq!(line, "   what is this  "),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn last_declaration_wins() {
    let mut parser = Parser::new();
    parser
        .parse([r#"const name = "Bob";"#, r#"const name = "Alice";"#])
        .unwrap();

    assert_eq!(parser.len(), 1);
    assert_eq!(parser.get("name"), Some(&Value::from("Alice")));
}

#[test]
fn reference_does_not_change_table() {
    let mut parser = Parser::new();
    parser.parse(["const a = 1;", ".(a).", ".(a)."]).unwrap();

    assert_eq!(parser.len(), 1);
    assert_eq!(parser.get("a"), Some(&Value::from(1)));
}

#[test]
fn undeclared_reference_keeps_earlier_bindings() {
    let mut parser = Parser::new();
    let err = parser.parse([r#"const x = "a";"#, ".(y)."]).unwrap_err();

    assert_eq!(
        err,
        ParseError::UndeclaredName {
            name: "y".to_string()
        }
    );
    assert_eq!(parser.get("x"), Some(&Value::from("a")));
}

#[test]
fn reference_before_declaration_fails() {
    let mut parser = Parser::new();
    let err = parser.parse([".(port).", "const port = 1;"]).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UndeclaredName);
    assert!(parser.is_empty());
}

#[test]
fn first_error_stops_processing() {
    let mut parser = Parser::new();
    let err = parser
        .parse(["const a = 1;", "garbage", "const b = 2;"])
        .unwrap_err();

    assert_eq!(err.kind(), ParseErrorKind::Syntax);
    assert!(err.to_string().contains("unrecognized construct"));
    assert!(parser.get("a").is_some());
    assert!(parser.get("b").is_none());
}

#[test]
fn parsing_resumes_from_partial_state() {
    let mut parser = Parser::new();
    parser.parse(["const a = 1;", "const b = oops;"]).unwrap_err();
    parser.parse([".(a).", "const b = 2;"]).unwrap();

    assert_eq!(parser.get("a"), Some(&Value::from(1)));
    assert_eq!(parser.get("b"), Some(&Value::from(2)));
}

#[test]
fn independent_parsers_do_not_share_state() {
    let mut first = Parser::new();
    let mut second = Parser::new();
    first.parse(["const shared = 1;"]).unwrap();

    let err = second.parse([".(shared)."]).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UndeclaredName);
}

#[rstest]
#[case::missing_equals(r#"const name "John";"#)]
#[case::missing_terminator("const port = 8080")]
#[case::bad_identifier("const 1abc = 1;")]
#[case::uppercase_identifier("const Port = 1;")]
#[case::empty_value("const port = ;")]
#[case::blank_line("")]
#[case::comment("// const port = 1;")]
#[case::assignment_without_keyword("port = 8080;")]
#[case::reference_with_spaces(".( port ).")]
#[case::reference_with_expression(".(a + b).")]
fn syntax_errors(#[case] line: &str) {
    let mut parser = Parser::new();
    let err = parser.parse([line]).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Syntax, "{err}");
}

#[rstest]
#[case::braces("const bad = {1,2};", "{1,2}")]
#[case::set_literal("const invalid = {1, 2, 3};", "{1, 2, 3}")]
#[case::bare_word("const mode = production;", "production")]
#[case::float("const ratio = 1.5;", "1.5")]
#[case::boolean("const debug = true;", "true")]
#[case::negative("const offset = -1;", "-1")]
#[case::bad_array_item("const list = (1, two);", "two")]
#[case::nested_commas("const grid = ((1, 2), 3);", "(1")]
fn value_errors(#[case] line: &str, #[case] text: &str) {
    let mut parser = Parser::new();
    let err = parser.parse([line]).unwrap_err();
    assert_eq!(
        err,
        ParseError::Value {
            text: text.to_string()
        }
    );
}
