use jsonmend::{repair_to_string, Options, RepairErrorKind};

fn repair(input: &str) -> String {
    repair_to_string(input, &Options::default()).unwrap()
}

#[test]
fn lax_object_literal() {
    assert_eq!(
        repair("{a: 'foo', b: \"bar\",}"),
        "{\"a\": \"foo\", \"b\": \"bar\"}"
    );
}

#[test]
fn array_with_trailing_comma() {
    assert_eq!(repair("[1, 2, 3,]"), "[1, 2, 3]");
}

#[test]
fn comment_and_jsonp_wrapper() {
    assert_eq!(repair("/* hi */ callback_123({\"x\":1});"), " {\"x\":1}");
}

#[test]
fn string_concatenation() {
    assert_eq!(repair("\"hello\" + \" world\""), "\"hello world\"");
}

#[test]
fn mongodb_number_long() {
    assert_eq!(repair("{\"a\":NumberLong(\"2\")}"), "{\"a\":\"2\"}");
}

#[test]
fn object_with_newline_separated_entries() {
    assert_eq!(
        repair("{\"a\":2\n\"b\":3\nc:4}"),
        "{\"a\":2,\n\"b\":3,\n\"c\":4}"
    );
}

#[test]
fn truncated_unicode_escape() {
    assert_eq!(repair("{\"foo\":\"bar\\u20"), "{\"foo\":\"bar\"}");
}

#[test]
fn sibling_root_objects_error() {
    let err = repair_to_string("{\"a\":2}{\"b\":3}", &Options::default()).unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedCharacter('{'));
    assert_eq!(err.to_string(), "Unexpected character \"{\" at position 7");
}

#[test]
fn repaired_output_parses_as_json() {
    let inputs = [
        "{a: 1, b: 'two', c: [True, False, None], d: undefined}",
        "{'log': 'line1' + ' line2'}\n{'log': 'line3'}",
        "{\"pi\": 3.14159, \"e\": 2.",
    ];
    for input in inputs {
        let out = repair(input);
        serde_json::from_str::<serde_json::Value>(&out)
            .unwrap_or_else(|e| panic!("invalid output for {input:?}: {e}"));
    }
}

#[cfg(feature = "serde")]
#[test]
fn repair_to_value_round_trip() {
    let v = jsonmend::repair_to_value("{a:1, b:[2,3,]}", &Options::default()).unwrap();
    assert_eq!(v, serde_json::json!({"a": 1, "b": [2, 3]}));
}
