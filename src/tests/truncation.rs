use super::*;

/// Every prefix of a complex document must repair to well-formed JSON or
/// fail with a structured error; malformed output is never acceptable.
#[test]
fn every_prefix_repairs_or_errors() {
    let doc = "{\"a\": [1, -2.5e3, \"str\\u00A9\", {\"nested\": true}], \"b\": null, \"c\": \"x\\ny\"}";
    let chars: Vec<char> = doc.chars().collect();
    for n in 0..=chars.len() {
        let prefix: String = chars[..n].iter().collect();
        match crate::repair_to_string(&prefix, &Options::default()) {
            Ok(out) => assert_valid(&out),
            Err(err) => assert!(err.position <= n, "prefix={prefix:?}"),
        }
    }
}

#[test]
fn truncated_documents_close_cleanly() {
    assert_eq!(repair("{\"a\":[1,2"), "{\"a\":[1,2]}");
    assert_eq!(repair("[{\"a\":1"), "[{\"a\":1}]");
    assert_eq!(repair("{\"a\":\"b"), "{\"a\":\"b\"}");
    assert_eq!(repair("[\"a"), "[\"a\"]");
    assert_eq!(repair("{\"a\":tru"), "{\"a\":\"tru\"}");
}

#[test]
fn truncated_string_with_backslash_at_eof() {
    assert_eq!(repair("\"ab\\"), "\"ab\"");
}
