use super::*;

#[test]
fn block_and_line_comments_are_dropped() {
    assert_eq!(repair("{/* c */ \"a\":1}"), "{ \"a\":1}");
    assert_eq!(repair("// c\n[1]"), "\n[1]");
    assert_eq!(repair("{\"a\":1} // trailing"), "{\"a\":1} ");
    assert_eq!(repair("[1 /* two */, 2]"), "[1 , 2]");
}

#[test]
fn unterminated_block_comment_ends_at_eof() {
    assert_eq!(repair("[1] /* foo"), "[1] ");
}

#[test]
fn jsonp_with_leading_comment() {
    assert_eq!(repair("/* hi */ callback_123({\"x\":1});"), " {\"x\":1}");
}

#[test]
fn special_whitespace_becomes_a_regular_space() {
    assert_eq!(repair("{\u{A0}\"a\":\u{2009}1}"), "{ \"a\": 1}");
    assert_eq!(repair("[1,\u{3000}2]"), "[1, 2]");
}

#[test]
fn user_whitespace_is_preserved() {
    assert_eq!(
        repair("{\n  a: 1,\n  b: 2\n}"),
        "{\n  \"a\": 1,\n  \"b\": 2\n}"
    );
}
