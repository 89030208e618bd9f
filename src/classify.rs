//! Pure code-point predicates used by the repair parser.

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Plain ASCII whitespace: space, tab, newline, carriage return.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Unicode whitespace variants that get repaired into a regular space.
#[inline]
pub fn is_special_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Control characters that have a short JSON escape.
#[inline]
pub fn is_control_character(c: char) -> bool {
    matches!(c, '\u{08}' | '\u{0C}' | '\n' | '\r' | '\t')
}

#[inline]
pub fn is_valid_string_character(c: char) -> bool {
    (0x20..=0x10FFFF).contains(&(c as u32))
}

#[inline]
pub fn is_double_quote(c: char) -> bool {
    c == '"'
}

#[inline]
pub fn is_single_quote(c: char) -> bool {
    c == '\''
}

#[inline]
pub fn is_double_quote_like(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

#[inline]
pub fn is_single_quote_like(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{60}' | '\u{B4}')
}

#[inline]
pub fn is_quote(c: char) -> bool {
    is_double_quote_like(c) || is_single_quote_like(c)
}

/// Delimiters bound unquoted symbols and delimiter-terminated string scans.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ',' | ':' | '[' | ']' | '{' | '}' | '(' | ')' | '\n' | '+'
    ) || is_quote(c)
}

#[inline]
pub fn is_start_of_value(c: char) -> bool {
    matches!(c, '[' | '{' | '-' | '_') || c.is_ascii_alphanumeric() || is_quote(c)
}
