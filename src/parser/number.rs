use super::Parser;
use crate::classify;
use crate::error::{RepairError, RepairErrorKind};

impl Parser {
    /// Parse `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` with
    /// repairs: a number cut off at the end of the input is completed with
    /// a `0`, `.5` gains its integer zero, and a number with a leading zero
    /// is emitted quoted, since the user likely meant an identifier like
    /// `0789`.
    pub(super) fn parse_number(&mut self) -> Result<bool, RepairError> {
        let start = self.cursor.pos();

        if self.cursor.current() == Some('-') {
            self.cursor.advance(1);
            if self.expect_digit_or_repair(start)? {
                return Ok(true);
            }
        }
        while self.cursor.current().is_some_and(classify::is_digit) {
            self.cursor.advance(1);
        }
        if self.cursor.current() == Some('.') {
            self.cursor.advance(1);
            if self.expect_digit_or_repair(start)? {
                return Ok(true);
            }
            while self.cursor.current().is_some_and(classify::is_digit) {
                self.cursor.advance(1);
            }
        }
        // A bare `e` is not the start of a number; leave symbols like
        // `email` to the unquoted-string parser.
        if self.cursor.pos() > start && matches!(self.cursor.current(), Some('e' | 'E')) {
            self.cursor.advance(1);
            if matches!(self.cursor.current(), Some('-' | '+')) {
                self.cursor.advance(1);
            }
            if self.expect_digit_or_repair(start)? {
                return Ok(true);
            }
            while self.cursor.current().is_some_and(classify::is_digit) {
                self.cursor.advance(1);
            }
        }

        if self.cursor.pos() == start {
            return Ok(false);
        }
        let num = self.cursor.slice(start, self.cursor.pos());
        self.emit_number_token(num);
        Ok(true)
    }

    /// At the end of the input, complete the truncated number with a `0`
    /// and report the number as finished. Otherwise insist on a digit.
    fn expect_digit_or_repair(&mut self, start: usize) -> Result<bool, RepairError> {
        if self.cursor.is_at_end() {
            let mut num = self.cursor.slice(start, self.cursor.pos());
            num.push('0');
            self.emit_number_token(num);
            Ok(true)
        } else {
            self.expect_digit(start)?;
            Ok(false)
        }
    }

    fn expect_digit(&self, start: usize) -> Result<(), RepairError> {
        match self.cursor.current() {
            Some(c) if !classify::is_digit(c) => Err(RepairError::new(
                RepairErrorKind::ExpectDigit {
                    num_so_far: self.cursor.slice(start, self.cursor.pos()),
                    got: c,
                },
                self.cursor.pos(),
            )),
            _ => Ok(()),
        }
    }

    fn emit_number_token(&mut self, mut num: String) {
        // repair a missing integer part: .5 becomes 0.5
        if num.starts_with('.') {
            num.insert(0, '0');
        }
        if has_invalid_leading_zero(&num) {
            self.output.push('"');
            self.output.push_str(&num);
            self.output.push('"');
        } else {
            self.output.push_str(&num);
        }
    }
}

/// `0789` and `-0789` are not valid JSON numbers; they get quoted instead.
fn has_invalid_leading_zero(num: &str) -> bool {
    let digits = num.strip_prefix('-').unwrap_or(num);
    let bytes = digits.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}
