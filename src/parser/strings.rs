use super::Parser;
use crate::classify;
use crate::emit::OutputBuffer;
use crate::error::{RepairError, RepairErrorKind};

impl Parser {
    /// Parse a string starting at any quote variant and emit it with
    /// normalized straight double quotes.
    ///
    /// The primary scan runs to the matching end quote. When that close
    /// turns out not to be a plausible string end (no quote at all, or a
    /// quote not followed by a delimiter), the whole parse rewinds once and
    /// rescans with termination at the first delimiter instead, which
    /// recovers strings with a missing end quote without swallowing the
    /// rest of the document. The retry commits; nested retries do not occur.
    ///
    /// The string body is built in a scratch buffer that is merged into the
    /// main output only when the parse is finalized, so the rewind leaves
    /// no trace.
    pub(super) fn parse_string(&mut self, stop_at_delimiter: bool) -> Result<bool, RepairError> {
        // An escaped opening quote ("\"hello\"" style over-escaping): drop
        // the backslash and keep dropping the escapes inside the body.
        let mut skip_escape_chars = false;
        if self.cursor.current() == Some('\\') {
            skip_escape_chars = true;
            self.cursor.advance(1);
        }
        let open = match self.cursor.current() {
            Some(c) if classify::is_quote(c) => c,
            _ => return Ok(false),
        };
        let is_end_quote: fn(char) -> bool = if classify::is_double_quote(open) {
            classify::is_double_quote
        } else if classify::is_single_quote(open) {
            classify::is_single_quote
        } else if classify::is_single_quote_like(open) {
            classify::is_single_quote_like
        } else {
            classify::is_double_quote_like
        };

        let i_before = self.cursor.pos();
        let mut tmp = OutputBuffer::new();
        tmp.push('"');
        self.cursor.advance(1);

        loop {
            let c = match self.cursor.current() {
                Some(c) => c,
                None => break,
            };
            let at_end = if stop_at_delimiter {
                classify::is_delimiter(c)
            } else {
                is_end_quote(c)
            };
            if at_end {
                break;
            }

            if c == '\\' {
                match self.cursor.peek(1) {
                    Some(esc @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                        tmp.push('\\');
                        tmp.push(esc);
                        self.cursor.advance(2);
                    }
                    Some('u') => {
                        let mut j = 2;
                        while j < 6 && self.cursor.peek(j).is_some_and(classify::is_hex) {
                            j += 1;
                        }
                        if j == 6 {
                            let pos = self.cursor.pos();
                            tmp.push_str(&self.cursor.slice(pos, pos + 6));
                            self.cursor.advance(6);
                        } else if self.cursor.pos() + j >= self.cursor.len() {
                            // escape cut off by the end of the input: drop it
                            self.cursor.jump_to_end();
                        } else {
                            let pos = self.cursor.pos();
                            let fragment = self.cursor.slice(pos, pos + 6);
                            return Err(RepairError::new(
                                RepairErrorKind::InvalidUnicodeCharacter(fragment),
                                pos,
                            ));
                        }
                    }
                    Some(other) => {
                        // unknown escape: drop the backslash, keep the character
                        if classify::is_control_character(other) {
                            tmp.push_str(control_escape(other));
                        } else if self.ensure_ascii && !other.is_ascii() {
                            tmp.push_unicode_escape(other);
                        } else {
                            tmp.push(other);
                        }
                        self.cursor.advance(2);
                    }
                    None => {
                        self.cursor.advance(2);
                    }
                }
            } else if c == '"' && self.cursor.char_at(self.cursor.pos() - 1) != Some('\\') {
                // a raw double quote inside a single-quoted or fancy-quoted body
                tmp.push_str("\\\"");
                self.cursor.advance(1);
            } else if classify::is_control_character(c) {
                tmp.push_str(control_escape(c));
                self.cursor.advance(1);
            } else if !classify::is_valid_string_character(c) {
                return Err(RepairError::new(
                    RepairErrorKind::InvalidUnicodeCharacter(c.to_string()),
                    self.cursor.pos(),
                ));
            } else {
                if self.ensure_ascii && !c.is_ascii() {
                    tmp.push_unicode_escape(c);
                } else {
                    tmp.push(c);
                }
                self.cursor.advance(1);
            }

            if skip_escape_chars {
                self.skip_escape_character();
            }
        }

        let has_end_quote = self.cursor.current().is_some_and(classify::is_quote);
        // A quote only closes the string when nothing but whitespace and a
        // delimiter follow; otherwise a start quote was likely missing
        // somewhere and this quote belongs to the next token.
        let valid = has_end_quote
            && (self.cursor.pos() + 1 >= self.cursor.len()
                || self
                    .next_non_whitespace(self.cursor.pos() + 1)
                    .is_some_and(classify::is_delimiter));
        if !valid && !stop_at_delimiter {
            self.cursor.set_pos(i_before);
            return self.parse_string(true);
        }

        if has_end_quote {
            tmp.push('"');
            self.cursor.advance(1);
        } else {
            // missing end quote
            tmp.insert_before_last_whitespace("\"");
        }
        self.output.push_str(tmp.as_str());

        self.parse_concatenated_string()?;
        Ok(true)
    }

    /// Merge `"a" + "b"` style concatenations into a single string.
    pub(super) fn parse_concatenated_string(&mut self) -> Result<bool, RepairError> {
        let mut processed = false;
        self.parse_whitespace_and_skip_comments();
        while self.cursor.current() == Some('+') {
            processed = true;
            self.cursor.advance(1);
            self.parse_whitespace_and_skip_comments();
            // drop the right quote of the left operand, and any whitespace
            // emitted after it
            self.output.strip_last_occurrence('"', true);
            let start = self.output.len();
            if self.parse_string(false)? {
                // drop the left quote the right operand just emitted
                self.output.remove_at(start);
            } else {
                // missing right operand: restore the closing quote
                self.output.insert_before_last_whitespace("\"");
            }
        }
        Ok(processed)
    }

    fn skip_escape_character(&mut self) -> bool {
        self.skip_character('\\')
    }
}

fn control_escape(c: char) -> &'static str {
    match c {
        '\u{08}' => "\\b",
        '\u{0C}' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        _ => "\\t",
    }
}

/// Encode `s` as a JSON string literal: quotes, backslashes and control
/// characters escaped, everything else verbatim unless `ensure_ascii`
/// forces non-ASCII into `\uXXXX` form.
pub(super) fn encode_json_string(out: &mut OutputBuffer, s: &str, ensure_ascii: bool) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_unicode_escape(c),
            c if ensure_ascii && !c.is_ascii() => out.push_unicode_escape(c),
            c => out.push(c),
        }
    }
    out.push('"');
}
