//! Single-pass, character-indexed recursive-descent repair parser.
//!
//! The parser walks the input once, recognizing standard JSON while
//! rewriting a catalog of deformations inline into the output buffer.
//! Subparsers return a "consumed" flag so the dispatcher can tell "did not
//! apply" apart from "applied successfully"; fatal defects surface as
//! errors and propagate unmodified to the driver. The only backtracking is
//! one bounded rewind inside the string parser.

mod array;
mod cursor;
mod lex;
mod number;
mod object;
mod strings;

use crate::classify;
use crate::emit::OutputBuffer;
use crate::error::{RepairError, RepairErrorKind};
use crate::options::Options;
use cursor::Cursor;

pub(crate) struct Parser {
    cursor: Cursor,
    output: OutputBuffer,
    ensure_ascii: bool,
}

impl Parser {
    pub(crate) fn new(input: &str, opts: &Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            output: OutputBuffer::with_capacity(input.len() + 8),
            ensure_ascii: opts.ensure_ascii,
        }
    }

    /// Repair one document: a value, optionally followed by a trailing
    /// separator, more newline-delimited values, or redundant closers.
    pub(crate) fn repair(mut self) -> Result<String, RepairError> {
        if !self.parse_value()? {
            return Err(RepairError::new(
                RepairErrorKind::UnexpectedEnd,
                self.cursor.len(),
            ));
        }

        let processed_comma = self.parse_character(',');
        if processed_comma {
            self.parse_whitespace_and_skip_comments();
        }

        if self.cursor.current().is_some_and(classify::is_start_of_value)
            && self.output.ends_with_comma_or_newline()
        {
            // newline-delimited JSON: wrap the values into a single array
            if !processed_comma {
                self.output.insert_before_last_whitespace(",");
            }
            self.parse_newline_delimited_json()?;
        } else if processed_comma {
            // a comma after a lone value: strip the dangling separator
            self.output.strip_last_occurrence(',', false);
        }

        // redundant closing brackets after the root value are discarded
        while matches!(self.cursor.current(), Some('}' | ']')) {
            self.cursor.advance(1);
            self.parse_whitespace_and_skip_comments();
        }

        match self.cursor.current() {
            None => Ok(self.output.into_string()),
            Some(c) => Err(RepairError::new(
                RepairErrorKind::UnexpectedCharacter(c),
                self.cursor.pos(),
            )),
        }
    }

    /// Dispatch to the subparsers in fixed order. Exactly one form is
    /// attempted; later forms run only when earlier ones declined without
    /// consuming input.
    fn parse_value(&mut self) -> Result<bool, RepairError> {
        self.parse_whitespace_and_skip_comments();
        let processed = if self.parse_object()? {
            true
        } else if self.parse_array()? {
            true
        } else if self.parse_string(false)? {
            true
        } else if self.parse_number()? {
            true
        } else if self.parse_keywords() {
            true
        } else {
            self.parse_unquoted_string()?
        };
        self.parse_whitespace_and_skip_comments();
        Ok(processed)
    }

    /// Emit and consume `c` when it is the current character.
    fn parse_character(&mut self, c: char) -> bool {
        if self.cursor.current() == Some(c) {
            self.output.push(c);
            self.cursor.advance(1);
            true
        } else {
            false
        }
    }

    /// Consume `c` without emitting it.
    fn skip_character(&mut self, c: char) -> bool {
        if self.cursor.current() == Some(c) {
            self.cursor.advance(1);
            true
        } else {
            false
        }
    }

    fn parse_keywords(&mut self) -> bool {
        self.parse_keyword("true", "true")
            || self.parse_keyword("false", "false")
            || self.parse_keyword("null", "null")
            // Python constants are normalized to their JSON form
            || self.parse_keyword("True", "true")
            || self.parse_keyword("False", "false")
            || self.parse_keyword("None", "null")
    }

    fn parse_keyword(&mut self, name: &str, value: &str) -> bool {
        if !self.cursor.matches_str(name) {
            return false;
        }
        self.output.push_str(value);
        self.cursor.advance(name.len());
        true
    }

    /// Scan a run of non-delimiter characters. A run followed by `(` is a
    /// JSONP or MongoDB-style call: the name is dropped and the argument
    /// unwrapped, e.g. `NumberLong("2")` becomes `"2"`. Anything else is a
    /// bare symbol, emitted as a JSON-encoded string.
    fn parse_unquoted_string(&mut self) -> Result<bool, RepairError> {
        let start = self.cursor.pos();
        while self.cursor.current().is_some_and(|c| !classify::is_delimiter(c)) {
            self.cursor.advance(1);
        }
        if self.cursor.pos() == start {
            return Ok(false);
        }

        if self.cursor.current() == Some('(') {
            self.cursor.advance(1);
            self.parse_value()?;
            if self.cursor.current() == Some(')') {
                self.cursor.advance(1);
                if self.cursor.current() == Some(';') {
                    self.cursor.advance(1);
                }
            }
            return Ok(true);
        }

        // leave trailing whitespace of the run to the caller
        while self.cursor.pos() > start
            && self
                .cursor
                .char_at(self.cursor.pos() - 1)
                .is_some_and(classify::is_whitespace)
        {
            self.cursor.retreat(1);
        }
        let symbol = self.cursor.slice(start, self.cursor.pos());
        if symbol == "undefined" {
            self.output.push_str("null");
        } else {
            strings::encode_json_string(&mut self.output, &symbol, self.ensure_ascii);
        }
        if self.cursor.current() == Some('"') {
            // the symbol had a missing start quote; skip the lone end quote
            self.cursor.advance(1);
        }
        Ok(true)
    }

    /// Parse the remaining newline- or comma-separated values and wrap the
    /// whole output into an array.
    fn parse_newline_delimited_json(&mut self) -> Result<(), RepairError> {
        let mut initial = true;
        loop {
            if !initial {
                if !self.parse_character(',') {
                    // repair missing separator
                    self.output.insert_before_last_whitespace(",");
                }
            } else {
                initial = false;
            }
            if !self.parse_value()? {
                break;
            }
        }
        // the last round parsed no value; drop the separator added for it
        self.output.strip_last_occurrence(',', false);
        self.output.surround("[\n", "\n]");
        Ok(())
    }
}
