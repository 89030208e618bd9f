use super::Parser;
use crate::classify;

impl Parser {
    /// Alternate between whitespace runs and comments until neither
    /// applies. Whitespace is emitted verbatim; comments are dropped.
    pub(super) fn parse_whitespace_and_skip_comments(&mut self) -> bool {
        let start = self.cursor.pos();
        self.parse_whitespace();
        while self.parse_comment() {
            self.parse_whitespace();
        }
        self.cursor.pos() > start
    }

    fn parse_whitespace(&mut self) -> bool {
        let mut whitespace = String::new();
        while let Some(c) = self.cursor.current() {
            if classify::is_whitespace(c) {
                whitespace.push(c);
            } else if classify::is_special_whitespace(c) {
                // repair: replace the exotic whitespace with a regular space
                whitespace.push(' ');
            } else {
                break;
            }
            self.cursor.advance(1);
        }
        if whitespace.is_empty() {
            return false;
        }
        self.output.push_str(&whitespace);
        true
    }

    fn parse_comment(&mut self) -> bool {
        if self.cursor.current() == Some('/') && self.cursor.peek(1) == Some('*') {
            // block comment, terminated by */ or silently by end of input
            while !self.cursor.is_at_end() && !self.at_end_of_block_comment() {
                self.cursor.advance(1);
            }
            self.cursor.advance(2);
            return true;
        }
        if self.cursor.current() == Some('/') && self.cursor.peek(1) == Some('/') {
            // line comment, up to but not including the next newline
            while !self.cursor.is_at_end() && self.cursor.current() != Some('\n') {
                self.cursor.advance(1);
            }
            return true;
        }
        false
    }

    fn at_end_of_block_comment(&self) -> bool {
        self.cursor.current() == Some('*') && self.cursor.peek(1) == Some('/')
    }

    /// First non-whitespace character at or after `start`.
    pub(super) fn next_non_whitespace(&self, start: usize) -> Option<char> {
        let mut i = start;
        while let Some(c) = self.cursor.char_at(i) {
            if !classify::is_whitespace(c) {
                return Some(c);
            }
            i += 1;
        }
        None
    }
}
