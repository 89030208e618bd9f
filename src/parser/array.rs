use super::Parser;
use crate::error::RepairError;

impl Parser {
    /// Parse an array, repairing missing commas, a trailing comma, and a
    /// missing closing bracket.
    pub(super) fn parse_array(&mut self) -> Result<bool, RepairError> {
        if self.cursor.current() != Some('[') {
            return Ok(false);
        }
        self.output.push('[');
        self.cursor.advance(1);
        self.parse_whitespace_and_skip_comments();

        let mut initial = true;
        while !self.cursor.is_at_end() && self.cursor.current() != Some(']') {
            if !initial {
                if !self.parse_character(',') {
                    // repair missing comma
                    self.output.insert_before_last_whitespace(",");
                }
            } else {
                initial = false;
            }
            if !self.parse_value()? {
                // trailing comma or truncated array
                self.output.strip_last_occurrence(',', false);
                break;
            }
        }

        if self.cursor.current() == Some(']') {
            self.output.push(']');
            self.cursor.advance(1);
        } else {
            // repair missing closing bracket
            self.output.insert_before_last_whitespace("]");
        }
        Ok(true)
    }
}
