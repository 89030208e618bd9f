use super::Parser;
use crate::classify;
use crate::error::{RepairError, RepairErrorKind};

impl Parser {
    /// Parse an object, repairing missing commas, colons, quotes around
    /// keys, and a missing closing brace. A truncated object (ending mid
    /// entry) is closed at the last complete entry.
    pub(super) fn parse_object(&mut self) -> Result<bool, RepairError> {
        if self.cursor.current() != Some('{') {
            return Ok(false);
        }
        self.output.push('{');
        self.cursor.advance(1);
        self.parse_whitespace_and_skip_comments();

        let mut initial = true;
        while !self.cursor.is_at_end() && self.cursor.current() != Some('}') {
            if !initial {
                if !self.parse_character(',') {
                    // repair missing comma
                    self.output.insert_before_last_whitespace(",");
                }
                self.parse_whitespace_and_skip_comments();
            } else {
                initial = false;
            }

            let mut processed_key = self.parse_string(false)?;
            if !processed_key {
                processed_key = self.parse_unquoted_string()?;
            }
            if !processed_key {
                match self.cursor.current() {
                    Some('{' | '}' | '[' | ']') | None => {
                        // truncated object: drop the dangling separator
                        self.output.strip_last_occurrence(',', false);
                    }
                    Some(_) => {
                        return Err(RepairError::new(
                            RepairErrorKind::ObjectKeyExpected,
                            self.cursor.pos(),
                        ));
                    }
                }
                break;
            }

            self.parse_whitespace_and_skip_comments();
            let processed_colon = self.parse_character(':');
            let truncated = self.cursor.is_at_end();
            if !processed_colon {
                if truncated || self.cursor.current().is_some_and(classify::is_start_of_value) {
                    // repair missing colon
                    self.output.insert_before_last_whitespace(":");
                } else {
                    return Err(RepairError::new(
                        RepairErrorKind::ColonExpected,
                        self.cursor.pos(),
                    ));
                }
            }
            if !self.parse_value()? {
                if truncated || processed_colon {
                    // repair missing value
                    self.output.push_str("null");
                } else {
                    return Err(RepairError::new(
                        RepairErrorKind::ColonExpected,
                        self.cursor.pos(),
                    ));
                }
            }
        }

        if self.cursor.current() == Some('}') {
            self.output.push('}');
            self.cursor.advance(1);
        } else {
            // repair missing closing brace
            self.output.insert_before_last_whitespace("}");
        }
        Ok(true)
    }
}
