use std::fmt;

/// Defects the repair parser cannot fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairErrorKind {
    /// The input contained no value at all.
    UnexpectedEnd,
    /// Surplus content after a complete value.
    UnexpectedCharacter(char),
    ObjectKeyExpected,
    ColonExpected,
    /// A digit was missing mid-number, e.g. `2e,`.
    ExpectDigit { num_so_far: String, got: char },
    /// A malformed `\u` escape or a forbidden raw control code.
    InvalidUnicodeCharacter(String),
    /// Bridge kind for post-repair validation; never produced by the
    /// repair parser itself.
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
    /// 0-based code-point index into the input.
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    #[cfg(feature = "serde")]
    pub(crate) fn from_serde(what: &str, err: serde_json::Error) -> Self {
        let pos = err.line(); // coarse fallback
        Self {
            kind: RepairErrorKind::Parse(format!("serde_json {} error: {}", what, err)),
            position: pos,
        }
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RepairErrorKind::UnexpectedEnd => {
                write!(f, "Unexpected end of json string at position {}", self.position)
            }
            RepairErrorKind::UnexpectedCharacter(c) => {
                write!(f, "Unexpected character \"{}\" at position {}", c, self.position)
            }
            RepairErrorKind::ObjectKeyExpected => {
                write!(f, "Object key expected at position {}", self.position)
            }
            RepairErrorKind::ColonExpected => {
                write!(f, "Colon expected at position {}", self.position)
            }
            RepairErrorKind::ExpectDigit { num_so_far, got } => {
                write!(
                    f,
                    "Invalid number '{}', expecting a digit but got '{}' at position {}",
                    num_so_far, got, self.position
                )
            }
            RepairErrorKind::InvalidUnicodeCharacter(fragment) => {
                write!(
                    f,
                    "Invalid unicode character \"{}\" at position {}",
                    fragment, self.position
                )
            }
            RepairErrorKind::Parse(msg) => write!(f, "{} at position {}", msg, self.position),
        }
    }
}

impl std::error::Error for RepairError {}
