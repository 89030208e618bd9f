mod classify;
mod emit;
pub mod error;
pub mod options;
mod parser;
mod repair;

pub use error::{RepairError, RepairErrorKind};
pub use options::Options;

/// Repair a potentially invalid JSON string into a valid JSON string.
/// Handles common issues like single or missing quotes, unquoted keys,
/// missing commas/colons, comments, Python literals, JSONP wrappers,
/// newline-delimited values, and truncated documents. Input that is
/// already strict JSON is returned byte-exact.
///
/// Returns an error with a 0-based code-point position when the input has
/// a defect that cannot be repaired.
pub fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair::repair_to_string(input, opts)
}

#[cfg(feature = "serde")]
/// Repair and then parse into a `serde_json::Value`.
pub fn repair_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    let s = repair_to_string(input, opts)?;
    serde_json::from_str(&s).map_err(|e| RepairError::from_serde("parse", e))
}

#[cfg(test)]
mod tests;
