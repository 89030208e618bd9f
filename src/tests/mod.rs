use super::*;

// Shared test helpers

fn repair(input: &str) -> String {
    crate::repair_to_string(input, &Options::default()).unwrap()
}

/// Repair with the valid-input fast path disabled, so valid documents are
/// driven through the full parser.
fn repair_no_fastpath(input: &str) -> String {
    let opts = Options {
        valid_json_fastpath: false,
        ..Options::default()
    };
    crate::repair_to_string(input, &opts).unwrap()
}

fn repair_err(input: &str) -> RepairError {
    crate::repair_to_string(input, &Options::default()).unwrap_err()
}

fn assert_valid(out: &str) {
    serde_json::from_str::<serde_json::Value>(out)
        .unwrap_or_else(|e| panic!("output is not valid JSON: {e}: {out}"));
}

mod comments_ws;
mod truncation;
