use crate::error::RepairError;
use crate::options::Options;
use crate::parser::Parser;

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    // Fast path: input that is already strict JSON comes back verbatim.
    // Skipped when ensure_ascii would have to rewrite non-ASCII content.
    #[cfg(feature = "serde")]
    {
        if opts.valid_json_fastpath
            && (!opts.ensure_ascii || input.is_ascii())
            && serde_json::from_str::<serde_json::Value>(input).is_ok()
        {
            return Ok(input.to_string());
        }
    }

    Parser::new(input, opts).repair()
}
