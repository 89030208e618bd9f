#[derive(Clone, Debug)]
pub struct Options {
    /// When true, escape non-ASCII characters in emitted strings as \uXXXX
    /// (surrogate pairs above the BMP). Off by default: string contents are
    /// preserved verbatim.
    pub ensure_ascii: bool,
    /// Validate the input first and return it verbatim when it is already
    /// strict JSON. Only consulted when the `serde` feature is enabled.
    pub valid_json_fastpath: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ensure_ascii: false,
            valid_json_fastpath: true,
        }
    }
}
