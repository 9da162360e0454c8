/// Errors surfaced to callers of the query algebra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Charset label not recognized by the encoding table
    UnknownCharset,
    /// Operation name other than `merge` or `pick`
    InvalidMode,
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::UnknownCharset => "Unknown charset label",
            Self::InvalidMode => "Invalid mode, expected merge or pick",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QueryError {}
