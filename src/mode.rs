use core::str::FromStr;

use crate::Result;
use crate::codec::QueryCodec;
use crate::error::QueryError;
use crate::map::ParamMap;

/// Operation selector for callers that dispatch by name, such as a
/// template helper receiving `"merge"` or `"pick"` as a string argument.
/// Any other name is an error, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Merge,
    Pick,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Pick => "pick",
        }
    }
}

impl FromStr for Mode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "merge" => Ok(Self::Merge),
            "pick" => Ok(Self::Pick),
            _ => Err(QueryError::InvalidMode),
        }
    }
}

impl QueryCodec {
    /// Run the operation named by `mode` with default options.
    pub fn apply(&self, mode: &str, target: Option<&ParamMap>, fragment: &str) -> Result<String> {
        match mode.parse::<Mode>()? {
            Mode::Merge => Ok(self.merge(target, fragment, false)),
            Mode::Pick => Ok(self.pick(target, fragment)),
        }
    }
}
