// Internal modules (not public API)
mod algebra;
mod codec;
mod error;
mod map;
mod mode;

// Public API
pub use codec::{ParsedQuery, QueryCodec};
pub use error::QueryError;
pub use map::ParamMap;
pub use mode::Mode;

/// Result type for query algebra operations
pub type Result<T> = core::result::Result<T, QueryError>;
