/// Reasons a text line cannot be interpreted as a hex-dump row.
///
/// These are expected outcomes, not failures: callers skip the line and move
/// on (non-dump lines are common in driver logs).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Timestamp stripping was requested but the `[..] ` prefix is absent.
    #[error("missing [timestamp] prefix")]
    MissingTimestamp,

    /// The `": "` separator between offset and byte values is absent.
    #[error("missing offset separator")]
    MissingSeparator,

    /// The address offset field is not valid hex.
    #[error("invalid address offset {0:?}")]
    InvalidOffset(String),

    /// A byte token is not exactly two hex digits.
    #[error("invalid byte token {0:?}")]
    InvalidByte(String),

    /// The row carries more byte values than a dump row can hold.
    #[error("row carries more than {} byte values", crate::line::MAX_LINE_BYTES)]
    TooManyBytes,
}

pub type Result<T> = std::result::Result<T, LineError>;
