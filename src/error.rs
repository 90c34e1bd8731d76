use thiserror::Error;

/// Errors raised when converting or rendering sequences.
///
/// Generation and analysis are total and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid symbol: {0} (expected 1 or 2)")]
    InvalidSymbol(u8),

    #[error("Row width must be at least 1")]
    ZeroWidth,
}

pub type Result<T> = std::result::Result<T, Error>;
