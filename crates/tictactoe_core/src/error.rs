//! Board construction errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Dimension was zero.
    #[display("board dimension must be at least 1")]
    ZeroDimension,
    /// Dimension above [`MAX_DIMENSION`](crate::MAX_DIMENSION).
    #[display("board dimension {} exceeds the maximum of {}", _0, crate::MAX_DIMENSION)]
    DimensionTooLarge(usize),
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
