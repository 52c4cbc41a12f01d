//! Session error types.

use derive_more::{Display, Error};
use tictactoe_core::{BoardError, BoardErrorKind};
use tracing::instrument;

/// Why a session stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// Input ended while an answer was awaited.
    #[display("input closed while waiting for {}", _0)]
    InputClosed(String),
    /// Reading or writing the console failed.
    #[display("console I/O failed: {}", _0)]
    Io(String),
    /// The configured board could not be built.
    #[display("{}", _0)]
    Board(BoardErrorKind),
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// Error kind.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SessionError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(SessionErrorKind::Io(err.to_string()))
    }
}

impl From<BoardError> for SessionError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(SessionErrorKind::Board(err.kind))
    }
}
