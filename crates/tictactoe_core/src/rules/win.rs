//! Win detection logic for tic-tac-toe.
//!
//! A line is N square indices; it is won when its first square is occupied
//! and every other square holds the same player. The four line shapes
//! differ only in how a square index is computed from the line offset `p`
//! and the position `q` along it.

use crate::{Board, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Shape of a line, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum LineKind {
    /// Horizontal line; `N` of them.
    #[strum(to_string = "row")]
    Row,
    /// Vertical line; `N` of them.
    #[strum(to_string = "column")]
    Column,
    /// Top-left to bottom-right; exactly one.
    #[strum(to_string = "main diagonal")]
    MainDiagonal,
    /// Bottom-left to top-right; exactly one.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// Number of lines of this shape on an `N×N` board.
    pub fn count(self, dimension: usize) -> usize {
        match self {
            LineKind::Row | LineKind::Column => dimension,
            LineKind::MainDiagonal | LineKind::AntiDiagonal => 1,
        }
    }
}

/// One row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Shape of the line.
    pub kind: LineKind,
    /// Row or column number (0-based); always 0 for diagonals.
    pub offset: usize,
}

impl Line {
    /// Square index of the `q`-th cell of this line on an `N×N` board.
    pub fn index(self, dimension: usize, q: usize) -> usize {
        let (n, p) = (dimension, self.offset);
        match self.kind {
            LineKind::Row => p * n + q,
            LineKind::Column => q * n + p,
            LineKind::MainDiagonal => q * n + q,
            LineKind::AntiDiagonal => n * (n - 1 - q) + q,
        }
    }

    /// All square indices of this line.
    pub fn indices(self, dimension: usize) -> impl Iterator<Item = usize> {
        (0..dimension).map(move |q| self.index(dimension, q))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LineKind::Row | LineKind::Column => write!(f, "{} {}", self.kind, self.offset + 1),
            LineKind::MainDiagonal | LineKind::AntiDiagonal => write!(f, "{}", self.kind),
        }
    }
}

/// Every line of an `N×N` board: rows, then columns, then both diagonals.
pub fn lines(dimension: usize) -> impl Iterator<Item = Line> {
    LineKind::iter().flat_map(move |kind| {
        (0..kind.count(dimension)).map(move |offset| Line { kind, offset })
    })
}

/// Returns the player owning every square of `line`, if any.
pub fn line_owner(board: &Board, line: Line) -> Option<&Player> {
    let dimension = board.dimension();
    let mut indices = line.indices(dimension);
    let candidate = board.square(indices.next()?)?.occupant()?;
    indices
        .all(|index| board.square(index).and_then(|s| s.occupant()) == Some(candidate))
        .then_some(candidate)
}

/// Returns the first owned line and its owner.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn winning_line(board: &Board) -> Option<(Line, &Player)> {
    let found = lines(board.dimension())
        .find_map(|line| line_owner(board, line).map(|player| (line, player)));
    if let Some((line, player)) = &found {
        debug!(%line, winner = %player.name(), "Line owned");
    }
    found
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns a complete line,
/// `None` otherwise.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn check_winner(board: &Board) -> Option<&Player> {
    winning_line(board).map(|(_, player)| player)
}
