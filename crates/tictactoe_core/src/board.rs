//! The N×N grid and its move/winner contract.

use crate::error::{BoardError, BoardErrorKind};
use crate::rules::{draw, win};
use crate::types::{Player, Square};
use tracing::{debug, instrument};

/// Side length used by [`Board::default`].
pub const DEFAULT_DIMENSION: usize = 3;

/// Largest side length [`Board::new`] accepts.
pub const MAX_DIMENSION: usize = 1024;

/// Terminal result of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player owns a complete line.
    Winner(Player),
    /// Every square is occupied and no line is owned.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player.name()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Square tic-tac-toe board of arbitrary dimension.
///
/// Squares are stored in row-major order: index `i` is row `i / N`,
/// column `i % N`. Positions passed to [`Board::make_move`] are 1-based,
/// matching the numbers shown by [`Board::render`]. An occupied square is
/// never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty `dimension × dimension` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardErrorKind::ZeroDimension`] for a zero dimension and
    /// [`BoardErrorKind::DimensionTooLarge`] above [`MAX_DIMENSION`].
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::new(BoardErrorKind::ZeroDimension));
        }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::new(BoardErrorKind::DimensionTooLarge(dimension)));
        }
        Ok(Self::empty(dimension))
    }

    /// Builds an empty board; `dimension` must be in `1..=MAX_DIMENSION`.
    #[instrument]
    fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            squares: vec![Square::Empty; dimension * dimension],
        }
    }

    /// Side length N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of squares (N²).
    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at a 0-based index.
    pub fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Converts a 1-based position to a 0-based index if it is on the board.
    fn index_of(&self, position: i64) -> Option<usize> {
        let index = usize::try_from(position.checked_sub(1)?).ok()?;
        (index < self.squares.len()).then_some(index)
    }

    /// Checks if the square at a 1-based position exists and is empty.
    pub fn is_empty_at(&self, position: i64) -> bool {
        self.index_of(position)
            .is_some_and(|index| self.squares[index].is_empty())
    }

    /// Places `player` at a 1-based position.
    ///
    /// Returns `true` and occupies the square if the position is within
    /// `1..=N²` and the square is empty. Otherwise returns `false` and
    /// leaves the board untouched; rejection is not an error.
    #[instrument(skip(self, player), fields(player = %player.name(), dimension = self.dimension))]
    pub fn make_move(&mut self, position: i64, player: &Player) -> bool {
        let Some(index) = self.index_of(position) else {
            debug!("Rejected move: position off the board");
            return false;
        };
        if !self.squares[index].is_empty() {
            debug!("Rejected move: square occupied");
            return false;
        }
        self.squares[index] = Square::Occupied(player.clone());
        debug!(index, "Move accepted");
        true
    }

    /// Returns the occupant of the first fully owned line.
    ///
    /// Rows are scanned first, then columns, then the main and the
    /// anti-diagonal.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<&Player> {
        win::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        draw::is_full(self)
    }

    /// Returns the terminal result, or `None` while the game can go on.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.winner() {
            return Some(Outcome::Winner(winner.clone()));
        }
        draw::is_draw(self).then_some(Outcome::Draw)
    }

    /// 1-based positions of all empty squares, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Number of occupied squares.
    pub fn moves_made(&self) -> usize {
        self.squares.iter().filter(|square| !square.is_empty()).count()
    }

    /// Formats the board as display rows.
    ///
    /// Empty squares show their 1-based position, occupied squares their
    /// occupant's icon. Cells are space separated and right-aligned to the
    /// widest position label.
    pub fn render(&self) -> Vec<String> {
        let width = self.squares.len().to_string().len();
        self.squares
            .chunks(self.dimension)
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, square)| {
                        let label = match square {
                            Square::Empty => (row * self.dimension + col + 1).to_string(),
                            Square::Occupied(player) => player.icon().clone(),
                        };
                        format!("{label:>width$}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_DIMENSION)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Board::new(0).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::ZeroDimension);
    }

    #[test]
    fn test_huge_dimension_rejected() {
        let err = Board::new(usize::MAX).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::DimensionTooLarge(usize::MAX));
    }

    #[test]
    fn test_dimension_beyond_limit_rejected() {
        for dimension in [MAX_DIMENSION + 1, 1 << 31] {
            let err = Board::new(dimension).unwrap_err();
            assert_eq!(err.kind, BoardErrorKind::DimensionTooLarge(dimension));
        }
    }

    #[test]
    fn test_limit_accepted() {
        let board = Board::new(MAX_DIMENSION).unwrap();
        assert_eq!(board.square_count(), MAX_DIMENSION * MAX_DIMENSION);
    }

    #[test]
    fn test_default_is_three_by_three() {
        let board = Board::default();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.square_count(), 9);
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_one_by_one_board() {
        let a = Player::new("A", "X");
        let mut board = Board::new(1).unwrap();
        assert!(board.make_move(1, &a));
        assert_eq!(board.winner(), Some(&a));
        assert_eq!(board.outcome(), Some(Outcome::Winner(a)));
    }

    #[test]
    fn test_out_of_range_positions_rejected() {
        let a = Player::new("A", "X");
        let mut board = Board::default();
        for position in [i64::MIN, -1, 0, 10, i64::MAX] {
            assert!(!board.make_move(position, &a), "position {position}");
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_render_widths_for_larger_board() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.render()[0], " 1  2  3  4");
        assert_eq!(board.render()[3], "13 14 15 16");
    }

    #[test]
    fn test_empty_positions_and_moves_made() {
        let a = Player::new("A", "X");
        let mut board = Board::default();
        board.make_move(2, &a);
        board.make_move(9, &a);
        assert_eq!(board.empty_positions(), vec![1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.moves_made(), 2);
        assert!(!board.is_empty_at(2));
        assert!(board.is_empty_at(1));
        assert!(!board.is_empty_at(0));
    }
}
