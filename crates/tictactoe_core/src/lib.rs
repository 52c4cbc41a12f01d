//! Pure N×N tic-tac-toe logic.
//!
//! The [`Board`] owns an `N×N` grid of [`Square`]s, accepts 1-based moves and
//! reports the [`Player`] owning a complete row, column or diagonal. Nothing
//! here performs I/O; the console driver lives in `tictactoe_console`.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Player};
//!
//! let alice = Player::new("Alice", "X");
//! let mut board = Board::default();
//! for position in [1, 2, 3] {
//!     assert!(board.make_move(position, &alice));
//! }
//! assert_eq!(board.winner(), Some(&alice));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
mod types;

pub use board::{Board, DEFAULT_DIMENSION, MAX_DIMENSION, Outcome};
pub use error::{BoardError, BoardErrorKind};
pub use rules::win::{Line, LineKind};
pub use types::{Player, PlayerId, Square};
