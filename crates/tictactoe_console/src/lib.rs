//! Console driver for N×N tic-tac-toe.
//!
//! [`GameSession`] runs the prompt/move/announce loop over any
//! `BufRead`/`Write` pair, so the binary hands it stdin/stdout while tests
//! hand it in-memory buffers. [`GameConfig`] carries board size, icons,
//! optional player names and the rematch switch.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod input;
mod session;

pub use config::{ConfigError, GameConfig};
pub use error::{SessionError, SessionErrorKind};
pub use input::parse_position;
pub use session::{GameSession, SessionSummary};
