//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{instrument, trace};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Player`], unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{}", _0)]
pub struct PlayerId(u64);

impl PlayerId {
    fn next() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A participant: a display name and the icon drawn on occupied squares.
///
/// Players compare by identity. Every call to [`Player::new`] yields a
/// distinct player even when name and icon repeat; clones share the
/// original's identity.
#[derive(Debug, Clone, Getters)]
pub struct Player {
    /// Identity used for line ownership.
    id: PlayerId,
    /// Display name, echoed in prompts.
    name: String,
    /// Token rendered on the board.
    icon: String,
}

impl Player {
    /// Creates a new player with a fresh identity.
    #[instrument(skip_all)]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        let player = Self {
            id: PlayerId::next(),
            name: name.into(),
            icon: icon.into(),
        };
        trace!(id = %player.id, name = %player.name, icon = %player.icon, "Player created");
        player
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.icon)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn occupant(&self) -> Option<&Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}
