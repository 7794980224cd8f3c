//! Player, Position, and per-game availability status.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in slots, status maps, and lookups).
pub type PlayerId = Uuid;

/// On-ice position. Slot 0 of the ready list and lineup is reserved for a
/// goalie; field players (forwards and defenders) go in slots 1-15.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalie,
    Forward,
    Defender,
}

impl Position {
    /// Short label for lists and the printable sheet.
    pub fn short(&self) -> &'static str {
        match self {
            Position::Goalie => "G",
            Position::Forward => "F",
            Position::Defender => "D",
        }
    }

    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::Goalie)
    }
}

/// A player's availability for one game. "No status" is absence from the
/// game's status map, not a variant here.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    /// Confirmed and holding a slot in the ready list.
    Ready,
    NotReady,
    Doubtful,
    /// Asked, answer pending.
    Survey,
}

/// A player on the team roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number; 0 means unknown and is displayed as "?".
    pub number: u32,
    pub position: Position,
}

impl Player {
    /// Create a new player. The caller validates the name (non-empty after
    /// trimming) before constructing.
    pub fn new(name: impl Into<String>, number: u32, position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number,
            position,
        }
    }

    /// Jersey number for display ("?" when unknown).
    pub fn number_label(&self) -> String {
        if self.number == 0 {
            "?".to_string()
        } else {
            self.number.to_string()
        }
    }
}
