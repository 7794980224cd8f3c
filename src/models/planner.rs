//! Planner: the application state (team roster + games) and error types.

use crate::models::game::{today, weekday_of, GameId, GameInfoUpdate, GameRecord};
use crate::models::player::{Player, PlayerId, Position};
use crate::models::slots::SlotList;
use serde::{Deserialize, Serialize};

/// Errors that can occur during planner operations. All are recoverable:
/// the attempted operation is never partially applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlannerError {
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// No free ready-list slot for the requested player category.
    ReadyListFull,
    /// Goalie in a field slot, or a field player in the goalie slot.
    PositionMismatch { slot: usize },
    /// Target slot already holds a player; clear it first.
    SlotOccupied(usize),
    /// Player already holds a lineup slot.
    AlreadyInLineup,
    /// Player must be in the ready list before lineup placement.
    NotInReadyList,
    /// The source slot holds no player.
    SlotEmpty(usize),
    /// Slot index outside 0-15.
    SlotOutOfRange(usize),
    PlayerNotFound(PlayerId),
    GameNotFound(GameId),
    /// Imported backup file is structurally invalid.
    InvalidBackup(String),
}

/// Coarse classification of an error, for callers that branch on the
/// category rather than the exact variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    Capacity,
    Constraint,
    NotFound,
    Format,
}

impl PlannerError {
    pub fn kind(&self) -> ErrorKind {
        use PlannerError::*;
        match self {
            EmptyPlayerName => ErrorKind::Validation,
            ReadyListFull => ErrorKind::Capacity,
            PositionMismatch { .. } | SlotOccupied(_) | AlreadyInLineup | NotInReadyList
            | SlotEmpty(_) | SlotOutOfRange(_) => ErrorKind::Constraint,
            PlayerNotFound(_) | GameNotFound(_) => ErrorKind::NotFound,
            InvalidBackup(_) => ErrorKind::Format,
        }
    }
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            PlannerError::ReadyListFull => {
                write!(f, "The ready list is full; free a slot first")
            }
            PlannerError::PositionMismatch { slot } => {
                if *slot == crate::models::slots::GOALIE_SLOT {
                    write!(f, "Only a goalie can take the goalie slot")
                } else {
                    write!(f, "A goalie can only take the goalie slot")
                }
            }
            PlannerError::SlotOccupied(slot) => {
                write!(f, "Slot {} is occupied; clear it first", slot + 1)
            }
            PlannerError::AlreadyInLineup => write!(f, "This player is already in the lineup"),
            PlannerError::NotInReadyList => {
                write!(f, "Add the player to the ready list first")
            }
            PlannerError::SlotEmpty(slot) => write!(f, "Slot {} is empty", slot + 1),
            PlannerError::SlotOutOfRange(index) => write!(f, "No such slot: {index}"),
            PlannerError::PlayerNotFound(_) => write!(f, "Player not found"),
            PlannerError::GameNotFound(_) => write!(f, "Game not found"),
            PlannerError::InvalidBackup(reason) => write!(f, "Invalid backup file: {reason}"),
        }
    }
}

impl std::error::Error for PlannerError {}

/// Full application state: the team roster and all saved games.
///
/// Serializes directly as the persisted document
/// (`{"team": [...], "games": [...]}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Planner {
    #[serde(default)]
    pub team: Vec<Player>,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner with an initial roster and no games (e.g. the first-load seed).
    pub fn with_team(team: Vec<Player>) -> Self {
        Self {
            team,
            games: Vec::new(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.team.iter().find(|p| p.id == id)
    }

    pub fn game(&self, id: GameId) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn game_mut(&mut self, id: GameId) -> Option<&mut GameRecord> {
        self.games.iter_mut().find(|g| g.id == id)
    }

    /// Add a player to the roster. The name must be non-empty after trimming.
    pub fn add_player(
        &mut self,
        name: &str,
        number: u32,
        position: Position,
    ) -> Result<PlayerId, PlannerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::EmptyPlayerName);
        }
        let player = Player::new(name, number, position);
        let id = player.id;
        self.team.push(player);
        Ok(id)
    }

    /// Edit a roster player and re-propagate the fresh snapshot into every
    /// game's ready list and lineup that holds this player id.
    ///
    /// A position change can make the player's current slot illegal (the
    /// goalie slot for a player who is no longer a goalie, a field slot for
    /// a new goalie); such slots are vacated with the usual cascade instead
    /// of keeping an invalid placement.
    pub fn edit_player(
        &mut self,
        id: PlayerId,
        name: &str,
        number: u32,
        position: Position,
    ) -> Result<(), PlannerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::EmptyPlayerName);
        }
        let player = self
            .team
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PlannerError::PlayerNotFound(id))?;
        player.name = name.to_string();
        player.number = number;
        let position_changed = player.position != position;
        player.position = position;
        let snapshot = player.clone();
        for game in &mut self.games {
            if position_changed {
                if let Some(slot) = game.ready_players.slot_of(id) {
                    if !SlotList::allows(slot, position) {
                        game.ready_players.remove(id);
                        game.lineup.remove(id);
                        game.player_statuses.remove(&id);
                    }
                }
                if let Some(slot) = game.lineup.slot_of(id) {
                    if !SlotList::allows(slot, position) {
                        game.lineup.remove(id);
                    }
                }
            }
            game.ready_players.refresh_snapshot(&snapshot);
            game.lineup.refresh_snapshot(&snapshot);
        }
        Ok(())
    }

    /// Remove a player from the roster and purge them from every game's
    /// ready list, lineup, and status map.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), PlannerError> {
        if self.player(id).is_none() {
            return Err(PlannerError::PlayerNotFound(id));
        }
        self.team.retain(|p| p.id != id);
        for game in &mut self.games {
            game.ready_players.remove(id);
            game.lineup.remove(id);
            game.player_statuses.remove(&id);
        }
        Ok(())
    }

    /// Create a new empty game with a generated title and today's date.
    pub fn create_game(&mut self) -> GameId {
        let game = GameRecord::new(self.games.len() + 1);
        let id = game.id;
        self.games.push(game);
        id
    }

    pub fn delete_game(&mut self, id: GameId) -> Result<(), PlannerError> {
        let idx = self
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or(PlannerError::GameNotFound(id))?;
        self.games.remove(idx);
        Ok(())
    }

    /// Apply a descriptive-info update. Blank title/date fall back to the
    /// generated defaults; the weekday is re-derived from the date.
    pub fn update_game_info(
        &mut self,
        id: GameId,
        info: GameInfoUpdate,
    ) -> Result<(), PlannerError> {
        let idx = self
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or(PlannerError::GameNotFound(id))?;
        let game = &mut self.games[idx];
        game.title = if info.title.trim().is_empty() {
            format!("Game {}", idx + 1)
        } else {
            info.title
        };
        game.date = if info.date.trim().is_empty() {
            today()
        } else {
            info.date
        };
        game.weekday = weekday_of(&game.date);
        game.time = info.time;
        game.stadium = info.stadium;
        game.score = info.score;
        game.points = info.points;
        game.color = info.color;
        Ok(())
    }
}
