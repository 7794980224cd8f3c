//! GameRecord: one game's info, availability statuses, ready list, and lineup.

use crate::models::player::{PlayerId, PlayerStatus};
use crate::models::slots::SlotList;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// One game: descriptive info plus the per-game player state.
///
/// `ready_players` and `lineup` hold snapshots of roster players taken at
/// assignment time, not references; a roster edit re-propagates fresh
/// snapshots into every game (see `Planner::edit_player`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    /// Game date as `YYYY-MM-DD`; defaults to today at creation.
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// Derived from `date` on every info update; empty when the date
    /// doesn't parse.
    #[serde(default)]
    pub weekday: String,
    #[serde(default)]
    pub stadium: String,
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub color: String,
    /// Availability per player id; absent means no status chosen yet.
    #[serde(default)]
    pub player_statuses: HashMap<PlayerId, PlayerStatus>,
    /// The 16-slot list of players marked ready (slot 0 = goalie).
    #[serde(default)]
    pub ready_players: SlotList,
    /// The 16-slot tactical placement (slot 0 = goalie, 3 lines of 5).
    #[serde(default)]
    pub lineup: SlotList,
}

impl GameRecord {
    /// Create an empty game. `ordinal` is the 1-based position in the game
    /// list, used for the generated title.
    pub fn new(ordinal: usize) -> Self {
        let date = today();
        Self {
            id: Uuid::new_v4(),
            title: format!("Game {ordinal}"),
            weekday: weekday_of(&date),
            date,
            time: String::new(),
            stadium: String::new(),
            score: String::new(),
            points: String::new(),
            color: String::new(),
            player_statuses: HashMap::new(),
            ready_players: SlotList::default(),
            lineup: SlotList::default(),
        }
    }

    /// Date plus time for list display ("2026-08-06 19:30").
    pub fn date_time_label(&self) -> String {
        if self.time.is_empty() {
            self.date.clone()
        } else {
            format!("{} {}", self.date, self.time)
        }
    }
}

/// Descriptive-field update for a game (the info form submits the whole
/// set at once). Slots and statuses are never touched by this.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameInfoUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub stadium: String,
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub color: String,
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Weekday name for a `YYYY-MM-DD` date; empty when it doesn't parse.
pub fn weekday_of(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%A").to_string())
        .unwrap_or_default()
}
