//! Game sheet: the read-only projection handed to renderers and exporters.

use crate::models::{
    line_slots, GameRecord, Player, FORWARDS_PER_LINE, GOALIE_SLOT, LINE_COUNT,
};
use serde::Serialize;

/// One player as printed on the sheet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SheetPlayer {
    /// Jersey number, "?" when unknown.
    pub number: String,
    pub name: String,
    /// Short position label (G/F/D).
    pub position: String,
}

impl From<&Player> for SheetPlayer {
    fn from(p: &Player) -> Self {
        Self {
            number: p.number_label(),
            name: p.name.clone(),
            position: p.position.short().to_string(),
        }
    }
}

/// One entry of the ordered ready-player list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SheetEntry {
    /// 1-based print order (ready slot order, goalie first).
    pub order: usize,
    #[serde(flatten)]
    pub player: SheetPlayer,
}

/// One line of the tactical diagram: forward sub-slots then defender
/// sub-slots, in slot order, with empty slots kept as `None`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SheetLine {
    pub line: usize,
    pub forwards: Vec<Option<SheetPlayer>>,
    pub defenders: Vec<Option<SheetPlayer>>,
}

/// Printable snapshot of one game. Pure projection of the ready list and
/// lineup; building it never mutates the game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GameSheet {
    pub title: String,
    pub date_time: String,
    pub stadium: String,
    pub score: String,
    /// Ready players ordered by slot index (goalie slot first).
    pub roster: Vec<SheetEntry>,
    /// Occupant of the lineup goalie slot.
    pub goalie: Option<SheetPlayer>,
    pub lines: Vec<SheetLine>,
}

/// Build the sheet for one game.
pub fn game_sheet(game: &GameRecord) -> GameSheet {
    let roster = game
        .ready_players
        .filled()
        .enumerate()
        .map(|(i, (_, p))| SheetEntry {
            order: i + 1,
            player: SheetPlayer::from(p),
        })
        .collect();

    let lines = (1..=LINE_COUNT)
        .map(|line| {
            let slots = line_slots(line);
            let split = slots.start + FORWARDS_PER_LINE;
            let cell = |i: usize| game.lineup.get(i).map(SheetPlayer::from);
            SheetLine {
                line,
                forwards: (slots.start..split).map(cell).collect(),
                defenders: (split..slots.end).map(cell).collect(),
            }
        })
        .collect();

    GameSheet {
        title: game.title.clone(),
        date_time: game.date_time_label(),
        stadium: game.stadium.clone(),
        score: game.score.clone(),
        roster,
        goalie: game.lineup.get(GOALIE_SLOT).map(SheetPlayer::from),
        lines,
    }
}
