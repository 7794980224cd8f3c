//! Data structures for the lineup planner: players, games, slots, app state.

mod game;
mod planner;
mod player;
mod slots;

pub use game::{today, weekday_of, GameId, GameInfoUpdate, GameRecord};
pub use planner::{ErrorKind, Planner, PlannerError};
pub use player::{Player, PlayerId, PlayerStatus, Position};
pub use slots::{
    is_forward_slot, line_of, line_slots, SlotList, FORWARDS_PER_LINE, GOALIE_SLOT, LINE_COUNT,
    LINE_SIZE, SLOT_COUNT,
};
