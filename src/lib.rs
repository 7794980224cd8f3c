//! Hockey lineup planner: library with models and business logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    assign_to_lineup, clear_lineup_slot, export_backup, game_sheet, import_backup,
    move_within_ready, remove_from_ready, set_player_status, BackupFile, GameSheet, SheetEntry,
    SheetLine, SheetPlayer,
};
pub use models::{
    is_forward_slot, line_of, line_slots, today, weekday_of, ErrorKind, GameId, GameInfoUpdate,
    GameRecord, Planner, PlannerError, Player, PlayerId, PlayerStatus, Position, SlotList,
    FORWARDS_PER_LINE, GOALIE_SLOT, LINE_COUNT, LINE_SIZE, SLOT_COUNT,
};
pub use storage::Storage;
