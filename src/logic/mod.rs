//! Planner business logic: availability, lineup, backup, sheet projection.

mod availability;
mod backup;
mod export;
mod lineup;

pub use availability::set_player_status;
pub use backup::{export_backup, import_backup, BackupFile};
pub use export::{game_sheet, GameSheet, SheetEntry, SheetLine, SheetPlayer};
pub use lineup::{assign_to_lineup, clear_lineup_slot, move_within_ready, remove_from_ready};
