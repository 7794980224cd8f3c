//! Backup file import/export: the whole planner state as one JSON document.

use crate::models::{GameRecord, Planner, PlannerError, Player};
use serde::{Deserialize, Serialize};

/// Serialized backup: `{ team, games, exportDate, version }`.
///
/// Only `team` and `games` are required on import; `exportDate` and
/// `version` are informational.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub team: Vec<Player>,
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub export_date: String,
    #[serde(default)]
    pub version: String,
}

/// Snapshot the planner state into a backup document, stamped with the
/// current time and crate version.
pub fn export_backup(planner: &Planner) -> BackupFile {
    BackupFile {
        team: planner.team.clone(),
        games: planner.games.clone(),
        export_date: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Replace the planner state with the contents of a backup document.
///
/// The document is parsed and validated in full before anything is
/// replaced; a malformed file fails with a Format error and leaves the
/// in-memory state untouched.
pub fn import_backup(planner: &mut Planner, json: &str) -> Result<(), PlannerError> {
    let backup: BackupFile =
        serde_json::from_str(json).map_err(|e| PlannerError::InvalidBackup(e.to_string()))?;
    planner.team = backup.team;
    planner.games = backup.games;
    Ok(())
}
