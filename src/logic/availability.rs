//! Availability: per-game player status transitions and the ready list.

use crate::models::{GameId, Planner, PlannerError, PlayerId, PlayerStatus};

/// Set (or clear, with `None`) a player's status for one game, keeping the
/// ready list synchronized with the status map.
///
/// `Ready` places a snapshot of the player into the first free eligible
/// slot: the goalie slot for goalies, the first empty field slot otherwise.
/// A player already holding a ready slot stays where they are. When no
/// eligible slot is free the call fails with `ReadyListFull` and nothing
/// changes.
///
/// Any other status (and clearing) removes the player from the ready list
/// and, cascading, from the lineup.
pub fn set_player_status(
    planner: &mut Planner,
    game_id: GameId,
    player_id: PlayerId,
    status: Option<PlayerStatus>,
) -> Result<(), PlannerError> {
    let player = planner
        .player(player_id)
        .cloned()
        .ok_or(PlannerError::PlayerNotFound(player_id))?;
    let game = planner
        .game_mut(game_id)
        .ok_or(PlannerError::GameNotFound(game_id))?;

    match status {
        Some(PlayerStatus::Ready) => {
            if !game.ready_players.contains(player.id) {
                let slot = game
                    .ready_players
                    .first_free_for(player.position)
                    .ok_or(PlannerError::ReadyListFull)?;
                game.ready_players.set(slot, player.clone())?;
            }
            game.player_statuses.insert(player.id, PlayerStatus::Ready);
        }
        Some(other) => {
            game.ready_players.remove(player.id);
            game.lineup.remove(player.id);
            game.player_statuses.insert(player.id, other);
        }
        None => {
            game.ready_players.remove(player.id);
            game.lineup.remove(player.id);
            game.player_statuses.remove(&player.id);
        }
    }
    Ok(())
}
