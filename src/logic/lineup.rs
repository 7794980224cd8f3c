//! Lineup: placement of ready-list players into the 16 tactical slots,
//! and slot management within the ready list itself.

use crate::models::{GameId, Planner, PlannerError, PlayerId, SlotList, SLOT_COUNT};

/// Place a ready-list player into lineup slot `slot`.
///
/// The player must currently hold a ready slot and must not already be in
/// the lineup. Slot 0 takes only a goalie and goalies take only slot 0.
/// An occupied target slot is an error; the caller clears it explicitly
/// (no silent eviction). The placed snapshot is the one from the ready
/// list.
pub fn assign_to_lineup(
    planner: &mut Planner,
    game_id: GameId,
    slot: usize,
    player_id: PlayerId,
) -> Result<(), PlannerError> {
    let game = planner
        .game_mut(game_id)
        .ok_or(PlannerError::GameNotFound(game_id))?;

    let snapshot = game
        .ready_players
        .filled()
        .find(|(_, p)| p.id == player_id)
        .map(|(_, p)| p.clone())
        .ok_or(PlannerError::NotInReadyList)?;
    if game.lineup.contains(player_id) {
        return Err(PlannerError::AlreadyInLineup);
    }
    if slot >= SLOT_COUNT {
        return Err(PlannerError::SlotOutOfRange(slot));
    }
    if !SlotList::allows(slot, snapshot.position) {
        return Err(PlannerError::PositionMismatch { slot });
    }
    if game.lineup.get(slot).is_some() {
        return Err(PlannerError::SlotOccupied(slot));
    }
    game.lineup.set(slot, snapshot)
}

/// Empty one lineup slot. Succeeds for any valid index, occupied or not.
pub fn clear_lineup_slot(
    planner: &mut Planner,
    game_id: GameId,
    slot: usize,
) -> Result<(), PlannerError> {
    let game = planner
        .game_mut(game_id)
        .ok_or(PlannerError::GameNotFound(game_id))?;
    game.lineup.clear(slot)?;
    Ok(())
}

/// Relocate a player between two ready-list slots. No-op when
/// `from == to`; fails without mutating when the source is empty, the
/// destination is occupied, or the destination violates the goalie
/// reservation.
pub fn move_within_ready(
    planner: &mut Planner,
    game_id: GameId,
    from: usize,
    to: usize,
) -> Result<(), PlannerError> {
    if from == to {
        return Ok(());
    }
    let game = planner
        .game_mut(game_id)
        .ok_or(PlannerError::GameNotFound(game_id))?;

    if from >= SLOT_COUNT {
        return Err(PlannerError::SlotOutOfRange(from));
    }
    if to >= SLOT_COUNT {
        return Err(PlannerError::SlotOutOfRange(to));
    }
    let player = game
        .ready_players
        .get(from)
        .cloned()
        .ok_or(PlannerError::SlotEmpty(from))?;
    if !SlotList::allows(to, player.position) {
        return Err(PlannerError::PositionMismatch { slot: to });
    }
    if game.ready_players.get(to).is_some() {
        return Err(PlannerError::SlotOccupied(to));
    }
    game.ready_players.clear(from)?;
    game.ready_players.set(to, player)
}

/// Empty one ready-list slot. When a player was there, they are also
/// cleared from the lineup and their status entry is deleted, as one step.
pub fn remove_from_ready(
    planner: &mut Planner,
    game_id: GameId,
    slot: usize,
) -> Result<(), PlannerError> {
    let game = planner
        .game_mut(game_id)
        .ok_or(PlannerError::GameNotFound(game_id))?;
    if let Some(player) = game.ready_players.clear(slot)? {
        game.lineup.remove(player.id);
        game.player_statuses.remove(&player.id);
    }
    Ok(())
}
