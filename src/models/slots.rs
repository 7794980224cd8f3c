//! Fixed 16-slot container used for both the ready list and the lineup.
//!
//! Slot 0 is reserved for the goalie; slots 1-15 hold field players.
//! Slots 1-15 also encode line membership: line N (1-3) is slots
//! 5*(N-1)+1 ..= 5*(N-1)+5, with the first three slots of each line
//! labeled for forwards and the last two for defenders. The labels are
//! display hints; only the goalie reservation is enforced.

use crate::models::planner::PlannerError;
use crate::models::player::{Player, PlayerId, Position};
use serde::{Deserialize, Serialize};

/// Total slots in a ready list or lineup.
pub const SLOT_COUNT: usize = 16;
/// Index of the goalie slot.
pub const GOALIE_SLOT: usize = 0;
/// Number of lines in the lineup.
pub const LINE_COUNT: usize = 3;
/// Players per line.
pub const LINE_SIZE: usize = 5;
/// Forward-labeled slots at the start of each line.
pub const FORWARDS_PER_LINE: usize = 3;

/// Ordered sequence of 16 nullable player snapshots.
///
/// This is the only write path for slot placement; every write checks the
/// slot index and the goalie reservation. Serialized as a plain 16-element
/// array (empty slots are `null`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotList([Option<Player>; SLOT_COUNT]);

impl Default for SlotList {
    fn default() -> Self {
        Self(std::array::from_fn(|_| None))
    }
}

impl SlotList {
    /// Whether a player of `position` may occupy `slot` at all.
    pub fn allows(slot: usize, position: Position) -> bool {
        if slot == GOALIE_SLOT {
            position.is_goalie()
        } else {
            !position.is_goalie()
        }
    }

    fn check_index(slot: usize) -> Result<(), PlannerError> {
        if slot < SLOT_COUNT {
            Ok(())
        } else {
            Err(PlannerError::SlotOutOfRange(slot))
        }
    }

    /// Player currently in `slot`, if any (None for empty or out-of-range).
    pub fn get(&self, slot: usize) -> Option<&Player> {
        self.0.get(slot).and_then(|s| s.as_ref())
    }

    /// Place `player` in `slot`, validating the index and the goalie
    /// reservation. Occupancy rules differ per caller and are checked there.
    pub fn set(&mut self, slot: usize, player: Player) -> Result<(), PlannerError> {
        Self::check_index(slot)?;
        if !Self::allows(slot, player.position) {
            return Err(PlannerError::PositionMismatch { slot });
        }
        self.0[slot] = Some(player);
        Ok(())
    }

    /// Empty `slot`, returning its previous occupant.
    pub fn clear(&mut self, slot: usize) -> Result<Option<Player>, PlannerError> {
        Self::check_index(slot)?;
        Ok(self.0[slot].take())
    }

    /// Slot index currently held by `id`, if any.
    pub fn slot_of(&self, id: PlayerId) -> Option<usize> {
        self.0
            .iter()
            .position(|s| s.as_ref().is_some_and(|p| p.id == id))
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Remove `id` from every slot holding it. Returns the removed snapshot.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let mut removed = None;
        for slot in self.0.iter_mut() {
            if slot.as_ref().is_some_and(|p| p.id == id) {
                removed = slot.take();
            }
        }
        removed
    }

    /// First empty slot a player of `position` may take: the goalie slot
    /// for goalies, the first empty field slot otherwise.
    pub fn first_free_for(&self, position: Position) -> Option<usize> {
        if position.is_goalie() {
            self.0[GOALIE_SLOT].is_none().then_some(GOALIE_SLOT)
        } else {
            (1..SLOT_COUNT).find(|&i| self.0[i].is_none())
        }
    }

    /// Overwrite the snapshot in any slot holding `player.id` with a fresh
    /// copy (used when a roster edit re-propagates into games).
    pub fn refresh_snapshot(&mut self, player: &Player) {
        for slot in self.0.iter_mut() {
            if slot.as_ref().is_some_and(|p| p.id == player.id) {
                *slot = Some(player.clone());
            }
        }
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }

    /// Players in slot order with their slot indexes (empty slots skipped).
    pub fn filled(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|p| (i, p)))
    }
}

/// Line (1-3) a slot belongs to; None for the goalie slot or out of range.
pub fn line_of(slot: usize) -> Option<usize> {
    if slot == GOALIE_SLOT || slot >= SLOT_COUNT {
        None
    } else {
        Some((slot - 1) / LINE_SIZE + 1)
    }
}

/// Slot index range of line `line` (1-3).
pub fn line_slots(line: usize) -> std::ops::Range<usize> {
    let start = LINE_SIZE * (line - 1) + 1;
    start..start + LINE_SIZE
}

/// Whether a field slot carries the forward label (first 3 of its line).
pub fn is_forward_slot(slot: usize) -> bool {
    line_of(slot).is_some() && (slot - 1) % LINE_SIZE < FORWARDS_PER_LINE
}
