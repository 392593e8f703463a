//! Capture resolution.
//!
//! After sowing, the mover harvests the run of opponent pits holding two or
//! three seeds, walking backward from the landing pit. A capture that would
//! leave the opponent with no seeds at all is forfeited: the sowing stands
//! but the board and scores are kept exactly as sown.

use log::debug;

use crate::board::Position;
use crate::movegen::can_respond;

/// Applies the capture run ending at `landing` for the side to move.
///
/// Works on a copy of the pits and commits only if the opponent keeps at
/// least one seed. Returns the number of seeds added to the mover's score.
/// The scan never examines pit 0.
pub fn apply_captures(position: &mut Position, landing: usize) -> u32 {
    let mover = position.to_move;
    let opponent = mover.opponent();

    let mut pits = position.pits;
    let mut captured = 0u32;
    let mut pit = landing;
    while pit > 0 && opponent.owns(pit) && matches!(pits[pit], 2 | 3) {
        captured += pits[pit] as u32;
        pits[pit] = 0;
        pit -= 1;
    }

    if captured == 0 {
        return 0;
    }
    if !can_respond(&pits, mover) {
        debug!(
            "capture of {} seeds ending at pit {} forfeited: opponent would have no seeds",
            captured, landing
        );
        return 0;
    }

    position.pits = pits;
    position.scores[mover.index()] += captured;
    captured
}
