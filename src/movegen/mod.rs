//! Legal move generation.
//!
//! A pit is legal for the side to move when it holds seeds and playing it
//! (sowing plus any captures) leaves the opponent at least one seed to
//! answer with.

use log::trace;

use crate::board::pit::{side_total, PIT_COUNT};
use crate::board::{MoveSet, Player, Position};
use crate::resolve::simulate;

/// Returns true if the opponent of `mover` has a seed anywhere on their side.
pub fn can_respond(pits: &[u8; PIT_COUNT], mover: Player) -> bool {
    side_total(pits, mover.opponent()) > 0
}

/// Enumerates the legal moves for the side to move in `position`.
///
/// Each non-empty pit of the mover is tried on a throwaway copy of the
/// position. Ignores the game status; callers decide whether a finished
/// game should have moves at all.
pub fn legal_moves(position: &Position) -> MoveSet {
    let mover = position.to_move;
    let mut moves = MoveSet::empty();

    for pit in mover.pits() {
        if position.pits[pit] == 0 {
            continue;
        }
        let legal = match simulate(position, pit) {
            Ok(after) => can_respond(&after.pits, mover),
            Err(_) => false,
        };
        trace!("player {} pit {}: legal = {}", mover.index(), pit, legal);
        if legal {
            moves.insert(pit);
        }
    }

    moves
}
