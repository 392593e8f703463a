//! Move resolution.
//!
//! Applies a single move to a position: sowing, capture resolution, passing
//! the turn, and the end-of-turn status and legal-move update. The input
//! position is never modified; all work happens on a private copy.

pub mod capture;
pub mod phase;
pub mod sow;

pub use capture::apply_captures;
pub use phase::{finish_turn, status_from_scores, sweep};
pub use sow::sow;

use log::debug;

use crate::board::pit::PIT_COUNT;
use crate::board::{GameStatus, Player, Position};

/// Reasons a move is rejected. The position is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {0} is off the board")]
    PitOutOfRange(usize),

    #[error("pit {pit} does not belong to player {}", .player.index())]
    NotOwnPit { pit: usize, player: Player },

    #[error("cannot make a move on empty pit {0}")]
    EmptyPit(usize),

    #[error("the game is already over ({0:?})")]
    GameOver(GameStatus),
}

/// Plays `pit` for the side to move and returns the resulting position.
///
/// Any non-empty pit of the mover is accepted, whether or not it is in the
/// legal-move set; a move that starves the opponent simply ends the game
/// through the sweep.
pub fn apply_move(position: &Position, pit: usize) -> Result<Position, MoveError> {
    if position.is_over() {
        return Err(MoveError::GameOver(position.status));
    }
    if pit >= PIT_COUNT {
        return Err(MoveError::PitOutOfRange(pit));
    }
    if !position.to_move.owns(pit) {
        return Err(MoveError::NotOwnPit { pit, player: position.to_move });
    }

    let mut next = simulate(position, pit)?;
    finish_turn(&mut next);

    debug!(
        "player {} played pit {}: scores {:?}, status {:?}",
        position.to_move.index(),
        pit,
        next.scores,
        next.status
    );
    Ok(next)
}

/// Sows and captures on a copy of `position` and passes the turn, without
/// touching status or legal moves.
pub(crate) fn simulate(position: &Position, pit: usize) -> Result<Position, MoveError> {
    let mut next = *position;
    let landing = sow(&mut next.pits, pit)?;
    apply_captures(&mut next, landing);
    next.to_move = next.to_move.opponent();
    Ok(next)
}

impl Position {
    /// Plays `pit` for the side to move. See [`apply_move`].
    pub fn play(&self, pit: usize) -> Result<Position, MoveError> {
        apply_move(self, pit)
    }
}
