//! End-of-turn bookkeeping.
//!
//! Decides whether the game is over after a move, refreshes the legal-move
//! set for the next player, and performs the endgame sweep when that player
//! is left without a legal move.

use log::debug;

use crate::board::pit::{side_total, ALL_PLAYERS, PIT_COUNT, WINNING_THRESHOLD};
use crate::board::{GameStatus, MoveSet, Player, Position};
use crate::movegen::legal_moves;

/// Computes the game status from the scores alone.
///
/// A score strictly above 24 wins for that player; both at exactly 24 is a tie.
pub fn status_from_scores(scores: [u32; 2]) -> GameStatus {
    for player in ALL_PLAYERS {
        if scores[player.index()] > WINNING_THRESHOLD {
            return GameStatus::Won(player);
        }
    }
    if scores == [WINNING_THRESHOLD, WINNING_THRESHOLD] {
        return GameStatus::Tie;
    }
    GameStatus::InProgress
}

/// Moves every seed still on the board into the score of the side it lies on.
pub fn sweep(position: &mut Position) {
    for player in ALL_PLAYERS {
        position.scores[player.index()] += side_total(&position.pits, player);
    }
    position.pits = [0; PIT_COUNT];
}

/// Settles the position after the mover has sown, captured, and passed the turn.
///
/// Once the next player has no legal move the game is over. The sweep
/// normally decides it by score; with a non-standard seed total that leaves
/// nobody past the threshold, the higher score wins and equal scores tie.
pub fn finish_turn(position: &mut Position) {
    position.status = status_from_scores(position.scores);
    if position.is_over() {
        position.legal_moves = MoveSet::empty();
        return;
    }

    position.legal_moves = legal_moves(position);
    if !position.legal_moves.is_empty() {
        return;
    }

    debug!(
        "player {} has no legal move, sweeping {} seeds",
        position.to_move.index(),
        position.seeds_on_board()
    );
    sweep(position);
    position.status = match status_from_scores(position.scores) {
        GameStatus::InProgress => compare_scores(position.scores),
        decided => decided,
    };
}

fn compare_scores(scores: [u32; 2]) -> GameStatus {
    match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => GameStatus::Won(Player::First),
        std::cmp::Ordering::Less => GameStatus::Won(Player::Second),
        std::cmp::Ordering::Equal => GameStatus::Tie,
    }
}
