//! Board geometry and player sides.
//!
//! The twelve pits form a ring indexed 0..12. Player 0 owns pits 0..6 and
//! player 1 owns pits 6..12; sowing always advances to `(i + 1) % 12`.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The number of pits on the board.
pub const PIT_COUNT: usize = 12;

/// The number of pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;

/// The most seeds a single pit can hold. Sowing skips a full pit.
pub const MAX_PIT_SEEDS: u8 = 12;

/// Seeds placed in every pit at the start of a game.
pub const INITIAL_SEEDS: u8 = 4;

/// Seeds in a full game; no score can exceed it.
pub const TOTAL_SEEDS: u32 = PIT_COUNT as u32 * INITIAL_SEEDS as u32;

/// A score strictly above this wins; both players at exactly this value tie.
pub const WINNING_THRESHOLD: u32 = 24;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first and owns pits 0-5.
    First,
    /// Owns pits 6-11.
    Second,
}

/// Both players in index order.
pub const ALL_PLAYERS: [Player; 2] = [Player::First, Player::Second];

impl Player {
    /// Returns the numeric index (0 or 1) used in notation and score arrays.
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Parses a player from its numeric index.
    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the range of pit indices this player owns.
    pub const fn pits(self) -> Range<usize> {
        let start = self.index() * PITS_PER_SIDE;
        start..start + PITS_PER_SIDE
    }

    /// Returns true if `pit` lies on this player's side of the board.
    pub const fn owns(self, pit: usize) -> bool {
        let start = self.index() * PITS_PER_SIDE;
        pit >= start && pit < start + PITS_PER_SIDE
    }
}

/// Returns the ring successor of a pit.
#[inline]
pub const fn next_pit(pit: usize) -> usize {
    (pit + 1) % PIT_COUNT
}

/// Returns the total seeds on one player's side.
pub fn side_total(pits: &[u8; PIT_COUNT], player: Player) -> u32 {
    pits[player.pits()].iter().map(|&s| s as u32).sum()
}
