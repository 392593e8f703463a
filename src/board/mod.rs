//! Board representation and game-state types.
//!
//! Contains the board geometry, the legal-move set, and the position value
//! that every rule operates on.

pub mod moveset;
pub mod pit;
pub mod state;

pub use moveset::MoveSet;
pub use pit::{
    Player, ALL_PLAYERS, INITIAL_SEEDS, MAX_PIT_SEEDS, PITS_PER_SIDE, PIT_COUNT, TOTAL_SEEDS,
    WINNING_THRESHOLD,
};
pub use state::{GameStatus, Position, ValidationError};
