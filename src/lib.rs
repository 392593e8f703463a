//! Oware rules engine library.
//!
//! Applies moves to Oware positions: sowing, captures with the opponent
//! starvation rule, end-of-game detection with the final sweep, and
//! legal-move generation. Positions convert to and from a compact
//! single-line notation.

pub mod board;
pub mod movegen;
pub mod protocol;
pub mod resolve;

pub use board::{GameStatus, MoveSet, Player, Position, ValidationError};
pub use protocol::NotationError;
pub use resolve::{apply_move, MoveError};
