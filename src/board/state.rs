//! Game position representation.
//!
//! Holds the complete snapshot of an Oware game between plies: side to move,
//! seeds per pit, captured scores, the legal-move set, and game status.

use serde::{Deserialize, Serialize};

use super::moveset::MoveSet;
use super::pit::{
    side_total, Player, INITIAL_SEEDS, MAX_PIT_SEEDS, PITS_PER_SIDE, PIT_COUNT, TOTAL_SEEDS,
};

/// Errors raised when assembling a position from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected 12 pits, got {0}")]
    WrongPitCount(usize),

    #[error("expected 2 scores, got {0}")]
    WrongScoreCount(usize),

    #[error("invalid player {0}, expected 0 or 1")]
    InvalidPlayer(usize),

    #[error("pit {pit} holds {seeds} seeds, more than the maximum of 12")]
    PitOverflow { pit: usize, seeds: u32 },

    #[error("player {player} score {score} exceeds the 48 seeds in play")]
    ScoreOverflow { player: usize, score: u32 },

    #[error("expected at most 6 legal moves, got {0}")]
    TooManyLegalMoves(usize),

    #[error("legal move {pit} is not one of player {player}'s pits")]
    ForeignLegalMove { pit: usize, player: usize },

    #[error("legal moves must be strictly ascending")]
    UnorderedLegalMoves,
}

/// Whether the game continues, and if not, how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tie,
}

impl GameStatus {
    /// Returns the numeric notation code: 0 in progress, 1 and 2 for a win by
    /// player 0 or player 1, 3 for a tie.
    pub const fn code(self) -> u8 {
        match self {
            GameStatus::InProgress => 0,
            GameStatus::Won(Player::First) => 1,
            GameStatus::Won(Player::Second) => 2,
            GameStatus::Tie => 3,
        }
    }

    /// Parses a status from its numeric notation code.
    pub fn from_code(code: u8) -> Option<GameStatus> {
        match code {
            0 => Some(GameStatus::InProgress),
            1 => Some(GameStatus::Won(Player::First)),
            2 => Some(GameStatus::Won(Player::Second)),
            3 => Some(GameStatus::Tie),
            _ => None,
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A complete Oware position.
///
/// Positions are small `Copy` values. Every transition builds a new value, so
/// speculative lookahead is a plain copy that is simply dropped when unwanted.
/// The only public way to obtain one is [`Position::initial`], [`Position::new`],
/// parsing the notation, or playing a move, all of which uphold the invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    pub(crate) status: GameStatus,
    pub(crate) to_move: Player,
    pub(crate) pits: [u8; PIT_COUNT],
    pub(crate) scores: [u32; 2],
    pub(crate) legal_moves: MoveSet,
}

impl Position {
    /// The standard starting position: four seeds per pit, player 0 to move.
    pub fn initial() -> Self {
        Position {
            status: GameStatus::InProgress,
            to_move: Player::First,
            pits: [INITIAL_SEEDS; PIT_COUNT],
            scores: [0, 0],
            legal_moves: Player::First.pits().collect(),
        }
    }

    /// Builds a position from raw parts, validating every invariant once.
    ///
    /// `legal_moves` must be strictly ascending and lie on the mover's side.
    /// The legal-move set is taken as given and is not recomputed.
    pub fn new(
        status: GameStatus,
        player: usize,
        scores: &[u32],
        pits: &[u32],
        legal_moves: &[usize],
    ) -> Result<Self, ValidationError> {
        if pits.len() != PIT_COUNT {
            return Err(ValidationError::WrongPitCount(pits.len()));
        }
        if scores.len() != 2 {
            return Err(ValidationError::WrongScoreCount(scores.len()));
        }
        for (index, &score) in scores.iter().enumerate() {
            if score > TOTAL_SEEDS {
                return Err(ValidationError::ScoreOverflow { player: index, score });
            }
        }
        let to_move = Player::from_index(player).ok_or(ValidationError::InvalidPlayer(player))?;
        if legal_moves.len() > PITS_PER_SIDE {
            return Err(ValidationError::TooManyLegalMoves(legal_moves.len()));
        }

        let mut board = [0u8; PIT_COUNT];
        for (pit, &seeds) in pits.iter().enumerate() {
            if seeds > MAX_PIT_SEEDS as u32 {
                return Err(ValidationError::PitOverflow { pit, seeds });
            }
            board[pit] = seeds as u8;
        }

        let mut moves = MoveSet::empty();
        for (i, &pit) in legal_moves.iter().enumerate() {
            if !to_move.owns(pit) {
                return Err(ValidationError::ForeignLegalMove { pit, player });
            }
            if i > 0 && legal_moves[i - 1] >= pit {
                return Err(ValidationError::UnorderedLegalMoves);
            }
            moves.insert(pit);
        }

        Ok(Position {
            status,
            to_move,
            pits: board,
            scores: [scores[0], scores[1]],
            legal_moves: moves,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn pits(&self) -> &[u8; PIT_COUNT] {
        &self.pits
    }

    /// Returns the seed count of one pit, or `None` off the board.
    pub fn seeds(&self, pit: usize) -> Option<u8> {
        self.pits.get(pit).copied()
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Returns the moves available to the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> MoveSet {
        self.legal_moves
    }

    pub fn is_legal(&self, pit: usize) -> bool {
        self.legal_moves.contains(pit)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winning player, if the game ended with a winner.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns true if the player who made the last move has won.
    pub fn last_mover_won(&self) -> bool {
        self.winner() == Some(self.to_move.opponent())
    }

    /// Seeds on one player's side of the board.
    pub fn side_seeds(&self, player: Player) -> u32 {
        side_total(&self.pits, player)
    }

    /// Seeds still on the board.
    pub fn seeds_on_board(&self) -> u32 {
        self.pits.iter().map(|&s| s as u32).sum()
    }

    /// Seeds on the board plus both scores; conserved by every move.
    pub fn total_seeds(&self) -> u32 {
        self.seeds_on_board() + self.scores[0] + self.scores[1]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_roundtrip() {
        for code in 0..4 {
            let status = GameStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(GameStatus::from_code(4), None);
    }

    #[test]
    fn initial_position() {
        let pos = Position::initial();
        assert_eq!(pos.status(), GameStatus::InProgress);
        assert_eq!(pos.to_move(), Player::First);
        assert_eq!(pos.pits(), &[4; PIT_COUNT]);
        assert_eq!(pos.scores(), [0, 0]);
        assert_eq!(pos.legal_moves().to_vec(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(pos.total_seeds(), 48);
        assert_eq!(Position::default(), pos);
    }

    #[test]
    fn new_accepts_valid_parts() {
        let pos = Position::new(
            GameStatus::InProgress,
            1,
            &[25, 5],
            &[12, 0, 0, 1, 3, 4, 0, 0, 4, 0, 4, 2],
            &[8, 10, 11],
        )
        .unwrap();
        assert_eq!(pos.to_move(), Player::Second);
        assert_eq!(pos.seeds(0), Some(12));
        assert_eq!(pos.seeds(12), None);
        assert!(pos.is_legal(10));
        assert!(!pos.is_legal(9));
    }

    #[test]
    fn new_rejects_wrong_cardinality() {
        let ip = GameStatus::InProgress;
        assert_eq!(
            Position::new(ip, 0, &[0, 0], &[4; 11], &[]),
            Err(ValidationError::WrongPitCount(11))
        );
        assert_eq!(
            Position::new(ip, 0, &[7], &[4; 12], &[]),
            Err(ValidationError::WrongScoreCount(1))
        );
        assert_eq!(
            Position::new(ip, 2, &[0, 0], &[4; 12], &[]),
            Err(ValidationError::InvalidPlayer(2))
        );
        assert_eq!(
            Position::new(ip, 0, &[0, 0], &[4; 12], &[0, 1, 2, 3, 4, 5, 6]),
            Err(ValidationError::TooManyLegalMoves(7))
        );
    }

    #[test]
    fn new_rejects_overfull_pit() {
        let mut pits = [0u32; PIT_COUNT];
        pits[3] = 13;
        assert_eq!(
            Position::new(GameStatus::InProgress, 0, &[0, 0], &pits, &[]),
            Err(ValidationError::PitOverflow { pit: 3, seeds: 13 })
        );
    }

    #[test]
    fn new_rejects_impossible_scores() {
        let pits = [4, 4, 4, 4, 4, 4, 0, 1, 2, 1, 2, 1];
        assert_eq!(
            Position::new(GameStatus::InProgress, 0, &[u32::MAX, 0], &pits, &[5]),
            Err(ValidationError::ScoreOverflow { player: 0, score: u32::MAX })
        );
        assert_eq!(
            Position::new(GameStatus::InProgress, 0, &[0, 49], &pits, &[5]),
            Err(ValidationError::ScoreOverflow { player: 1, score: 49 })
        );
        assert!(Position::new(GameStatus::Won(Player::First), 1, &[48, 0], &[0; 12], &[]).is_ok());
    }

    #[test]
    fn player_and_status_serde_roundtrip() {
        for player in [Player::First, Player::Second] {
            let json = serde_json::to_string(&player).unwrap();
            assert_eq!(serde_json::from_str::<Player>(&json).unwrap(), player);
        }
        for code in 0..4 {
            let status = GameStatus::from_code(code).unwrap();
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(serde_json::from_str::<GameStatus>(&json).unwrap(), status);
        }
        assert_eq!(
            serde_json::to_string(&GameStatus::Won(Player::Second)).unwrap(),
            r#"{"Won":"Second"}"#
        );
    }

    #[test]
    fn new_rejects_bad_legal_moves() {
        let ip = GameStatus::InProgress;
        assert_eq!(
            Position::new(ip, 0, &[0, 0], &[4; 12], &[0, 6]),
            Err(ValidationError::ForeignLegalMove { pit: 6, player: 0 })
        );
        assert_eq!(
            Position::new(ip, 1, &[0, 0], &[4; 12], &[8, 7]),
            Err(ValidationError::UnorderedLegalMoves)
        );
        assert_eq!(
            Position::new(ip, 1, &[0, 0], &[4; 12], &[7, 7]),
            Err(ValidationError::UnorderedLegalMoves)
        );
    }

    #[test]
    fn winner_and_last_mover() {
        let pos = Position::new(GameStatus::Won(Player::First), 1, &[31, 0], &[0; 12], &[])
            .unwrap();
        assert_eq!(pos.winner(), Some(Player::First));
        assert!(pos.last_mover_won());
        assert!(pos.is_over());

        let tie = Position::new(GameStatus::Tie, 0, &[24, 24], &[0; 12], &[]).unwrap();
        assert_eq!(tie.winner(), None);
        assert!(!tie.last_mover_won());
    }
}
