//! Seed distribution.
//!
//! Empties the chosen pit and drops one seed into each following pit around
//! the ring, skipping the source pit and any pit already holding
//! [`MAX_PIT_SEEDS`]. Skipped pits do not consume a seed.

use crate::board::pit::{next_pit, MAX_PIT_SEEDS, PIT_COUNT};

use super::MoveError;

/// Sows the seeds of `pit` and returns the index that received the last seed.
///
/// Returns [`MoveError::PitOutOfRange`] or [`MoveError::EmptyPit`] without
/// touching the board when there is nothing to sow. If every other pit is
/// full, sowing stops early and the undistributed seeds stay in `pit`; the
/// returned index is then the last pit that received a seed, or `pit` itself
/// when none did.
pub fn sow(pits: &mut [u8; PIT_COUNT], pit: usize) -> Result<usize, MoveError> {
    if pit >= PIT_COUNT {
        return Err(MoveError::PitOutOfRange(pit));
    }
    let seeds = pits[pit];
    if seeds == 0 {
        return Err(MoveError::EmptyPit(pit));
    }

    pits[pit] = 0;
    let mut current = pit;
    for placed in 0..seeds {
        match next_target(pits, pit, current) {
            Some(target) => {
                pits[target] += 1;
                current = target;
            }
            None => {
                pits[pit] = seeds - placed;
                break;
            }
        }
    }

    Ok(current)
}

/// Finds the next pit after `from` that may receive a seed, scanning at most
/// one lap.
fn next_target(pits: &[u8; PIT_COUNT], source: usize, from: usize) -> Option<usize> {
    let mut candidate = from;
    for _ in 0..PIT_COUNT {
        candidate = next_pit(candidate);
        if candidate != source && pits[candidate] < MAX_PIT_SEEDS {
            return Some(candidate);
        }
    }
    None
}
