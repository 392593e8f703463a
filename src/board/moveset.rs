//! Compact set of pit indices.
//!
//! Legal moves are stored as a 12-bit mask so a `Position` stays `Copy`
//! and iteration is always in ascending pit order.

use std::fmt;

use super::pit::PIT_COUNT;

/// A set of pit indices in `0..PIT_COUNT`, iterated in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveSet(u16);

impl MoveSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        MoveSet(0)
    }

    /// Adds a pit. Indices outside the board are ignored.
    pub fn insert(&mut self, pit: usize) {
        if pit < PIT_COUNT {
            self.0 |= 1 << pit;
        }
    }

    pub fn contains(&self, pit: usize) -> bool {
        pit < PIT_COUNT && self.0 & (1 << pit) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the pits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..PIT_COUNT).filter(move |&pit| self.contains(pit))
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for MoveSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = MoveSet::empty();
        for pit in iter {
            set.insert(pit);
        }
        set
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
