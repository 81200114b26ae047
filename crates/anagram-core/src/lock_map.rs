//! Letters pinned to slot positions.

use std::collections::{BTreeMap, btree_map};

use crate::{Letter, LetterCounts};

/// A sparse mapping from slot index (0-based) to the letter locked there.
///
/// Indices are not bounded by the puzzle length: a lock past the current length
/// stays stored and becomes visible again when the puzzle grows back.
///
/// # Examples
///
/// ```
/// use anagram_core::{Letter, LockMap};
///
/// let mut locks = LockMap::new();
/// locks.lock(0, Letter::C);
/// locks.lock(4, Letter::X);
///
/// assert_eq!(locks.get(0), Some(Letter::C));
/// assert_eq!(locks.get(1), None);
/// assert_eq!(locks.iter_within(3).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LockMap {
    locks: BTreeMap<usize, Letter>,
}

impl LockMap {
    /// Creates an empty lock map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locks: BTreeMap::new(),
        }
    }

    /// Locks `letter` at `index`, returning the letter previously locked there.
    pub fn lock(&mut self, index: usize, letter: Letter) -> Option<Letter> {
        self.locks.insert(index, letter)
    }

    /// Removes the lock at `index`, returning its letter.
    pub fn unlock(&mut self, index: usize) -> Option<Letter> {
        self.locks.remove(&index)
    }

    /// Removes every lock.
    pub fn clear(&mut self) {
        self.locks.clear();
    }

    /// Returns the letter locked at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Letter> {
        self.locks.get(&index).copied()
    }

    /// Returns `true` if a letter is locked at `index`.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.locks.contains_key(&index)
    }

    /// Returns the number of locks, including those past the puzzle length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Returns `true` if nothing is locked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Iterates over `(index, letter)` pairs in ascending index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, Letter)> + '_ {
        self.locks.iter().map(|(&index, &letter)| (index, letter))
    }

    /// Iterates over the locks whose index is below `length`.
    pub fn iter_within(
        &self,
        length: usize,
    ) -> impl DoubleEndedIterator<Item = (usize, Letter)> + '_ {
        self.locks
            .range(..length)
            .map(|(&index, &letter)| (index, letter))
    }

    /// Returns how many times each letter is locked.
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        self.locks.values().copied().collect()
    }
}

impl FromIterator<(usize, Letter)> for LockMap {
    fn from_iter<I: IntoIterator<Item = (usize, Letter)>>(iter: I) -> Self {
        Self {
            locks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LockMap {
    type Item = (&'a usize, &'a Letter);
    type IntoIter = btree_map::Iter<'a, usize, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.locks.iter()
    }
}
