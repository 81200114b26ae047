//! Per-letter frequency table.

use crate::Letter;

/// A multiset of letters, stored as one count per letter of the alphabet.
///
/// # Examples
///
/// ```
/// use anagram_core::{Letter, LetterCounts};
///
/// let counts: LetterCounts = [Letter::R, Letter::O, Letter::R].into_iter().collect();
/// assert_eq!(counts.get(Letter::R), 2);
/// assert_eq!(counts.get(Letter::O), 1);
/// assert_eq!(counts.total(), 3);
/// assert_eq!(counts.to_letters(), [Letter::O, Letter::R, Letter::R]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    counts: [usize; Letter::COUNT],
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl LetterCounts {
    /// A table with every count at zero.
    pub const EMPTY: Self = Self {
        counts: [0; Letter::COUNT],
    };

    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns how many times `letter` occurs.
    #[must_use]
    pub const fn get(&self, letter: Letter) -> usize {
        self.counts[letter.index()]
    }

    /// Sets the count of `letter`.
    pub const fn set(&mut self, letter: Letter, count: usize) {
        self.counts[letter.index()] = count;
    }

    /// Adds one occurrence of `letter`.
    pub const fn add(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
    }

    /// Returns the total number of letters.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns `true` if no letter has a non-zero count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Iterates over the letters with a non-zero count, alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, usize)> + '_ {
        Letter::ALL
            .into_iter()
            .map(|letter| (letter, self.get(letter)))
            .filter(|&(_, count)| count > 0)
    }

    /// Expands the table back into individual letters, grouped by letter.
    #[must_use]
    pub fn to_letters(&self) -> Vec<Letter> {
        let mut letters = Vec::with_capacity(self.total());
        for (letter, count) in self.iter() {
            letters.extend(std::iter::repeat_n(letter, count));
        }
        letters
    }
}

impl FromIterator<Letter> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut counts = Self::new();
        counts.extend(iter);
        counts
    }
}

impl Extend<Letter> for LetterCounts {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.add(letter);
        }
    }
}
