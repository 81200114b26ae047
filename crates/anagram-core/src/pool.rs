//! The letters available to a puzzle.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, LetterCounts};

/// Every letter available to fill a puzzle, duplicates included.
///
/// A pool holds at most [`LetterPool::MAX_LEN`] letters. Raw user input goes through
/// [`LetterPool::sanitize`], which never fails; [`FromStr`] is the strict parser used
/// for stored data.
///
/// # Examples
///
/// ```
/// use anagram_core::LetterPool;
///
/// let pool = LetterPool::sanitize("rre-to pucm!");
/// assert_eq!(pool.to_string(), "RRETOPUCM");
/// assert_eq!(pool.len(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterPool {
    letters: Vec<Letter>,
}

impl LetterPool {
    /// Maximum number of letters a pool can hold.
    pub const MAX_LEN: usize = 15;

    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Builds a pool from free text.
    ///
    /// Letters are uppercased, every other character is dropped, and the result is
    /// truncated to [`LetterPool::MAX_LEN`] letters.
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        let letters = raw
            .chars()
            .filter_map(Letter::from_char)
            .take(Self::MAX_LEN)
            .collect();
        Self { letters }
    }

    /// Returns the letters in input order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the pool has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the per-letter counts of the pool.
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        self.letters.iter().copied().collect()
    }
}

impl Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}

impl FromStr for LetterPool {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .chars()
            .map(|input| Letter::from_char(input).ok_or(PoolError::NotAlphabetic { input }))
            .collect::<Result<Vec<_>, _>>()?;
        if letters.len() > Self::MAX_LEN {
            return Err(PoolError::TooLong { len: letters.len() });
        }
        Ok(Self { letters })
    }
}

/// Errors returned when parsing a [`LetterPool`] strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PoolError {
    /// The text contains a character that is not a letter.
    #[display("{input:?} is not a letter A-Z")]
    NotAlphabetic {
        /// The rejected character.
        input: char,
    },
    /// The text has more than [`LetterPool::MAX_LEN`] letters.
    #[display("pool has {len} letters, at most 15 are allowed")]
    TooLong {
        /// Number of letters in the text.
        len: usize,
    },
}
