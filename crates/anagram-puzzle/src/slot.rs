use std::fmt::{self, Display};

use anagram_core::{Letter, LockMap, TargetLength};

/// A randomized ordering of the letters left for the open slots.
///
/// Letters are consumed left to right by the open slots; locked slots do not
/// consume any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    letters: Vec<Letter>,
}

impl Arrangement {
    /// Creates an arrangement from already-shuffled letters.
    #[must_use]
    pub fn new(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    /// Returns the letters in slot order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if there are no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl From<Vec<Letter>> for Arrangement {
    fn from(letters: Vec<Letter>) -> Self {
        Self::new(letters)
    }
}

/// One position of a puzzle as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Slot {
    /// A letter fixed by the user.
    Locked(Letter),
    /// A letter taken from the arrangement.
    Filled(Letter),
    /// An open slot with no letter.
    Empty,
}

impl Slot {
    /// Returns the letter shown in this slot.
    #[must_use]
    pub fn letter(self) -> Option<Letter> {
        match self {
            Slot::Locked(letter) | Slot::Filled(letter) => Some(letter),
            Slot::Empty => None,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => Display::fmt(&letter, f),
            None => f.write_str("_"),
        }
    }
}

/// Lays out `length` slots.
///
/// Slot `i` shows the lock at `i` if there is one; otherwise it takes the next unused
/// letter of `arrangement`, or stays empty once the arrangement is used up or absent.
/// Locks at or past `length` are ignored.
///
/// # Examples
///
/// ```
/// use anagram_core::{Letter, LockMap, TargetLength};
/// use anagram_puzzle::{Arrangement, Slot, compose_slots};
///
/// let locks: LockMap = [(1, Letter::A)].into_iter().collect();
/// let arrangement = Arrangement::new(vec![Letter::T, Letter::C]);
/// let slots = compose_slots(TargetLength::new(4).unwrap(), &locks, Some(&arrangement));
///
/// assert_eq!(
///     slots,
///     [
///         Slot::Filled(Letter::T),
///         Slot::Locked(Letter::A),
///         Slot::Filled(Letter::C),
///         Slot::Empty,
///     ]
/// );
/// ```
#[must_use]
pub fn compose_slots(
    length: TargetLength,
    locks: &LockMap,
    arrangement: Option<&Arrangement>,
) -> Vec<Slot> {
    let mut fill = arrangement
        .map(Arrangement::letters)
        .unwrap_or_default()
        .iter()
        .copied();

    (0..length.get())
        .map(|index| match locks.get(index) {
            Some(letter) => Slot::Locked(letter),
            None => fill.next().map_or(Slot::Empty, Slot::Filled),
        })
        .collect()
}
