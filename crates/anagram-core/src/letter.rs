//! Uppercase letter representation.

use std::fmt::{self, Debug, Display};

/// An uppercase ASCII letter in the range `A`-`Z`.
///
/// Construction from a `char` is case-insensitive; anything outside the ASCII
/// alphabet is rejected, so a `Letter` always renders as `'A'..='Z'`.
///
/// # Examples
///
/// ```
/// use anagram_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter, Letter::Q);
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert_eq!(Letter::from_char('7'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

macro_rules! letter_consts {
    ($($name:ident = $byte:literal),* $(,)?) => {
        $(
            #[doc = concat!("The letter `", stringify!($name), "`.")]
            pub const $name: Self = Self($byte);
        )*
    };
}

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// All letters from `A` to `Z`, in alphabetical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use anagram_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 26);
    /// assert_eq!(Letter::ALL[0], Letter::A);
    /// assert_eq!(Letter::ALL[25], Letter::Z);
    /// ```
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'A'); Self::COUNT];
        let mut i: u8 = 0;
        while i < 26 {
            all[i as usize] = Self(b'A' + i);
            i += 1;
        }
        all
    };

    letter_consts! {
        A = b'A', B = b'B', C = b'C', D = b'D', E = b'E', F = b'F', G = b'G',
        H = b'H', I = b'I', J = b'J', K = b'K', L = b'L', M = b'M', N = b'N',
        O = b'O', P = b'P', Q = b'Q', R = b'R', S = b'S', T = b'T', U = b'U',
        V = b'V', W = b'W', X = b'X', Y = b'Y', Z = b'Z',
    }

    /// Creates a letter from a character, ignoring case.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        u8::try_from(c.to_ascii_uppercase()).ok().map(Self)
    }

    /// Creates a letter from its alphabet index (`0` is `A`, `25` is `Z`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    ///
    /// ```should_panic
    /// use anagram_core::Letter;
    ///
    /// let _ = Letter::from_index(26);
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "Invalid letter index: {index}");
        Self::ALL[index]
    }

    /// Returns the alphabet index of this letter (`A` is `0`).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Returns this letter as an uppercase `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Letter").field(&self.as_char()).finish()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(input: char) -> Result<Self, Self::Error> {
        Self::from_char(input).ok_or(LetterError::NotAlphabetic { input })
    }
}

/// Errors returned when a character cannot be used as a [`Letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterError {
    /// The character is not an ASCII letter.
    #[display("{input:?} is not a letter A-Z")]
    NotAlphabetic {
        /// The rejected character.
        input: char,
    },
}
