//! Number of slots in a puzzle.

/// The number of slots in a puzzle, between 1 and [`TargetLength::ABSOLUTE_MAX`].
///
/// Editors usually work with a smaller cap (see [`TargetLength::clamped`]); the
/// absolute maximum only bounds what can be stored.
///
/// # Examples
///
/// ```
/// use anagram_core::TargetLength;
///
/// let length = TargetLength::new(9).unwrap();
/// assert_eq!(length.get(), 9);
///
/// assert!(TargetLength::new(0).is_err());
/// assert_eq!(TargetLength::clamped(40, TargetLength::DEFAULT_MAX).get(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct TargetLength(u8);

impl TargetLength {
    /// The shortest puzzle.
    pub const MIN: Self = Self(1);
    /// Length of a newly created puzzle.
    pub const DEFAULT: Self = Self(5);
    /// Default editor cap.
    pub const DEFAULT_MAX: Self = Self(15);
    /// Largest length that can be represented.
    pub const ABSOLUTE_MAX: Self = Self(20);

    /// Creates a length.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError::OutOfRange`] if `value` is not in
    /// `1..=TargetLength::ABSOLUTE_MAX`.
    pub fn new(value: usize) -> Result<Self, LengthError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN.0..=Self::ABSOLUTE_MAX.0).contains(v))
            .map(Self)
            .ok_or(LengthError::OutOfRange {
                value,
                max: Self::ABSOLUTE_MAX.get(),
            })
    }

    /// Creates a length, clamping `value` into `1..=max`.
    #[must_use]
    pub fn clamped(value: usize, max: Self) -> Self {
        let value = value.clamp(Self::MIN.get(), max.get());
        // `max` is a valid length, so the clamped value fits.
        Self(u8::try_from(value).unwrap_or(max.0))
    }

    /// Returns the number of slots.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for TargetLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors returned when constructing a [`TargetLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LengthError {
    /// The value is zero or larger than the representable maximum.
    #[display("length {value} is out of range 1..={max}")]
    OutOfRange {
        /// The rejected value.
        value: usize,
        /// The largest accepted value.
        max: usize,
    },
}
