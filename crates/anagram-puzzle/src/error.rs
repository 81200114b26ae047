use anagram_core::LetterError;

/// Errors that can occur when editing a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EditError {
    /// The typed character cannot be locked.
    #[display("cannot lock: {_0}")]
    InvalidLetter(LetterError),
    /// The slot index is not shown at the current length.
    #[from(ignore)]
    #[display("slot {index} is outside the puzzle length {length}")]
    SlotOutOfRange {
        /// The requested slot.
        index: usize,
        /// The current puzzle length.
        length: usize,
    },
}
