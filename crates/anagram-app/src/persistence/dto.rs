use std::collections::BTreeMap;

use anagram_core::{Letter, LengthError, LetterPool, LockMap, PoolError, TargetLength};
use anagram_puzzle::{Puzzle, PuzzleId, Timestamp};
use serde::{Deserialize, Serialize};

/// Stored form of a [`Puzzle`].
///
/// Locks are keyed by slot index (written as a string key) with a one-letter string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PuzzleRecordDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) length: usize,
    #[serde(default)]
    pub(crate) known_letters: BTreeMap<usize, String>,
    #[serde(default)]
    pub(crate) pool: String,
    pub(crate) created_at: i64,
}

#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RecordDtoError {
    #[display("invalid puzzle id: {_0}")]
    InvalidId(uuid::Error),
    #[display("invalid length: {_0}")]
    InvalidLength(LengthError),
    #[display("invalid pool: {_0}")]
    InvalidPool(PoolError),
    #[from(ignore)]
    #[display("invalid known letter {value:?} at slot {index}")]
    InvalidLock { index: usize, value: String },
}

impl From<&Puzzle> for PuzzleRecordDto {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            id: puzzle.id().to_string(),
            name: puzzle.name().to_owned(),
            length: puzzle.length().get(),
            known_letters: puzzle
                .locks()
                .iter()
                .map(|(index, letter)| (index, letter.to_string()))
                .collect(),
            pool: puzzle.pool().to_string(),
            created_at: puzzle.created_at().as_millis(),
        }
    }
}

impl TryFrom<PuzzleRecordDto> for Puzzle {
    type Error = RecordDtoError;

    fn try_from(value: PuzzleRecordDto) -> Result<Self, Self::Error> {
        let id = value.id.parse::<PuzzleId>()?;
        let length = TargetLength::new(value.length)?;
        let pool = value.pool.parse::<LetterPool>()?;
        let mut locks = LockMap::new();
        for (index, text) in value.known_letters {
            // Cleared slots may be stored as empty strings.
            if text.is_empty() {
                continue;
            }
            let letter = parse_lock_letter(&text).ok_or(RecordDtoError::InvalidLock {
                index,
                value: text,
            })?;
            locks.lock(index, letter);
        }
        Ok(Puzzle::from_parts(
            id,
            value.name,
            length,
            locks,
            pool,
            Timestamp::from_millis(value.created_at),
        ))
    }
}

fn parse_lock_letter(text: &str) -> Option<Letter> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Letter::from_char(c)
}
