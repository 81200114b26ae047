use std::{
    fmt::{self, Display},
    str::FromStr,
};

use anagram_core::{LetterPool, LockMap, TargetLength};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Arrangement, Slot, compose_slots};

/// Unique identifier of a [`Puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct PuzzleId(Uuid);

impl PuzzleId {
    /// Generates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PuzzleId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PuzzleId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for PuzzleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A point in time, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Returns the current time, truncated to milliseconds.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Converts to a UTC date-time, if the value is within chrono's range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => Display::fmt(&datetime.format("%Y-%m-%d %H:%M:%S UTC"), f),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// A named anagram puzzle.
///
/// No invariant ties the lock indices to the length: locks at or past the length are
/// kept but not shown, and come back into view if the length grows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    id: PuzzleId,
    name: String,
    length: TargetLength,
    locks: LockMap,
    pool: LetterPool,
    created_at: Timestamp,
}

impl Puzzle {
    /// Creates an empty puzzle with a fresh id, created now.
    #[must_use]
    pub fn new(name: impl Into<String>, length: TargetLength) -> Self {
        Self::from_parts(
            PuzzleId::new(),
            name.into(),
            length,
            LockMap::new(),
            LetterPool::new(),
            Timestamp::now(),
        )
    }

    /// Creates a puzzle from stored fields.
    #[must_use]
    pub fn from_parts(
        id: PuzzleId,
        name: String,
        length: TargetLength,
        locks: LockMap,
        pool: LetterPool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            length,
            locks,
            pool,
            created_at,
        }
    }

    /// Returns the puzzle id.
    #[must_use]
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn length(&self) -> TargetLength {
        self.length
    }

    /// Returns the locked letters, including those past the current length.
    #[must_use]
    pub fn locks(&self) -> &LockMap {
        &self.locks
    }

    /// Returns the letter pool.
    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Returns when the puzzle was created.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the one-line summary shown in puzzle lists, e.g. `"2 known • 7 letters"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} known • {} letters", self.locks.len(), self.length)
    }

    /// Lays out the puzzle's slots, filling open slots from `arrangement`.
    #[must_use]
    pub fn slots(&self, arrangement: Option<&Arrangement>) -> Vec<Slot> {
        compose_slots(self.length, &self.locks, arrangement)
    }

    /// Overwrites every field present in `update`.
    pub fn apply(&mut self, update: PuzzleUpdate) {
        let PuzzleUpdate {
            name,
            length,
            locks,
            pool,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(length) = length {
            self.length = length;
        }
        if let Some(locks) = locks {
            self.locks = locks;
        }
        if let Some(pool) = pool {
            self.pool = pool;
        }
    }
}

/// The fields changed by an edit.
///
/// Fields left as `None` are untouched when the update is applied with
/// [`Puzzle::apply`].
///
/// # Examples
///
/// ```
/// use anagram_core::{LetterPool, TargetLength};
/// use anagram_puzzle::{Puzzle, PuzzleUpdate};
///
/// let mut puzzle = Puzzle::new("Anagram 1", TargetLength::DEFAULT);
/// let update = PuzzleUpdate::default()
///     .with_pool(LetterPool::sanitize("RRETOPUCM"))
///     .with_length(TargetLength::new(9).unwrap());
/// puzzle.apply(update);
///
/// assert_eq!(puzzle.pool().to_string(), "RRETOPUCM");
/// assert_eq!(puzzle.length().get(), 9);
/// assert_eq!(puzzle.name(), "Anagram 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New length.
    pub length: Option<TargetLength>,
    /// New set of locks.
    pub locks: Option<LockMap>,
    /// New letter pool.
    pub pool: Option<LetterPool>,
}

impl PuzzleUpdate {
    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the length.
    #[must_use]
    pub fn with_length(mut self, length: TargetLength) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the locks.
    #[must_use]
    pub fn with_locks(mut self, locks: LockMap) -> Self {
        self.locks = Some(locks);
        self
    }

    /// Sets the pool.
    #[must_use]
    pub fn with_pool(mut self, pool: LetterPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Returns `true` if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.length.is_none() && self.locks.is_none() && self.pool.is_none()
    }
}
