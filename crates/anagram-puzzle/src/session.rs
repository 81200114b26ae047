use anagram_core::{Letter, LetterPool, LockMap, PoolViolation, TargetLength, validate_pool};
use rand::Rng;

use crate::{Arrangement, EditError, Puzzle, PuzzleUpdate, Slot};

/// Options controlling how a [`PuzzleSession`] reacts to edits.
///
/// # Examples
///
/// ```
/// use anagram_core::TargetLength;
/// use anagram_puzzle::SessionOptions;
///
/// let options = SessionOptions::default()
///     .max_length(TargetLength::ABSOLUTE_MAX)
///     .auto_shuffle_on_pool_edit(false);
/// assert_eq!(options.max_length.get(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Largest length reachable by a length edit or by pool growth.
    pub max_length: TargetLength,
    /// Whether editing the pool immediately reshuffles.
    pub auto_shuffle_on_pool_edit: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_length: TargetLength::DEFAULT_MAX,
            auto_shuffle_on_pool_edit: true,
        }
    }
}

impl SessionOptions {
    /// Sets the length cap.
    #[must_use]
    pub fn max_length(mut self, max_length: TargetLength) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets whether pool edits reshuffle immediately.
    #[must_use]
    pub fn auto_shuffle_on_pool_edit(mut self, enabled: bool) -> Self {
        self.auto_shuffle_on_pool_edit = enabled;
        self
    }
}

/// Interactive editing state for one puzzle.
///
/// Holds a working copy of the puzzle together with the transient arrangement and
/// the last validation error. Every edit returns the [`PuzzleUpdate`] the caller
/// should apply to its stored copy of the record.
///
/// - Shuffling validates the pool against the locks; success replaces the
///   arrangement, failure records the error and drops the arrangement.
/// - Pool edits grow the length to fit the pool (never shrink it) and reshuffle
///   right away.
/// - Lock edits drop the arrangement and the error; the next shuffle repopulates.
/// - Length edits drop the arrangement and leave locks and pool alone.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    arrangement: Option<Arrangement>,
    error: Option<PoolViolation>,
    options: SessionOptions,
}

impl PuzzleSession {
    /// Starts a session on `puzzle` with no arrangement and no error.
    #[must_use]
    pub fn new(puzzle: Puzzle, options: SessionOptions) -> Self {
        Self {
            puzzle,
            arrangement: None,
            error: None,
            options,
        }
    }

    /// Returns the working copy of the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Consumes the session, returning the working copy of the puzzle.
    #[must_use]
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    /// Returns the current arrangement, if any.
    #[must_use]
    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    /// Returns the error from the last validation, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<PoolViolation> {
        self.error
    }

    /// Returns the session options.
    #[must_use]
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Replaces the session options. Takes effect on the next edit.
    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
    }

    /// Lays out the slots for display.
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        self.puzzle.slots(self.arrangement.as_ref())
    }

    /// Validates the pool against the locks and, on success, arranges the remaining
    /// letters in a new random order.
    ///
    /// # Errors
    ///
    /// Returns [`PoolViolation`] if a locked letter is not available in the pool. The
    /// error is also kept in [`PuzzleSession::error`] and the arrangement is cleared.
    pub fn shuffle<R>(&mut self, rng: &mut R) -> Result<(), PoolViolation>
    where
        R: Rng + ?Sized,
    {
        match validate_pool(self.puzzle.pool(), self.puzzle.locks()) {
            Ok(remaining) => {
                let letters = anagram_shuffle::shuffle(&remaining, rng);
                log::debug!(
                    "puzzle {}: arranged {} letters",
                    self.puzzle.id(),
                    letters.len()
                );
                self.arrangement = Some(Arrangement::new(letters));
                self.error = None;
                Ok(())
            }
            Err(err) => {
                log::debug!("puzzle {}: {err}", self.puzzle.id());
                self.arrangement = None;
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Renames the puzzle.
    pub fn rename(&mut self, name: impl Into<String>) -> PuzzleUpdate {
        let update = PuzzleUpdate::default().with_name(name);
        self.puzzle.apply(update.clone());
        update
    }

    /// Sets the length, clamped to `1..=max_length`, and clears the arrangement.
    ///
    /// Locks past the new length are kept but hidden.
    pub fn set_length(&mut self, value: usize) -> PuzzleUpdate {
        let length = TargetLength::clamped(value, self.options.max_length);
        let update = PuzzleUpdate::default().with_length(length);
        self.puzzle.apply(update.clone());
        self.arrangement = None;
        update
    }

    /// Replaces the pool with the sanitized `raw` text.
    ///
    /// If the new pool is longer than the puzzle, the length grows to the pool size
    /// (up to `max_length`). The letters are then reshuffled immediately unless
    /// automatic shuffling is disabled, in which case the arrangement and any error
    /// are cleared.
    pub fn edit_pool<R>(&mut self, raw: &str, rng: &mut R) -> PuzzleUpdate
    where
        R: Rng + ?Sized,
    {
        let pool = LetterPool::sanitize(raw);
        let mut length = self.puzzle.length();
        if pool.len() > length.get() {
            length = TargetLength::clamped(pool.len(), self.options.max_length.max(length));
            log::debug!("puzzle {}: length grows to {length}", self.puzzle.id());
        }

        let update = PuzzleUpdate::default()
            .with_pool(pool)
            .with_length(length);
        self.puzzle.apply(update.clone());

        if self.options.auto_shuffle_on_pool_edit {
            // A violation is kept in `self.error` for display.
            let _ = self.shuffle(rng);
        } else {
            self.arrangement = None;
            self.error = None;
        }
        update
    }

    /// Locks the letter typed as `input` at slot `index`.
    ///
    /// Clears the arrangement and any previous error; call [`PuzzleSession::shuffle`]
    /// to repopulate the open slots.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidLetter`] if `input` is not a letter, and
    /// [`EditError::SlotOutOfRange`] if `index` is not below the current length.
    pub fn lock(&mut self, index: usize, input: char) -> Result<PuzzleUpdate, EditError> {
        let length = self.puzzle.length().get();
        if index >= length {
            return Err(EditError::SlotOutOfRange { index, length });
        }
        let letter = Letter::try_from(input)?;

        let mut locks = self.puzzle.locks().clone();
        locks.lock(index, letter);
        Ok(self.replace_locks(locks))
    }

    /// Removes the lock at slot `index`, clearing the arrangement and any error.
    pub fn unlock(&mut self, index: usize) -> PuzzleUpdate {
        let mut locks = self.puzzle.locks().clone();
        locks.unlock(index);
        self.replace_locks(locks)
    }

    /// Removes every lock, clearing the arrangement and any error.
    pub fn clear_locks(&mut self) -> PuzzleUpdate {
        self.replace_locks(LockMap::new())
    }

    fn replace_locks(&mut self, locks: LockMap) -> PuzzleUpdate {
        let update = PuzzleUpdate::default().with_locks(locks);
        self.puzzle.apply(update.clone());
        self.arrangement = None;
        self.error = None;
        update
    }
}
