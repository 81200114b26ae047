//! Anagram puzzle records and interactive editing.
//!
//! This crate provides the puzzle record kept in a collection, the slot view shown
//! to the user, and [`PuzzleSession`], which applies user edits to a puzzle and keeps
//! its randomized arrangement in step with the pool and locks.
//!
//! # Overview
//!
//! - [`Puzzle`]: a named puzzle record (id, name, length, locks, pool, creation time).
//! - [`PuzzleUpdate`]: the fields changed by one edit, applied to a stored record by id.
//! - [`Arrangement`] and [`Slot`]: the shuffled letters and the per-position view built
//!   by [`compose_slots`].
//! - [`PuzzleSession`]: the editing state machine (shuffle, pool edits, locks, length).
//!
//! # Examples
//!
//! ```
//! use anagram_puzzle::{Puzzle, PuzzleSession, SessionOptions, Slot};
//! use anagram_core::{Letter, TargetLength};
//! use anagram_shuffle::{ShuffleSeed, Shuffler};
//!
//! let puzzle = Puzzle::new("Anagram 1", TargetLength::DEFAULT);
//! let mut session = PuzzleSession::new(puzzle, SessionOptions::default());
//! let mut shuffler = Shuffler::with_seed(ShuffleSeed::from_bytes([9; 32]));
//!
//! session.edit_pool("cat", shuffler.rng_mut());
//! session.lock(0, 'c').unwrap();
//! session.set_length(3);
//! session.shuffle(shuffler.rng_mut()).unwrap();
//!
//! let slots = session.slots();
//! assert_eq!(slots[0], Slot::Locked(Letter::C));
//! assert!(slots[1..].iter().all(|slot| slot.is_filled()));
//! ```

mod error;
mod puzzle;
mod session;
mod slot;

pub use self::{
    error::EditError,
    puzzle::{Puzzle, PuzzleId, PuzzleUpdate, Timestamp},
    session::{PuzzleSession, SessionOptions},
    slot::{Arrangement, Slot, compose_slots},
};
