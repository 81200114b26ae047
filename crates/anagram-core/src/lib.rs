//! Core data structures for anagram puzzles.
//!
//! This crate provides the fundamental types used to describe an anagram puzzle and
//! the pool validator that checks locked letters against the available letters.
//! These types are shared by the shuffler, the puzzle editing session, and the
//! application layer.
//!
//! # Overview
//!
//! 1. **Letters** - Type-safe letters and per-letter counts
//!    - [`letter`]: [`Letter`], an uppercase ASCII letter `A`-`Z`
//!    - [`letter_counts`]: [`LetterCounts`], a frequency table over the alphabet
//!
//! 2. **Puzzle parts** - The pieces a puzzle is made of
//!    - [`pool`]: [`LetterPool`], every letter available to the puzzle
//!    - [`lock_map`]: [`LockMap`], letters pinned to a slot index
//!    - [`length`]: [`TargetLength`], the number of slots
//!
//! 3. **Validation**
//!    - [`validate`]: [`validate_pool`] and its [`PoolViolation`] error
//!
//! # Examples
//!
//! ```
//! use anagram_core::{Letter, LetterPool, LockMap, validate_pool};
//!
//! let pool = LetterPool::sanitize("cat");
//! let mut locks = LockMap::new();
//! locks.lock(0, Letter::C);
//!
//! let remaining = validate_pool(&pool, &locks).unwrap();
//! assert_eq!(remaining, [Letter::A, Letter::T]);
//! ```

pub mod length;
pub mod letter;
pub mod letter_counts;
pub mod lock_map;
pub mod pool;
pub mod validate;

// Re-export commonly used types
pub use self::{
    length::{LengthError, TargetLength},
    letter::{Letter, LetterError},
    letter_counts::LetterCounts,
    lock_map::LockMap,
    pool::{LetterPool, PoolError},
    validate::{PoolViolation, validate_pool},
};
