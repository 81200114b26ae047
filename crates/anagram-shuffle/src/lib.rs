//! Randomized arrangement of letters.
//!
//! This crate turns the letters left over after validation into a random arrangement
//! for the open slots of a puzzle.
//!
//! # Overview
//!
//! - [`shuffle`] and [`shuffle_in_place`]: the Fisher-Yates shuffle, generic over any
//!   [`rand::Rng`] so the random source can be injected.
//! - [`Shuffler`]: a seedable shuffler backed by PCG-64, used by the editing session.
//! - [`ShuffleSeed`]: the 32-byte seed of a [`Shuffler`], printable as hex so a run
//!   can be reproduced.
//!
//! # Examples
//!
//! ```
//! use anagram_core::{LetterPool, LockMap, validate_pool};
//! use anagram_shuffle::{ShuffleSeed, Shuffler};
//!
//! let pool = LetterPool::sanitize("RRETOPUCM");
//! let remaining = validate_pool(&pool, &LockMap::new()).unwrap();
//!
//! let seed: ShuffleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()
//!     .unwrap();
//! let first = Shuffler::with_seed(seed).shuffle(&remaining);
//! let second = Shuffler::with_seed(seed).shuffle(&remaining);
//!
//! // Same seed, same arrangement.
//! assert_eq!(first, second);
//! assert_eq!(first.len(), 9);
//! ```

mod seed;
mod shuffle;
mod shuffler;

pub use self::{
    seed::{ParseSeedError, ShuffleSeed},
    shuffle::{shuffle, shuffle_in_place},
    shuffler::Shuffler,
};
