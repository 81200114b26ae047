//! Puzzle record management for the Anagram Helper.
//!
//! [`AnagramApp`] owns the collection of puzzles, the active editing session, and
//! the collaborators that persist records and share the selection. Edits are
//! requested as [`Action`]s and applied in batches.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod collection;
pub mod persistence;
pub mod selection_sync;
pub mod settings;
pub mod state;

pub use self::{
    action::{Action, ActionRequestQueue},
    app::AnagramApp,
    collection::PuzzleCollection,
    persistence::{JsonFileStore, MemoryStore, RecordStore, StoreError},
    selection_sync::{QueryParamSync, SelectionSync},
    settings::{EditorSettings, Settings},
};
