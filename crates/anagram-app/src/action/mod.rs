use std::mem;

use anagram_puzzle::PuzzleId;

use crate::settings::Settings;

pub(crate) mod handler;

/// A user intent, applied by [`AnagramApp::update`](crate::AnagramApp::update).
///
/// Editing actions apply to the selected puzzle and are ignored when nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreatePuzzle,
    SelectPuzzle(PuzzleId),
    SelectByName(String),
    ClearSelection,
    DeletePuzzle(PuzzleId),
    Rename(String),
    SetLength(usize),
    EditPool(String),
    Lock { index: usize, input: char },
    Unlock(usize),
    ClearLocks,
    Shuffle,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
