use anagram_puzzle::{EditError, PuzzleId, PuzzleSession, SessionOptions};
use anagram_shuffle::Shuffler;

use crate::{collection::PuzzleCollection, settings::Settings};

// AppState holds the records and settings. Records are saved whenever the state is dirty.
#[derive(Debug)]
pub struct AppState {
    pub(crate) puzzles: PuzzleCollection,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub fn new(puzzles: PuzzleCollection, settings: Settings) -> Self {
        Self {
            puzzles,
            settings,
            dirty: false,
        }
    }

    #[must_use]
    pub fn puzzles(&self) -> &PuzzleCollection {
        &self.puzzles
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        self.settings.editor.session_options()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

// UiState holds transient editing state that is never persisted.
#[derive(Debug)]
pub struct UiState {
    pub(crate) session: Option<PuzzleSession>,
    pub(crate) last_edit_error: Option<EditError>,
    pub(crate) shuffler: Shuffler,
}

impl UiState {
    #[must_use]
    pub fn new(shuffler: Shuffler) -> Self {
        Self {
            session: None,
            last_edit_error: None,
            shuffler,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PuzzleId> {
        self.session.as_ref().map(|session| session.puzzle().id())
    }

    #[must_use]
    pub fn session(&self) -> Option<&PuzzleSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn last_edit_error(&self) -> Option<EditError> {
        self.last_edit_error
    }
}
