//! The record manager.
//!
//! # Design Notes
//! - Records live in [`AppState`]; the editing session, last edit error, and
//!   shuffler live in [`UiState`] and are never persisted.
//! - Actions are applied in batches. After each batch the selected name is
//!   published and the records are saved if anything changed.
//! - A failed load starts with an empty collection. A failed save keeps the
//!   state dirty so the next batch retries.

use anagram_core::PoolViolation;
use anagram_puzzle::{EditError, Puzzle, PuzzleId, PuzzleSession, Slot};
use anagram_shuffle::Shuffler;

use crate::{
    action::{self, Action, ActionRequestQueue},
    collection::PuzzleCollection,
    persistence::RecordStore,
    selection_sync::SelectionSync,
    settings::Settings,
    state::{AppState, UiState},
};

#[derive(Debug)]
pub struct AnagramApp<S, Y> {
    app_state: AppState,
    ui_state: UiState,
    store: S,
    sync: Y,
}

impl<S, Y> AnagramApp<S, Y>
where
    S: RecordStore,
    Y: SelectionSync,
{
    /// Loads the stored records and selects the puzzle named by `sync`, if any.
    pub fn new(store: S, sync: Y, settings: Settings) -> Self {
        Self::with_shuffler(store, sync, settings, Shuffler::new())
    }

    /// Like [`new`](Self::new), shuffling with the given generator.
    pub fn with_shuffler(store: S, sync: Y, settings: Settings, shuffler: Shuffler) -> Self {
        let puzzles = match store.load() {
            Ok(puzzles) => {
                log::info!("loaded {} puzzles", puzzles.len());
                puzzles
            }
            Err(err) => {
                log::warn!("failed to load puzzles, starting empty: {err}");
                Vec::new()
            }
        };
        let mut app = Self {
            app_state: AppState::new(PuzzleCollection::from_puzzles(puzzles), settings),
            ui_state: UiState::new(shuffler),
            store,
            sync,
        };
        if let Some(name) = app.sync.requested_name() {
            app.dispatch(Action::SelectByName(name));
        }
        app
    }

    /// Applies all queued actions, then publishes the selection and saves if needed.
    pub fn update(&mut self, action_queue: &mut ActionRequestQueue) {
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, action_queue);
        self.publish_selection();
        self.apply_persistence();
    }

    pub fn dispatch(&mut self, action: Action) {
        let mut action_queue = ActionRequestQueue::default();
        action_queue.request(action);
        self.update(&mut action_queue);
    }

    fn publish_selection(&mut self) {
        let name = self.ui_state.session().map(|session| session.puzzle().name());
        self.sync.publish(name);
    }

    fn apply_persistence(&mut self) {
        if !self.app_state.is_dirty() {
            return;
        }
        match self.store.save(self.app_state.puzzles().as_slice()) {
            Ok(()) => self.app_state.clear_dirty(),
            Err(err) => log::warn!("failed to save puzzles: {err}"),
        }
    }
}

impl<S, Y> AnagramApp<S, Y> {
    #[must_use]
    pub fn puzzles(&self) -> &PuzzleCollection {
        self.app_state.puzzles()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        self.app_state.settings()
    }

    #[must_use]
    pub fn selected(&self) -> Option<PuzzleId> {
        self.ui_state.selected()
    }

    #[must_use]
    pub fn selected_puzzle(&self) -> Option<&Puzzle> {
        self.ui_state.session().map(PuzzleSession::puzzle)
    }

    #[must_use]
    pub fn session(&self) -> Option<&PuzzleSession> {
        self.ui_state.session()
    }

    /// Returns the slots of the selected puzzle, or an empty list.
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        self.ui_state
            .session()
            .map(PuzzleSession::slots)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn pool_error(&self) -> Option<PoolViolation> {
        self.ui_state.session().and_then(PuzzleSession::error)
    }

    /// Returns the error of the last rejected edit in the most recent action.
    #[must_use]
    pub fn last_edit_error(&self) -> Option<EditError> {
        self.ui_state.last_edit_error()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.app_state.is_dirty()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn sync(&self) -> &Y {
        &self.sync
    }
}

#[cfg(test)]
mod tests {
    use anagram_core::Letter;
    use anagram_shuffle::ShuffleSeed;

    use super::*;
    use crate::{
        persistence::{MemoryStore, StoreError},
        selection_sync::QueryParamSync,
        settings::EditorSettings,
    };

    type TestApp = AnagramApp<MemoryStore, QueryParamSync>;

    fn app_with(store: MemoryStore, url: &str) -> TestApp {
        AnagramApp::with_shuffler(
            store,
            QueryParamSync::parse(url).unwrap(),
            Settings::default(),
            Shuffler::with_seed(ShuffleSeed::from_bytes([7; 32])),
        )
    }

    fn empty_app() -> TestApp {
        app_with(MemoryStore::new(), "https://example.com/")
    }

    fn letters(slots: &[Slot]) -> String {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn create_selects_and_saves() {
        let mut app = empty_app();
        app.dispatch(Action::CreatePuzzle);

        let puzzle = app.selected_puzzle().unwrap();
        assert_eq!(puzzle.name(), "Anagram 1");
        assert_eq!(puzzle.length().get(), 5);
        assert_eq!(app.slots().len(), 5);
        assert!(!app.is_dirty());
        assert_eq!(app.store().load().unwrap(), app.puzzles().as_slice());
        assert_eq!(app.sync().requested_name().as_deref(), Some("Anagram 1"));
    }

    #[test]
    fn edits_update_record_and_session() {
        let mut app = empty_app();
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::CreatePuzzle);
        queue.request(Action::Rename("Clue".to_owned()));
        queue.request(Action::SetLength(4));
        queue.request(Action::Lock {
            index: 0,
            input: 'c',
        });
        queue.request(Action::EditPool("acge".to_owned()));
        app.update(&mut queue);

        let id = app.selected().unwrap();
        let stored = app.puzzles().get(id).unwrap();
        assert_eq!(stored, app.selected_puzzle().unwrap());
        assert_eq!(stored.name(), "Clue");
        assert_eq!(stored.summary(), "1 known \u{2022} 4 letters");
        assert_eq!(app.sync().requested_name().as_deref(), Some("Clue"));

        let slots = app.slots();
        assert_eq!(slots[0], Slot::Locked(Letter::C));
        let mut rest = letters(&slots[1..]).into_bytes();
        rest.sort_unstable();
        assert_eq!(rest, b"AEG");
    }

    #[test]
    fn violations_are_reported_on_shuffle() {
        let mut app = empty_app();
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::CreatePuzzle);
        queue.request(Action::EditPool("acge".to_owned()));
        queue.request(Action::Lock {
            index: 1,
            input: 'x',
        });
        queue.request(Action::Shuffle);
        app.update(&mut queue);

        assert_eq!(app.pool_error().map(|err| err.letter), Some(Letter::X));
        assert_eq!(letters(&app.slots()), "_X___");

        app.dispatch(Action::ClearLocks);
        assert_eq!(app.pool_error(), None);
        app.dispatch(Action::Shuffle);
        let slots = app.slots();
        let mut filled = letters(&slots[..4]).into_bytes();
        filled.sort_unstable();
        assert_eq!(filled, b"ACEG");
        assert_eq!(slots[4], Slot::Empty);
    }

    #[test]
    fn rejected_lock_is_reported() {
        let mut app = empty_app();
        app.dispatch(Action::CreatePuzzle);
        app.dispatch(Action::Lock {
            index: 0,
            input: '3',
        });
        assert!(matches!(
            app.last_edit_error(),
            Some(EditError::InvalidLetter(_))
        ));
        assert!(app.selected_puzzle().unwrap().locks().is_empty());

        app.dispatch(Action::Lock {
            index: 9,
            input: 'a',
        });
        assert_eq!(
            app.last_edit_error(),
            Some(EditError::SlotOutOfRange {
                index: 9,
                length: 5
            })
        );

        app.dispatch(Action::Shuffle);
        assert_eq!(app.last_edit_error(), None);
    }

    #[test]
    fn pool_growth_makes_room_for_later_locks() {
        let mut app = empty_app();
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::CreatePuzzle);
        queue.request(Action::EditPool("listen".to_owned()));
        queue.request(Action::Lock {
            index: 5,
            input: 'n',
        });
        app.update(&mut queue);

        assert_eq!(app.last_edit_error(), None);
        let puzzle = app.selected_puzzle().unwrap();
        assert_eq!(puzzle.length().get(), 6);
        assert_eq!(puzzle.locks().get(5), Some(Letter::N));

        app.dispatch(Action::Shuffle);
        assert_eq!(app.pool_error(), None);
        assert_eq!(app.slots()[5], Slot::Locked(Letter::N));
    }

    #[test]
    fn delete_selected_clears_selection() {
        let mut app = empty_app();
        app.dispatch(Action::CreatePuzzle);
        let first = app.selected().unwrap();
        app.dispatch(Action::CreatePuzzle);
        let second = app.selected().unwrap();

        app.dispatch(Action::DeletePuzzle(first));
        assert_eq!(app.selected(), Some(second));
        assert_eq!(app.puzzles().len(), 1);

        app.dispatch(Action::DeletePuzzle(second));
        assert_eq!(app.selected(), None);
        assert!(app.slots().is_empty());
        assert_eq!(app.sync().requested_name(), None);
        assert!(app.store().load().unwrap().is_empty());
    }

    #[test]
    fn selecting_starts_a_fresh_session() {
        let mut app = empty_app();
        app.dispatch(Action::CreatePuzzle);
        let first = app.selected().unwrap();
        app.dispatch(Action::EditPool("abc".to_owned()));
        assert!(app.session().unwrap().arrangement().is_some());

        app.dispatch(Action::CreatePuzzle);
        app.dispatch(Action::SelectPuzzle(first));
        assert_eq!(app.selected(), Some(first));
        assert!(app.session().unwrap().arrangement().is_none());
        assert_eq!(app.selected_puzzle().unwrap().pool().to_string(), "ABC");

        app.dispatch(Action::SelectByName("Anagram 2".to_owned()));
        assert_eq!(app.selected_puzzle().unwrap().name(), "Anagram 2");

        app.dispatch(Action::SelectByName("missing".to_owned()));
        assert_eq!(app.selected(), None);

        app.dispatch(Action::SelectPuzzle(first));
        app.dispatch(Action::ClearSelection);
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn edits_without_selection_are_ignored() {
        let mut app = empty_app();
        app.dispatch(Action::CreatePuzzle);
        app.dispatch(Action::ClearSelection);
        let before = app.puzzles().clone();

        app.dispatch(Action::EditPool("xyz".to_owned()));
        app.dispatch(Action::Rename("nope".to_owned()));
        app.dispatch(Action::Shuffle);
        assert_eq!(app.puzzles(), &before);
    }

    #[test]
    fn restores_records_and_requested_selection() {
        let mut app = empty_app();
        app.dispatch(Action::CreatePuzzle);
        app.dispatch(Action::Rename("Daily".to_owned()));
        app.dispatch(Action::Lock {
            index: 2,
            input: 'q',
        });
        let saved = app.store().clone();

        let restored = app_with(saved.clone(), "https://example.com/?name=Daily");
        assert_eq!(restored.puzzles(), app.puzzles());
        assert_eq!(restored.selected_puzzle().unwrap().name(), "Daily");
        assert_eq!(letters(&restored.slots()), "__Q__");

        let restored = app_with(saved, "https://example.com/?name=Other");
        assert_eq!(restored.selected(), None);
        assert_eq!(restored.sync().requested_name(), None);
    }

    #[test]
    fn load_failure_starts_empty() {
        let app = app_with(MemoryStore::with_contents("[{]"), "https://example.com/");
        assert!(app.puzzles().is_empty());
        assert!(matches!(app.store().load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn settings_apply_to_new_and_active_puzzles() {
        let mut app = empty_app();
        let settings = Settings {
            editor: EditorSettings {
                max_length: 8,
                default_length: 7,
                auto_shuffle_on_pool_edit: false,
            },
        };
        app.dispatch(Action::UpdateSettings(settings.clone()));
        assert_eq!(app.settings(), &settings);

        app.dispatch(Action::CreatePuzzle);
        assert_eq!(app.selected_puzzle().unwrap().length().get(), 7);

        app.dispatch(Action::EditPool("abcdefghij".to_owned()));
        assert_eq!(app.selected_puzzle().unwrap().length().get(), 8);
        assert!(app.session().unwrap().arrangement().is_none());

        app.dispatch(Action::SetLength(20));
        assert_eq!(app.selected_puzzle().unwrap().length().get(), 8);
    }
}
