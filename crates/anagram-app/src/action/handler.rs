use anagram_puzzle::{EditError, PuzzleId, PuzzleSession, PuzzleUpdate};
use anagram_shuffle::Shuffler;

use crate::{
    action::{Action, ActionRequestQueue},
    settings::Settings,
    state::{AppState, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    ctx.ui_state.last_edit_error = None;

    match action {
        Action::CreatePuzzle => ctx.create_puzzle(),
        Action::SelectPuzzle(id) => ctx.select(id),
        Action::SelectByName(name) => ctx.select_by_name(&name),
        Action::ClearSelection => ctx.ui_state.session = None,
        Action::DeletePuzzle(id) => ctx.delete_puzzle(id),
        Action::Rename(name) => ctx.edit(|session, _| Ok(session.rename(name))),
        Action::SetLength(value) => ctx.edit(|session, _| Ok(session.set_length(value))),
        Action::EditPool(raw) => {
            ctx.edit(|session, shuffler| Ok(session.edit_pool(&raw, shuffler.rng_mut())));
        }
        Action::Lock { index, input } => ctx.edit(|session, _| session.lock(index, input)),
        Action::Unlock(index) => ctx.edit(|session, _| Ok(session.unlock(index))),
        Action::ClearLocks => ctx.edit(|session, _| Ok(session.clear_locks())),
        Action::Shuffle => ctx.shuffle(),
        Action::UpdateSettings(settings) => ctx.update_settings(settings),
    }
}

impl ActionContext<'_> {
    fn create_puzzle(&mut self) {
        let id = self
            .app_state
            .puzzles
            .create(&self.app_state.settings.editor);
        log::info!("created puzzle {id}");
        self.app_state.mark_dirty();
        self.select(id);
    }

    fn select(&mut self, id: PuzzleId) {
        let Some(puzzle) = self.app_state.puzzles.get(id) else {
            log::warn!("cannot select unknown puzzle {id}");
            return;
        };
        self.ui_state.session = Some(PuzzleSession::new(
            puzzle.clone(),
            self.app_state.session_options(),
        ));
    }

    fn select_by_name(&mut self, name: &str) {
        match self.app_state.puzzles.find_by_name(name) {
            Some(puzzle) => {
                let id = puzzle.id();
                self.select(id);
            }
            None => {
                log::debug!("no puzzle named {name:?}");
                self.ui_state.session = None;
            }
        }
    }

    fn delete_puzzle(&mut self, id: PuzzleId) {
        if self.app_state.puzzles.remove(id).is_none() {
            return;
        }
        log::info!("deleted puzzle {id}");
        self.app_state.mark_dirty();
        if self.ui_state.selected() == Some(id) {
            self.ui_state.session = None;
        }
    }

    fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut PuzzleSession, &mut Shuffler) -> Result<PuzzleUpdate, EditError>,
    {
        let Some(session) = self.ui_state.session.as_mut() else {
            log::debug!("ignoring edit without a selected puzzle");
            return;
        };
        match f(session, &mut self.ui_state.shuffler) {
            Ok(update) => {
                if update.is_empty() {
                    return;
                }
                let id = session.puzzle().id();
                if self.app_state.puzzles.update_record(id, update) {
                    self.app_state.mark_dirty();
                }
            }
            Err(err) => {
                log::debug!("edit rejected: {err}");
                self.ui_state.last_edit_error = Some(err);
            }
        }
    }

    fn shuffle(&mut self) {
        let Some(session) = self.ui_state.session.as_mut() else {
            return;
        };
        if let Err(violation) = session.shuffle(self.ui_state.shuffler.rng_mut()) {
            log::debug!("shuffle rejected: {violation}");
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        self.app_state.settings = settings;
        let options = self.app_state.session_options();
        if let Some(session) = self.ui_state.session.as_mut() {
            session.set_options(options);
        }
    }
}
