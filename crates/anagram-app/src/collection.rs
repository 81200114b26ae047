use anagram_puzzle::{Puzzle, PuzzleId, PuzzleUpdate};

use crate::settings::EditorSettings;

/// The user's puzzles, in creation order.
///
/// Records are addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleCollection {
    puzzles: Vec<Puzzle>,
}

impl PuzzleCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_puzzles(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Puzzle] {
        &self.puzzles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    #[must_use]
    pub fn get(&self, id: PuzzleId) -> Option<&Puzzle> {
        self.puzzles.iter().find(|puzzle| puzzle.id() == id)
    }

    /// Returns the first puzzle with exactly this name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|puzzle| puzzle.name() == name)
    }

    /// Appends an empty puzzle named `Anagram N`, where N is the new collection size.
    pub fn create(&mut self, editor: &EditorSettings) -> PuzzleId {
        let name = format!("Anagram {}", self.puzzles.len() + 1);
        let puzzle = Puzzle::new(name, editor.default_length());
        let id = puzzle.id();
        self.puzzles.push(puzzle);
        id
    }

    /// Applies `update` to the record with `id`. Returns `false` if there is none.
    pub fn update_record(&mut self, id: PuzzleId, update: PuzzleUpdate) -> bool {
        let Some(puzzle) = self.puzzles.iter_mut().find(|puzzle| puzzle.id() == id) else {
            return false;
        };
        puzzle.apply(update);
        true
    }

    pub fn remove(&mut self, id: PuzzleId) -> Option<Puzzle> {
        let index = self.puzzles.iter().position(|puzzle| puzzle.id() == id)?;
        Some(self.puzzles.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use anagram_core::{LetterPool, TargetLength};

    use super::*;

    #[test]
    fn create_names_by_position() {
        let mut puzzles = PuzzleCollection::new();
        let editor = EditorSettings::default();
        let first = puzzles.create(&editor);
        let second = puzzles.create(&editor);

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles.get(first).unwrap().name(), "Anagram 1");
        assert_eq!(puzzles.get(second).unwrap().name(), "Anagram 2");
        assert_eq!(puzzles.get(first).unwrap().length(), TargetLength::DEFAULT);

        puzzles.remove(first);
        let third = puzzles.create(&editor);
        assert_eq!(puzzles.get(third).unwrap().name(), "Anagram 2");
    }

    #[test]
    fn update_record_replaces_by_id() {
        let mut puzzles = PuzzleCollection::new();
        let editor = EditorSettings::default();
        let a = puzzles.create(&editor);
        let b = puzzles.create(&editor);

        assert!(puzzles.update_record(
            b,
            PuzzleUpdate::default().with_pool(LetterPool::sanitize("cat"))
        ));
        assert_eq!(puzzles.get(b).unwrap().pool().to_string(), "CAT");
        assert!(puzzles.get(a).unwrap().pool().is_empty());

        puzzles.remove(b);
        assert!(!puzzles.update_record(b, PuzzleUpdate::default().with_name("gone")));
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let mut puzzles = PuzzleCollection::new();
        let editor = EditorSettings::default();
        let a = puzzles.create(&editor);
        let b = puzzles.create(&editor);
        puzzles.update_record(b, PuzzleUpdate::default().with_name("Anagram 1"));

        assert_eq!(puzzles.find_by_name("Anagram 1").unwrap().id(), a);
        assert!(puzzles.find_by_name("Anagram 3").is_none());
    }

    #[test]
    fn remove_keeps_order() {
        let mut puzzles = PuzzleCollection::new();
        let editor = EditorSettings::default();
        let ids: Vec<_> = (0..3).map(|_| puzzles.create(&editor)).collect();

        assert!(puzzles.remove(ids[1]).is_some());
        assert!(puzzles.remove(ids[1]).is_none());
        let remaining: Vec<_> = puzzles.iter().map(Puzzle::id).collect();
        assert_eq!(remaining, [ids[0], ids[2]]);
    }
}
