use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anagram_puzzle::Puzzle;

use super::dto::{PuzzleRecordDto, RecordDtoError};

/// Name under which the record list is stored.
pub const STORAGE_KEY: &str = "anagram-helper-data";

/// Load and save the full list of puzzle records.
pub trait RecordStore {
    /// Loads all records. An empty store yields an empty list.
    fn load(&self) -> Result<Vec<Puzzle>, StoreError>;

    /// Replaces the stored records with `puzzles`.
    fn save(&mut self, puzzles: &[Puzzle]) -> Result<(), StoreError>;
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    #[display("storage I/O failed: {_0}")]
    Io(io::Error),
    #[display("malformed record data: {_0}")]
    Json(serde_json::Error),
    #[display("invalid record: {_0}")]
    InvalidRecord(RecordDtoError),
}

fn encode(puzzles: &[Puzzle]) -> Result<String, StoreError> {
    let records = puzzles.iter().map(PuzzleRecordDto::from).collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn decode(json: &str) -> Result<Vec<Puzzle>, StoreError> {
    let records: Vec<PuzzleRecordDto> = serde_json::from_str(json)?;
    let puzzles = records
        .into_iter()
        .map(Puzzle::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(puzzles)
}

/// Keeps the encoded record list in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding previously encoded data.
    #[must_use]
    pub fn with_contents(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Puzzle>, StoreError> {
        self.data.as_deref().map_or_else(|| Ok(Vec::new()), decode)
    }

    fn save(&mut self, puzzles: &[Puzzle]) -> Result<(), StoreError> {
        self.data = Some(encode(puzzles)?);
        Ok(())
    }
}

/// Stores the record list as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing `anagram-helper-data.json` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Puzzle>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        decode(&json)
    }

    fn save(&mut self, puzzles: &[Puzzle]) -> Result<(), StoreError> {
        let json = encode(puzzles)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write then rename so a failed save keeps the previous file intact.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("saved {} puzzles to {}", puzzles.len(), self.path.display());
        Ok(())
    }
}
