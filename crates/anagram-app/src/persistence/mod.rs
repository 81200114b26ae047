//! Storage for puzzle records.

mod dto;
mod store;

pub use self::{
    dto::RecordDtoError,
    store::{JsonFileStore, MemoryStore, RecordStore, STORAGE_KEY, StoreError},
};
