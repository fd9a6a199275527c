//! Saving and loading run progress.
//!
//! - `SaveData`: Flat snapshot of the run
//! - `KeyValueStore`: Storage capability (`MemoryStore`, `FileStore`)
//! - `SaveSlotManager`: Bounded set of named save slots

pub mod error;
pub mod slots;
pub mod snapshot;
pub mod store;

pub use error::{PersistenceError, Result};
pub use slots::{SaveSlot, SaveSlotManager, ACTIVE_SLOT_KEY, SAVE_SLOTS_KEY};
pub use snapshot::SaveData;
pub use store::{FileStore, KeyValueStore, MemoryStore};
