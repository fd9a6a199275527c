//! Save slots.
//!
//! Slots are stored together as one JSON array under
//! `recursion-save-slots`; the active slot ID lives under
//! `recursion-active-slot`. Saving to an existing ID overwrites it in place;
//! a new ID is appended only while there is room. An unreadable slot list
//! is reported and never overwritten.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::error::{PersistenceError, Result};
use super::snapshot::SaveData;
use super::store::KeyValueStore;
use crate::core::EngineConfig;

/// Store key holding the slot list.
pub const SAVE_SLOTS_KEY: &str = "recursion-save-slots";

/// Store key holding the active slot ID.
pub const ACTIVE_SLOT_KEY: &str = "recursion-active-slot";

/// One named save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSlot {
    pub id: String,
    pub name: String,
    /// Milliseconds since the Unix epoch at save time.
    pub timestamp: u64,
    pub data: SaveData,
}

/// Manages save slots in a `KeyValueStore`.
#[derive(Debug)]
pub struct SaveSlotManager<S> {
    store: S,
    max_slots: usize,
}

impl<S: KeyValueStore> SaveSlotManager<S> {
    #[must_use]
    pub fn new(store: S, max_slots: usize) -> Self {
        Self { store, max_slots }
    }

    /// Capacity taken from `config.max_save_slots`.
    #[must_use]
    pub fn from_config(store: S, config: &EngineConfig) -> Self {
        Self::new(store, config.max_save_slots)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// All slots in save order.
    ///
    /// An unreadable slot list is a `Serialization` error, so no later
    /// write can replace it unnoticed.
    pub fn all_slots(&self) -> Result<Vec<SaveSlot>> {
        let Some(raw) = self.store.get(SAVE_SLOTS_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!(%err, "save slot list is unreadable");
            PersistenceError::from(err)
        })
    }

    pub fn slot(&self, id: &str) -> Result<Option<SaveSlot>> {
        Ok(self.all_slots()?.into_iter().find(|s| s.id == id))
    }

    /// Save `data` under `id`, stamped with the current time.
    pub fn save_to_slot(&self, id: &str, name: &str, data: SaveData) -> Result<SaveSlot> {
        let mut slots = self.all_slots()?;
        let slot = SaveSlot {
            id: id.to_string(),
            name: name.to_string(),
            timestamp: now_millis(),
            data,
        };

        if let Some(index) = slots.iter().position(|s| s.id == id) {
            slots[index] = slot.clone();
        } else if slots.len() >= self.max_slots {
            return Err(PersistenceError::SlotsFull {
                max: self.max_slots,
            });
        } else {
            slots.push(slot.clone());
        }

        self.write_slots(&slots)?;
        tracing::info!(id, name, "saved game");
        Ok(slot)
    }

    /// Delete a slot. Unknown IDs are ignored.
    pub fn delete_slot(&self, id: &str) -> Result<()> {
        let mut slots = self.all_slots()?;
        slots.retain(|s| s.id != id);
        self.write_slots(&slots)?;
        tracing::info!(id, "deleted save slot");
        Ok(())
    }

    pub fn active_slot_id(&self) -> Result<Option<String>> {
        self.store.get(ACTIVE_SLOT_KEY)
    }

    /// Set the active slot, or clear it with `None`.
    pub fn set_active_slot_id(&self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => self.store.set(ACTIVE_SLOT_KEY, id),
            None => self.store.remove(ACTIVE_SLOT_KEY),
        }
    }

    /// A fresh slot ID of the form `slot-<millis>`.
    #[must_use]
    pub fn create_slot_id(&self) -> String {
        format!("slot-{}", now_millis())
    }

    fn write_slots(&self, slots: &[SaveSlot]) -> Result<()> {
        let json = serde_json::to_string(slots)?;
        self.store.set(SAVE_SLOTS_KEY, &json)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
