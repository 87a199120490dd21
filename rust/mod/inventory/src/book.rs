//! Caller-side inventory storage.
//!
//! The dialog never stores anything. `InventoryBook` is the in-memory
//! collection a host keeps, and `BookHost` wires it up as the dialog's
//! callbacks: a saved draft becomes a new record, or replaces the record
//! being edited.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::callbacks::DialogCallbacks;
use crate::model::InventoryDraft;

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: String,
    #[serde(flatten)]
    pub values: InventoryDraft,
}

#[derive(Debug, Default)]
pub struct InventoryBook {
    items: Mutex<Vec<Inventory>>,
}

impl InventoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order.
    pub fn find_all(&self) -> Vec<Inventory> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn get(&self, id: &str) -> Option<Inventory> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// Store a new record under a fresh id.
    pub fn create(&self, values: InventoryDraft) -> Inventory {
        let inventory = Inventory {
            id: uuid::Uuid::new_v4().to_string(),
            values,
        };
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(inventory.clone());
        debug!(id = %inventory.id, "inventory created");
        inventory
    }

    /// Replace the values of an existing record. `None` if the id is unknown.
    pub fn update(&self, id: &str, values: InventoryDraft) -> Option<Inventory> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        let item = items.iter_mut().find(|i| i.id == id)?;
        item.values = values;
        debug!(id, "inventory updated");
        Some(item.clone())
    }

    /// Delete records by id. Unknown ids are skipped; returns what was removed.
    pub fn delete(&self, ids: &[String]) -> Vec<Inventory> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        let (removed, kept): (Vec<Inventory>, Vec<Inventory>) =
            items.drain(..).partition(|i| ids.contains(&i.id));
        *items = kept;
        debug!(removed = removed.len(), "inventories deleted");
        removed
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Host-side callbacks backed by an [`InventoryBook`].
pub struct BookHost {
    book: Arc<InventoryBook>,
    editing: Mutex<Option<String>>,
    dialog_open: AtomicBool,
}

impl BookHost {
    pub fn new(book: Arc<InventoryBook>) -> Self {
        Self {
            book,
            editing: Mutex::new(None),
            dialog_open: AtomicBool::new(false),
        }
    }

    pub fn book(&self) -> &Arc<InventoryBook> {
        &self.book
    }

    /// Start a "create" session.
    pub fn begin_create(&self) {
        *self.editing.lock().unwrap_or_else(PoisonError::into_inner) = None;
        self.dialog_open.store(true, Ordering::Relaxed);
    }

    /// Start an "edit" session; returns the record's values to seed the
    /// dialog with, or `None` if the id is unknown.
    pub fn begin_edit(&self, id: &str) -> Option<InventoryDraft> {
        let record = self.book.get(id)?;
        *self.editing.lock().unwrap_or_else(PoisonError::into_inner) = Some(id.to_string());
        self.dialog_open.store(true, Ordering::Relaxed);
        Some(record.values)
    }

    /// The host's `isDialogOpen` flag.
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open.load(Ordering::Relaxed)
    }
}

impl DialogCallbacks for BookHost {
    fn handle_dialog(&self, open: bool) {
        debug!(open, "host dialog visibility requested");
        // Saving reports `true`; the session is over either way.
        self.dialog_open.store(false, Ordering::Relaxed);
        if !open {
            *self.editing.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }

    fn handle_inventory(&self, values: InventoryDraft) {
        let editing = self
            .editing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match editing {
            Some(id) => match self.book.update(&id, values.clone()) {
                Some(_) => info!(%id, "inventory saved"),
                None => {
                    let created = self.book.create(values);
                    info!(id = %created.id, missing = %id, "edited inventory vanished, saved as new");
                }
            },
            None => {
                let created = self.book.create(values);
                info!(id = %created.id, "inventory saved");
            }
        }
    }
}
