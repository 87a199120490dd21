//! Dialog state, stored at `inventory/dialog`.

use serde::{Deserialize, Serialize};

use crate::form::FormState;
use crate::model::InventoryDraft;

/// Where the current dialog session stands.
///
/// `Closed`, `Cancelled` and `Saved` are all closed; the last two record
/// how the previous session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogPhase {
    Closed,
    Pristine,
    Dirty,
    Cancelled,
    Saved,
}

impl DialogPhase {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogPhase::Pristine | DialogPhase::Dirty)
    }
}

/// Inventory form dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogState {
    pub form_name: String,
    pub title: String,
    pub phase: DialogPhase,
    /// Present only while a session is open.
    pub form: Option<FormState>,
}

impl DialogState {
    pub const PATH: &'static str = "inventory/dialog";

    pub fn closed() -> Self {
        Self {
            form_name: String::new(),
            title: String::new(),
            phase: DialogPhase::Closed,
            form: None,
        }
    }

    /// Fresh session seeded from `initial`.
    pub fn open(form_name: &str, title: &str, initial: InventoryDraft) -> Self {
        Self {
            form_name: form_name.to_string(),
            title: title.to_string(),
            phase: DialogPhase::Pristine,
            form: Some(FormState::new(initial)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn is_dirty(&self) -> bool {
        self.form.as_ref().is_some_and(FormState::is_dirty)
    }

    /// End the session, discarding the draft.
    pub fn close(&mut self, phase: DialogPhase) {
        debug_assert!(!phase.is_open());
        self.phase = phase;
        self.form = None;
    }

    /// Re-derive `Pristine`/`Dirty` from the form after an edit.
    pub fn sync_phase(&mut self) {
        if self.is_open() {
            self.phase = if self.is_dirty() {
                DialogPhase::Dirty
            } else {
                DialogPhase::Pristine
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormEvent;
    use crate::model::Field;

    #[test]
    fn closed_has_no_form() {
        let state = DialogState::closed();
        assert!(!state.is_open());
        assert!(!state.is_dirty());
        assert!(state.form.is_none());
    }

    #[test]
    fn open_starts_pristine() {
        let state = DialogState::open("inventoryForm", "Create", InventoryDraft::empty());
        assert_eq!(state.phase, DialogPhase::Pristine);
        assert!(state.is_open());
        assert_eq!(state.form_name, "inventoryForm");
    }

    #[test]
    fn sync_phase_follows_dirty_flag() {
        let mut state = DialogState::open("f", "Create", InventoryDraft::empty());
        let form = state.form.as_mut().unwrap();
        form.apply(FormEvent::Change { field: Field::Name, value: "Flour".into() });
        state.sync_phase();
        assert_eq!(state.phase, DialogPhase::Dirty);

        let form = state.form.as_mut().unwrap();
        form.apply(FormEvent::Change { field: Field::Name, value: String::new() });
        state.sync_phase();
        assert_eq!(state.phase, DialogPhase::Pristine);
    }

    #[test]
    fn close_discards_the_draft_and_stays_closed() {
        let mut state = DialogState::open("f", "Edit", InventoryDraft::empty());
        state.close(DialogPhase::Cancelled);
        assert!(!state.is_open());
        assert!(state.form.is_none());

        state.sync_phase();
        assert_eq!(state.phase, DialogPhase::Cancelled);
    }
}
