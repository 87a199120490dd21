//! Dialog handler implementations.

use openerp_flux::StateStore;
use tracing::{debug, info, warn};

use crate::callbacks::DialogCallbacks;
use crate::form::{FormEvent, FormOutcome};
use crate::model::Field;
use crate::request::*;
use crate::state::*;

/// Current dialog state; closed if nothing is stored yet.
pub fn current_dialog(store: &StateStore) -> DialogState {
    store
        .get_as::<DialogState>(DialogState::PATH)
        .unwrap_or_else(DialogState::closed)
}

/// The dialog state if a session is open.
fn open_session(store: &StateStore, request: &str) -> Option<DialogState> {
    let state = current_dialog(store);
    if state.is_open() {
        Some(state)
    } else {
        debug!(request, phase = ?state.phase, "inventory dialog not open, ignoring");
        None
    }
}

fn apply(state: &mut DialogState, event: FormEvent) -> Option<FormOutcome> {
    let outcome = state.form.as_mut()?.apply(event);
    state.sync_phase();
    Some(outcome)
}

fn parse_field(raw: &str, request: &str) -> Option<Field> {
    match raw.parse::<Field>() {
        Ok(field) => Some(field),
        Err(e) => {
            warn!(request, error = %e, "inventory dialog: bad field");
            None
        }
    }
}

/// Handle `inventory/dialog/open`.
pub async fn handle_open(req: &OpenDialogReq, store: &StateStore) {
    let previous = current_dialog(store);
    if previous.is_open() {
        debug!(form = %previous.form_name, "replacing open inventory dialog session");
    }
    info!(form = %req.form_name, title = %req.title, "inventory dialog opened");
    store.set(
        DialogState::PATH,
        DialogState::open(&req.form_name, &req.title, req.initial_values.clone()),
    );
}

/// Handle `inventory/dialog/update-field`.
pub async fn handle_update_field(req: &UpdateFieldReq, store: &StateStore) {
    let Some(field) = parse_field(&req.field, UpdateFieldReq::PATH) else {
        return;
    };
    let Some(mut state) = open_session(store, UpdateFieldReq::PATH) else {
        return;
    };

    let event = FormEvent::Change {
        field,
        value: req.value.clone(),
    };
    if let Some(FormOutcome::Rejected(e)) = apply(&mut state, event) {
        debug!(%field, error = %e, "inventory field value rejected");
    }
    store.set(DialogState::PATH, state);
}

/// Handle `inventory/dialog/touch-field`.
pub async fn handle_touch_field(req: &TouchFieldReq, store: &StateStore) {
    let Some(field) = parse_field(&req.field, TouchFieldReq::PATH) else {
        return;
    };
    let Some(mut state) = open_session(store, TouchFieldReq::PATH) else {
        return;
    };
    apply(&mut state, FormEvent::Touch(field));
    store.set(DialogState::PATH, state);
}

/// Handle `inventory/dialog/reset`.
pub async fn handle_reset(store: &StateStore) {
    let Some(mut state) = open_session(store, ResetDialogReq::PATH) else {
        return;
    };
    apply(&mut state, FormEvent::Reset);
    store.set(DialogState::PATH, state);
}

/// Handle `inventory/dialog/submit`.
///
/// Only a dirty, valid draft reaches the caller: `handle_inventory` with
/// the values, then `handle_dialog(true)`.
pub async fn handle_submit(store: &StateStore, callbacks: &dyn DialogCallbacks) {
    let Some(mut state) = open_session(store, SubmitDialogReq::PATH) else {
        return;
    };

    match apply(&mut state, FormEvent::Submit) {
        Some(FormOutcome::Valid(values)) => {
            info!(form = %state.form_name, name = %values.name, "inventory dialog saved");
            state.close(DialogPhase::Saved);
            store.set(DialogState::PATH, state);
            callbacks.handle_inventory(values);
            callbacks.handle_dialog(true);
        }
        Some(FormOutcome::Invalid(errors)) => {
            info!(fields = ?errors.fields(), "inventory dialog submit blocked by validation");
            store.set(DialogState::PATH, state);
        }
        Some(FormOutcome::NotDirty) => {
            debug!("inventory dialog submit ignored, nothing edited");
        }
        _ => {}
    }
}

/// Handle `inventory/dialog/cancel`.
///
/// Always asks the host to close; the draft is dropped unsaved.
pub async fn handle_cancel(store: &StateStore, callbacks: &dyn DialogCallbacks) {
    let mut state = current_dialog(store);
    if state.is_open() {
        info!(form = %state.form_name, dirty = state.is_dirty(), "inventory dialog cancelled");
        state.close(DialogPhase::Cancelled);
        store.set(DialogState::PATH, state);
    }
    callbacks.handle_dialog(false);
}
