//! Handler implementations and Flux wiring.
//!
//! `register_handlers` hooks every dialog request path to its handler,
//! downcasting the payload and handing over the store and callbacks.

pub mod dialog;

use std::sync::Arc;

use openerp_flux::{Flux, StateStore};
use tracing::warn;

use crate::callbacks::DialogCallbacks;
use crate::request::*;
use crate::state::*;

pub use self::dialog::current_dialog;

/// What the dialog handlers get from the host.
pub struct DialogContext {
    pub callbacks: Arc<dyn DialogCallbacks>,
}

impl DialogContext {
    pub fn new(callbacks: Arc<dyn DialogCallbacks>) -> Self {
        Self { callbacks }
    }
}

fn mistyped(path: &str) {
    warn!(path, "inventory dialog request with unexpected payload type");
}

/// Register all inventory dialog handlers with a Flux instance and publish
/// the initial (closed) dialog state.
pub fn register_handlers(flux: &Flux, ctx: Arc<DialogContext>) {
    if !flux.contains(DialogState::PATH) {
        flux.store().set(DialogState::PATH, DialogState::closed());
    }

    // inventory/dialog/open
    flux.on(OpenDialogReq::PATH, |path, payload, store: Arc<StateStore>| async move {
        match payload.downcast_ref::<OpenDialogReq>() {
            Some(req) => dialog::handle_open(req, &store).await,
            None => mistyped(&path),
        }
    });

    // inventory/dialog/update-field
    flux.on(UpdateFieldReq::PATH, |path, payload, store: Arc<StateStore>| async move {
        match payload.downcast_ref::<UpdateFieldReq>() {
            Some(req) => dialog::handle_update_field(req, &store).await,
            None => mistyped(&path),
        }
    });

    // inventory/dialog/touch-field
    flux.on(TouchFieldReq::PATH, |path, payload, store: Arc<StateStore>| async move {
        match payload.downcast_ref::<TouchFieldReq>() {
            Some(req) => dialog::handle_touch_field(req, &store).await,
            None => mistyped(&path),
        }
    });

    // inventory/dialog/reset
    flux.on(ResetDialogReq::PATH, |_, _, store: Arc<StateStore>| async move {
        dialog::handle_reset(&store).await;
    });

    // inventory/dialog/submit
    {
        let ctx = ctx.clone();
        flux.on(SubmitDialogReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                dialog::handle_submit(&store, ctx.callbacks.as_ref()).await;
            }
        });
    }

    // inventory/dialog/cancel
    {
        let ctx = ctx.clone();
        flux.on(CancelDialogReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                dialog::handle_cancel(&store, ctx.callbacks.as_ref()).await;
            }
        });
    }
}
