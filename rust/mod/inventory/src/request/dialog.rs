//! Dialog requests.

use crate::model::{Field, InventoryDraft};

/// Open a fresh dialog session.
#[derive(Debug, Clone)]
pub struct OpenDialogReq {
    pub form_name: String,
    /// Heading prefix, e.g. "Create" or "Edit".
    pub title: String,
    pub initial_values: InventoryDraft,
}

impl OpenDialogReq {
    pub const PATH: &'static str = "inventory/dialog/open";
}

/// Raw input for one field.
#[derive(Debug, Clone)]
pub struct UpdateFieldReq {
    pub field: String,
    pub value: String,
}

impl UpdateFieldReq {
    pub const PATH: &'static str = "inventory/dialog/update-field";

    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_string(),
            value: value.into(),
        }
    }
}

/// The user left a field.
#[derive(Debug, Clone)]
pub struct TouchFieldReq {
    pub field: String,
}

impl TouchFieldReq {
    pub const PATH: &'static str = "inventory/dialog/touch-field";

    pub fn new(field: Field) -> Self {
        Self {
            field: field.as_str().to_string(),
        }
    }
}

/// Restore the seed values.
#[derive(Debug, Clone)]
pub struct ResetDialogReq;

impl ResetDialogReq {
    pub const PATH: &'static str = "inventory/dialog/reset";
}

/// Save.
#[derive(Debug, Clone)]
pub struct SubmitDialogReq;

impl SubmitDialogReq {
    pub const PATH: &'static str = "inventory/dialog/submit";
}

/// Cancel, or the modal's own close request.
#[derive(Debug, Clone)]
pub struct CancelDialogReq;

impl CancelDialogReq {
    pub const PATH: &'static str = "inventory/dialog/cancel";
}
