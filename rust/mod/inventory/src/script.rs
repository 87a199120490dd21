//! Scripted dialog sessions.
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```text
//! {"event":"open","title":"Create"}
//! {"event":"change","field":"name","value":"Flour"}
//! {"event":"touch","field":"productType"}
//! {"event":"submit"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use openerp_flux::Flux;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::book::BookHost;
use crate::error::InventoryError;
use crate::model::InventoryDraft;
use crate::request::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Open the dialog. With `edit`, the stored record seeds the draft and a
    /// save replaces it.
    Open {
        #[serde(default)]
        title: Option<String>,
        #[serde(default, rename = "initialValues")]
        initial_values: Option<InventoryDraft>,
        #[serde(default)]
        edit: Option<String>,
    },
    Change {
        field: String,
        value: String,
    },
    Touch {
        field: String,
    },
    Reset,
    Submit,
    Cancel,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, InventoryError> {
    let mut events = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line)
            .map_err(|source| InventoryError::Script { line: i + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

impl ScriptEvent {
    /// Emit this event as the matching dialog request.
    pub async fn play(
        &self,
        flux: &Flux,
        host: &BookHost,
        form_name: &str,
    ) -> Result<(), InventoryError> {
        debug!(event = ?self, "script event");
        match self {
            ScriptEvent::Open {
                title,
                initial_values,
                edit,
            } => {
                let (default_title, seed) = match edit {
                    Some(id) => {
                        let seed = host
                            .begin_edit(id)
                            .ok_or_else(|| InventoryError::NotFound(id.clone()))?;
                        ("Edit", seed)
                    }
                    None => {
                        host.begin_create();
                        ("Create", initial_values.clone().unwrap_or_default())
                    }
                };
                let req = OpenDialogReq {
                    form_name: form_name.to_string(),
                    title: title.clone().unwrap_or_else(|| default_title.to_string()),
                    initial_values: seed,
                };
                flux.emit(OpenDialogReq::PATH, req).await;
            }
            ScriptEvent::Change { field, value } => {
                let req = UpdateFieldReq {
                    field: field.clone(),
                    value: value.clone(),
                };
                flux.emit(UpdateFieldReq::PATH, req).await;
            }
            ScriptEvent::Touch { field } => {
                let req = TouchFieldReq {
                    field: field.clone(),
                };
                flux.emit(TouchFieldReq::PATH, req).await;
            }
            ScriptEvent::Reset => flux.emit(ResetDialogReq::PATH, ResetDialogReq).await,
            ScriptEvent::Submit => flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await,
            ScriptEvent::Cancel => flux.emit(CancelDialogReq::PATH, CancelDialogReq).await,
        }
        Ok(())
    }
}
