//! Render model for the dialog.
//!
//! A platform layer draws exactly what [`DialogView`] describes: heading,
//! eight labeled rows and the two footer actions.

use serde::Serialize;

use crate::form::FormState;
use crate::i18n::InventoryStrings;
use crate::model::{Field, MeasurementUnit, ProductCatalog};
use crate::state::{DialogPhase, DialogState};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogView {
    pub form_name: String,
    pub open: bool,
    pub phase: DialogPhase,
    pub heading: String,
    pub rows: Vec<FieldRow>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRow {
    pub field: Field,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Select { options: Vec<SelectOption> },
    Multiline { rows: u8 },
    Number,
    Date,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogAction {
    Cancel,
    Save,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub action: DialogAction,
    pub label: String,
    pub enabled: bool,
}

impl DialogView {
    /// Build the view for the current dialog state.
    ///
    /// A closed dialog has no heading, rows or actions.
    pub fn build(
        state: &DialogState,
        catalog: &dyn ProductCatalog,
        strings: &InventoryStrings,
    ) -> Self {
        let mut view = DialogView {
            form_name: state.form_name.clone(),
            open: state.is_open(),
            phase: state.phase,
            heading: String::new(),
            rows: Vec::new(),
            actions: Vec::new(),
        };

        if let Some(form) = state.form.as_ref().filter(|_| state.is_open()) {
            view.heading = strings.heading(&state.title);
            view.rows = Field::ALL
                .into_iter()
                .map(|field| field_row(field, form, catalog, strings))
                .collect();
            view.actions = vec![
                ActionButton {
                    action: DialogAction::Cancel,
                    label: strings.get("ui/inventory/action/cancel"),
                    enabled: true,
                },
                ActionButton {
                    action: DialogAction::Save,
                    label: strings.get("ui/inventory/action/save"),
                    enabled: form.can_submit(),
                },
            ];
        }

        view
    }

    pub fn row(&self, field: Field) -> Option<&FieldRow> {
        self.rows.iter().find(|r| r.field == field)
    }

    pub fn action(&self, action: DialogAction) -> Option<&ActionButton> {
        self.actions.iter().find(|a| a.action == action)
    }
}

fn field_row(
    field: Field,
    form: &FormState,
    catalog: &dyn ProductCatalog,
    strings: &InventoryStrings,
) -> FieldRow {
    let kind = match field {
        Field::Name => FieldKind::Text,
        Field::ProductType => FieldKind::Select {
            options: catalog
                .products()
                .into_iter()
                .map(|p| SelectOption {
                    value: p.name.clone(),
                    key: p.id,
                    label: p.name,
                })
                .collect(),
        },
        Field::Description => FieldKind::Multiline { rows: 1 },
        Field::AveragePrice | Field::Amount => FieldKind::Number,
        Field::UnitOfMeasurement => FieldKind::Select {
            options: MeasurementUnit::ALL
                .into_iter()
                .map(|u| SelectOption {
                    value: u.key().to_string(),
                    key: u.display_name().to_string(),
                    label: u.key().to_string(),
                })
                .collect(),
        },
        Field::BestBeforeDate => FieldKind::Date,
        Field::NeverExpires => FieldKind::Checkbox,
    };

    // A parse error outranks the validation error for the same field.
    let error = if let Some(e) = form.parse_error(field) {
        Some(strings.parse_error(e))
    } else if form.is_touched(field) {
        form.errors().get(field).map(|e| strings.field_error(e))
    } else {
        None
    };

    FieldRow {
        field,
        label: strings.field_label(field),
        kind,
        required: field.is_required(),
        value: form.values().display_value(field),
        error,
    }
}
