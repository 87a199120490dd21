//! Form state for one dialog session.
//!
//! `FormState` holds the seed values, the working values, the current
//! validation mapping and which fields the user has interacted with.
//! Every change goes through [`FormState::apply`].

use std::collections::{BTreeMap, BTreeSet};

use crate::error::FieldParseError;
use crate::model::{Field, InventoryDraft};
use crate::validate::{validate, ValidationErrors};

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Raw input text for a field.
    Change { field: Field, value: String },
    /// The user left a field.
    Touch(Field),
    /// Restore the seed values.
    Reset,
    Submit,
}

/// What an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Updated,
    /// The raw value could not be parsed; the field keeps its old value.
    Rejected(FieldParseError),
    /// Submit on an unedited form.
    NotDirty,
    /// Submit blocked by validation.
    Invalid(ValidationErrors),
    /// Submit accepted; carries the values to hand to the caller.
    Valid(InventoryDraft),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    initial: InventoryDraft,
    values: InventoryDraft,
    errors: ValidationErrors,
    parse_errors: BTreeMap<Field, FieldParseError>,
    touched: BTreeSet<Field>,
    submit_count: u32,
}

impl FormState {
    pub fn new(initial: InventoryDraft) -> Self {
        let errors = validate(&initial);
        Self {
            values: initial.clone(),
            initial,
            errors,
            parse_errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            submit_count: 0,
        }
    }

    pub fn initial(&self) -> &InventoryDraft {
        &self.initial
    }

    pub fn values(&self) -> &InventoryDraft {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn parse_error(&self, field: Field) -> Option<&FieldParseError> {
        self.parse_errors.get(&field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Values differ from the seed.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Save is actionable only on an edited form.
    pub fn can_submit(&self) -> bool {
        self.is_dirty()
    }

    pub fn apply(&mut self, event: FormEvent) -> FormOutcome {
        match event {
            FormEvent::Change { field, value } => {
                self.touched.insert(field);
                match self.values.set_field(field, &value) {
                    Ok(()) => {
                        self.parse_errors.remove(&field);
                        self.errors = validate(&self.values);
                        FormOutcome::Updated
                    }
                    Err(e) => {
                        // Unreadable numbers and dates read as empty, never as
                        // the value they were meant to replace.
                        if matches!(
                            e,
                            FieldParseError::InvalidNumber { .. } | FieldParseError::InvalidDate { .. }
                        ) {
                            self.values.clear_field(field);
                            self.errors = validate(&self.values);
                        }
                        self.parse_errors.insert(field, e.clone());
                        FormOutcome::Rejected(e)
                    }
                }
            }
            FormEvent::Touch(field) => {
                self.touched.insert(field);
                FormOutcome::Updated
            }
            FormEvent::Reset => {
                *self = FormState::new(self.initial.clone());
                FormOutcome::Updated
            }
            FormEvent::Submit => {
                if !self.can_submit() {
                    return FormOutcome::NotDirty;
                }
                self.submit_count += 1;
                self.touched.extend(Field::ALL);
                self.errors = validate(&self.values);
                if self.errors.is_empty() {
                    FormOutcome::Valid(self.values.clone())
                } else {
                    FormOutcome::Invalid(self.errors.clone())
                }
            }
        }
    }
}
