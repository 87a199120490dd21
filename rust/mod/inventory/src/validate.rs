//! Field-level validation of an inventory draft.
//!
//! Every rule looks at one field only, and all failing rules are reported
//! together so the dialog can show several inline errors at once.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Field, InventoryDraft};

/// A validation failure on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    ProductTypeRequired,
    NegativeAveragePrice,
    NegativeAmount,
    UnitRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::ProductTypeRequired => Field::ProductType,
            FieldError::NegativeAveragePrice => Field::AveragePrice,
            FieldError::NegativeAmount => Field::Amount,
            FieldError::UnitRequired => Field::UnitOfMeasurement,
        }
    }

    /// English message.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "An inventory name is required.",
            FieldError::ProductTypeRequired => "A product type must be selected.",
            FieldError::NegativeAveragePrice => "Average price cannot be negative.",
            FieldError::NegativeAmount => "Amount cannot be negative.",
            FieldError::UnitRequired => "A unit of measurement must be selected.",
        }
    }

    /// Stable i18n key.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "error/inventory/name_required",
            FieldError::ProductTypeRequired => "error/inventory/product_type_required",
            FieldError::NegativeAveragePrice => "error/inventory/average_price_negative",
            FieldError::NegativeAmount => "error/inventory/amount_negative",
            FieldError::UnitRequired => "error/inventory/unit_required",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Field → error mapping. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields, in display order.
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    /// `(field wire name, English message)` pairs, in display order.
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        self.0
            .iter()
            .map(|(field, err)| (field.as_str(), err.message()))
            .collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.0.iter()
    }

    fn insert(&mut self, err: FieldError) {
        self.0.insert(err.field(), err);
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate a draft.
pub fn validate(draft: &InventoryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.is_empty() {
        errors.insert(FieldError::NameRequired);
    }
    if draft.product_type.is_empty() {
        errors.insert(FieldError::ProductTypeRequired);
    }
    if draft.average_price.is_some_and(|p| p < 0.0) {
        errors.insert(FieldError::NegativeAveragePrice);
    }
    if draft.amount.is_some_and(|a| a < 0.0) {
        errors.insert(FieldError::NegativeAmount);
    }
    if draft.unit_of_measurement.is_empty() {
        errors.insert(FieldError::UnitRequired);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour() -> InventoryDraft {
        InventoryDraft {
            name: "Flour".into(),
            product_type: "Bakery".into(),
            average_price: Some(2.5),
            amount: Some(10.0),
            unit_of_measurement: "kg".into(),
            ..InventoryDraft::empty()
        }
    }

    #[test]
    fn empty_draft_fails_exactly_the_required_fields() {
        let errors = validate(&InventoryDraft::empty());
        assert_eq!(
            errors.fields(),
            vec![Field::Name, Field::ProductType, Field::UnitOfMeasurement]
        );
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(validate(&flour()).is_empty());
    }

    #[test]
    fn missing_name_is_reported_whatever_else_is_set() {
        let mut draft = flour();
        draft.name.clear();
        assert_eq!(validate(&draft).get(Field::Name), Some(FieldError::NameRequired));

        let mut draft = InventoryDraft::empty();
        draft.amount = Some(-1.0);
        assert!(validate(&draft).contains(Field::Name));
    }

    #[test]
    fn negative_price_only_when_below_zero() {
        let mut draft = flour();

        draft.average_price = Some(-0.01);
        assert_eq!(
            validate(&draft).get(Field::AveragePrice),
            Some(FieldError::NegativeAveragePrice)
        );

        draft.average_price = Some(0.0);
        assert!(!validate(&draft).contains(Field::AveragePrice));

        draft.average_price = None;
        assert!(!validate(&draft).contains(Field::AveragePrice));
    }

    #[test]
    fn negative_amount_only_when_below_zero() {
        let mut draft = flour();
        draft.amount = Some(-5.0);
        assert_eq!(validate(&draft).get(Field::Amount), Some(FieldError::NegativeAmount));

        draft.amount = None;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn all_errors_are_collected() {
        let draft = InventoryDraft {
            average_price: Some(-1.0),
            amount: Some(-2.0),
            ..InventoryDraft::empty()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.messages(),
            vec![
                ("name", "An inventory name is required."),
                ("productType", "A product type must be selected."),
                ("averagePrice", "Average price cannot be negative."),
                ("amount", "Amount cannot be negative."),
                ("unitOfMeasurement", "A unit of measurement must be selected."),
            ]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let draft = InventoryDraft {
            name: "Hops".into(),
            amount: Some(-3.0),
            ..InventoryDraft::empty()
        };
        assert_eq!(validate(&draft), validate(&draft));
    }

    #[test]
    fn optional_fields_never_fail() {
        let mut draft = flour();
        draft.description.clear();
        draft.best_before_date = None;
        draft.never_expires = true;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn errors_carry_their_field_and_key() {
        for (field, err) in &validate(&InventoryDraft::empty()) {
            assert_eq!(err.field(), *field);
            assert!(err.i18n_key().starts_with("error/inventory/"));
        }
    }
}
