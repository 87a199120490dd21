use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FieldParseError;

/// Date format used by the best-before field, on the wire and in the view.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The eight draft fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    ProductType,
    Description,
    AveragePrice,
    Amount,
    UnitOfMeasurement,
    BestBeforeDate,
    NeverExpires,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::ProductType,
        Field::Description,
        Field::AveragePrice,
        Field::Amount,
        Field::UnitOfMeasurement,
        Field::BestBeforeDate,
        Field::NeverExpires,
    ];

    /// Wire name, matching the draft's JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ProductType => "productType",
            Field::Description => "description",
            Field::AveragePrice => "averagePrice",
            Field::Amount => "amount",
            Field::UnitOfMeasurement => "unitOfMeasurement",
            Field::BestBeforeDate => "bestBeforeDate",
            Field::NeverExpires => "neverExpires",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::ProductType | Field::UnitOfMeasurement
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldParseError::UnknownField(s.to_string()))
    }
}

/// The dialog's working record.
///
/// Text fields use the empty string for "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryDraft {
    pub name: String,
    pub product_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub unit_of_measurement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<NaiveDate>,
    pub never_expires: bool,
}

impl InventoryDraft {
    /// Blank draft for the "create" flow.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current value of a field, formatted the way an input shows it.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::ProductType => self.product_type.clone(),
            Field::Description => self.description.clone(),
            Field::AveragePrice => format_number(self.average_price),
            Field::Amount => format_number(self.amount),
            Field::UnitOfMeasurement => self.unit_of_measurement.clone(),
            Field::BestBeforeDate => self
                .best_before_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Field::NeverExpires => self.never_expires.to_string(),
        }
    }

    /// Reset a field to its "not set" value.
    pub fn clear_field(&mut self, field: Field) {
        match field {
            Field::Name => self.name.clear(),
            Field::ProductType => self.product_type.clear(),
            Field::Description => self.description.clear(),
            Field::AveragePrice => self.average_price = None,
            Field::Amount => self.amount = None,
            Field::UnitOfMeasurement => self.unit_of_measurement.clear(),
            Field::BestBeforeDate => self.best_before_date = None,
            Field::NeverExpires => self.never_expires = false,
        }
    }

    /// Parse raw input text into a field.
    ///
    /// On error the draft is left untouched.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), FieldParseError> {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::ProductType => self.product_type = raw.to_string(),
            Field::Description => self.description = raw.to_string(),
            Field::AveragePrice => self.average_price = parse_number(field, raw)?,
            Field::Amount => self.amount = parse_number(field, raw)?,
            Field::UnitOfMeasurement => self.unit_of_measurement = raw.to_string(),
            Field::BestBeforeDate => self.best_before_date = parse_date(field, raw)?,
            Field::NeverExpires => self.never_expires = parse_flag(field, raw)?,
        }
        Ok(())
    }
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_number(field: Field, raw: &str) -> Result<Option<f64>, FieldParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(FieldParseError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_date(field: Field, raw: &str) -> Result<Option<NaiveDate>, FieldParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldParseError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

fn parse_flag(field: Field, raw: &str) -> Result<bool, FieldParseError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        _ => Err(FieldParseError::InvalidFlag {
            field,
            value: raw.to_string(),
        }),
    }
}
