//! Fixed set of measurement units offered by the unit selector.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementUnit {
    Cup,
    Gallon,
    Ounce,
    Pint,
    Pound,
    Quart,
    Kilogram,
    Gram,
    Liter,
    Milliliter,
    Piece,
}

impl MeasurementUnit {
    /// All units, in selector order.
    pub const ALL: [MeasurementUnit; 11] = [
        MeasurementUnit::Cup,
        MeasurementUnit::Gallon,
        MeasurementUnit::Ounce,
        MeasurementUnit::Pint,
        MeasurementUnit::Pound,
        MeasurementUnit::Quart,
        MeasurementUnit::Kilogram,
        MeasurementUnit::Gram,
        MeasurementUnit::Liter,
        MeasurementUnit::Milliliter,
        MeasurementUnit::Piece,
    ];

    /// Key stored in the draft's `unitOfMeasurement`.
    pub fn key(&self) -> &'static str {
        match self {
            MeasurementUnit::Cup => "CUP",
            MeasurementUnit::Gallon => "GALLON",
            MeasurementUnit::Ounce => "OUNCE",
            MeasurementUnit::Pint => "PINT",
            MeasurementUnit::Pound => "POUND",
            MeasurementUnit::Quart => "QUART",
            MeasurementUnit::Kilogram => "KILOGRAM",
            MeasurementUnit::Gram => "GRAM",
            MeasurementUnit::Liter => "LITER",
            MeasurementUnit::Milliliter => "MILLILITER",
            MeasurementUnit::Piece => "PIECE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MeasurementUnit::Cup => "Cup",
            MeasurementUnit::Gallon => "Gallon",
            MeasurementUnit::Ounce => "Ounce",
            MeasurementUnit::Pint => "Pint",
            MeasurementUnit::Pound => "Pound",
            MeasurementUnit::Quart => "Quart",
            MeasurementUnit::Kilogram => "Kilogram",
            MeasurementUnit::Gram => "Gram",
            MeasurementUnit::Liter => "Liter",
            MeasurementUnit::Milliliter => "Milliliter",
            MeasurementUnit::Piece => "Piece",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_resolvable() {
        for unit in MeasurementUnit::ALL {
            assert_eq!(MeasurementUnit::from_key(unit.key()), Some(unit));
        }
        assert_eq!(MeasurementUnit::from_key("kg"), None);
    }

    #[test]
    fn serde_uses_the_key() {
        let json = serde_json::to_string(&MeasurementUnit::Kilogram).unwrap();
        assert_eq!(json, "\"KILOGRAM\"");
        let unit: MeasurementUnit = serde_json::from_str("\"MILLILITER\"").unwrap();
        assert_eq!(unit, MeasurementUnit::Milliliter);
    }
}
