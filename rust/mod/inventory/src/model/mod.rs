//! Inventory draft, measurement units and the product catalog seam.

mod draft;
mod product;
mod unit;

pub use draft::{Field, InventoryDraft, DATE_FORMAT};
pub use product::{FluxCatalog, Product, ProductCatalog, StaticCatalog};
pub use unit::MeasurementUnit;
