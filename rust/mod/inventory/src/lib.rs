//! Headless inventory form dialog.
//!
//! Structure:
//! - `model/`: draft, fields, measurement units, product catalog
//! - `validate` + `form`: validation and the form reducer
//! - `state/`: Flux state types (`inventory/dialog`, `products/all`)
//! - `request/`: Flux request types (`inventory/dialog/*`)
//! - `handlers/`: handler implementations + Flux wiring
//! - `view` + `i18n`: render model and translations
//! - `book`, `config`, `script`: host side used by the `inventory-dialog` binary

pub mod book;
pub mod callbacks;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod i18n;
pub mod model;
pub mod request;
pub mod script;
pub mod state;
pub mod validate;
pub mod view;

pub use book::{BookHost, Inventory, InventoryBook};
pub use callbacks::{DialogCallbacks, FnCallbacks};
pub use config::DialogConfig;
pub use error::{FieldParseError, InventoryError};
pub use form::{FormEvent, FormOutcome, FormState};
pub use handlers::{current_dialog, register_handlers, DialogContext};
pub use i18n::InventoryStrings;
pub use model::{Field, InventoryDraft, MeasurementUnit, Product, ProductCatalog};
pub use validate::{validate, FieldError, ValidationErrors};
pub use view::DialogView;
