//! Host configuration for the inventory dialog.
//!
//! Read from a TOML file:
//!
//! ```toml
//! locale = "en"
//! form_name = "inventoryForm"
//!
//! [[products]]
//! id = "p1"
//! name = "Bakery"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InventoryError;
use crate::model::{Product, StaticCatalog};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_form_name")]
    pub form_name: String,

    /// Products offered by the product-type selector.
    #[serde(default)]
    pub products: Vec<Product>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_form_name() -> String {
    "inventoryForm".to_string()
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            form_name: default_form_name(),
            products: Vec::new(),
        }
    }
}

impl DialogConfig {
    /// Load config from disk, or return the default if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        if !path.exists() {
            debug!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: DialogConfig = toml::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Product names must be set and ids unique.
    fn check(&self) -> Result<(), InventoryError> {
        for (i, p) in self.products.iter().enumerate() {
            if p.name.is_empty() {
                return Err(InventoryError::Config(format!("product '{}' has no name", p.id)));
            }
            if self.products[..i].iter().any(|q| q.id == p.id) {
                return Err(InventoryError::Config(format!("duplicate product id '{}'", p.id)));
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> StaticCatalog {
        StaticCatalog(self.products.clone())
    }
}
