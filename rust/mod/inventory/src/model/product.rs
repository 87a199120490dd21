use std::sync::Arc;

use openerp_flux::StateStore;
use serde::{Deserialize, Serialize};

use crate::state::ProductList;

/// An entry of the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only source of the products offered by the product-type selector.
///
/// The catalog is owned by the host application; the dialog only reads it.
pub trait ProductCatalog: Send + Sync {
    fn products(&self) -> Vec<Product>;

    fn product_names(&self) -> Vec<String> {
        self.products().into_iter().map(|p| p.name).collect()
    }
}

/// A fixed product list, e.g. loaded from config.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog(pub Vec<Product>);

impl ProductCatalog for StaticCatalog {
    fn products(&self) -> Vec<Product> {
        self.0.clone()
    }
}

/// Reads the host's shared product list from Flux state at `products/all`.
///
/// An absent entry reads as an empty catalog.
pub struct FluxCatalog {
    store: Arc<StateStore>,
}

impl FluxCatalog {
    pub fn new(store: Arc<StateStore>) -> Self {
        Self { store }
    }
}

impl ProductCatalog for FluxCatalog {
    fn products(&self) -> Vec<Product> {
        self.store
            .get(ProductList::PATH)
            .and_then(|v| v.downcast_ref::<ProductList>().map(|l| l.0.clone()))
            .unwrap_or_default()
    }
}
