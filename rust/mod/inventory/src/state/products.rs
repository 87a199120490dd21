//! Product list, stored at `products/all`, owned by the host.

use crate::model::Product;

/// The host application's shared product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList(pub Vec<Product>);

impl ProductList {
    pub const PATH: &'static str = "products/all";
}
