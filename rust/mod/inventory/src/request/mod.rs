//! Inventory dialog requests.

pub mod dialog;

pub use dialog::*;
