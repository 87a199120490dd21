//! State types.
//!
//! Each file defines one state type stored at a well-known path.

pub mod dialog;
pub mod products;

pub use dialog::{DialogPhase, DialogState};
pub use products::ProductList;
