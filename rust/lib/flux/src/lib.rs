//! Flux: path-addressed state engine for headless UI modules.
//!
//! Rust owns all state and logic; a platform layer only renders what it
//! reads from the store and emits requests back.
//!
//! - `get(path)` reads state (Arc clone, no data copy)
//! - `emit(path, payload)` routes a request to matching handler(s)
//! - `subscribe(pattern)` observes state changes
//!
//! Paths are `/`-separated (`inventory/dialog`, `products/all`). Routes and
//! subscriptions accept MQTT-style wildcards: `+` for one level, `#` for
//! the rest.

pub mod app;
pub mod pattern;
pub mod router;
pub mod store;
pub mod value;

pub use app::Flux;
pub use pattern::Pattern;
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
