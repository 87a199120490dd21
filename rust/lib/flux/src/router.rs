use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::pattern::Pattern;
use crate::store::StateStore;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased request payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Request router. Maps path patterns to async handlers.
///
/// Every handler whose pattern matches a dispatched path runs, one after
/// the other, in registration order.
pub struct Router {
    routes: RwLock<Vec<(Pattern, ErasedHandler)>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Register an async handler for a path pattern (`+` / `#` allowed).
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String, payload: Payload, store: Arc<StateStore>| -> BoxFuture {
                Box::pin(handler(path, payload, store))
            },
        );
        self.routes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((Pattern::parse(pattern), handler));
    }

    /// Dispatch a request to all matching handlers. No match is a no-op.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) {
        let handlers = self.matching(path);
        trace!(path, handlers = handlers.len(), "dispatch");
        for handler in handlers {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Check if any handler would match the given path.
    pub fn matches(&self, path: &str) -> bool {
        !self.matching(path).is_empty()
    }

    fn matching(&self, path: &str) -> Vec<ErasedHandler> {
        // Cloned out so no lock is held across handler awaits.
        self.routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(p, _)| p.matches(path))
            .map(|(_, h)| Arc::clone(h))
            .collect()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
