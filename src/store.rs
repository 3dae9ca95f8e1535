use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::ApiError;
use crate::models::Item;

/// Operations the handlers issue against the `items` collection.
///
/// Each request performs exactly one of these calls. Matching on `name` is
/// exact; nothing guarantees that names are unique.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Insert a new record unconditionally.
    async fn insert(&self, item: Item) -> Result<()>;

    /// Remove at most one record whose name equals `name`.
    ///
    /// Returns the number of records removed (0 or 1).
    async fn delete_one(&self, name: &str) -> Result<u64>;

    /// Overwrite name and description of at most one record whose name equals `name`.
    ///
    /// Returns the number of records matched (0 or 1).
    async fn update_one(&self, name: &str, replacement: Item) -> Result<u64>;

    /// All records whose name equals `name`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>>;

    /// Every record, in whatever order the store yields them.
    async fn find_all(&self) -> Result<Vec<Item>>;

    /// Round-trip to the store to verify it is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Connection state of the shared store.
///
/// Starts `Uninitialized` and moves exactly once to `Ready` or `Failed`.
#[derive(Clone)]
pub enum Readiness {
    Uninitialized,
    Ready(Arc<dyn ItemStore>),
    Failed(String),
}

/// Shared, cloneable handle to the store injected into every handler.
#[derive(Clone)]
pub struct StoreHandle {
    state: Arc<RwLock<Readiness>>,
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreHandle {
    /// A handle with no connection yet.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Readiness::Uninitialized)),
        }
    }

    /// A handle that is already connected to `store`.
    #[cfg(test)]
    pub fn ready(store: Arc<dyn ItemStore>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Readiness::Ready(store))),
        }
    }

    pub fn current(&self) -> Readiness {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The connected store, or `NotInitialized` if the handle is not ready.
    pub fn get(&self) -> Result<Arc<dyn ItemStore>, ApiError> {
        match self.current() {
            Readiness::Ready(store) => Ok(store),
            Readiness::Uninitialized | Readiness::Failed(_) => Err(ApiError::NotInitialized),
        }
    }

    /// Transition `Uninitialized -> Ready`. Returns false if already settled.
    pub fn mark_ready(&self, store: Arc<dyn ItemStore>) -> bool {
        self.settle(Readiness::Ready(store))
    }

    /// Transition `Uninitialized -> Failed`. Returns false if already settled.
    pub fn mark_failed(&self, reason: impl Into<String>) -> bool {
        self.settle(Readiness::Failed(reason.into()))
    }

    fn settle(&self, next: Readiness) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match *state {
            Readiness::Uninitialized => {
                *state = next;
                true
            }
            _ => {
                tracing::warn!("Ignoring store state change: handle already settled");
                false
            }
        }
    }

    /// Await `connect` and record its outcome.
    ///
    /// A failed connection is logged and left permanent; nothing retries it.
    pub async fn initialize<F>(&self, connect: F)
    where
        F: Future<Output = Result<Arc<dyn ItemStore>>>,
    {
        match connect.await {
            Ok(store) => {
                if self.mark_ready(store) {
                    tracing::info!("Store handle ready");
                }
            }
            Err(e) => {
                tracing::error!("Failed to connect to database: {:#}", e);
                self.mark_failed(format!("{:#}", e));
            }
        }
    }
}
