use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::state::{Action, RootState};

/// Shared handle to the client state. Cloning the handle shares the state.
#[derive(Clone, Default)]
pub struct Store {
    state: Arc<RwLock<RootState>>,
}

impl Store {
    pub fn new() -> Self { Self::default() }

    pub async fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.state.write().await.apply(action);
    }

    /// Runs `selector` against the current state under the read lock.
    pub async fn select<T>(&self, selector: impl FnOnce(&RootState) -> T) -> T {
        selector(&*self.state.read().await)
    }

    pub async fn snapshot(&self) -> RootState {
        self.state.read().await.clone()
    }
}
