use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::action::Action;
use crate::error::Result;
use crate::state::AppState;

/// Single in-memory state container. `dispatch` is the only way to change
/// the state; every new state is published to subscribers.
#[derive(Debug)]
pub struct Store {
    state: Arc<AppState>,
    tx: watch::Sender<Arc<AppState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let state = Arc::new(initial);
        let (tx, _rx) = watch::channel(Arc::clone(&state));
        Self { state, tx }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.tx.subscribe()
    }

    /// Reduces `action` into the current state. On error the state is left
    /// exactly as it was and nothing is published.
    pub fn dispatch(&mut self, action: &Action) -> Result<()> {
        let next = self.state.reduce(action)?;
        if next.same_slices(&self.state) {
            debug!(action = action.kind(), "state unchanged");
            return Ok(());
        }
        debug!(action = action.kind(), "state updated");
        self.state = Arc::new(next);
        self.tx.send_replace(Arc::clone(&self.state));
        Ok(())
    }
}
