use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use anyhow::anyhow;
use catalog_backend_client::BackendClient;
use catalog_core::Action;
use catalog_core::AppState;
use catalog_core::Config;
use catalog_core::EffectRuntime;
use catalog_core::Services;
use catalog_core::Store;
use catalog_core::api::LogNavigation;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

/// Slack on top of the HTTP timeout before giving up on a terminal action.
const SETTLE_MARGIN: Duration = Duration::from_secs(2);

/// One store plus its workers, driven to completion one command at a time.
pub struct Session {
    runtime: EffectRuntime,
    actions: broadcast::Receiver<Action>,
    timeout: Duration,
}

impl Session {
    pub fn start(client: Arc<BackendClient>, config: &Config) -> Self {
        let services = Services {
            metadata: client.clone(),
            search: client,
            navigation: Arc::new(LogNavigation),
        };
        let runtime = EffectRuntime::start(Store::default(), services, config.search.clone());
        let actions = runtime.subscribe_actions();
        Self {
            runtime,
            actions,
            timeout: config.timeout() + SETTLE_MARGIN,
        }
    }

    /// Dispatches `action` and waits for the first reduced action matching
    /// `done`, which is returned.
    pub async fn run_until<F>(&mut self, action: Action, mut done: F) -> Result<Action>
    where
        F: FnMut(&Action) -> bool,
    {
        let kind = action.kind();
        self.runtime.dispatch(action);
        let actions = &mut self.actions;
        let wait = async move {
            loop {
                match actions.recv().await {
                    Ok(action) if done(&action) => return Ok(action),
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "action observer fell behind");
                    }
                    Err(RecvError::Closed) => {
                        return Err(anyhow!("dispatch loop stopped while running {kind}"));
                    }
                }
            }
        };
        tokio::time::timeout(self.timeout, wait)
            .await
            .map_err(|_| anyhow!("timed out after {:?} waiting on {kind}", self.timeout))?
    }

    /// Queues `action` without waiting for anything.
    pub fn dispatch(&self, action: Action) {
        self.runtime.dispatch(action);
    }

    pub fn state(&self) -> Arc<AppState> {
        self.runtime.state()
    }

    pub async fn shutdown(self) {
        if let Err(err) = self.runtime.shutdown().await {
            warn!("dispatch loop did not stop cleanly: {err}");
        }
    }
}
