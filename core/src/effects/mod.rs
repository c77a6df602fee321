//! Asynchronous side of the store.
//!
//! [`EffectRuntime`] owns the [`Store`] inside a single dispatch task. Every
//! dispatched action is reduced first, then broadcast to observers, then
//! handed to the watchers below, which spawn one worker per matching
//! action. Each worker receives the state as it stood right after
//! its trigger was reduced, so actions queued behind the trigger never leak
//! into it. Workers report back by dispatching further actions.
//!
//! In-flight workers are never cancelled: when two searches overlap, the
//! response that arrives last is the one the state ends up showing.

mod popular_tables;
mod search;
mod url_sync;

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task::JoinError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::debug;
use tracing::error;

use crate::action::Action;
use crate::action::GetPopularTables;
use crate::action::InlineSearch;
use crate::action::SearchAll;
use crate::action::SearchResource;
use crate::action::UpdateSearchState;
use crate::api::MetadataApi;
use crate::api::Navigation;
use crate::api::SearchApi;
use crate::config::SearchConfig;
use crate::search::actions::get_inline_results;
use crate::state::AppState;
use crate::store::Store;

const ACTION_BROADCAST_CAPACITY: usize = 256;

/// External collaborators available to workers.
#[derive(Clone)]
pub struct Services {
    pub metadata: Arc<dyn MetadataApi>,
    pub search: Arc<dyn SearchApi>,
    pub navigation: Arc<dyn Navigation>,
}

/// Cloneable handle for sending actions into the dispatch task.
#[derive(Clone, Debug)]
pub(crate) struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub(crate) fn put(&self, action: Action) {
        if let Err(err) = self.tx.send(action) {
            debug!(action = err.0.kind(), "dispatch loop stopped; dropping action");
        }
    }
}

pub(crate) struct WorkerContext {
    pub(crate) services: Services,
    pub(crate) settings: Arc<SearchConfig>,
    dispatcher: Dispatcher,
    snapshot: Arc<AppState>,
}

impl WorkerContext {
    /// State right after the trigger action was reduced.
    pub(crate) fn select(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshot)
    }

    pub(crate) fn put(&self, action: Action) {
        self.dispatcher.put(action);
    }
}

pub struct EffectRuntime {
    dispatcher: Dispatcher,
    state: watch::Receiver<Arc<AppState>>,
    actions: broadcast::Sender<Action>,
    shutdown: CancellationToken,
    tracker: TaskTracker,
    task: JoinHandle<Store>,
}

impl EffectRuntime {
    /// Moves `store` into a dispatch task on the current tokio runtime.
    pub fn start(store: Store, services: Services, settings: SearchConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher { tx };
        let state = store.subscribe();
        let (actions, _) = broadcast::channel(ACTION_BROADCAST_CAPACITY);
        let shutdown = CancellationToken::new();
        let tracker = TaskTracker::new();

        let watchers = Watchers {
            services,
            settings: Arc::new(settings),
            dispatcher: dispatcher.clone(),
            tracker: tracker.clone(),
            pending_inline: None,
        };
        let task = tokio::spawn(run_dispatch_loop(
            store,
            rx,
            actions.clone(),
            watchers,
            shutdown.clone(),
        ));

        Self {
            dispatcher,
            state,
            actions,
            shutdown,
            tracker,
            task,
        }
    }

    pub fn dispatch(&self, action: Action) {
        self.dispatcher.put(action);
    }

    pub fn state(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<Arc<AppState>> {
        self.state.clone()
    }

    /// Every action that was successfully reduced, in dispatch order.
    /// Subscribe before dispatching to avoid missing the first ones.
    pub fn subscribe_actions(&self) -> broadcast::Receiver<Action> {
        self.actions.subscribe()
    }

    /// Stops the dispatch loop and hands the store back. Workers still in
    /// flight keep running but their follow-up actions are dropped.
    pub async fn shutdown(self) -> Result<Store, JoinError> {
        self.shutdown.cancel();
        self.tracker.close();
        self.task.await
    }
}

async fn run_dispatch_loop(
    mut store: Store,
    mut rx: mpsc::UnboundedReceiver<Action>,
    actions: broadcast::Sender<Action>,
    mut watchers: Watchers,
    shutdown: CancellationToken,
) -> Store {
    loop {
        let action = tokio::select! {
            _ = shutdown.cancelled() => break,
            action = rx.recv() => match action {
                Some(action) => action,
                None => break,
            },
        };
        if let Err(err) = store.dispatch(&action) {
            error!(action = action.kind(), "rejected action: {err}");
            continue;
        }
        let snapshot = store.state();
        // No observers is fine.
        let _ = actions.send(action.clone());
        watchers.handle(action, snapshot);
    }
    store
}

struct Watchers {
    services: Services,
    settings: Arc<SearchConfig>,
    dispatcher: Dispatcher,
    tracker: TaskTracker,
    pending_inline: Option<CancellationToken>,
}

impl Watchers {
    fn context(&self, snapshot: Arc<AppState>) -> WorkerContext {
        WorkerContext {
            services: self.services.clone(),
            settings: Arc::clone(&self.settings),
            dispatcher: self.dispatcher.clone(),
            snapshot,
        }
    }

    fn handle(&mut self, action: Action, snapshot: Arc<AppState>) {
        if let Action::InlineSearch(InlineSearch::RequestDebounce(request)) = action {
            self.debounce_inline_search(request.term);
            return;
        }
        let ctx = self.context(snapshot);
        match action {
            Action::GetPopularTables(GetPopularTables::Request) => {
                self.tracker
                    .spawn(popular_tables::get_popular_tables_worker(ctx));
            }
            Action::SubmitSearch(request) => {
                self.tracker.spawn(search::submit_search_worker(ctx, request));
            }
            Action::SubmitSearchResource(request) => {
                self.tracker
                    .spawn(search::submit_search_resource_worker(ctx, request));
            }
            Action::UpdateSearchState(UpdateSearchState::Request(request)) => {
                self.tracker
                    .spawn(search::update_search_state_worker(ctx, request));
            }
            Action::SearchAll(SearchAll::Request(request)) => {
                self.tracker.spawn(search::search_all_worker(ctx, request));
            }
            Action::SearchResource(SearchResource::Request(request)) => {
                self.tracker
                    .spawn(search::search_resource_worker(ctx, request));
            }
            Action::InlineSearch(InlineSearch::Request(request)) => {
                self.tracker
                    .spawn(search::inline_search_worker(ctx, request.term));
            }
            Action::InlineSearch(InlineSearch::Select(request)) => {
                self.tracker
                    .spawn(search::select_inline_result_worker(ctx, request));
            }
            Action::UpdateFilterByCategory(request) => {
                self.tracker
                    .spawn(search::update_filter_by_category_worker(ctx, request));
            }
            Action::LoadPreviousSearch => {
                self.tracker.spawn(url_sync::load_previous_search_worker(ctx));
            }
            Action::UrlDidUpdate(request) => {
                self.tracker.spawn(url_sync::url_did_update_worker(ctx, request));
            }
            _ => {}
        }
    }

    /// Waits for the debounce window, then dispatches a plain inline search
    /// request for `term`. A newer debounced request cancels one still
    /// waiting; a search that already started is left alone.
    fn debounce_inline_search(&mut self, term: String) {
        if let Some(pending) = self.pending_inline.take() {
            pending.cancel();
        }
        let token = CancellationToken::new();
        self.pending_inline = Some(token.clone());
        let delay = self.settings.inline_debounce();
        let dispatcher = self.dispatcher.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(term = %term, "debounced inline search superseded");
                }
                _ = tokio::time::sleep(delay) => {
                    dispatcher.put(get_inline_results(term));
                }
            }
        });
    }
}
