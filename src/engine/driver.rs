//! Async driver task and the host-facing engine handle.
//!
//! This module owns the runtime side of the engine: a single driver task that
//! serializes every event through the handler, executes the actions the
//! handler emits, and publishes state snapshots for hosts to observe.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Host thread(s)                                  │
//! │  ┌───────────┐   events    ┌──────────────────┐  │
//! │  │ SearchBox │ ──────────▶ │   driver task    │  │
//! │  │  (handle) │ ◀────────── │  (owns state)    │  │
//! │  └───────────┘  snapshots  └──────┬───────────┘  │
//! │                                   │ spawns       │
//! │                      ┌────────────┴────────────┐ │
//! │                      ▼                         ▼ │
//! │               debounce timer            fetch task│
//! │               (DebounceElapsed)       (FetchSettled)
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Timer and fetch tasks report back through the same event channel the host
//! uses, so their completions are serialized with host input and the state is
//! only ever touched from the driver task. Cancellation is belt and braces:
//! superseded tasks are aborted, and a completion that slips through anyway
//! is discarded by its stale generation stamp.

use crate::app::{
    handle_event, Action, EngineState, Event, FetchOutcome, SearchBoxState, FETCH_ERROR_MESSAGE,
};
use crate::domain::{Suggestion, SuggestionId};
use crate::provider::SuggestionProvider;
use crate::{Config, ConfigUpdate};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Host-facing handle to a running search box engine.
///
/// Created with [`SearchBox::spawn`]. Host callbacks map to the fire-and-forget
/// methods ([`change`](Self::change), [`focus`](Self::focus), ...), and the
/// resulting state arrives through [`view`](Self::view) or
/// [`subscribe`](Self::subscribe). Dropping the handle shuts the engine down.
///
/// # Example
///
/// ```no_run
/// use searchbox::provider::NominatimProvider;
/// use searchbox::{Config, SearchBox};
///
/// # async fn demo() {
/// let engine = SearchBox::spawn(NominatimProvider::new(), Config::default());
/// engine.focus();
/// engine.change("paris");
///
/// let mut updates = engine.subscribe();
/// while updates.changed().await.is_ok() {
///     let view = updates.borrow().clone();
///     if view.is_panel_open() {
///         println!("{} suggestions", view.suggestions.len());
///         break;
///     }
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct SearchBox {
    events: mpsc::UnboundedSender<Event>,
    snapshot: watch::Receiver<EngineState>,
    driver: JoinHandle<()>,
}

impl SearchBox {
    /// Spawns the driver task and returns the handle to it.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, as the driver and its
    /// timer and fetch tasks are spawned onto the current runtime.
    pub fn spawn<P>(provider: P, config: Config) -> Self
    where
        P: SuggestionProvider + 'static,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let state = SearchBoxState::new(config);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        let driver = Driver {
            state,
            provider: Arc::new(provider),
            events: event_tx.clone(),
            snapshot: snapshot_tx,
            debounce_task: None,
            fetch_task: None,
        };

        Self {
            events: event_tx,
            snapshot: snapshot_rx,
            driver: tokio::spawn(driver.run(event_rx)),
        }
    }

    /// Sends an event to the driver.
    ///
    /// The convenience methods below are thin wrappers over this. Delivery is
    /// fire-and-forget; the effect shows up in the next snapshot.
    pub fn dispatch(&self, event: Event) {
        if self.events.send(event).is_err() {
            tracing::warn!("event dropped, engine driver is gone");
        }
    }

    /// The user edited the input text.
    pub fn change(&self, text: impl Into<String>) {
        self.dispatch(Event::Change(text.into()));
    }

    /// The input gained focus.
    pub fn focus(&self) {
        self.dispatch(Event::Focus);
    }

    /// The input lost focus.
    pub fn blur(&self) {
        self.dispatch(Event::Blur);
    }

    /// The user clicked the input.
    pub fn click(&self) {
        self.dispatch(Event::Click);
    }

    /// The user cleared the field.
    pub fn clear(&self) {
        self.dispatch(Event::Clear);
    }

    /// The user picked the suggestion with the given id.
    pub fn select(&self, id: impl Into<SuggestionId>) {
        self.dispatch(Event::Select(id.into()));
    }

    /// Re-enables a disabled engine.
    pub fn enable(&self) {
        self.dispatch(Event::Enable);
    }

    /// Disables the engine, freezing its visible state.
    pub fn disable(&self) {
        self.dispatch(Event::Disable);
    }

    /// Patches the engine configuration at runtime.
    pub fn update_config(&self, update: ConfigUpdate) {
        self.dispatch(Event::UpdateConfig(update));
    }

    /// Returns the most recently published state snapshot.
    #[must_use]
    pub fn view(&self) -> EngineState {
        self.snapshot.borrow().clone()
    }

    /// Returns a receiver that observes every published snapshot.
    ///
    /// Hosts typically await `changed()` and re-render from `borrow()`.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EngineState> {
        self.snapshot.clone()
    }
}

impl Drop for SearchBox {
    /// Stops the driver task.
    ///
    /// An outstanding timer or fetch task notices the closed event channel
    /// when it tries to report and stops on its own.
    fn drop(&mut self) {
        self.driver.abort();
    }
}

/// Driver internals: the engine state plus the handles needed to execute
/// actions. Lives entirely inside the spawned task.
struct Driver {
    state: SearchBoxState,
    provider: Arc<dyn SuggestionProvider>,
    events: mpsc::UnboundedSender<Event>,
    snapshot: watch::Sender<EngineState>,
    debounce_task: Option<JoinHandle<()>>,
    fetch_task: Option<JoinHandle<()>>,
}

impl Driver {
    /// Receives events until the handle is dropped.
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>) {
        while let Some(event) = events.recv().await {
            self.step(&event);
        }
    }

    /// Feeds one event through the handler and applies the outcome.
    fn step(&mut self, event: &Event) {
        match handle_event(&mut self.state, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(&action);
                }
                if should_render {
                    self.snapshot.send_replace(self.state.snapshot());
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `StartDebounce`: Arm the quiescence timer, replacing any previous one
    /// - `CancelDebounce`: Disarm the timer
    /// - `SpawnFetch`: Dispatch a provider request, replacing any in flight
    /// - `CancelFetch`: Abort the in-flight request
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::StartDebounce { generation, delay } => {
                if let Some(task) = self.debounce_task.take() {
                    task.abort();
                }

                let events = self.events.clone();
                let generation = *generation;
                let delay = *delay;
                self.debounce_task = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if events.send(Event::DebounceElapsed { generation }).is_err() {
                        tracing::debug!("engine gone before debounce timer could report");
                    }
                }));
            }
            Action::CancelDebounce => {
                if let Some(task) = self.debounce_task.take() {
                    task.abort();
                }
            }
            Action::SpawnFetch { generation, query } => {
                if let Some(task) = self.fetch_task.take() {
                    task.abort();
                }

                let events = self.events.clone();
                let provider = Arc::clone(&self.provider);
                let generation = *generation;
                let query = query.clone();
                self.fetch_task = Some(tokio::spawn(async move {
                    let outcome = match provider.fetch(&query).await {
                        Ok(places) => FetchOutcome::Loaded(
                            places.into_iter().map(Suggestion::from_place).collect(),
                        ),
                        Err(e) => {
                            // Provider detail stays in the logs; users see the
                            // generic message.
                            tracing::warn!(error = %e, query = %query, "suggestion fetch failed");
                            FetchOutcome::Failed(FETCH_ERROR_MESSAGE.to_string())
                        }
                    };

                    if events.send(Event::FetchSettled { generation, outcome }).is_err() {
                        tracing::debug!("engine gone before fetch could settle");
                    }
                }));
            }
            Action::CancelFetch => {
                if let Some(task) = self.fetch_task.take() {
                    task.abort();
                }
            }
        }
    }
}
