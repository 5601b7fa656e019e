//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes UI events and
//! async completions, translating them into state changes and action sequences.
//! It is the single place engine state is mutated, which is what makes the
//! engine race-free: no matter how timers, fetches, and user input interleave,
//! their effects are serialized through one transition function.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from host callbacks or from the driver's timer/fetch tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `SearchBoxState` methods
//! 4. Actions are collected and returned for the driver to execute
//!
//! # Event Types
//!
//! Events fall into two categories:
//! - **UI events**: `Change`, `Focus`, `Blur`, `Click`, `Clear`, `Select`,
//!   `Enable`, `Disable`, `UpdateConfig`
//! - **Completions**: `DebounceElapsed` (the quiescence timer fired) and
//!   `FetchSettled` (a suggestion request finished)
//!
//! Completions carry the generation stamp they were issued under; a completion
//! whose stamp no longer matches the current one is a stale echo of cancelled
//! work and is dropped without touching state.
//!
//! # Example
//!
//! ```
//! use searchbox::app::{handle_event, Event, SearchBoxState};
//! use searchbox::Config;
//!
//! let mut state = SearchBoxState::new(Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Focus)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), searchbox::SearchBoxError>(())
//! ```

use crate::app::{Action, SearchBoxState};
use crate::domain::error::Result;
use crate::domain::{Suggestion, SuggestionId};
use crate::ConfigUpdate;
use super::phase::Phase;
use std::time::Duration;

/// Quiescence interval a change must survive before its query commits.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Generic user-facing message stored when a suggestion fetch fails.
///
/// Raw provider errors are logged by the driver and never shown to users.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch places";

/// Events triggered by host UI callbacks or async completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user edited the input text.
    ///
    /// Carries the full replacement text, not a delta. Opens (or restarts)
    /// the debounce window. Only honored while focused.
    Change(String),

    /// The input gained focus.
    ///
    /// Resumes whatever the unfocused state remembers: a pending error, cached
    /// results, or a query worth refetching.
    Focus,

    /// The input lost focus.
    ///
    /// Closes the panel and cancels pending debounce or fetch work. An error
    /// on display is remembered for the next focus.
    Blur,

    /// The user clicked the input.
    ///
    /// Reopens the panel after a focus-retaining selection. Ignored in every
    /// other phase; plain focus handling belongs to [`Event::Focus`].
    Click,

    /// The user cleared the field.
    ///
    /// Resets query, suggestions, selection, and error, landing in a focused
    /// idle field regardless of the previous phase.
    Clear,

    /// The user picked a suggestion by id.
    ///
    /// Resolved against the current suggestion list; a stale id (the list
    /// changed under the click) resets the field instead of erroring.
    Select(SuggestionId),

    /// Re-enables a disabled engine, resuming the frozen phase.
    Enable,

    /// Disables the engine.
    ///
    /// The visible phase is frozen in place so re-enabling can resume it, and
    /// pending timer or fetch work is cancelled. Until re-enabled, every
    /// event except [`Event::Enable`] and [`Event::UpdateConfig`] is ignored.
    Disable,

    /// Patches the engine configuration at runtime.
    ///
    /// Only fields present in the update are touched. Honored even while
    /// disabled.
    UpdateConfig(ConfigUpdate),

    /// The debounce timer for a change window fired.
    ///
    /// Commits the query if the window is still the current one: blank text
    /// falls back to idle, anything else dispatches a fetch.
    DebounceElapsed {
        /// Stamp of the window this timer was armed for.
        generation: u64,
    },

    /// A suggestion fetch finished.
    ///
    /// Applied only if the request is still the current one and the machine
    /// is still fetching; otherwise discarded unprocessed.
    FetchSettled {
        /// Stamp of the request this settlement belongs to.
        generation: u64,
        /// Terminal outcome of the request.
        outcome: FetchOutcome,
    },
}

/// Terminal outcome of a suggestion fetch.
///
/// Produced by the driver once per dispatched request. The failure message is
/// already the generic user-facing text; provider detail stays in the logs.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The provider responded; the list may be empty.
    Loaded(Vec<Suggestion>),
    /// The request failed, with the message to present.
    Failed(String),
}

/// Normalizes committed text for the provider.
///
/// Surrounding whitespace is dropped and interior spaces become the `+`
/// separator the geocoding service expects in query strings. Returns an empty
/// string for blank input, which callers treat as "nothing to fetch".
fn normalize_query(text: &str) -> String {
    text.trim().replace(' ', "+")
}

/// Processes an event, mutates engine state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the driver.
///
/// # Parameters
///
/// * `state` - Mutable reference to engine state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (`should_render`, actions): whether the visible state changed,
/// and the side effects to execute in sequence. Both are empty no-ops when
/// the event is ignored in the current phase.
///
/// # Errors
///
/// Returns errors from state mutation methods. Every currently defined
/// transition is total, so callers mostly see `Ok`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type for debugging.
///
/// # Example
///
/// ```
/// use searchbox::app::{handle_event, Action, Event, SearchBoxState, DEBOUNCE_DELAY};
/// use searchbox::Config;
///
/// let mut state = SearchBoxState::new(Config::default());
/// handle_event(&mut state, &Event::Focus)?;
/// let (_, actions) = handle_event(&mut state, &Event::Change("paris".into()))?;
/// assert_eq!(
///     actions,
///     vec![Action::StartDebounce { generation: 1, delay: DEBOUNCE_DELAY }]
/// );
/// # Ok::<(), searchbox::SearchBoxError>(())
/// ```
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut SearchBoxState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.disabled && !matches!(event, Event::Enable | Event::UpdateConfig(_)) {
        tracing::debug!("event ignored while disabled");
        return Ok((false, vec![]));
    }

    match event {
        Event::Change(text) => {
            if !state.phase.is_focused() {
                tracing::debug!("ignoring change without focus");
                return Ok((false, vec![]));
            }

            let leaving_fetch = state.phase == Phase::Fetching;
            let generation = state.begin_change(text);

            tracing::trace!(query = %state.query, generation, "change recorded, debounce window opened");

            let mut actions = vec![];
            if leaving_fetch {
                actions.push(Action::CancelFetch);
            }
            actions.push(Action::StartDebounce {
                generation,
                delay: DEBOUNCE_DELAY,
            });

            Ok((true, actions))
        }
        Event::DebounceElapsed { generation } => {
            if state.phase != Phase::Changing || *generation != state.debounce_generation {
                tracing::debug!(
                    generation,
                    current = state.debounce_generation,
                    "ignoring stale debounce timer"
                );
                return Ok((false, vec![]));
            }

            let query = normalize_query(&state.query);
            if query.is_empty() {
                tracing::debug!("blank query committed, skipping fetch");
                state.phase = Phase::FocusedIdle;
                state.error = None;
                return Ok((true, vec![]));
            }

            let generation = state.begin_fetch();
            tracing::debug!(query = %query, generation, "query committed, dispatching fetch");
            Ok((true, vec![Action::SpawnFetch { generation, query }]))
        }
        Event::FetchSettled { generation, outcome } => {
            if state.phase != Phase::Fetching || *generation != state.fetch_generation {
                tracing::debug!(
                    generation,
                    current = state.fetch_generation,
                    "discarding stale fetch settlement"
                );
                return Ok((false, vec![]));
            }

            match outcome {
                FetchOutcome::Loaded(suggestions) if suggestions.is_empty() => {
                    tracing::debug!("fetch settled with no matches");
                    state.phase = Phase::ShowingEmptyResult;
                }
                FetchOutcome::Loaded(suggestions) => {
                    tracing::debug!(count = suggestions.len(), "fetch settled with suggestions");
                    state.suggestions.clone_from(suggestions);
                    state.phase = Phase::WaitingSelection;
                }
                FetchOutcome::Failed(message) => {
                    tracing::debug!("fetch failed, presenting error");
                    state.error = Some(message.clone());
                    state.phase = Phase::FocusedErrored;
                }
            }

            Ok((true, vec![]))
        }
        Event::Focus => {
            if state.phase.is_focused() {
                tracing::debug!("focus while already focused, no transition");
                return Ok((false, vec![]));
            }

            if state.error.is_some() {
                tracing::debug!("focus restoring remembered error");
                state.phase = Phase::FocusedErrored;
                return Ok((true, vec![]));
            }

            if !state.suggestions.is_empty() {
                tracing::debug!(count = state.suggestions.len(), "focus resuming cached results");
                state.phase = Phase::WaitingSelection;
                return Ok((true, vec![]));
            }

            let query = normalize_query(&state.query);
            if query.is_empty() {
                state.phase = Phase::FocusedIdle;
                return Ok((true, vec![]));
            }

            let generation = state.begin_fetch();
            tracing::debug!(query = %query, generation, "focus refetching pending query");
            Ok((true, vec![Action::SpawnFetch { generation, query }]))
        }
        Event::Blur => {
            if !state.phase.is_focused() {
                tracing::debug!("blur while unfocused, no transition");
                return Ok((false, vec![]));
            }

            let mut actions = vec![];
            match state.phase {
                Phase::Changing => actions.push(Action::CancelDebounce),
                Phase::Fetching => actions.push(Action::CancelFetch),
                _ => {}
            }

            state.phase = if state.error.is_some() {
                tracing::debug!("blur remembering pending error");
                Phase::UnfocusedErrored
            } else {
                Phase::UnfocusedIdle
            };

            Ok((true, actions))
        }
        Event::Click => {
            if state.phase != Phase::SuggestionSelected {
                tracing::debug!("click with no panel to reopen");
                return Ok((false, vec![]));
            }

            tracing::debug!("reopening panel after selection");
            state.phase = Phase::WaitingSelection;
            Ok((true, vec![]))
        }
        Event::Clear => {
            let mut actions = vec![];
            match state.phase {
                Phase::Changing => actions.push(Action::CancelDebounce),
                Phase::Fetching => actions.push(Action::CancelFetch),
                _ => {}
            }

            tracing::debug!("clearing field");
            state.reset();
            Ok((true, actions))
        }
        Event::Select(id) => {
            if state.phase != Phase::WaitingSelection {
                tracing::debug!("ignoring selection outside waiting phase");
                return Ok((false, vec![]));
            }

            let resolved = state.resolve_selection(id);
            state.error = None;
            state.phase = if state.config.focus_on_select {
                Phase::SuggestionSelected
            } else {
                Phase::UnfocusedIdle
            };

            tracing::debug!(
                resolved,
                query = %state.query,
                focus_on_select = state.config.focus_on_select,
                "selection handled"
            );

            Ok((true, vec![]))
        }
        Event::Enable => {
            if !state.disabled {
                tracing::debug!("enable while already enabled, no transition");
                return Ok((false, vec![]));
            }

            state.disabled = false;

            // Disabling cancelled any pending work; resuming the frozen phase
            // has to restart it or the machine would sit in Changing/Fetching
            // with nothing left to complete.
            let mut actions = vec![];
            match state.phase {
                Phase::Changing => {
                    tracing::debug!("re-arming debounce window after enable");
                    actions.push(Action::StartDebounce {
                        generation: state.debounce_generation,
                        delay: DEBOUNCE_DELAY,
                    });
                }
                Phase::Fetching => {
                    let generation = state.begin_fetch();
                    let query = normalize_query(&state.query);
                    tracing::debug!(query = %query, generation, "re-dispatching fetch after enable");
                    actions.push(Action::SpawnFetch { generation, query });
                }
                _ => {}
            }

            Ok((true, actions))
        }
        Event::Disable => {
            let mut actions = vec![];
            match state.phase {
                Phase::Changing => actions.push(Action::CancelDebounce),
                Phase::Fetching => actions.push(Action::CancelFetch),
                _ => {}
            }

            tracing::debug!(phase = ?state.phase, "engine disabled, phase frozen");
            state.disabled = true;
            Ok((true, actions))
        }
        Event::UpdateConfig(update) => {
            state.config.apply(update);
            tracing::debug!(
                focus_on_select = state.config.focus_on_select,
                "configuration updated"
            );
            Ok((false, vec![]))
        }
    }
}
