//! Engine state container and snapshot computation.
//!
//! This module defines [`SearchBoxState`], the single mutable state owned by the
//! event handler, and [`EngineState`], the immutable snapshot published to hosts
//! after each visible transition. It is the single source of truth for query
//! text, suggestions, selection, and error presentation.
//!
//! # Architecture
//!
//! `SearchBoxState` separates the raw machine state (phase, disabled flag,
//! generation counters) from the data it governs (query, suggestions, selection,
//! error). Mutation happens only inside the event handler; everything a host can
//! observe is a recomputed [`EngineState`] snapshot, so no reader ever sees a
//! half-applied transition.
//!
//! # Generations
//!
//! The two generation counters implement logical cancellation. Each opened
//! debounce window and each dispatched fetch is stamped with a fresh number;
//! completions carry their stamp back and are ignored unless it still matches.
//! A late timer or a slow response for a superseded query therefore lands as a
//! no-op regardless of task scheduling.
//!
//! # Example
//!
//! ```
//! use searchbox::app::SearchBoxState;
//! use searchbox::Config;
//!
//! let mut state = SearchBoxState::new(Config::default());
//! let generation = state.begin_change("paris");
//! assert_eq!(generation, 1);
//! assert!(state.snapshot().tags.is_changing);
//! ```

use crate::domain::{Suggestion, SuggestionId};
use crate::Config;
use super::phase::{Phase, StateTags};

/// Central engine state container.
///
/// Holds all transient widget state including the current phase, query text,
/// suggestion list, selection, and error presentation. Mutated by the event
/// handler in response to UI events and async completions. Snapshots are
/// computed on demand via [`SearchBoxState::snapshot`].
#[derive(Debug, Clone)]
pub struct SearchBoxState {
    /// Current phase of the state machine.
    ///
    /// Drives every derived tag and visibility decision. While disabled the
    /// phase is frozen in place and resumed on re-enable.
    pub phase: Phase,

    /// Whether the engine is disabled.
    ///
    /// Orthogonal to the phase. While set, input events and async completions
    /// are ignored; only re-enabling and configuration updates are honored.
    pub disabled: bool,

    /// The last text the user typed, or the label applied by a selection.
    ///
    /// Replaced wholesale on every change, never partially edited. Cleared by
    /// `Clear` and by a selection that no longer resolves.
    pub query: String,

    /// Suggestions from the most recent settled fetch.
    ///
    /// Superseded wholesale by every new fetch. Cleared when a fetch starts so
    /// the loading flag is never shown alongside stale rows.
    pub suggestions: Vec<Suggestion>,

    /// The currently picked suggestion, if any.
    ///
    /// Set by a resolved selection, cleared by any subsequent change, by
    /// `Clear`, and when the picked id is absent from the current list.
    pub selected: Option<Suggestion>,

    /// User-facing error text, if the last fetch failed.
    ///
    /// Always the generic failure message; raw provider errors never reach
    /// this field. Survives blur and is cleared by change, clear, selection,
    /// or a blank commit.
    pub error: Option<String>,

    /// Engine configuration.
    ///
    /// `focus_on_select` decides where a resolved selection lands. Patched at
    /// runtime by configuration-update events.
    pub config: Config,

    /// Stamp of the currently open debounce window.
    ///
    /// Bumped by every change; a timer completion with an older stamp is
    /// ignored.
    pub debounce_generation: u64,

    /// Stamp of the currently outstanding fetch.
    ///
    /// Bumped by every dispatched fetch; a settlement with an older stamp is
    /// ignored.
    pub fetch_generation: u64,
}

impl SearchBoxState {
    /// Creates the initial engine state.
    ///
    /// Starts unfocused and enabled, with empty query, no suggestions, no
    /// selection, and no error.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbox::app::{Phase, SearchBoxState};
    /// use searchbox::Config;
    ///
    /// let state = SearchBoxState::new(Config::default());
    /// assert_eq!(state.phase, Phase::UnfocusedIdle);
    /// assert!(!state.disabled);
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            phase: Phase::UnfocusedIdle,
            disabled: false,
            query: String::new(),
            suggestions: Vec::new(),
            selected: None,
            error: None,
            config,
            debounce_generation: 0,
            fetch_generation: 0,
        }
    }

    /// Records a text change and opens a fresh debounce window.
    ///
    /// Moves to [`Phase::Changing`], replaces the query text, and drops the
    /// selection, suggestions, and error so the previous outcome can never be
    /// presented against the new text. Returns the new debounce stamp for the
    /// timer that accompanies this window.
    pub fn begin_change(&mut self, text: &str) -> u64 {
        self.phase = Phase::Changing;
        self.query = text.to_string();
        self.selected = None;
        self.suggestions.clear();
        self.error = None;
        self.debounce_generation += 1;
        self.debounce_generation
    }

    /// Moves to [`Phase::Fetching`] and stamps a new outstanding request.
    ///
    /// Clears suggestions and error on entry, which is what makes the
    /// "fetching implies no items and no error" invariant structural rather
    /// than a convention callers must remember.
    pub fn begin_fetch(&mut self) -> u64 {
        self.phase = Phase::Fetching;
        self.suggestions.clear();
        self.error = None;
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Resets to a focused idle field.
    ///
    /// Clears query, suggestions, selection, and error. This is the `Clear`
    /// semantics and is also reused when a host wants a pristine refocus.
    pub fn reset(&mut self) {
        self.phase = Phase::FocusedIdle;
        self.query = String::new();
        self.suggestions.clear();
        self.selected = None;
        self.error = None;
    }

    /// Resolves a selection id against the current suggestions.
    ///
    /// On a hit the suggestion becomes the selection and its label becomes the
    /// query text. On a miss (a stale pick racing a refreshed list) the
    /// selection and query are cleared instead; this is a normal outcome, not
    /// an error. Returns whether the id resolved.
    pub fn resolve_selection(&mut self, id: &SuggestionId) -> bool {
        match self.suggestion_by_id(id).cloned() {
            Some(suggestion) => {
                self.query = suggestion.label.clone();
                self.selected = Some(suggestion);
                true
            }
            None => {
                self.query = String::new();
                self.selected = None;
                false
            }
        }
    }

    /// Looks up a suggestion by identity in the current list.
    #[must_use]
    pub fn suggestion_by_id(&self, id: &SuggestionId) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| &s.id == id)
    }

    /// Computes the current tag set.
    #[must_use]
    pub fn tags(&self) -> StateTags {
        StateTags::compute(self.phase, self.disabled, &self.query)
    }

    /// Computes an immutable snapshot for publication to hosts.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbox::app::SearchBoxState;
    /// use searchbox::Config;
    ///
    /// let state = SearchBoxState::new(Config::default());
    /// let snapshot = state.snapshot();
    /// assert!(snapshot.query.is_empty());
    /// assert!(!snapshot.is_panel_open());
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> EngineState {
        EngineState {
            phase: self.phase,
            query: self.query.clone(),
            suggestions: self.suggestions.clone(),
            selected: self.selected.clone(),
            error: self.error.clone(),
            tags: self.tags(),
        }
    }
}

/// Immutable engine snapshot exposed to hosts.
///
/// Published on every visible transition. Hosts read it directly or project it
/// through the view layer; nothing outside the event handler ever mutates
/// engine state, so consecutive snapshots are always whole transitions apart.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Phase at the time of the snapshot.
    pub phase: Phase,

    /// Query text at the time of the snapshot.
    pub query: String,

    /// Suggestions from the most recent settled fetch.
    pub suggestions: Vec<Suggestion>,

    /// The currently picked suggestion, if any.
    pub selected: Option<Suggestion>,

    /// User-facing error text, if present.
    pub error: Option<String>,

    /// Derived tag set for coarse conditionals.
    pub tags: StateTags,
}

impl EngineState {
    /// Whether a suggestion request is in flight.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.tags.is_fetching
    }

    /// Whether the dropdown panel should render.
    ///
    /// True only while focused in a phase with something to present: results,
    /// an empty outcome, or an error.
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.tags.is_opened
    }

    /// Whether the input has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.tags.is_focused
    }

    /// Whether the engine is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.tags.is_disabled
    }

    /// Computes the view model for rendering this snapshot.
    ///
    /// Projects the snapshot into display-ready data: the input element
    /// state, the dropdown panel when the phase opens one, and the error
    /// line when the phase presents one. Hosts bind the result to their
    /// widgets without consulting tags or phases themselves.
    ///
    /// # Returns
    ///
    /// A [`SearchBoxView`](crate::ui::viewmodel::SearchBoxView) containing
    /// the input, panel, spinner, and error display information.
    ///
    /// # Example
    ///
    /// ```rust
    /// use searchbox::app::SearchBoxState;
    /// use searchbox::Config;
    ///
    /// let view = SearchBoxState::new(Config::default()).snapshot().compute_viewmodel();
    /// assert!(view.input.text.is_empty());
    /// assert!(view.panel.is_none());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> crate::ui::viewmodel::SearchBoxView {
        let panel = if self.tags.is_opened {
            let items: Vec<crate::ui::viewmodel::SuggestionItem> = self
                .suggestions
                .iter()
                .map(|suggestion| crate::ui::viewmodel::SuggestionItem {
                    id: suggestion.id.clone(),
                    label: suggestion.label.clone(),
                    is_selected: self
                        .selected
                        .as_ref()
                        .is_some_and(|selected| selected.id == suggestion.id),
                })
                .collect();

            let empty_message = self
                .tags
                .has_empty_result
                .then(|| "No result found".to_string());

            Some(crate::ui::viewmodel::PanelInfo {
                items,
                empty_message,
            })
        } else {
            None
        };

        let error = if self.tags.is_errored {
            self.error
                .clone()
                .map(|message| crate::ui::viewmodel::ErrorInfo { message })
        } else {
            None
        };

        crate::ui::viewmodel::SearchBoxView {
            input: crate::ui::viewmodel::InputInfo {
                text: self.query.clone(),
                disabled: self.tags.is_disabled,
            },
            panel,
            spinner_visible: self.tags.is_fetching,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Place, Suggestion};

    fn suggestion(id: u64, label: &str) -> Suggestion {
        Suggestion::from_place(Place::new(id, label))
    }

    #[test]
    fn begin_fetch_upholds_loading_invariant() {
        let mut state = SearchBoxState::new(Config::default());
        state.suggestions = vec![suggestion(1, "Paris")];
        state.error = Some("Failed to fetch places".to_string());

        state.begin_fetch();

        let snapshot = state.snapshot();
        assert!(snapshot.is_fetching());
        assert!(snapshot.suggestions.is_empty());
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn begin_change_drops_previous_outcome() {
        let mut state = SearchBoxState::new(Config::default());
        state.phase = Phase::WaitingSelection;
        state.suggestions = vec![suggestion(1, "Paris")];
        state.selected = Some(suggestion(1, "Paris"));
        state.error = Some("Failed to fetch places".to_string());

        let first = state.begin_change("ber");
        let second = state.begin_change("berl");

        assert_eq!(state.phase, Phase::Changing);
        assert_eq!(state.query, "berl");
        assert!(state.suggestions.is_empty());
        assert!(state.selected.is_none());
        assert!(state.error.is_none());
        assert!(second > first);
    }

    #[test]
    fn selection_miss_clears_query_and_pick() {
        let mut state = SearchBoxState::new(Config::default());
        state.suggestions = vec![suggestion(1, "Paris")];
        state.query = "par".to_string();

        let resolved = state.resolve_selection(&SuggestionId::Num(99));

        assert!(!resolved);
        assert!(state.query.is_empty());
        assert!(state.selected.is_none());
    }

    #[test]
    fn viewmodel_lists_rows_with_pick_highlighted() {
        let mut state = SearchBoxState::new(Config::default());
        state.phase = Phase::WaitingSelection;
        state.query = "par".to_string();
        state.suggestions = vec![suggestion(1, "Paris"), suggestion(2, "Parma")];
        state.selected = Some(suggestion(2, "Parma"));

        let view = state.snapshot().compute_viewmodel();

        assert_eq!(view.input.text, "par");
        assert!(!view.spinner_visible);
        let panel = view.panel.expect("panel open while waiting for selection");
        assert_eq!(panel.items.len(), 2);
        assert!(!panel.items[0].is_selected);
        assert!(panel.items[1].is_selected);
        assert!(panel.empty_message.is_none());
    }

    #[test]
    fn viewmodel_shows_placeholder_for_empty_result() {
        let mut state = SearchBoxState::new(Config::default());
        state.phase = Phase::ShowingEmptyResult;
        state.query = "xyzzy".to_string();

        let view = state.snapshot().compute_viewmodel();

        let panel = view.panel.expect("panel open for empty outcome");
        assert!(panel.items.is_empty());
        assert_eq!(panel.empty_message.as_deref(), Some("No result found"));
    }

    #[test]
    fn viewmodel_spins_without_panel_while_fetching() {
        let mut state = SearchBoxState::new(Config::default());
        state.query = "par".to_string();
        state.begin_fetch();

        let view = state.snapshot().compute_viewmodel();

        assert!(view.spinner_visible);
        assert!(view.panel.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn viewmodel_surfaces_error_only_while_errored() {
        let mut state = SearchBoxState::new(Config::default());
        state.phase = Phase::FocusedErrored;
        state.error = Some("Failed to fetch places".to_string());

        let view = state.snapshot().compute_viewmodel();
        assert_eq!(
            view.error.as_ref().map(|e| e.message.as_str()),
            Some("Failed to fetch places")
        );

        // Disabling suppresses phase presentation, error line included.
        state.disabled = true;
        let view = state.snapshot().compute_viewmodel();
        assert!(view.error.is_none());
        assert!(view.input.disabled);
    }
}
