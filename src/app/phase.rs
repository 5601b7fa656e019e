//! Phase and tag types for the search-box state machine.
//!
//! This module defines the single flat [`Phase`] enum the engine moves through,
//! together with [`StateTags`], the derived boolean labels renderers query. The
//! hierarchy a reader might expect (focused vs. unfocused, enabled vs. disabled)
//! is flattened: focus is encoded in the phase name, and disablement is an
//! orthogonal flag on the state that freezes the phase without losing it.
//!
//! # State Machine
//!
//! Unfocused phases:
//! - **`UnfocusedIdle`**: nothing happening, input not focused
//! - **`UnfocusedErrored`**: focus was lost while an error was pending
//!
//! Focused phases:
//! - **`FocusedIdle`**: focused with no pending work
//! - **`Changing`**: debounce window open after a text change
//! - **`Fetching`**: a suggestion request is in flight
//! - **`WaitingSelection`**: results shown, awaiting a pick
//! - **`ShowingEmptyResult`**: the query matched nothing
//! - **`FocusedErrored`**: the last fetch failed
//! - **`SuggestionSelected`**: a pick was made and focus retained
//!
//! # Example
//!
//! ```
//! use searchbox::app::{Phase, StateTags};
//!
//! let tags = StateTags::compute(Phase::WaitingSelection, false, "paris");
//! assert!(tags.is_opened);
//! assert!(tags.is_dirty);
//! ```

/// Current phase of the search-box state machine.
///
/// Exactly one phase is active at a time. Together with the disabled flag and
/// the query text it determines every derived tag and visibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Input is not focused and nothing is pending.
    ///
    /// The initial phase. Cached suggestions and a selection may still be
    /// present (after a pick that dropped focus) and are restored on focus.
    UnfocusedIdle,

    /// Input is not focused and an error was pending when focus was lost.
    ///
    /// Remembered so that refocusing can restore the errored presentation
    /// instead of silently forgetting the failure.
    UnfocusedErrored,

    /// Input is focused with no query activity.
    ///
    /// Entered on focus with nothing to resume, after a blank query commits,
    /// and by `Clear`.
    FocusedIdle,

    /// A text change occurred and the debounce window is open.
    ///
    /// Any further change restarts the window. When the window elapses the
    /// query commits: blank text falls back to [`Phase::FocusedIdle`],
    /// anything else starts a fetch.
    Changing,

    /// A suggestion request is in flight.
    ///
    /// Entry clears previous items and error so a spinner is never rendered
    /// alongside stale data. Left when the current request settles or is
    /// superseded.
    Fetching,

    /// Results are displayed and the engine awaits a selection.
    ///
    /// The dropdown panel is open. Entered on fetch success with at least one
    /// item, and resumed on focus or click when items are cached.
    WaitingSelection,

    /// The last fetch succeeded but matched nothing.
    ///
    /// The dropdown panel is open to present the empty outcome.
    ShowingEmptyResult,

    /// The last fetch failed.
    ///
    /// The panel is open to present the error text. Cleared by the next
    /// text change, clear, or selection.
    FocusedErrored,

    /// A suggestion was picked and focus retained.
    ///
    /// Only reachable when the engine is configured to keep focus after a
    /// selection. A click reopens the panel without refetching.
    SuggestionSelected,
}

impl Phase {
    /// Returns whether this phase is one of the focused phases.
    #[must_use]
    pub const fn is_focused(self) -> bool {
        !matches!(self, Self::UnfocusedIdle | Self::UnfocusedErrored)
    }
}

/// Boolean labels derived from the current state, for coarse UI conditionals.
///
/// Tags are not mutually exclusive and carry no information of their own: they
/// are recomputed from the phase, the disabled flag, and the query text on
/// every transition. While disabled, every phase-derived tag reads false and
/// only `is_disabled` and the query-content pair remain meaningful, so a host
/// can grey the widget out without the panel or spinner showing through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateTags {
    /// The engine accepts input events.
    pub is_enabled: bool,
    /// The engine ignores input events until re-enabled.
    pub is_disabled: bool,
    /// The input has focus.
    pub is_focused: bool,
    /// The input does not have focus.
    pub is_unfocused: bool,
    /// The debounce window is open.
    pub is_changing: bool,
    /// A suggestion request is in flight.
    pub is_fetching: bool,
    /// An error is being presented (focused or remembered across blur).
    pub is_errored: bool,
    /// Results are shown and a pick is awaited.
    pub is_waiting_selection: bool,
    /// The last fetch matched nothing.
    pub has_empty_result: bool,
    /// A suggestion is picked with focus retained.
    pub is_suggestion_selected: bool,
    /// The dropdown panel should render.
    pub is_opened: bool,
    /// The query text is non-empty.
    pub is_dirty: bool,
    /// The query text is empty.
    pub is_empty: bool,
}

impl StateTags {
    /// Computes the tag set for a state.
    ///
    /// Pure function of the three inputs; called by the state container on
    /// each snapshot, never cached.
    #[must_use]
    pub fn compute(phase: Phase, disabled: bool, query: &str) -> Self {
        let is_dirty = !query.is_empty();

        if disabled {
            return Self {
                is_disabled: true,
                is_dirty,
                is_empty: !is_dirty,
                ..Self::default()
            };
        }

        let is_focused = phase.is_focused();
        Self {
            is_enabled: true,
            is_disabled: false,
            is_focused,
            is_unfocused: !is_focused,
            is_changing: matches!(phase, Phase::Changing),
            is_fetching: matches!(phase, Phase::Fetching),
            is_errored: matches!(phase, Phase::FocusedErrored | Phase::UnfocusedErrored),
            is_waiting_selection: matches!(phase, Phase::WaitingSelection),
            has_empty_result: matches!(phase, Phase::ShowingEmptyResult),
            is_suggestion_selected: matches!(phase, Phase::SuggestionSelected),
            is_opened: matches!(
                phase,
                Phase::WaitingSelection | Phase::ShowingEmptyResult | Phase::FocusedErrored
            ),
            is_dirty,
            is_empty: !is_dirty,
        }
    }
}
