//! View model types representing renderable search box state.
//!
//! This module defines immutable view models computed from engine state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like panel visibility and row
//! highlighting, so hosts bind them to widgets without re-deriving anything.
//!
//! # Architecture
//!
//! View models are created via `EngineState::compute_viewmodel()` and consumed
//! by the host's renderer. They contain no engine logic, only display-ready
//! data.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::{EngineState, SearchBoxState};
//! use searchbox::Config;
//!
//! let state: EngineState = SearchBoxState::new(Config::default()).snapshot();
//! let view = state.compute_viewmodel();
//! assert!(view.panel.is_none());
//! assert!(!view.spinner_visible);
//! ```

use crate::domain::SuggestionId;

/// Complete view model for rendering the search box.
///
/// Contains all display information needed to render the widget. The view
/// model is computed from [`EngineState`](crate::app::EngineState) and
/// includes the input element state, the optional dropdown panel, and the
/// optional error line.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBoxView {
    /// Input element state (text, disabled flag).
    pub input: InputInfo,

    /// Dropdown panel, present only in phases that open it.
    pub panel: Option<PanelInfo>,

    /// Whether a progress indicator should be shown next to the input.
    pub spinner_visible: bool,

    /// Error line, present only in errored phases.
    pub error: Option<ErrorInfo>,
}

/// Input element display information.
#[derive(Debug, Clone, PartialEq)]
pub struct InputInfo {
    /// Text to show in the input element.
    pub text: String,

    /// Whether the element should render as disabled.
    pub disabled: bool,
}

/// Dropdown panel display information.
///
/// An open panel either lists suggestion rows or, when the last fetch matched
/// nothing, a placeholder message.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    /// Rows to display, in provider order.
    pub items: Vec<SuggestionItem>,

    /// Placeholder shown instead of rows (e.g., "No result found").
    pub empty_message: Option<String>,
}

/// Display information for a single suggestion row.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionItem {
    /// Identifier hosts pass back through selection.
    pub id: SuggestionId,

    /// Label text for the row.
    pub label: String,

    /// Whether this row corresponds to the currently picked suggestion.
    pub is_selected: bool,
}

/// Error line display information.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// Message text (e.g., "Failed to fetch places").
    pub message: String,
}
