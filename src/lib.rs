//! Searchbox: a headless autocomplete engine for place search inputs.
//!
//! Searchbox is an input coordination engine that provides:
//! - Debounced query commits that wait out bursts of typing
//! - Race-free suggestion fetching with stale-response discarding
//! - A selection state machine covering focus, errors, and empty results
//! - Derived view models so hosts render without re-deriving logic
//! - Pluggable suggestion backends behind an async provider trait

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host UI (widgets, callbacks)                       │  ← Not in this crate
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine Layer (engine/)                             │  ← Driver task
//! │  - Event channel and state ownership                │  ← Timers, fetches
//! │  - Snapshot publishing                              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Provider Layer│   │ Domain Layer  │
//! │ (ui/)         │   │ (provider/)   │   │ (domain/)     │
//! │ - View models │   │ - Nominatim   │   │ - Place model │
//! │               │   │ - Closures    │   │ - Error types │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured tracing                               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Engine state machine with event/action model
//! - [`domain`]: Core domain types (Place, Suggestion, errors)
//! - [`engine`]: Async driver task and the host-facing [`SearchBox`] handle
//! - [`provider`]: Suggestion backends (Nominatim, closures)
//! - [`ui`]: View models for host renderers
//! - [`observability`]: Structured tracing setup
//!
//! # Configuration
//!
//! The engine is configured with a [`Config`], built directly, from a string
//! map, or from a TOML file:
//!
//! ```toml
//! # searchbox.toml
//! focus_on_select = true
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Setup**:
//!    - Build a `Config` (defaults, map, or file)
//!    - Initialize tracing (optional)
//!    - Spawn the engine with a provider
//!
//! 2. **Input**:
//!    - Wire host callbacks to the handle (`change`, `focus`, `select`, ...)
//!    - Each call becomes an event on the driver's channel
//!
//! 3. **Coordination**:
//!    - The driver debounces changes and dispatches provider fetches
//!    - Stale timers and responses are discarded by generation stamps
//!
//! 4. **Output**:
//!    - Every visible transition publishes an [`EngineState`] snapshot
//!    - Hosts project snapshots to view models and render
//!
//! # Examples
//!
//! ## Basic Usage (State Machine)
//!
//! ```rust
//! use searchbox::{handle_event, Config, Event, SearchBoxState};
//!
//! let mut state = SearchBoxState::new(Config::default());
//!
//! // Handle events
//! let events = vec![Event::Focus, Event::Change("paris".to_string())];
//! for event in events {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//! }
//! # Ok::<(), searchbox::SearchBoxError>(())
//! ```
//!
//! ## Engine Usage (Async)
//!
//! ```rust,no_run
//! use searchbox::provider::NominatimProvider;
//! use searchbox::{Config, SearchBox};
//!
//! # async fn demo() {
//! let engine = SearchBox::spawn(NominatimProvider::new(), Config::default());
//!
//! engine.focus();
//! engine.change("berlin");
//!
//! let mut updates = engine.subscribe();
//! while updates.changed().await.is_ok() {
//!     let view = updates.borrow().clone().compute_viewmodel();
//!     // Bind `view` to the host's widgets...
//!     # let _ = view;
//! }
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Debounced Commits
//!
//! Keystrokes never trigger fetches directly:
//! - Each change opens a fresh quiescence window (500ms)
//! - Only text that survives the window is committed and fetched
//! - Blank committed text short-circuits back to idle without a request
//!
//! ## Generation-Stamped Completions
//!
//! Timers and fetches carry the generation they were issued under:
//! - Superseded work is aborted outright
//! - A completion that slips through anyway fails the stamp check
//! - Responses therefore never apply out of order
//!
//! ## Immutable View Models
//!
//! Rendering uses computed view models:
//! - Clear separation between engine state and display
//! - Enables easier testing and validation
//! - Pre-computes display decisions (panel visibility, row highlighting)
//!
//! # Runtime Requirements
//!
//! - **Async**: Tokio 1.x (current-thread or multi-thread runtime)
//! - **Network**: Only through the configured provider; the state machine
//!   itself is pure and runs anywhere

pub mod app;
pub mod domain;
pub mod engine;
pub mod provider;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, EngineState, Event, FetchOutcome, Phase, SearchBoxState, StateTags};
pub use domain::{Place, Result, SearchBoxError, Suggestion, SuggestionId};
pub use engine::SearchBox;
pub use ui::SearchBoxView;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Engine configuration.
///
/// Built directly, parsed from a string map with [`Config::from_map`], or
/// loaded from a TOML file with [`Config::from_file`]. Individual fields can
/// be patched on a running engine via [`ConfigUpdate`].
///
/// # Example
///
/// ```toml
/// # searchbox.toml
/// focus_on_select = true
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the input keeps focus after a suggestion is picked.
    ///
    /// When `true`, a pick lands in a focused phase and a subsequent click
    /// reopens the panel. When `false`, a pick drops focus entirely.
    /// Default: `false`
    pub focus_on_select: bool,

    /// Tracing level for engine logging.
    ///
    /// Any `EnvFilter` directive: `trace`, `debug`, `info`, `warn`, `error`,
    /// or per-module forms like `searchbox::app=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Host frameworks commonly hand configuration over as a string-to-string
    /// map. This function extracts and parses typed values with fallback
    /// defaults.
    ///
    /// # Parameters
    ///
    /// * `config` - Configuration map from the host
    ///
    /// # Parsing Rules
    ///
    /// - `focus_on_select`: `"true"` / `"false"` → `bool` (falls back to
    ///   `false` on parse error)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use searchbox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("focus_on_select".to_string(), "true".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(config.focus_on_select);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let focus_on_select = config
            .get("focus_on_select")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            focus_on_select,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing fields take their defaults, so a partial file is fine.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| SearchBoxError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Applies a runtime patch, overwriting only the fields it carries.
    pub fn apply(&mut self, update: &ConfigUpdate) {
        if let Some(focus_on_select) = update.focus_on_select {
            self.focus_on_select = focus_on_select;
        }
    }
}

/// Runtime configuration patch.
///
/// Carried by [`Event::UpdateConfig`] and applied field-wise: `None` leaves
/// the current value untouched. Honored even while the engine is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    /// New value for [`Config::focus_on_select`], if present.
    pub focus_on_select: Option<bool>,
}
