//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core engine logic layer, sitting between the host
//! facing driver and the domain/provider layers. It implements the
//! event-driven architecture that powers the search box.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └── Timer / Fetch Completions ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`phase`]: Phase machine and derived state tags
//! - [`state`]: Central engine state container and snapshot computation
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::{handle_event, Event, SearchBoxState};
//! use searchbox::Config;
//!
//! let mut state = SearchBoxState::new(Config::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::Focus)?;
//! assert!(should_render);
//! # Ok::<(), searchbox::SearchBoxError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod phase;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, FetchOutcome, DEBOUNCE_DELAY, FETCH_ERROR_MESSAGE};
pub use phase::{Phase, StateTags};
pub use state::{EngineState, SearchBoxState};
