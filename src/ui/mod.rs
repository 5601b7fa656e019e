//! Presentation layer: view models for host renderers.
//!
//! The engine is headless, so this layer stops at display-ready data. It
//! transforms state snapshots into view models that a host binds to whatever
//! widgets it has; no drawing happens here.
//!
//! # Architecture
//!
//! ```text
//! EngineState → compute_viewmodel → SearchBoxView → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable search box state

pub mod viewmodel;

pub use viewmodel::{ErrorInfo, InputInfo, PanelInfo, SearchBoxView, SuggestionItem};
