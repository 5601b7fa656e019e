//! Domain layer for the search-box engine.
//!
//! This module contains the core domain types for the engine, independent of any
//! async runtime, HTTP client, or host UI concerns. It follows domain-driven
//! design principles by keeping the data model isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`place`]: Place records, suggestions, and suggestion identity
//!
//! # Examples
//!
//! ```
//! use searchbox::domain::{Place, Suggestion};
//!
//! let suggestion = Suggestion::from_place(Place::new(1, "Paris, France"));
//! assert_eq!(suggestion.label, "Paris, France");
//! ```

pub mod error;
pub mod place;

pub use error::{Result, SearchBoxError};
pub use place::{Place, Suggestion, SuggestionId};
