//! Suggestion providers and the seam the engine fetches through.
//!
//! The engine never talks to a geocoding service directly. It dispatches
//! every committed query through the [`SuggestionProvider`] trait, which keeps
//! the state machine testable and lets hosts swap the backend without
//! touching engine code.
//!
//! # Implementations
//!
//! - [`NominatimProvider`]: the default backend, querying the OpenStreetMap
//!   Nominatim search API over HTTP
//! - [`FnProvider`]: adapts an async closure, for tests and custom backends
//!
//! Provider failures stay on this side of the seam: the driver logs the
//! concrete [`ProviderError`] and forwards only a generic user-facing message
//! into engine state.

pub mod nominatim;

pub use nominatim::NominatimProvider;

use crate::domain::Place;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::future::Future;
use thiserror::Error;

/// Errors surfaced by suggestion providers.
///
/// These never reach engine state or host UIs directly. The driver logs them
/// and substitutes a generic message.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("Unexpected status code: {status}")]
    Status {
        /// Status code the service returned.
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A custom backend failed with its own message.
    #[error("Provider error: {0}")]
    Backend(String),
}

/// Backend capable of resolving a committed query into place suggestions.
///
/// The engine calls [`fetch`](SuggestionProvider::fetch) once per committed
/// query with the already normalized text (trimmed, spaces replaced by `+`).
/// Implementations are free to take as long as they need; the driver aborts
/// the call when the query is superseded, and a completion that outlives its
/// query is discarded by generation stamping either way.
///
/// # Example
///
/// ```
/// use searchbox::provider::FnProvider;
/// use searchbox::Place;
///
/// let provider = FnProvider::new(|query| async move {
///     Ok(vec![Place::new(1, format!("Echo {query}"))])
/// });
/// # let _ = provider;
/// ```
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Resolves `query` into a list of matching places.
    ///
    /// An empty list is a valid answer and presents as "no results found".
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the backend cannot produce an answer.
    async fn fetch(&self, query: &str) -> Result<Vec<Place>, ProviderError>;
}

type FetchFn = dyn Fn(String) -> BoxFuture<'static, Result<Vec<Place>, ProviderError>> + Send + Sync;

/// Adapts an async closure into a [`SuggestionProvider`].
///
/// Useful for tests and for hosts whose backend does not warrant a dedicated
/// provider type.
pub struct FnProvider {
    handler: Box<FetchFn>,
}

impl FnProvider {
    /// Wraps `handler`, which receives the normalized query text.
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Place>, ProviderError>> + Send + 'static,
    {
        Self {
            handler: Box::new(move |query| handler(query).boxed()),
        }
    }
}

impl std::fmt::Debug for FnProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl SuggestionProvider for FnProvider {
    async fn fetch(&self, query: &str) -> Result<Vec<Place>, ProviderError> {
        (self.handler)(query.to_string()).await
    }
}
