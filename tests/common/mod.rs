//! Shared test utilities for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use searchbox::provider::{ProviderError, SuggestionProvider};
use searchbox::{EngineState, Place};
use tokio::sync::{mpsc, oneshot, watch};

/// Provider whose requests are answered by the test body.
///
/// Each `fetch` call surfaces as a [`FetchRequest`] on the paired receiver
/// and blocks until the test replies, so scenarios control exactly when and
/// how every request settles.
pub struct ScriptedProvider {
    requests: mpsc::UnboundedSender<FetchRequest>,
}

/// One in-flight provider request, waiting for the test to answer it.
pub struct FetchRequest {
    /// Normalized query text the engine asked for.
    pub query: String,
    reply: oneshot::Sender<Result<Vec<Place>, ProviderError>>,
}

impl ScriptedProvider {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FetchRequest>) {
        let (requests, receiver) = mpsc::unbounded_channel();
        (Self { requests }, receiver)
    }
}

impl FetchRequest {
    /// Settles the request. Replying to a request the engine has already
    /// abandoned is fine; the answer just goes nowhere.
    pub fn respond(self, result: Result<Vec<Place>, ProviderError>) {
        let _ = self.reply.send(result);
    }
}

#[async_trait]
impl SuggestionProvider for ScriptedProvider {
    async fn fetch(&self, query: &str) -> Result<Vec<Place>, ProviderError> {
        let (reply, answer) = oneshot::channel();
        let request = FetchRequest {
            query: query.to_string(),
            reply,
        };

        self.requests
            .send(request)
            .map_err(|_| ProviderError::Backend("scenario dropped the request feed".to_string()))?;

        match answer.await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Backend(
                "scenario dropped the request".to_string(),
            )),
        }
    }
}

pub fn place(id: u64, name: &str) -> Place {
    Place::new(id, name)
}

/// Yields repeatedly so spawned tasks and channel hops run before asserting.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Waits until a published snapshot satisfies `predicate` and returns it.
pub async fn wait_for<F>(updates: &mut watch::Receiver<EngineState>, predicate: F) -> EngineState
where
    F: Fn(&EngineState) -> bool,
{
    loop {
        {
            let view = updates.borrow_and_update();
            if predicate(&view) {
                return view.clone();
            }
        }
        updates
            .changed()
            .await
            .expect("engine stopped publishing before the expected state");
    }
}
