//! Actions representing side effects to be executed by the engine driver.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing a UI event or an async
//! completion. Actions bridge pure state transitions and effectful operations
//! like arming the debounce timer or dispatching a suggestion fetch.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The driver task
//! executes them in sequence; the handler itself never spawns, sleeps, or
//! performs I/O.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use searchbox::app::Action;
//!
//! let actions = vec![Action::StartDebounce {
//!     generation: 1,
//!     delay: Duration::from_millis(500),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::time::Duration;

/// Commands representing side effects to be executed by the engine driver.
///
/// Actions are produced by the event handler and executed by the driver task.
/// They represent the boundary between pure state transitions and the two
/// suspending operations the engine performs: the debounce wait and the
/// network fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms the debounce timer for an open change window.
    ///
    /// Replaces any previously armed timer (trailing-edge debounce with reset
    /// on new input). When the delay elapses the driver feeds a timer
    /// completion carrying the same generation back into the event queue.
    StartDebounce {
        /// Stamp identifying the window this timer belongs to.
        generation: u64,
        /// Quiescence interval to wait before committing the query.
        delay: Duration,
    },

    /// Disarms a pending debounce timer, if one is armed.
    ///
    /// Emitted when the machine leaves the change window for a reason other
    /// than the timer firing (blur, clear, disable).
    CancelDebounce,

    /// Dispatches a suggestion fetch for a committed query.
    ///
    /// The query is already normalized for the provider. Replaces any
    /// request still in flight; the driver feeds the settlement carrying the
    /// same generation back into the event queue.
    SpawnFetch {
        /// Stamp identifying the request this fetch belongs to.
        generation: u64,
        /// Normalized query text to hand to the provider.
        query: String,
    },

    /// Aborts the in-flight fetch, if one exists.
    ///
    /// Emitted when the machine leaves the fetching phase for a reason other
    /// than the request settling (blur, clear, a new change, disable). The
    /// generation check makes this advisory; a settlement that outruns the
    /// abort is still discarded.
    CancelFetch,
}
