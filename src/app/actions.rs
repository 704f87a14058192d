//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or request completions.
//! Actions bridge pure state transformations and effectful operations: issuing
//! HTTP requests through Zellij's `web_request` host call, opening the player,
//! or hiding the plugin pane.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in sequence; every fetch is fire-and-forget and
//! completes later as a `WebRequestResult` event.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by the event handler, executed by the shim. They represent the
/// boundary between pure state transitions and the Zellij host API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a search request against the search endpoint.
    ///
    /// The generation tags the request context; a completion whose generation
    /// is no longer the latest is discarded instead of committing.
    FetchSearch {
        /// Query string as typed (encoding happens at URL construction).
        query: String,
        /// Search generation at the time the request was issued.
        generation: u64,
    },

    /// Issues a detail lookup for exactly one video id.
    ///
    /// The id tags the request context; a completion for an id that is no
    /// longer selected is discarded.
    FetchDetail {
        /// Video id to look up.
        id: String,
    },

    /// Opens the embeddable player for a video in the host's opener.
    OpenPlayer {
        /// Video id to play.
        id: String,
    },
}
