//! YouTube Data API surface: request construction and response decoding.
//!
//! This module owns the plugin's only two external interfaces, both read-only
//! HTTP GETs against the YouTube Data API v3:
//!
//! - the **search** endpoint (`/search`), which powers the results grid, and
//! - the **videos** endpoint (`/videos`), which powers the detail panel.
//!
//! Requests are issued by the plugin shim through Zellij's `web_request` host
//! call, fire-and-forget. Because completions arrive later as plain
//! `WebRequestResult` events, each request carries a context map identifying
//! what was asked for (request kind, search generation, video id) so that
//! stale completions can be detected and discarded.
//!
//! # Modules
//!
//! - [`request`]: endpoint URL construction and request-context tags
//! - [`models`]: wire-format structs and decoding into domain records

pub mod models;
pub mod request;

pub use models::{decode_search, decode_video_details};
pub use request::{
    detail_context, embed_url, search_context, search_url, video_details_url, RequestKind,
    CONTEXT_GENERATION, CONTEXT_KIND, CONTEXT_VIDEO_ID, MAX_RESULTS,
};
