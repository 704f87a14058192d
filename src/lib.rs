//! ztube: a Zellij plugin for browsing YouTube from a floating pane.
//!
//! ztube is a terminal multiplexer plugin that provides:
//! - Keyword search over the YouTube Data API v3 with a navigable results grid
//! - A detail view with title, view count, publish date, and description
//! - Hand-off to an external player via the video's embeddable URL
//! - File-based OpenTelemetry tracing inside the plugin sandbox

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                         │
//! ┌───────────────────┐   ┌───────────────────┐
//! │ UI Layer (ui/)    │   │ API Layer (api/)  │
//! │ - Rendering       │   │ - Request URLs    │
//! │ - Theming         │   │ - Wire decoding   │
//! │ - Components      │   │ - Request context │
//! └───────────────────┘   └───────────────────┘
//!         │                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Video records and errors (domain/)               │
//! │  - OTLP trace export (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The shim owns every host call (`web_request`, `run_command`, `hide_self`);
//! the library layers are pure state and rendering, which keeps them unit
//! testable outside the WASM sandbox.
//!
//! # Request Flow
//!
//! Searches and detail fetches are fire-and-forget: the handler emits a fetch
//! action, the shim issues `web_request`, and the completion arrives later as
//! a `WebRequestResult` event tagged with the request's context. Completions
//! whose identity no longer matches current state are discarded, so responses
//! racing out of order can never overwrite newer state.
//!
//! # Modules
//!
//! - [`app`]: Application state machine and event handling
//! - [`api`]: YouTube Data API request construction and response decoding
//! - [`domain`]: Core types and error handling
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based OpenTelemetry tracing

pub mod api;
pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, View};
pub use domain::{Result, VideoDetail, VideoSummary, ZtubeError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Search issued when the plugin loads and when the home key is pressed.
const DEFAULT_QUERY: &str = "gaming";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/ztube.wasm" {
///     search_api_key "AIza..."
///     default_query "rust programming"
///     theme "catppuccin-mocha"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent with search requests.
    ///
    /// Without a key every request is rejected by the API; the plugin then
    /// renders its empty state.
    pub search_api_key: String,

    /// API key sent with video detail requests.
    ///
    /// Falls back to `search_api_key` when not set separately.
    pub videos_api_key: String,

    /// Query used for the initial search and the home key.
    ///
    /// Default: `"gaming"`.
    pub default_query: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_api_key: String::new(),
            videos_api_key: String::new(),
            default_query: DEFAULT_QUERY.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing keys fall back to defaults;
    /// `videos_api_key` falls back to `search_api_key` so a single key
    /// configures both endpoints.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ztube::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_api_key".to_string(), "AIza".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.search_api_key, "AIza");
    /// assert_eq!(config.videos_api_key, "AIza");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let search_api_key = config.get("search_api_key").cloned().unwrap_or_default();
        let videos_api_key = config
            .get("videos_api_key")
            .cloned()
            .unwrap_or_else(|| search_api_key.clone());

        let default_query = config
            .get("default_query")
            .map(String::as_str)
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_QUERY)
            .to_string();

        Self {
            search_api_key,
            videos_api_key,
            default_query,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Loads the theme (from file, name, or default) and creates an `AppState`
/// with an empty video list; the initial search runs once permissions are
/// granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing ztube plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.default_query.clone(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_when_keys_are_missing() {
        let config = Config::from_zellij(&BTreeMap::new());

        assert_eq!(config.search_api_key, "");
        assert_eq!(config.videos_api_key, "");
        assert_eq!(config.default_query, "gaming");
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn videos_key_falls_back_to_search_key() {
        let mut map = BTreeMap::new();
        map.insert("search_api_key".to_string(), "key-a".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.videos_api_key, "key-a");

        map.insert("videos_api_key".to_string(), "key-b".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.search_api_key, "key-a");
        assert_eq!(config.videos_api_key, "key-b");
    }

    #[test]
    fn blank_default_query_is_ignored() {
        let mut map = BTreeMap::new();
        map.insert("default_query".to_string(), "  ".to_string());
        assert_eq!(Config::from_zellij(&map).default_query, "gaming");

        map.insert("default_query".to_string(), "lofi beats".to_string());
        assert_eq!(Config::from_zellij(&map).default_query, "lofi beats");
    }

    #[test]
    fn initialize_falls_back_to_default_theme_on_unknown_name() {
        let config = Config {
            theme_name: Some("not-a-theme".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.home_query, "gaming");
        assert!(state.videos.is_empty());
    }
}
