//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the ztube library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait and
//! owns every host call: HTTP requests go out through `web_request`, the
//! player opens through `run_command`, and the pane hides through
//! `hide_self`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`,
//!    `PermissionRequestResult`, and `RunCommandResult` events
//! 3. **Permissions granted**: Issue the initial default-query search
//! 4. **Update**: Translate Zellij events to library events, delegate to
//!    `handle_event`, execute the returned actions
//! 5. **Render**: Call the library render function
//!
//! # Request Plumbing
//!
//! Every `web_request` carries a context map identifying the request (kind
//! plus search generation or video id). The matching `WebRequestResult`
//! event returns that context untouched, which is how completions are routed
//! back to the right library event even when several requests are in flight.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Open detail view for the selected video
//! - `o`: Open the player for the selected video
//! - `h`: Re-run the default query
//! - `/`: Enter search mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - printable keys: Type into the query
//! - `Enter`: Submit the search (while typing) or select (while navigating)
//! - `Tab`: Move focus to the result list
//! - `/`: Return focus to the search input
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use ztube::{api, handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the credentials the shim needs when
/// issuing requests.
struct State {
    /// Core application state from library layer.
    app: ztube::app::AppState,

    /// API key for the search endpoint.
    search_api_key: String,

    /// API key for the videos endpoint.
    videos_api_key: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: ztube::initialize(&default_config),
            search_api_key: String::new(),
            videos_api_key: String::new(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, creates application state,
    /// requests permissions, and subscribes to events. The initial search is
    /// deferred until the permission grant arrives; `web_request` is refused
    /// before that.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: Call the YouTube Data API
    /// - `RunCommands`: Open the player via `xdg-open`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        ztube::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(default_query = %config.default_query, "parsed configuration");
        self.app = ztube::initialize(&config);
        self.search_api_key.clone_from(&config.search_api_key);
        self.videos_api_key.clone_from(&config.videos_api_key);

        if self.search_api_key.is_empty() {
            tracing::warn!("no search_api_key configured - every request will be rejected");
        }

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
            EventType::RunCommandResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match permissions {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted - issuing initial search");
                        Event::Home
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - plugin cannot reach the API");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    let error = String::from_utf8(stderr).unwrap_or_default();
                    tracing::debug!(exit_code = ?exit_code, error = %error, "player command failed");
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        ztube::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::Char('j'),
                _ => Event::KeyDown,
            },
            BareKey::Up | BareKey::Char('k') => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::Char('k'),
                _ => Event::KeyUp,
            },
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Enter => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::SubmitSearch,
                _ => Event::SelectVideo,
            },
            BareKey::Tab if self.app.input_mode == InputMode::Search(SearchFocus::Typing) => {
                Event::FocusResults
            }
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('o') if self.app.input_mode == InputMode::Normal => Event::OpenPlayer,
            BareKey::Char('h') if self.app.input_mode == InputMode::Normal => Event::Home,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if self.app.input_mode == InputMode::Search(SearchFocus::Typing) => {
                Event::Char(c)
            }
            _ => return None,
        })
    }

    /// Maps an HTTP completion back to a library event via its context.
    ///
    /// The context identifies what was asked for: a search (with its
    /// generation) or a detail fetch (with its video id). Results without a
    /// recognizable context are dropped; non-2xx statuses and undecodable
    /// bodies become the matching failure event.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let kind = context
            .get(api::CONTEXT_KIND)
            .and_then(|tag| api::RequestKind::from_tag(tag))?;

        match kind {
            api::RequestKind::Search => {
                let generation = context
                    .get(api::CONTEXT_GENERATION)
                    .and_then(|g| g.parse::<u64>().ok())?;

                if !(200..300).contains(&status) {
                    tracing::debug!(status, generation, "search request rejected");
                    return Some(Event::SearchFailed {
                        generation,
                        error: ztube::ZtubeError::Http { status }.to_string(),
                    });
                }

                match api::decode_search(body) {
                    Ok(Some(videos)) => Some(Event::SearchLoaded { generation, videos }),
                    Ok(None) => Some(Event::SearchEmpty { generation }),
                    Err(e) => {
                        tracing::debug!(error = %e, generation, "search response undecodable");
                        Some(Event::SearchFailed {
                            generation,
                            error: e.to_string(),
                        })
                    }
                }
            }
            api::RequestKind::Detail => {
                let id = context.get(api::CONTEXT_VIDEO_ID)?.clone();

                if !(200..300).contains(&status) {
                    tracing::debug!(status, video_id = %id, "detail request rejected");
                    return Some(Event::DetailFailed {
                        id,
                        error: Some(ztube::ZtubeError::Http { status }.to_string()),
                    });
                }

                match api::decode_video_details(body) {
                    Ok(Some(detail)) => Some(Event::DetailLoaded { id, detail }),
                    Ok(None) => Some(Event::DetailFailed { id, error: None }),
                    Err(e) => {
                        tracing::debug!(error = %e, video_id = %id, "detail response undecodable");
                        Some(Event::DetailFailed {
                            id,
                            error: Some(e.to_string()),
                        })
                    }
                }
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `FetchSearch`: Issue the search request, tagged with its generation
    /// - `FetchDetail`: Issue the detail request, tagged with the video id
    /// - `OpenPlayer`: Open the embeddable player URL via `xdg-open`
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchSearch { query, generation } => {
                tracing::debug!(query = %query, generation, "issuing search request");
                web_request(
                    api::search_url(query, &self.search_api_key),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    api::search_context(*generation),
                );
            }
            Action::FetchDetail { id } => {
                tracing::debug!(video_id = %id, "issuing detail request");
                web_request(
                    api::video_details_url(id, &self.videos_api_key),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    api::detail_context(id),
                );
            }
            Action::OpenPlayer { id } => {
                let url = api::embed_url(id);
                tracing::debug!(video_id = %id, url = %url, "opening player");
                run_command(&["xdg-open", &url], BTreeMap::new());
            }
        }
    }
}
