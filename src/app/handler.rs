//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and request completions, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, `WebRequestResult`s)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `SelectVideo`, `OpenPlayer`
//! - **Search input**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`,
//!   `ExitSearch`, `Escape`
//! - **Completions**: `SearchLoaded`, `SearchEmpty`, `SearchFailed`, `DetailLoaded`,
//!   `DetailFailed`
//!
//! # Races
//!
//! Fetches are fire-and-forget and may resolve out of order. Completions
//! carry the request identity they were issued with (search generation,
//! video id); the handler discards any completion whose identity no longer
//! matches current state, so a late response can never overwrite newer state.

use crate::app::view::{InputMode, SearchFocus, View};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{VideoDetail, VideoSummary};

/// Events triggered by user input or request completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Selects the video under the cursor and fetches its details.
    SelectVideo,
    /// Opens the embeddable player for the selected video.
    OpenPlayer,
    /// Runs the fixed home query (the logo-click analog).
    Home,
    /// Submits the current contents of the search box as a new search.
    SubmitSearch,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the result list while keeping the search bar visible.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// A search request completed with a decoded summary list.
    ///
    /// `generation` identifies which issued search this completion belongs
    /// to; only the newest generation commits.
    SearchLoaded {
        /// Generation the request was issued with.
        generation: u64,
        /// Decoded summaries (may be empty when `items` was present but
        /// empty).
        videos: Vec<VideoSummary>,
    },

    /// A search response was well-formed but carried no `items` field.
    ///
    /// Distinct from [`Event::SearchLoaded`] with an empty list: the list is
    /// emptied but the view is left alone, so an active detail selection
    /// survives.
    SearchEmpty {
        /// Generation the request was issued with.
        generation: u64,
    },

    /// A search request failed (transport, HTTP status, or decode).
    SearchFailed {
        /// Generation the request was issued with.
        generation: u64,
        /// Human-readable failure description, for the log only.
        error: String,
    },

    /// A detail request resolved with at least one item.
    DetailLoaded {
        /// Video id the request was issued for.
        id: String,
        /// Decoded detail record.
        detail: VideoDetail,
    },

    /// A detail request resolved empty or failed.
    ///
    /// Either way the current detail state is left unchanged.
    DetailFailed {
        /// Video id the request was issued for.
        id: String,
        /// Failure description, or `None` for the empty-result case.
        error: Option<String>,
    },
}

/// Processes an event, mutates application state, and returns actions.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (should re-render, actions to execute in sequence).
///
/// # Errors
///
/// Returns errors from state mutation methods. The completion events never
/// error: failures were already reduced to [`Event::SearchFailed`] /
/// [`Event::DetailFailed`] by the shim, and the handler only logs them.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectVideo => {
            let Some(video) = state.selected_video() else {
                tracing::debug!("no video under cursor");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.search_query = String::new();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };
            let id = video.id.clone();

            tracing::debug!(video_id = %id, title = %video.title, "video selected");

            // Selection and detail are one value: switching ids drops the old
            // payload, re-selecting the same id keeps it while the re-fetch
            // is in flight.
            let detail = match &state.view {
                View::Detail { id: current, detail } if *current == id => detail.clone(),
                _ => None,
            };
            state.view = View::Detail { id: id.clone(), detail };

            if matches!(state.input_mode, InputMode::Search(_)) {
                state.input_mode = InputMode::Normal;
            }

            Ok((true, vec![Action::FetchDetail { id }]))
        }
        Event::OpenPlayer => match state.view.selected_id() {
            Some(id) => {
                tracing::debug!(video_id = %id, "opening player");
                Ok((false, vec![Action::OpenPlayer { id: id.to_string() }]))
            }
            None => Ok((false, vec![])),
        },
        Event::Home => {
            let query = state.home_query.clone();
            let generation = state.begin_search();
            tracing::debug!(query = %query, generation, "home search issued");
            Ok((true, vec![Action::FetchSearch { query, generation }]))
        }
        Event::SubmitSearch => {
            let query = state.search_query.clone();
            let generation = state.begin_search();
            state.input_mode = InputMode::Normal;
            tracing::debug!(query = %query, generation, "search issued");
            Ok((true, vec![Action::FetchSearch { query, generation }]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_query.pop();
            Ok((true, vec![]))
        }
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::SearchLoaded { generation, videos } => {
            if *generation != state.search_generation {
                tracing::debug!(
                    generation,
                    newest = state.search_generation,
                    "discarding stale search completion"
                );
                return Ok((false, vec![]));
            }

            tracing::debug!(count = videos.len(), "search completed");

            state.videos.clone_from(videos);
            state.selected_index = 0;
            state.view = View::Grid;
            state.loading = false;
            Ok((true, vec![]))
        }
        Event::SearchEmpty { generation } => {
            if *generation != state.search_generation {
                tracing::debug!(generation, "stale itemless search ignored");
                return Ok((false, vec![]));
            }

            // The itemless response empties the list and stops there; unlike
            // a populated success it does not reset the view, so a selected
            // video stays selected.
            tracing::debug!("search response carried no items");
            state.videos.clear();
            state.selected_index = 0;
            state.loading = false;
            Ok((true, vec![]))
        }
        Event::SearchFailed { generation, error } => {
            if *generation != state.search_generation {
                tracing::debug!(generation, error = %error, "stale search failure ignored");
                return Ok((false, vec![]));
            }

            // Failure empties the list but, unlike success, does not reset
            // the view: only a completed search leaves the detail layout.
            tracing::error!(error = %error, "search failed");
            state.videos.clear();
            state.selected_index = 0;
            state.loading = false;
            Ok((true, vec![]))
        }
        Event::DetailLoaded { id, detail } => match &mut state.view {
            View::Detail { id: current, detail: slot } if current == id => {
                tracing::debug!(video_id = %id, "detail committed");
                *slot = Some(detail.clone());
                Ok((true, vec![]))
            }
            _ => {
                tracing::debug!(video_id = %id, "discarding detail for unselected video");
                Ok((false, vec![]))
            }
        },
        Event::DetailFailed { id, error } => {
            match error {
                Some(error) => tracing::error!(video_id = %id, error = %error, "detail fetch failed"),
                None => tracing::debug!(video_id = %id, "detail response was empty"),
            }
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn summary(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: format!("title-{id}"),
            channel: format!("channel-{id}"),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        }
    }

    fn detail(title: &str) -> VideoDetail {
        VideoDetail {
            title: title.to_string(),
            description: "description".to_string(),
            published_at: "2023-11-20T08:00:00Z".to_string(),
            view_count: "1234567".to_string(),
        }
    }

    fn fresh_state() -> AppState {
        AppState::new("gaming".to_string(), Theme::default())
    }

    /// Drives a full search round trip so tests can start from a loaded grid.
    fn loaded_state(ids: &[&str]) -> AppState {
        let mut state = fresh_state();
        let (_, actions) = handle_event(&mut state, &Event::Home).unwrap();
        let generation = match &actions[0] {
            Action::FetchSearch { generation, .. } => *generation,
            other => panic!("expected search fetch, got {other:?}"),
        };
        let videos = ids.iter().map(|id| summary(id)).collect();
        handle_event(&mut state, &Event::SearchLoaded { generation, videos }).unwrap();
        state
    }

    #[test]
    fn home_issues_the_default_query() {
        let mut state = fresh_state();
        let (render, actions) = handle_event(&mut state, &Event::Home).unwrap();

        assert!(render);
        assert!(state.loading);
        assert_eq!(
            actions,
            vec![Action::FetchSearch {
                query: "gaming".to_string(),
                generation: 1,
            }]
        );
    }

    #[test]
    fn submit_search_sends_the_box_contents() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "cats".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();

        assert_eq!(
            actions,
            vec![Action::FetchSearch {
                query: "cats".to_string(),
                generation: 1,
            }]
        );
        assert!(state.loading);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn completed_search_replaces_the_list_and_returns_to_grid() {
        let mut state = loaded_state(&["a", "b", "c"]);

        // Select something, then run a fresh search over it.
        handle_event(&mut state, &Event::SelectVideo).unwrap();
        assert!(state.view.is_detail());

        let (_, actions) = handle_event(&mut state, &Event::Home).unwrap();
        let generation = match &actions[0] {
            Action::FetchSearch { generation, .. } => *generation,
            other => panic!("expected search fetch, got {other:?}"),
        };
        handle_event(
            &mut state,
            &Event::SearchLoaded {
                generation,
                videos: vec![summary("x")],
            },
        )
        .unwrap();

        assert_eq!(state.view, View::Grid);
        assert!(!state.loading);
        assert_eq!(state.videos.len(), 1);
        assert_eq!(state.videos[0].id, "x");
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn stale_search_completion_is_discarded() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::Home).unwrap(); // generation 1
        handle_event(&mut state, &Event::Home).unwrap(); // generation 2

        // The older request resolves last-but-one; it must not commit.
        let (render, _) = handle_event(
            &mut state,
            &Event::SearchLoaded {
                generation: 1,
                videos: vec![summary("old")],
            },
        )
        .unwrap();

        assert!(!render);
        assert!(state.videos.is_empty());
        assert!(state.loading, "only the newest completion clears loading");

        handle_event(
            &mut state,
            &Event::SearchLoaded {
                generation: 2,
                videos: vec![summary("new")],
            },
        )
        .unwrap();
        assert_eq!(state.videos[0].id, "new");
        assert!(!state.loading);
    }

    #[test]
    fn itemless_search_response_keeps_the_selection() {
        let mut state = loaded_state(&["a", "b"]);
        state.selected_index = 1;
        handle_event(&mut state, &Event::SelectVideo).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Home).unwrap();
        let generation = match &actions[0] {
            Action::FetchSearch { generation, .. } => *generation,
            other => panic!("expected search fetch, got {other:?}"),
        };
        handle_event(&mut state, &Event::SearchEmpty { generation }).unwrap();

        assert!(state.videos.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.view,
            View::Detail {
                id: "b".to_string(),
                detail: None,
            },
            "an itemless response must not reset the view to grid"
        );
    }

    #[test]
    fn stale_itemless_response_is_discarded() {
        let mut state = loaded_state(&["a"]);
        handle_event(&mut state, &Event::Home).unwrap(); // generation 2
        handle_event(&mut state, &Event::Home).unwrap(); // generation 3

        let (render, _) =
            handle_event(&mut state, &Event::SearchEmpty { generation: 2 }).unwrap();

        assert!(!render);
        assert!(state.loading, "only the newest completion clears loading");
    }

    #[test]
    fn failed_search_empties_the_list_but_keeps_the_view() {
        let mut state = loaded_state(&["a", "b"]);
        state.selected_index = 1;
        handle_event(&mut state, &Event::SelectVideo).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Home).unwrap();
        let generation = match &actions[0] {
            Action::FetchSearch { generation, .. } => *generation,
            other => panic!("expected search fetch, got {other:?}"),
        };
        handle_event(
            &mut state,
            &Event::SearchFailed {
                generation,
                error: "boom".to_string(),
            },
        )
        .unwrap();

        assert!(state.videos.is_empty());
        assert!(!state.loading);
        assert!(state.view.is_detail(), "only success resets to grid");
    }

    #[test]
    fn select_sets_detail_view_synchronously_before_any_response() {
        let mut state = loaded_state(&["a", "b", "c"]);
        state.selected_index = 1;

        let (render, actions) = handle_event(&mut state, &Event::SelectVideo).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::FetchDetail { id: "b".to_string() }]);
        assert_eq!(
            state.view,
            View::Detail {
                id: "b".to_string(),
                detail: None,
            }
        );
    }

    #[test]
    fn detail_commits_only_for_the_selected_id() {
        let mut state = loaded_state(&["a", "b"]);
        handle_event(&mut state, &Event::SelectVideo).unwrap(); // selects "a"

        // User clicks the second video before the first lookup resolves.
        state.selected_index = 1;
        handle_event(&mut state, &Event::SelectVideo).unwrap(); // selects "b"

        // The stale completion for "a" arrives late: discarded.
        let (render, _) = handle_event(
            &mut state,
            &Event::DetailLoaded {
                id: "a".to_string(),
                detail: detail("stale"),
            },
        )
        .unwrap();
        assert!(!render);
        assert_eq!(
            state.view,
            View::Detail {
                id: "b".to_string(),
                detail: None,
            }
        );

        handle_event(
            &mut state,
            &Event::DetailLoaded {
                id: "b".to_string(),
                detail: detail("fresh"),
            },
        )
        .unwrap();
        match &state.view {
            View::Detail { detail: Some(d), .. } => assert_eq!(d.title, "fresh"),
            other => panic!("expected committed detail, got {other:?}"),
        }
    }

    #[test]
    fn failed_or_empty_detail_leaves_prior_value() {
        let mut state = loaded_state(&["a"]);
        handle_event(&mut state, &Event::SelectVideo).unwrap();
        handle_event(
            &mut state,
            &Event::DetailLoaded {
                id: "a".to_string(),
                detail: detail("kept"),
            },
        )
        .unwrap();

        // Re-entrant select of the same id refetches but keeps the payload.
        let (_, actions) = handle_event(&mut state, &Event::SelectVideo).unwrap();
        assert_eq!(actions, vec![Action::FetchDetail { id: "a".to_string() }]);
        match &state.view {
            View::Detail { detail: Some(d), .. } => assert_eq!(d.title, "kept"),
            other => panic!("expected kept detail, got {other:?}"),
        }

        // The refetch fails: state unchanged.
        handle_event(
            &mut state,
            &Event::DetailFailed {
                id: "a".to_string(),
                error: Some("timeout".to_string()),
            },
        )
        .unwrap();
        match &state.view {
            View::Detail { detail: Some(d), .. } => assert_eq!(d.title, "kept"),
            other => panic!("expected kept detail, got {other:?}"),
        }
    }

    #[test]
    fn open_player_targets_the_selected_video() {
        let mut state = loaded_state(&["a"]);
        assert_eq!(handle_event(&mut state, &Event::OpenPlayer).unwrap().1, vec![]);

        handle_event(&mut state, &Event::SelectVideo).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::OpenPlayer).unwrap();
        assert_eq!(actions, vec![Action::OpenPlayer { id: "a".to_string() }]);
    }

    #[test]
    fn typing_outside_search_mode_is_ignored() {
        let mut state = loaded_state(&["a"]);
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn backspace_and_escape_edit_and_clear_the_query() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('c')).unwrap();
        handle_event(&mut state, &Event::Char('a')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_query, "c");

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
    }
}
