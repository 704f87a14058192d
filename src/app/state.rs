//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for selection management and UI view model
//! generation. It is the single source of truth for all transient UI state.
//!
//! # State Components
//!
//! - **Videos**: the current list of [`VideoSummary`] entries, replaced
//!   wholesale on every completed search
//! - **Loading**: whether a search is in flight (set on issue, cleared on
//!   completion, success and failure alike)
//! - **View**: the consolidated render-mode value — `Grid`, or `Detail` with
//!   the selected id and its (possibly pending) detail payload
//! - **Selection cursor**: cursor position within the grid or sidebar
//! - **Search generation**: monotonically increasing id of the most recently
//!   issued search, used to discard stale completions
//! - **Input Mode**: controls keybinding interpretation and search bar layout
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms a state snapshot into a renderable
//! representation, handling result windowing and responsive layout based on
//! terminal dimensions.

use super::view::{InputMode, SearchFocus, View};
use crate::domain::VideoSummary;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyViewModel, DetailPanel, EmptyState, FooterInfo, GridItem, HeaderInfo, SearchBarInfo,
    SidebarItem, UIViewModel,
};

/// Central application state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// user input and request completions; view models are computed on demand
/// from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current list of video summaries, in endpoint order.
    ///
    /// Replaced (never merged) whenever a search completes; emptied on search
    /// failure. No identity persists across searches.
    pub videos: Vec<VideoSummary>,

    /// Whether a search request is in flight.
    ///
    /// Set before the request is issued and cleared when the newest search
    /// completes, successfully or not. A hung request leaves it set.
    pub loading: bool,

    /// Render-mode discriminator: grid, or detail with the selected id.
    pub view: View,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current contents of the search box.
    ///
    /// Independent of the last-executed search term; no synchronization is
    /// enforced between the box and the query actually fetched.
    pub search_query: String,

    /// Cursor position within `videos` (grid and sidebar share it).
    pub selected_index: usize,

    /// Generation counter of the most recently issued search.
    ///
    /// Completions carrying an older generation are discarded, so the newest
    /// search always wins regardless of response arrival order.
    pub search_generation: u64,

    /// Query used for the initial load and the home binding.
    pub home_query: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with the home query and theme.
    ///
    /// Starts in grid view with an empty video list; `loading` is false until
    /// the first search is issued.
    #[must_use]
    pub fn new(home_query: String, theme: Theme) -> Self {
        Self {
            videos: vec![],
            loading: false,
            view: View::Grid,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            selected_index: 0,
            search_generation: 0,
            home_query,
            theme,
        }
    }

    /// Moves the cursor down by one position, wrapping to the top at the end.
    ///
    /// No-op when the video list is empty.
    pub fn move_selection_down(&mut self) {
        if self.videos.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.videos.len();
    }

    /// Moves the cursor up by one position, wrapping to the bottom at the start.
    ///
    /// No-op when the video list is empty.
    pub fn move_selection_up(&mut self) {
        if self.videos.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.videos.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the video under the cursor, if any.
    #[must_use]
    pub fn selected_video(&self) -> Option<&VideoSummary> {
        self.videos.get(self.selected_index)
    }

    /// Marks a new search as issued and returns its generation.
    ///
    /// Bumps the generation counter and raises the loading flag. The returned
    /// generation tags the outgoing request so its completion can be matched
    /// against the newest search.
    pub fn begin_search(&mut self) -> u64 {
        self.search_generation += 1;
        self.loading = true;
        self.search_generation
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            videos = self.videos.len(),
            loading = self.loading,
            detail = self.view.is_detail(),
        )
        .entered();

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            body: self.compute_body(rows, cols),
        }
    }

    fn compute_body(&self, rows: usize, _cols: usize) -> BodyViewModel {
        match &self.view {
            // The loading body replaces the grid only; an in-flight search
            // issued from the detail view keeps the detail layout on screen
            // until its completion resets the view.
            View::Grid => {
                if self.loading {
                    return BodyViewModel::Loading;
                }

                if self.videos.is_empty() {
                    return BodyViewModel::Empty(EmptyState {
                        message: "No videos found".to_string(),
                        subtitle: "Press / to search".to_string(),
                    });
                }

                let available = self.available_rows(rows);
                let (start, end) = visible_window(self.videos.len(), self.selected_index, available);

                let items = self.videos[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, video)| GridItem {
                        title: video.title.clone(),
                        channel: video.channel.clone(),
                        is_selected: start + offset == self.selected_index,
                    })
                    .collect();

                BodyViewModel::Grid { items }
            }
            View::Detail { id, detail } => {
                let panel = DetailPanel {
                    embed_url: crate::api::embed_url(id),
                    title: detail.as_ref().map(|d| d.title.clone()),
                    meta: detail
                        .as_ref()
                        .map(|d| format!("{} • {}", d.formatted_views(), d.formatted_publish_date())),
                    description: detail.as_ref().map(|d| d.description.clone()),
                };

                let available = self.available_rows(rows);
                let (start, end) = visible_window(self.videos.len(), self.selected_index, available);

                let sidebar = self.videos[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, video)| SidebarItem {
                        title: video.title.clone(),
                        channel: video.channel.clone(),
                        is_selected: start + offset == self.selected_index,
                        is_playing: video.id == *id,
                    })
                    .collect();

                BodyViewModel::Detail { panel, sidebar }
            }
        }
    }

    /// Computes header information: branding plus result count or state.
    fn compute_header(&self) -> HeaderInfo {
        let title = if self.view.is_detail() {
            " ▶ ztube — now playing ".to_string()
        } else if self.loading {
            " ▶ ztube ".to_string()
        } else {
            format!(" ▶ ztube ({}) ", self.videos.len())
        };
        HeaderInfo { title }
    }

    /// Computes footer keybindings text for the current mode combination.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, &self.view) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: cancel  Enter: search  Ctrl+n/p: navigate  Type your query".to_string()
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: cancel  /: edit query  j/k or Ctrl+n/p: navigate  Enter: select".to_string()
            }
            (InputMode::Normal, View::Grid) => {
                "j/k or Ctrl+n/p: navigate  /: search  Enter: open  h: home  q: quit".to_string()
            }
            (InputMode::Normal, View::Detail { .. }) => {
                "j/k: up next  Enter: switch video  o: open player  /: search  h: home  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Rows available for the list after subtracting UI chrome.
    ///
    /// Chrome is header (2 rows incl. leading blank), border, column headers,
    /// bottom border and footer; search mode adds the 3-line search box.
    const fn available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}

/// Computes the visible `[start, end)` window centered on the selection.
///
/// Keeps the selected index near the midpoint and shifts the window near the
/// ends of the list so all available rows stay used.
fn visible_window(len: usize, selected: usize, available: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end - start < available && len >= available {
        start = end.saturating_sub(available);
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: format!("title-{id}"),
            channel: format!("channel-{id}"),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        }
    }

    fn state_with(n: usize) -> AppState {
        let mut state = AppState::new("gaming".to_string(), Theme::default());
        state.videos = (0..n).map(|i| summary(&format!("v{i}"))).collect();
        state
    }

    #[test]
    fn cursor_wraps_around_both_ways() {
        let mut state = state_with(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn cursor_is_a_noop_on_empty_list() {
        let mut state = state_with(0);
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn begin_search_bumps_generation_and_raises_loading() {
        let mut state = state_with(0);
        assert!(!state.loading);

        assert_eq!(state.begin_search(), 1);
        assert!(state.loading);
        assert_eq!(state.begin_search(), 2);
    }

    #[test]
    fn loading_state_renders_loading_body() {
        let mut state = state_with(3);
        state.loading = true;

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, BodyViewModel::Loading));
    }

    #[test]
    fn detail_layout_survives_an_in_flight_search() {
        let mut state = state_with(2);
        state.view = View::Detail {
            id: "v0".to_string(),
            detail: None,
        };
        state.loading = true;

        let vm = state.compute_viewmodel(24, 80);
        assert!(
            matches!(vm.body, BodyViewModel::Detail { .. }),
            "a search issued from the detail view must not blank the panel"
        );
    }

    #[test]
    fn grid_viewmodel_lists_every_visible_video() {
        let state = state_with(3);

        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyViewModel::Grid { items } => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].title, "title-v0");
                assert_eq!(items[1].channel, "channel-v1");
                assert!(items[0].is_selected);
                assert!(!items[2].is_selected);
            }
            other => panic!("expected grid body, got {other:?}"),
        }
    }

    #[test]
    fn detail_sidebar_keeps_the_full_unfiltered_list() {
        let mut state = state_with(3);
        state.view = View::Detail {
            id: "v1".to_string(),
            detail: None,
        };

        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyViewModel::Detail { panel, sidebar } => {
                assert_eq!(sidebar.len(), 3);
                assert!(sidebar[1].is_playing);
                assert!(!sidebar[0].is_playing);
                assert_eq!(panel.embed_url, "https://www.youtube.com/embed/v1?autoplay=1");
                assert!(panel.title.is_none());
            }
            other => panic!("expected detail body, got {other:?}"),
        }
    }

    #[test]
    fn visible_window_centers_on_selection() {
        assert_eq!(visible_window(100, 50, 10), (45, 55));
        assert_eq!(visible_window(100, 0, 10), (0, 10));
        assert_eq!(visible_window(100, 99, 10), (90, 100));
        assert_eq!(visible_window(3, 1, 10), (0, 3));
    }
}
